//! # Easter Folly Core Library
//!
//! Host-agnostic rules that Easter Folly layers on top of a running farming
//! simulation. Every rule reads and writes host state only through the port
//! traits in [`host`], so the whole crate can be driven by an in-memory fake.
//!
//! - **Guard** — refuses to let the Easter items be trashed or dropped
//! - **Expiry** — converts leftover Chocolate Eggs into Chocolate Bars when
//!   summer begins
//! - **Gift** — swaps in a one-off gift-taste dialogue line for an egg
//!   delivery, then restores the original record on the next tick
//! - **Catalog** — resolves item names to host identifiers once the asset
//!   catalog has been loaded
//!
//! ## Callback Contract
//!
//! The host delivers events serially. Every rule finishes its mutation inside
//! the callback that triggered it; the only state carried across ticks is the
//! pending gift-dialogue override.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod expiry;
pub mod gift;
pub mod guard;
pub mod host;
pub mod i18n;
pub mod record;
pub mod scheduler;
pub mod types;

pub use config::FollyConfig;
pub use error::FollyError;
pub use types::*;
