//! # folly-host — Host Integration for Easter Folly
//!
//! This crate wires the host-agnostic rules in `folly-core` into the host
//! simulation's event loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            Host event loop              │
//! │  ┌───────────────────────────────────┐  │
//! │  │          folly-host               │  │
//! │  │  ┌─────────────┐ ┌─────────────┐  │  │
//! │  │  │  HostWorld  │ │ EasterFolly │  │  │
//! │  │  └──────┬──────┘ └──────┬──────┘  │  │
//! │  │         │               │         │  │
//! │  │         ▼               ▼         │  │
//! │  │    ┌─────────────────────────┐    │  │
//! │  │    │       folly-core        │    │  │
//! │  │    └─────────────────────────┘    │  │
//! │  └───────────────────────────────────┘  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `events` — Host events the add-on subscribes to
//! - `hooks` — Constructors turning raw host data into events
//! - `world` — In-memory host state implementing the `folly-core` ports
//! - `addon` — The add-on entry point dispatching events to the rules
//! - `runtime` — Shared-world event loop driver
//! - `config` — Add-on settings file
//! - `logging` — Tracing subscriber setup

pub mod addon;
pub mod config;
pub mod events;
pub mod hooks;
pub mod logging;
pub mod runtime;
pub mod world;
