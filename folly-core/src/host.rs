//! Ports onto host-owned mutable state.
//!
//! The host owns containers, the relationship table, the player's held item
//! and the translation table. Rules never hold on to that state; the host
//! integration layer passes an implementation of these traits into each
//! callback.

use crate::types::{Container, ItemStack};

/// Per-recipient delimited relationship records (gift tastes).
pub trait RelationshipTable {
    /// Current record for a recipient.
    fn record(&self, key: &str) -> Option<String>;

    /// Overwrite a recipient's record.
    fn set_record(&mut self, key: &str, value: String);
}

/// Every container in every location of the world.
pub trait WorldContainers {
    /// Visit each container mutably, together with its location name.
    fn visit_containers(&mut self, visitor: &mut dyn FnMut(&str, &mut Container));
}

/// The player's active-hand slot.
pub trait ActiveHand {
    /// Stack in the active hand, if any.
    fn active_item_mut(&mut self) -> Option<&mut ItemStack>;
}

/// Localized strings keyed by dotted path (`talk.egg_gift.abigail`).
pub trait DialogueSource {
    /// Localized string for a key, if one exists.
    fn line(&self, key: &str) -> Option<String>;
}

/// Everything the gift override touches during a single callback.
pub trait GiftHost: RelationshipTable + ActiveHand + DialogueSource {}

impl<T: RelationshipTable + ActiveHand + DialogueSource> GiftHost for T {}
