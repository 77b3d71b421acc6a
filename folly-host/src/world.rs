//! In-memory host world.
//!
//! Holds the slices of host state Easter Folly reads and writes, and
//! implements every `folly-core` port on top of them. A real host adapter
//! would forward these calls to the live game state instead.

use std::collections::HashMap;

use folly_core::guard::{AgencyFlags, GuardContext, MenuContext};
use folly_core::host::{ActiveHand, DialogueSource, RelationshipTable, WorldContainers};
use folly_core::i18n::Translations;
use folly_core::types::{CalendarDate, Container, FriendshipData, ItemStack, Season};

/// A named game location and the containers placed in it.
#[derive(Debug, Clone, Default)]
pub struct Location {
    /// Location name, e.g. `Farm`.
    pub name: String,
    /// Chests and other containers in the location.
    pub containers: Vec<Container>,
}

impl Location {
    /// Create an empty location.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            containers: Vec::new(),
        }
    }

    /// Place a container.
    #[must_use]
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }
}

/// The local player.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Item held on the cursor in menus.
    pub cursor_item: Option<ItemStack>,
    /// Toolbar/inventory slots.
    pub items: Vec<Option<ItemStack>>,
    /// Index of the active-hand slot in `items`.
    pub current_slot: usize,
    /// Gift counters per NPC the player has met.
    pub friendships: HashMap<String, FriendshipData>,
}

impl Player {
    /// Stack in the active hand.
    #[must_use]
    pub fn current_item(&self) -> Option<&ItemStack> {
        self.items.get(self.current_slot).and_then(Option::as_ref)
    }
}

/// Host state visible to the add-on.
#[derive(Debug, Clone)]
pub struct HostWorld {
    /// Every loaded location.
    pub locations: Vec<Location>,
    /// Gift-taste records keyed by NPC name.
    pub gift_tastes: HashMap<String, String>,
    /// The local player.
    pub player: Player,
    /// Agency flags.
    pub agency: AgencyFlags,
    /// Open menu, if any.
    pub menu: Option<MenuContext>,
    /// The add-on's translation table.
    pub translations: Translations,
    /// Current in-game date.
    pub date: CalendarDate,
}

impl HostWorld {
    /// Create an empty world on spring 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locations: Vec::new(),
            gift_tastes: HashMap::new(),
            player: Player::default(),
            agency: AgencyFlags::default(),
            menu: None,
            translations: Translations::new(),
            date: CalendarDate::new(1, Season::Spring),
        }
    }

    /// Find a location by name.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// Friendship counters with an NPC, if the player has met them.
    #[must_use]
    pub fn friendship(&self, npc: &str) -> Option<FriendshipData> {
        self.player.friendships.get(npc).copied()
    }

    /// What the disposal guard needs to see.
    #[must_use]
    pub fn guard_context(&self) -> GuardContext<'_> {
        GuardContext {
            agency: self.agency,
            menu: self.menu,
            held_item: self.player.cursor_item.as_ref().map(|s| s.name.as_str()),
        }
    }
}

impl Default for HostWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldContainers for HostWorld {
    fn visit_containers(&mut self, visitor: &mut dyn FnMut(&str, &mut Container)) {
        for location in &mut self.locations {
            for container in &mut location.containers {
                visitor(&location.name, container);
            }
        }
    }
}

impl RelationshipTable for HostWorld {
    fn record(&self, key: &str) -> Option<String> {
        self.gift_tastes.get(key).cloned()
    }

    fn set_record(&mut self, key: &str, value: String) {
        self.gift_tastes.insert(key.to_string(), value);
    }
}

impl ActiveHand for HostWorld {
    fn active_item_mut(&mut self) -> Option<&mut ItemStack> {
        let slot = self.player.current_slot;
        self.player.items.get_mut(slot).and_then(Option::as_mut)
    }
}

impl DialogueSource for HostWorld {
    fn line(&self, key: &str) -> Option<String> {
        self.translations.line(key)
    }
}
