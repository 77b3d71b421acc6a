//! Host events the add-on reacts to.
//!
//! The host fires these serially from its event loop. Only
//! [`HostEvent::ButtonPressed`] is mutable by listeners: suppressing the press
//! stops the host from acting on it.

use folly_core::guard::ButtonPressed;
use folly_core::types::{CalendarDate, ItemStack};

/// A host lifecycle or gameplay event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The host finished launching; other add-ons' services are available.
    GameLaunched,

    /// The player pressed a button.
    ButtonPressed(ButtonPressed),

    /// A new in-game day started.
    DayStarted {
        date: CalendarDate,
    },

    /// The player is about to give an item to an NPC.
    BeforeGiftGiven {
        recipient: String,
        gift: ItemStack,
        recipient_accepts: bool,
    },

    /// One host update tick elapsed.
    UpdateTicked {
        tick: u64,
    },
}

impl HostEvent {
    /// Short event name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GameLaunched => "game_launched",
            Self::ButtonPressed(_) => "button_pressed",
            Self::DayStarted { .. } => "day_started",
            Self::BeforeGiftGiven { .. } => "before_gift_given",
            Self::UpdateTicked { .. } => "update_ticked",
        }
    }

    /// Whether this is a button press the add-on suppressed.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::ButtonPressed(press) if press.is_suppressed())
    }
}
