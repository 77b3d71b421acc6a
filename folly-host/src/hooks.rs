//! Integration hooks for the host's event surface.
//!
//! These turn raw host data (pixel coordinates, season names, NPC names) into
//! [`HostEvent`]s. In a full host integration they would be called from the
//! host's own event handlers.

use folly_core::guard::ButtonPressed;
use folly_core::types::{CalendarDate, ItemStack, ScreenPoint, Season};

use crate::events::HostEvent;

/// Create the launch-complete event.
#[must_use]
pub fn on_game_launched() -> HostEvent {
    HostEvent::GameLaunched
}

/// Create a button-press event from the host's input system.
#[must_use]
pub fn on_button_pressed(button: impl Into<String>, screen_x: i32, screen_y: i32) -> HostEvent {
    HostEvent::ButtonPressed(ButtonPressed::new(button, ScreenPoint::new(screen_x, screen_y)))
}

/// Create a day-start event from the host calendar.
///
/// Returns `None` if the host reports a season name it does not define.
#[must_use]
pub fn on_day_started(day_of_month: u8, season: &str) -> Option<HostEvent> {
    let season = Season::from_name(season)?;
    Some(HostEvent::DayStarted {
        date: CalendarDate::new(day_of_month, season),
    })
}

/// Create a pre-gift event from the host's gift pipeline.
#[must_use]
pub fn on_before_gift_given(recipient: impl Into<String>, gift: ItemStack, recipient_accepts: bool) -> HostEvent {
    HostEvent::BeforeGiftGiven {
        recipient: recipient.into(),
        gift,
        recipient_accepts,
    }
}

/// Create a tick event.
#[must_use]
pub fn on_update_ticked(tick: u64) -> HostEvent {
    HostEvent::UpdateTicked { tick }
}
