//! Host loop driver — thin glue between a shared host world and the add-on.
//!
//! The host keeps its world behind an `Arc<Mutex<_>>` because other systems
//! (rendering, save/load) read it between events. Each dispatch takes the
//! lock for exactly one callback, so every rule mutation completes before
//! anything else can observe the world.
//!
//! ```text
//! HostLoop::dispatch(event)
//!   └─ lock world
//!   └─ EasterFolly::handle(event, world)
//!   └─ unlock
//! HostLoop::tick()
//!   └─ dispatch(UpdateTicked { tick + 1 })
//! ```

use std::sync::Arc;

use folly_core::error::Result;
use parking_lot::Mutex;
use tracing::trace;

use crate::addon::{EasterFolly, EventResponse};
use crate::events::HostEvent;
use crate::world::HostWorld;

/// Shared handle to the host world.
pub type SharedWorld = Arc<Mutex<HostWorld>>;

/// Delivers host events to the add-on one at a time.
#[derive(Debug)]
pub struct HostLoop {
    addon: EasterFolly,
    world: SharedWorld,
    tick: u64,
}

impl HostLoop {
    /// Create a loop around an add-on and the world it acts on.
    #[must_use]
    pub fn new(addon: EasterFolly, world: SharedWorld) -> Self {
        Self {
            addon,
            world,
            tick: 0,
        }
    }

    /// Another handle to the shared world.
    #[must_use]
    pub fn world(&self) -> SharedWorld {
        Arc::clone(&self.world)
    }

    /// The add-on being driven.
    #[must_use]
    pub fn addon(&self) -> &EasterFolly {
        &self.addon
    }

    /// Ticks delivered so far.
    #[must_use]
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Deliver one event. The event is handed back so the host can see
    /// whether a listener suppressed it.
    ///
    /// # Errors
    /// Propagates errors from the add-on.
    pub fn dispatch(&mut self, mut event: HostEvent) -> Result<(HostEvent, EventResponse)> {
        trace!(event = event.name(), "Dispatching host event");
        let mut world = self.world.lock();
        let response = self.addon.handle(&mut event, &mut world)?;
        Ok((event, response))
    }

    /// Advance one host update tick.
    ///
    /// # Errors
    /// Propagates errors from the add-on.
    pub fn tick(&mut self) -> Result<EventResponse> {
        self.tick += 1;
        let (_, response) = self.dispatch(HostEvent::UpdateTicked { tick: self.tick })?;
        Ok(response)
    }
}
