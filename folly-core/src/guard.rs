//! Disposal guard — keeps the Easter items out of the trash.
//!
//! While a protected item is held on the cursor in an inventory-like menu,
//! a click on the menu's trash can, or anywhere outside the menu (which the
//! host treats as dropping the item into the world), is suppressed.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{Rect, ScreenPoint};

// ---------------------------------------------------------------------------
// Host context
// ---------------------------------------------------------------------------

/// Host flags that decide whether the player currently has agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct AgencyFlags {
    /// The game window has focus.
    pub window_active: bool,
    /// A cutscene/event is running.
    pub event_running: bool,
    /// The running event hands control to the player.
    pub player_control_sequence: bool,
    /// The name-select screen is open.
    pub name_select_up: bool,
    /// The chat box is open.
    pub chatting: bool,
    /// Dialogue text is still being typed out.
    pub dialogue_typing: bool,
    /// A dialogue box is up.
    pub dialogue_up: bool,
    /// A text input has keyboard focus.
    pub text_input_active: bool,
    /// The player is swinging a tool.
    pub using_tool: bool,
    /// The tool selector is open.
    pub picking_tool: bool,
    /// A stack-count selection is in progress.
    pub selecting_quantity: bool,
    /// The screen is fading to black.
    pub fade_to_black: bool,
}

impl AgencyFlags {
    /// Whether user input currently does not count as a player action.
    #[must_use]
    pub fn agency_lost(&self) -> bool {
        !self.window_active
            || (self.event_running && !self.player_control_sequence)
            || self.name_select_up
            || self.chatting
            || self.dialogue_typing
            || self.dialogue_up
            || self.text_input_active
            || self.using_tool
            || self.picking_tool
            || self.selecting_quantity
            || self.fade_to_black
    }
}

impl Default for AgencyFlags {
    fn default() -> Self {
        Self {
            window_active: true,
            event_running: false,
            player_control_sequence: false,
            name_select_up: false,
            chatting: false,
            dialogue_typing: false,
            dialogue_up: false,
            text_input_active: false,
            using_tool: false,
            picking_tool: false,
            selecting_quantity: false,
            fade_to_black: false,
        }
    }
}

/// Which menu is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// The game menu, showing the inventory page.
    InventoryPage,
    /// The game menu, showing the crafting page.
    CraftingPage,
    /// A chest or other item-grab menu.
    ItemGrab,
    /// Any other menu.
    Other,
}

impl MenuKind {
    /// Whether items can be picked up and moved around in this menu.
    #[must_use]
    pub fn is_inventory_like(self) -> bool {
        matches!(self, Self::InventoryPage | Self::CraftingPage | Self::ItemGrab)
    }
}

/// The active menu and its hit regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuContext {
    /// Menu variant.
    pub kind: MenuKind,
    /// On-screen bounds of the menu.
    pub bounds: Rect,
    /// Trash-can hit region, for variants that have one.
    pub trash_can: Option<Rect>,
}

impl MenuContext {
    /// Whether a click at `point` would dispose of the held item.
    #[must_use]
    pub fn is_disposal_target(&self, point: ScreenPoint) -> bool {
        self.trash_can.is_some_and(|t| t.contains(point)) || !self.bounds.contains(point)
    }
}

/// A button press as delivered by the host, with its suppression flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonPressed {
    /// Host button identifier.
    pub button: String,
    /// Pointer position at the time of the press.
    pub cursor: ScreenPoint,
    suppressed: bool,
}

impl ButtonPressed {
    /// Create an unsuppressed press.
    #[must_use]
    pub fn new(button: impl Into<String>, cursor: ScreenPoint) -> Self {
        Self {
            button: button.into(),
            cursor,
            suppressed: false,
        }
    }

    /// Stop the host from acting on this press. Repeated calls are no-ops.
    pub fn suppress(&mut self) {
        self.suppressed = true;
    }

    /// Whether the press has been suppressed.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }
}

/// Snapshot of the host state the guard inspects.
#[derive(Debug, Clone, Copy)]
pub struct GuardContext<'a> {
    /// Agency flags.
    pub agency: AgencyFlags,
    /// Active menu, if any.
    pub menu: Option<MenuContext>,
    /// Name of the item held on the cursor, if any.
    pub held_item: Option<&'a str>,
}

// ---------------------------------------------------------------------------
// Guard filter
// ---------------------------------------------------------------------------

/// Suppresses presses that would throw away a protected item.
#[derive(Debug, Clone)]
pub struct GuardFilter {
    protected: HashSet<String>,
}

impl GuardFilter {
    /// Create a filter protecting the given item names.
    pub fn new<I, S>(protected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            protected: protected.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether an item name is protected.
    #[must_use]
    pub fn is_protected(&self, name: &str) -> bool {
        self.protected.contains(name)
    }

    /// Whether the press described by `ctx` would dispose of a protected item.
    #[must_use]
    pub fn is_disposal(&self, ctx: &GuardContext<'_>, cursor: ScreenPoint) -> bool {
        if ctx.agency.agency_lost() {
            return false;
        }
        let Some(menu) = ctx.menu else { return false };
        let Some(held) = ctx.held_item else { return false };

        menu.kind.is_inventory_like() && self.is_protected(held) && menu.is_disposal_target(cursor)
    }

    /// Inspect a press and suppress it if it would dispose of a protected item.
    ///
    /// Returns whether the press was caught.
    pub fn on_button_pressed(&self, ctx: &GuardContext<'_>, press: &mut ButtonPressed) -> bool {
        if !self.is_disposal(ctx, press.cursor) {
            return false;
        }
        debug!(item = ctx.held_item.unwrap_or("null"), button = %press.button, "Caught untrashable item");
        press.suppress();
        true
    }
}
