//! Core type definitions shared by every Easter Folly rule.
//!
//! These mirror the slices of host state the rules touch: item stacks and the
//! containers holding them, the calendar, screen geometry and friendship
//! counters.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// Host-internal numeric identifier for an item.
///
/// Identifiers `<= 0` are never valid; the catalog hands them out as the
/// "not registered" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub i32);

impl ItemId {
    /// Whether this identifier names a registered item.
    #[must_use]
    pub fn is_resolved(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stack of identical items occupying one container slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Host identifier.
    pub id: ItemId,
    /// Display name, used for rule matching.
    pub name: String,
    /// Units in the stack. Present stacks always hold at least one.
    pub quantity: u32,
}

impl ItemStack {
    /// Create a new stack.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
        }
    }

    /// Whether the stack counts as present (non-zero quantity).
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.quantity > 0
    }
}

/// A host-owned slot sequence, e.g. a storage chest.
///
/// Rules never create or destroy containers; they only rewrite slots or
/// append new stacks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Ordered slots; `None` is an empty slot.
    pub slots: Vec<Option<ItemStack>>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container with the given slots.
    #[must_use]
    pub fn with_slots(slots: Vec<Option<ItemStack>>) -> Self {
        Self { slots }
    }

    /// Iterate present stacks.
    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().flatten().filter(|s| s.is_present())
    }

    /// Total units of items with the given name.
    #[must_use]
    pub fn count_named(&self, name: &str) -> u64 {
        self.stacks()
            .filter(|s| s.name == name)
            .map(|s| u64::from(s.quantity))
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// Season of the in-game year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// First season; Easter items are handed out here.
    Spring,
    /// Second season.
    Summer,
    /// Third season.
    Fall,
    /// Fourth season.
    Winter,
}

impl Season {
    /// Parse the host's lowercase season name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" => Some(Self::Fall),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }

    /// The host's lowercase season name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (day-of-month, season) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Day of the month, starting at 1.
    pub day: u8,
    /// Season.
    pub season: Season,
}

impl CalendarDate {
    /// Create a new date.
    #[must_use]
    pub fn new(day: u8, season: Season) -> Self {
        Self { day, season }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.day)
    }
}

// ---------------------------------------------------------------------------
// Screen geometry
// ---------------------------------------------------------------------------

/// A pointer position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Horizontal pixel.
    pub x: i32,
    /// Vertical pixel.
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new point.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in screen pixels (half-open on the far edges).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: ScreenPoint) -> bool {
        let right = i64::from(self.x) + i64::from(self.width);
        let bottom = i64::from(self.y) + i64::from(self.height);
        point.x >= self.x
            && i64::from(point.x) < right
            && point.y >= self.y
            && i64::from(point.y) < bottom
    }
}

// ---------------------------------------------------------------------------
// Relationships
// ---------------------------------------------------------------------------

/// Per-recipient gift counters kept by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FriendshipData {
    /// Gifts given to the recipient today.
    pub gifts_today: u32,
    /// Gifts given to the recipient this week.
    pub gifts_this_week: u32,
}
