//! Configuration for the Easter Folly rules.
//!
//! Maps directly to the `[rules]`, `[items]`, `[expiry]` and `[gifts]`
//! sections of `easter-folly.toml`. Every field has a default so an empty
//! file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::types::{CalendarDate, Season};

/// Top-level rules configuration, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FollyConfig {
    /// Per-rule on/off toggles.
    #[serde(default)]
    pub rules: RuleToggles,
    /// Names of the items the rules act on.
    #[serde(default)]
    pub items: ItemNames,
    /// When the egg purge runs.
    #[serde(default)]
    pub expiry: ExpiryConfig,
    /// Gift dialogue override settings.
    #[serde(default)]
    pub gifts: GiftConfig,
}

impl FollyConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `FollyError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::FollyError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Items that must never be trashed or dropped.
    #[must_use]
    pub fn protected_items(&self) -> Vec<String> {
        vec![self.items.basket.clone(), self.items.egg.clone()]
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// Scalar toggles for each rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleToggles {
    /// Block trashing/dropping the protected items.
    #[serde(default = "default_true")]
    pub block_disposal: bool,
    /// Convert leftover eggs when the expiry date arrives.
    #[serde(default = "default_true")]
    pub purge_expired_eggs: bool,
    /// Swap in the unique gift dialogue for egg deliveries.
    #[serde(default = "default_true")]
    pub gift_dialogue: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            block_disposal: true,
            purge_expired_eggs: true,
            gift_dialogue: true,
        }
    }
}

/// Item names as registered in the host catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemNames {
    /// The egg item; expires and triggers the gift dialogue.
    #[serde(default = "default_egg")]
    pub egg: String,
    /// The basket item; triggers the gift dialogue and leaves one unit behind.
    #[serde(default = "default_basket")]
    pub basket: String,
    /// What expired eggs turn into.
    #[serde(default = "default_replacement")]
    pub replacement: String,
}

impl Default for ItemNames {
    fn default() -> Self {
        Self {
            egg: default_egg(),
            basket: default_basket(),
            replacement: default_replacement(),
        }
    }
}

/// Calendar boundary for the egg purge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpiryConfig {
    /// Day of month the purge runs on.
    #[serde(default = "default_expiry_day")]
    pub day: u8,
    /// Season the purge runs in.
    #[serde(default = "default_expiry_season")]
    pub season: Season,
}

impl ExpiryConfig {
    /// The boundary as a calendar date.
    #[must_use]
    pub fn boundary(&self) -> CalendarDate {
        CalendarDate::new(self.day, self.season)
    }
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self {
            day: default_expiry_day(),
            season: default_expiry_season(),
        }
    }
}

/// Gift dialogue override settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftConfig {
    /// Translation key prefix; the recipient's lowercased name is appended.
    #[serde(default = "default_dialogue_prefix")]
    pub dialogue_key_prefix: String,
    /// Record field the localized line is written into.
    #[serde(default = "default_dialogue_field")]
    pub dialogue_field: usize,
    /// Record field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Gifts per recipient per week before gifts are refused.
    #[serde(default = "default_weekly_limit")]
    pub weekly_gift_limit: u32,
    /// Gifts per recipient per day before gifts are refused.
    #[serde(default = "default_daily_limit")]
    pub daily_gift_limit: u32,
}

impl GiftConfig {
    /// Translation key for a recipient's unique gift line.
    #[must_use]
    pub fn dialogue_key(&self, recipient: &str) -> String {
        format!("{}.{}", self.dialogue_key_prefix, recipient.to_lowercase())
    }
}

impl Default for GiftConfig {
    fn default() -> Self {
        Self {
            dialogue_key_prefix: default_dialogue_prefix(),
            dialogue_field: default_dialogue_field(),
            delimiter: default_delimiter(),
            weekly_gift_limit: default_weekly_limit(),
            daily_gift_limit: default_daily_limit(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (required by serde)
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}
fn default_egg() -> String {
    "Chocolate Egg".to_string()
}
fn default_basket() -> String {
    "Egg Basket".to_string()
}
fn default_replacement() -> String {
    "Chocolate Bar".to_string()
}
fn default_expiry_day() -> u8 {
    1
}
fn default_expiry_season() -> Season {
    Season::Summer
}
fn default_dialogue_prefix() -> String {
    "talk.egg_gift".to_string()
}
fn default_dialogue_field() -> usize {
    2
}
fn default_delimiter() -> char {
    '/'
}
fn default_weekly_limit() -> u32 {
    2
}
fn default_daily_limit() -> u32 {
    1
}
