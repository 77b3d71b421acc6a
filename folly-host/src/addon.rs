//! Easter Folly add-on entry point.
//!
//! Owns every rule component and routes each host event to the components
//! subscribed to it:
//!
//! | Event              | Component                  |
//! |--------------------|----------------------------|
//! | `GameLaunched`     | catalog resolver           |
//! | `ButtonPressed`    | disposal guard             |
//! | `DayStarted`       | expiry processor           |
//! | `BeforeGiftGiven`  | gift override (arm)        |
//! | `UpdateTicked`     | scheduler → gift override  |

use std::path::PathBuf;

use folly_core::catalog::{AssetCatalog, CatalogResolver, CatalogState};
use folly_core::error::Result;
use folly_core::expiry::{ExpiryProcessor, PurgeOutcome};
use folly_core::gift::{GiftAttempt, GiftOutcome, GiftOverrideController, PendingOverride};
use folly_core::guard::GuardFilter;
use folly_core::scheduler::{TickScheduler, TickTask};
use tracing::{debug, error, info};

use crate::config::AddonSettings;
use crate::events::HostEvent;
use crate::world::HostWorld;

/// What the add-on did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    /// No rule acted on the event.
    Ignored,
    /// The catalog connection was attempted.
    Launched(CatalogState),
    /// A button press was suppressed.
    Suppressed,
    /// The expiry processor ran.
    Expiry(PurgeOutcome),
    /// The gift override evaluated a gift.
    Gift(GiftOutcome),
    /// A tick fired; holds the override that was reverted, if any.
    Ticked(Option<PendingOverride>),
}

/// The add-on: configuration plus every rule component.
pub struct EasterFolly {
    settings: AddonSettings,
    addon_dir: PathBuf,
    catalog_service: Option<Box<dyn AssetCatalog>>,
    catalog: CatalogResolver,
    guard: GuardFilter,
    expiry: ExpiryProcessor,
    gifts: GiftOverrideController,
    scheduler: TickScheduler,
}

impl EasterFolly {
    /// Build the add-on from its settings. `addon_dir` anchors relative paths.
    #[must_use]
    pub fn new(settings: AddonSettings, addon_dir: impl Into<PathBuf>) -> Self {
        let rules = &settings.rules;
        let guard = GuardFilter::new(rules.protected_items());
        let expiry = ExpiryProcessor::new(
            rules.items.egg.clone(),
            rules.items.replacement.clone(),
            rules.expiry.boundary(),
        );
        let gifts = GiftOverrideController::new(rules.gifts.clone(), &rules.items)
            .enabled(rules.rules.gift_dialogue);

        Self {
            addon_dir: addon_dir.into(),
            catalog_service: None,
            catalog: CatalogResolver::new(),
            guard,
            expiry,
            gifts,
            scheduler: TickScheduler::new(),
            settings,
        }
    }

    /// Provide the asset catalog service another add-on exposes. It is only
    /// connected once the host signals launch.
    #[must_use]
    pub fn with_catalog_service(mut self, service: Box<dyn AssetCatalog>) -> Self {
        self.catalog_service = Some(service);
        self
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &AddonSettings {
        &self.settings
    }

    /// The catalog resolver.
    #[must_use]
    pub fn catalog(&self) -> &CatalogResolver {
        &self.catalog
    }

    /// The gift override controller.
    #[must_use]
    pub fn gifts(&self) -> &GiftOverrideController {
        &self.gifts
    }

    /// The one-shot tick scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    /// Content pack path handed to the catalog.
    #[must_use]
    pub fn asset_pack_path(&self) -> PathBuf {
        self.settings.asset_pack_in(&self.addon_dir)
    }

    /// Dispatch one host event.
    ///
    /// # Errors
    /// Propagates gift override failures (missing dialogue, missing or
    /// malformed gift-taste record). These are logged before returning.
    pub fn handle(&mut self, event: &mut HostEvent, world: &mut HostWorld) -> Result<EventResponse> {
        match event {
            HostEvent::GameLaunched => Ok(self.on_game_launched()),
            HostEvent::ButtonPressed(press) => {
                if !self.settings.rules.rules.block_disposal {
                    return Ok(EventResponse::Ignored);
                }
                let caught = self.guard.on_button_pressed(&world.guard_context(), press);
                Ok(if caught {
                    EventResponse::Suppressed
                } else {
                    EventResponse::Ignored
                })
            }
            HostEvent::DayStarted { date } => {
                world.date = *date;
                if !self.settings.rules.rules.purge_expired_eggs {
                    return Ok(EventResponse::Ignored);
                }
                Ok(EventResponse::Expiry(self.expiry.on_day_started(*date, &self.catalog, world)))
            }
            HostEvent::BeforeGiftGiven {
                recipient,
                gift,
                recipient_accepts,
            } => {
                let attempt = GiftAttempt {
                    friendship: world.friendship(recipient),
                    recipient: recipient.clone(),
                    gift: gift.name.clone(),
                    recipient_accepts: *recipient_accepts,
                };
                self.gifts
                    .on_before_gift_given(&attempt, world, &mut self.scheduler)
                    .map(EventResponse::Gift)
                    .inspect_err(|e| error!(recipient = %attempt.recipient, error = %e, "Gift dialogue override failed"))
            }
            HostEvent::UpdateTicked { tick } => Ok(self.on_update_ticked(*tick, world)),
        }
    }

    fn on_game_launched(&mut self) -> EventResponse {
        let pack = self.asset_pack_path();
        self.catalog.connect(self.catalog_service.take(), &pack);
        info!(state = ?self.catalog.state(), "Easter Folly launched");
        EventResponse::Launched(self.catalog.state())
    }

    fn on_update_ticked(&mut self, tick: u64, world: &mut HostWorld) -> EventResponse {
        let mut reverted = None;
        for task in self.scheduler.take_due() {
            debug!(tick, ?task, "Running deferred task");
            match task {
                TickTask::RevertGiftDialogue => reverted = self.gifts.on_tick(world),
            }
        }
        EventResponse::Ticked(reverted)
    }

    /// Load the add-on's translation file into the world's table.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_translations(&self, world: &mut HostWorld) -> Result<usize> {
        let path = self.settings.translations_in(&self.addon_dir);
        world.translations = folly_core::i18n::Translations::from_file(&path)?;
        info!(path = %path.display(), entries = world.translations.len(), "Loaded translations");
        Ok(world.translations.len())
    }
}

impl std::fmt::Debug for EasterFolly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EasterFolly")
            .field("addon_dir", &self.addon_dir)
            .field("catalog", &self.catalog)
            .field("gifts", &self.gifts)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
