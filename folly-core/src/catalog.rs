//! Catalog resolver — name → identifier lookups against the host's asset
//! catalog.
//!
//! The catalog is another add-on's service and is only populated once the
//! host signals it has fully launched. Until then, and for the whole session
//! if the service never shows up, every lookup returns [`UNRESOLVED_ID`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::types::ItemId;

/// Sentinel returned for names the catalog does not know.
pub const UNRESOLVED_ID: i32 = -1;

/// External name → identifier registry.
pub trait AssetCatalog {
    /// Register the content pack at `path`.
    fn load_assets(&mut self, path: &Path);

    /// Identifier of an object item, or a value `<= 0` if unregistered.
    fn object_id(&self, name: &str) -> i32;

    /// Identifier of a crop, or a value `<= 0` if unregistered.
    fn crop_id(&self, name: &str) -> i32;
}

/// Connection state of the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogState {
    /// The host has not launched yet.
    Pending,
    /// The catalog service is connected and the content pack loaded.
    Connected,
    /// The catalog service was missing at launch; lookups stay unresolved.
    Unavailable,
}

/// Facade over an optional [`AssetCatalog`] service.
pub struct CatalogResolver {
    service: Option<Box<dyn AssetCatalog>>,
    state: CatalogState,
}

impl CatalogResolver {
    /// Create a resolver that has not been connected yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            service: None,
            state: CatalogState::Pending,
        }
    }

    /// Connect to the catalog service and load the content pack.
    ///
    /// Called once, after the host has fully launched. A missing service is
    /// logged and leaves the resolver unavailable for the rest of the session.
    /// Once the resolver has left `Pending`, further calls are ignored.
    pub fn connect(&mut self, service: Option<Box<dyn AssetCatalog>>, pack_path: &Path) {
        if self.state != CatalogState::Pending {
            debug!(state = ?self.state, "Asset catalog already connected; ignoring");
            return;
        }
        match service {
            Some(mut service) => {
                service.load_assets(pack_path);
                debug!(path = %pack_path.display(), "Loaded content pack into asset catalog");
                self.service = Some(service);
                self.state = CatalogState::Connected;
            }
            None => {
                error!("Can't access the asset catalog service. Is it installed correctly?");
                self.service = None;
                self.state = CatalogState::Unavailable;
            }
        }
    }

    /// Current connection state.
    #[must_use]
    pub fn state(&self) -> CatalogState {
        self.state
    }

    /// Raw object identifier lookup; [`UNRESOLVED_ID`] when not connected.
    #[must_use]
    pub fn resolve_object_id(&self, name: &str) -> i32 {
        self.service
            .as_ref()
            .map_or(UNRESOLVED_ID, |s| s.object_id(name))
    }

    /// Raw crop identifier lookup; [`UNRESOLVED_ID`] when not connected.
    #[must_use]
    pub fn resolve_crop_id(&self, name: &str) -> i32 {
        self.service
            .as_ref()
            .map_or(UNRESOLVED_ID, |s| s.crop_id(name))
    }

    /// Object identifier, or `None` if the name is unavailable.
    #[must_use]
    pub fn object_id(&self, name: &str) -> Option<ItemId> {
        Some(ItemId(self.resolve_object_id(name))).filter(|id| id.is_resolved())
    }
}

impl Default for CatalogResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CatalogResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogResolver")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// In-memory catalog
// ---------------------------------------------------------------------------

/// Table-backed [`AssetCatalog`], for hosts that register items up front.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    objects: HashMap<String, i32>,
    crops: HashMap<String, i32>,
    loaded_packs: Vec<PathBuf>,
}

impl StaticCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an object item.
    #[must_use]
    pub fn with_object(mut self, name: impl Into<String>, id: i32) -> Self {
        self.objects.insert(name.into(), id);
        self
    }

    /// Register a crop.
    #[must_use]
    pub fn with_crop(mut self, name: impl Into<String>, id: i32) -> Self {
        self.crops.insert(name.into(), id);
        self
    }

    /// Content packs loaded so far.
    #[must_use]
    pub fn loaded_packs(&self) -> &[PathBuf] {
        &self.loaded_packs
    }
}

impl AssetCatalog for StaticCatalog {
    fn load_assets(&mut self, path: &Path) {
        self.loaded_packs.push(path.to_path_buf());
    }

    fn object_id(&self, name: &str) -> i32 {
        self.objects.get(name).copied().unwrap_or(UNRESOLVED_ID)
    }

    fn crop_id(&self, name: &str) -> i32 {
        self.crops.get(name).copied().unwrap_or(UNRESOLVED_ID)
    }
}
