//! Gallery state management

use crate::{AppUriResolver, GalleryConfig, GalleryError, ImageRegistry, TimestampNames};
use gallery_fs::{FileArea, LocalSourceResolver};
use gallery_store::ImageListStore;
use parking_lot::RwLock;

/// Main gallery state
pub struct Gallery {
    /// Gallery configuration
    pub config: RwLock<GalleryConfig>,

    /// The image registry
    pub registry: ImageRegistry,
}

impl Gallery {
    /// Create a new gallery from configuration
    pub fn new(config: GalleryConfig) -> Result<Self, GalleryError> {
        let store = ImageListStore::open(&config.storage.store_dir())
            .map_err(|e| GalleryError::Init(e.to_string()))?;
        let files = FileArea::open(config.storage.image_dir())
            .map_err(|e| GalleryError::Init(e.to_string()))?;

        let registry = ImageRegistry::new(
            store,
            files,
            Box::new(LocalSourceResolver),
            Box::new(AppUriResolver::new(config.storage.display_scheme.clone())),
            Box::new(TimestampNames),
        );

        Ok(Self {
            config: RwLock::new(config),
            registry,
        })
    }

    /// Save the current configuration
    pub fn save_config(&self) -> anyhow::Result<()> {
        self.config.read().save()
    }
}
