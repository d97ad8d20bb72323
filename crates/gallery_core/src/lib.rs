//! Shoebox Core Domain Logic
//!
//! This crate contains:
//! - The image registry (load / register / remove)
//! - Display path resolution
//! - Image name generation
//! - Configuration
//! - Error types
//! - Change events

pub mod config;
pub mod error;
pub mod events;
pub mod naming;
pub mod registry;
pub mod resolver;
pub mod state;

pub use config::{GalleryConfig, GeneralConfig, StorageConfig};
pub use error::{GalleryError, Result};
pub use events::{EventBus, GalleryEvent};
pub use naming::{NameSource, TimestampNames};
pub use registry::{ImageEntry, ImageRegistry};
pub use resolver::{AppUriResolver, PathResolver};
pub use state::Gallery;

// The import seam lives in gallery_fs; callers only need these two
pub use gallery_fs::{SourceRef, SourceResolver};

use once_cell::sync::OnceCell;

/// Global gallery state (for front-end access)
static GALLERY: OnceCell<Gallery> = OnceCell::new();

/// Initialize global gallery state
pub fn init(config: GalleryConfig) -> anyhow::Result<&'static Gallery> {
    let gallery = Gallery::new(config)?;
    GALLERY
        .set(gallery)
        .map_err(|_| anyhow::anyhow!("Gallery already initialized"))?;
    Ok(GALLERY.get().unwrap())
}

/// Get global gallery state
pub fn gallery() -> Option<&'static Gallery> {
    GALLERY.get()
}
