//! The image registry
//!
//! Keeps three views of "which images exist" consistent: the files under
//! the private root, the persisted ordered name list, and the in-memory
//! display list. The display list is always the reversed, path-resolved
//! projection of the persisted list as of the last load/register/remove.

use crate::events::{EventBus, GalleryEvent};
use crate::naming::NameSource;
use crate::resolver::PathResolver;
use crate::{GalleryError, Result};
use crossbeam_channel::Receiver;
use gallery_fs::{FileArea, SourceRef, SourceResolver};
use gallery_store::ImageListStore;
use parking_lot::Mutex;
use serde::Serialize;
use std::path::PathBuf;

/// One displayable image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageEntry {
    /// Generated filename, the durable identity
    pub name: String,
    /// Absolute path inside the file area
    pub file_path: PathBuf,
    /// Session-specific display reference
    pub display_path: String,
}

/// Registry over the persisted image list and the private file area
pub struct ImageRegistry {
    store: ImageListStore,
    files: FileArea,
    sources: Box<dyn SourceResolver>,
    resolver: Box<dyn PathResolver>,
    names: Box<dyn NameSource>,
    /// Display list; its lock doubles as the single-writer lock for every
    /// store read-modify-write cycle
    images: Mutex<Vec<ImageEntry>>,
    events: EventBus,
}

impl ImageRegistry {
    pub fn new(
        store: ImageListStore,
        files: FileArea,
        sources: Box<dyn SourceResolver>,
        resolver: Box<dyn PathResolver>,
        names: Box<dyn NameSource>,
    ) -> Self {
        Self {
            store,
            files,
            sources,
            resolver,
            names,
            images: Mutex::new(Vec::new()),
            events: EventBus::new(),
        }
    }

    /// Snapshot of the current display list, newest first
    pub fn images(&self) -> Vec<ImageEntry> {
        self.images.lock().clone()
    }

    /// Subscribe to display-list changes
    pub fn subscribe(&self) -> Receiver<GalleryEvent> {
        self.events.subscribe()
    }

    /// Rebuild the display list from the persisted list
    ///
    /// Absent list means no images yet. Safe to call repeatedly; a second
    /// call with no intervening mutation produces the identical list.
    pub fn load(&self) -> Result<Vec<ImageEntry>> {
        let mut images = self.images.lock();

        self.reconcile_orphans()?;

        let names = self.store.get()?.unwrap_or_default();

        // Newest first: the reversed persisted order, so a reload agrees
        // with the state register/remove maintain incrementally
        let entries: Vec<ImageEntry> = names.iter().rev().map(|n| self.entry_for(n)).collect();

        *images = entries.clone();
        drop(images);

        tracing::debug!("Loaded {} images", entries.len());
        self.events.emit(GalleryEvent::Reloaded {
            count: entries.len(),
        });
        Ok(entries)
    }

    /// Import an image: copy it into the file area under a fresh name,
    /// append the name to the persisted list, prepend a display entry
    ///
    /// The persisted list is only touched after the copy succeeds; a copy
    /// failure leaves every view unchanged.
    pub fn register(&self, source: &SourceRef) -> Result<ImageEntry> {
        let (dir, source_name) = self
            .sources
            .resolve(source)
            .map_err(|e| GalleryError::Copy(e.to_string()))?;

        let mut images = self.images.lock();

        let name = self.names.next_name();

        // Write-ahead marker: a crash between here and the committed list
        // write leaves at worst an orphan file, cleaned up on the next load
        self.store.set_pending(&name)?;

        if let Err(e) = self.files.copy_from(&dir, &source_name, &name) {
            self.clear_pending_marker(&name);
            return Err(GalleryError::Copy(e.to_string()));
        }

        // Absent list = first registration. A corrupt list is a hard error:
        // defaulting here would silently drop every previously known image.
        let mut names = match self.store.get() {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                self.roll_back_copy(&name);
                return Err(e.into());
            }
        };

        names.push(name.clone());
        if let Err(e) = self.store.set(&names) {
            self.roll_back_copy(&name);
            return Err(e.into());
        }

        self.clear_pending_marker(&name);

        let entry = self.entry_for(&name);
        images.insert(0, entry.clone());
        drop(images);

        tracing::info!("Registered image {}", name);
        self.events.emit(GalleryEvent::Added(entry.clone()));
        Ok(entry)
    }

    /// Remove an image everywhere: persisted list, file area, display list
    pub fn remove(&self, entry: &ImageEntry) -> Result<()> {
        self.remove_named(&entry.name)
    }

    /// Remove an image by name
    ///
    /// Durable removal first: the persisted list is filtered and written
    /// back, then the file is deleted, and only then does the display list
    /// change. A file-delete failure is surfaced after the logical removal
    /// has stood.
    pub fn remove_named(&self, name: &str) -> Result<()> {
        let mut images = self.images.lock();

        let position = images
            .iter()
            .position(|e| e.name == name)
            .ok_or_else(|| GalleryError::NotFound(name.to_string()))?;

        let names = self.store.get()?.unwrap_or_default();
        let filtered: Vec<String> = names.into_iter().filter(|n| n != name).collect();
        self.store.set(&filtered)?;

        let deleted = self.files.remove_file(name);

        images.remove(position);
        drop(images);

        tracing::info!("Removed image {}", name);
        self.events.emit(GalleryEvent::Removed {
            name: name.to_string(),
        });

        deleted.map_err(|e| GalleryError::Delete(e.to_string()))
    }

    fn entry_for(&self, name: &str) -> ImageEntry {
        let file_path = self.files.root().join(name);
        let display_path = self.resolver.resolve(Some(&file_path));
        ImageEntry {
            name: name.to_string(),
            file_path,
            display_path,
        }
    }

    /// Delete files the persisted list does not name
    ///
    /// Such a file is the residue of a registration that crashed or failed
    /// between the copy and the committed list write.
    fn reconcile_orphans(&self) -> Result<()> {
        let known = self.store.get()?.unwrap_or_default();
        let pending = self.store.pending()?;

        for name in self.files.list_names()? {
            if !known.contains(&name) {
                tracing::warn!("Removing orphan file from a failed registration: {}", name);
                if let Err(e) = self.files.remove_file(&name) {
                    tracing::warn!("Orphan cleanup failed for {}: {}", name, e);
                }
            }
        }

        if pending.is_some() {
            self.store.clear_pending()?;
        }

        Ok(())
    }

    fn roll_back_copy(&self, name: &str) {
        if let Err(e) = self.files.remove_file(name) {
            tracing::warn!("Rollback of copied file {} failed: {}", name, e);
        }
        self.clear_pending_marker(name);
    }

    fn clear_pending_marker(&self, name: &str) {
        // A stale marker is also cleared on the next load
        if let Err(e) = self.store.clear_pending() {
            tracing::warn!("Failed to clear pending marker for {}: {}", name, e);
        }
    }
}
