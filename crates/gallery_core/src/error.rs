//! Gallery error types

use thiserror::Error;

/// Main gallery error type
#[derive(Error, Debug)]
pub enum GalleryError {
    // ===== Recoverable Errors (notify user, continue) =====
    #[error("Copy failed: {0}")]
    Copy(String),

    #[error("Delete failed: {0}")]
    Delete(String),

    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Store I/O error: {0}")]
    Store(String),

    #[error("Persisted image list is corrupt: {0}")]
    CorruptState(String),

    #[error("File I/O error: {0}")]
    Io(String),

    // ===== Fatal Errors (application termination) =====
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Initialization failed: {0}")]
    Init(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;

impl GalleryError {
    /// Is this error recoverable?
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GalleryError::Copy(_)
                | GalleryError::Delete(_)
                | GalleryError::NotFound(_)
                | GalleryError::Store(_)
                | GalleryError::CorruptState(_)
                | GalleryError::Io(_)
        )
    }

    /// Is this a fatal error?
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }

    /// Get a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            GalleryError::Copy(_) => "Error while storing file.".to_string(),
            GalleryError::Delete(_) => "Error while deleting file.".to_string(),
            GalleryError::NotFound(name) => format!("Image not found: {}", name),
            GalleryError::CorruptState(_) => "Stored image list is unreadable.".to_string(),
            _ => self.to_string(),
        }
    }
}

impl From<gallery_store::StoreError> for GalleryError {
    fn from(e: gallery_store::StoreError) -> Self {
        match e {
            gallery_store::StoreError::Corrupt(msg) => GalleryError::CorruptState(msg),
            _ => GalleryError::Store(e.to_string()),
        }
    }
}

impl From<gallery_fs::FsError> for GalleryError {
    fn from(e: gallery_fs::FsError) -> Self {
        match e {
            gallery_fs::FsError::NotFound(p) => GalleryError::NotFound(p.display().to_string()),
            _ => GalleryError::Io(e.to_string()),
        }
    }
}
