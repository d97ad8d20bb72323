//! Shoebox File System Layer
//!
//! Provides a unified interface for the app-private image directory:
//! - FileArea: copy-in, remove, and listing inside one fixed root
//! - SourceRef / SourceResolver: turning picker-style content references
//!   into concrete directory entries before copying

mod file_area;
mod source;

pub use file_area::FileArea;
pub use source::{LocalSourceResolver, SourceRef, SourceResolver};

use std::path::PathBuf;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug)]
pub enum FsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Access denied: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, FsError>;
