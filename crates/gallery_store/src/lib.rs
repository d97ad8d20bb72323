//! Shoebox Persistence Layer
//!
//! Provides the durable image roll: one ordered list of image filenames
//! stored as a single value in a RocksDB key-value database, plus the
//! write-ahead marker used to fence in-flight registrations.

mod image_list;

pub use image_list::ImageListStore;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("RocksDB error: {0}")]
    RocksDb(#[from] rocksdb::Error),

    #[error("Corrupt image list: {0}")]
    Corrupt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Get the store directory
pub fn store_dir() -> PathBuf {
    ProjectDirs::from("com", "Shoebox", "Shoebox")
        .map(|dirs| dirs.data_dir().join("store"))
        .unwrap_or_else(|| PathBuf::from("./data/store"))
}
