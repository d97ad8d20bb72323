//! RocksDB-backed image list storage

use crate::{Result, StoreError};
use rocksdb::{Options, DB};
use std::path::Path;

/// The durable ordered list of image names, JSON array of strings
const IMAGES_KEY: &[u8] = b"gallery/images";

/// Write-ahead marker: name of an in-flight registration
const PENDING_KEY: &[u8] = b"gallery/pending";

/// Durable storage for the image roll
///
/// Holds one opaque value: the ordered list of known image filenames.
/// No locking here; callers serialize their read-modify-write cycles.
pub struct ImageListStore {
    db: DB,
}

impl ImageListStore {
    /// Open or create the store database
    pub fn open(path: &Path) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Lz4);
        opts.set_max_open_files(64);

        let db = DB::open(&opts, path)?;
        tracing::debug!("Image list store opened at {:?}", path);
        Ok(Self { db })
    }

    /// Read the stored list; `None` if it was never written
    pub fn get(&self) -> Result<Option<Vec<String>>> {
        match self.db.get(IMAGES_KEY)? {
            Some(bytes) => {
                let list: Vec<String> = serde_json::from_slice(&bytes)
                    .map_err(|e| StoreError::Corrupt(e.to_string()))?;
                Ok(Some(list))
            }
            None => Ok(None),
        }
    }

    /// Overwrite the stored list
    ///
    /// A single-key put: a concurrent `get` sees either the old or the new
    /// list, never a partial one.
    pub fn set(&self, names: &[String]) -> Result<()> {
        let value = serde_json::to_vec(names).map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.db.put(IMAGES_KEY, value)?;
        Ok(())
    }

    /// Name of the registration currently in flight, if any
    pub fn pending(&self) -> Result<Option<String>> {
        match self.db.get(PENDING_KEY)? {
            Some(bytes) => {
                let name =
                    String::from_utf8(bytes).map_err(|e| StoreError::Corrupt(e.to_string()))?;
                Ok(Some(name))
            }
            None => Ok(None),
        }
    }

    /// Mark a registration as in flight before the file copy starts
    pub fn set_pending(&self, name: &str) -> Result<()> {
        self.db.put(PENDING_KEY, name.as_bytes())?;
        Ok(())
    }

    /// Clear the in-flight marker once the list write has committed
    pub fn clear_pending(&self) -> Result<()> {
        self.db.delete(PENDING_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_absent() {
        let temp = TempDir::new().unwrap();
        let store = ImageListStore::open(temp.path()).unwrap();

        assert_eq!(store.get().unwrap(), None);
    }

    #[test]
    fn test_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = ImageListStore::open(temp.path()).unwrap();

        let list = vec![
            "1000.jpg".to_string(),
            "2000.jpg".to_string(),
            "3000.jpg".to_string(),
        ];
        store.set(&list).unwrap();

        // Ordering and content survive exactly
        assert_eq!(store.get().unwrap(), Some(list));
    }

    #[test]
    fn test_set_overwrites() {
        let temp = TempDir::new().unwrap();
        let store = ImageListStore::open(temp.path()).unwrap();

        store.set(&["1000.jpg".to_string()]).unwrap();
        store.set(&["2000.jpg".to_string()]).unwrap();

        assert_eq!(store.get().unwrap(), Some(vec!["2000.jpg".to_string()]));
    }

    #[test]
    fn test_empty_list_is_not_absent() {
        let temp = TempDir::new().unwrap();
        let store = ImageListStore::open(temp.path()).unwrap();

        store.set(&[]).unwrap();
        assert_eq!(store.get().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_corrupt_value() {
        let temp = TempDir::new().unwrap();

        {
            let store = ImageListStore::open(temp.path()).unwrap();
            store.db.put(IMAGES_KEY, b"not json at all").unwrap();
        }

        let store = ImageListStore::open(temp.path()).unwrap();
        assert!(matches!(store.get().unwrap_err(), StoreError::Corrupt(_)));
    }

    #[test]
    fn test_wrong_shape_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let store = ImageListStore::open(temp.path()).unwrap();

        // Valid JSON, wrong shape
        store.db.put(IMAGES_KEY, br#"{"images": []}"#).unwrap();
        assert!(matches!(store.get().unwrap_err(), StoreError::Corrupt(_)));
    }

    #[test]
    fn test_pending_marker() {
        let temp = TempDir::new().unwrap();
        let store = ImageListStore::open(temp.path()).unwrap();

        assert_eq!(store.pending().unwrap(), None);

        store.set_pending("1000.jpg").unwrap();
        assert_eq!(store.pending().unwrap(), Some("1000.jpg".to_string()));

        store.clear_pending().unwrap();
        assert_eq!(store.pending().unwrap(), None);
    }
}
