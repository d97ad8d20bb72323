//! The app-private image directory
//!
//! All images live as flat files directly under one root. Filenames carry
//! the identity; there are no subdirectories and no sidecar files.

use crate::{FsError, Result};
use std::path::{Path, PathBuf};

/// One fixed private storage directory for image files
pub struct FileArea {
    root: PathBuf,
}

impl FileArea {
    /// Open the file area, creating the root directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;

        tracing::debug!("File area opened at {:?}", root);
        Ok(Self { root })
    }

    /// The fixed absolute root of the private storage directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of a named file inside the area
    pub fn path_of(&self, name: &str) -> Result<PathBuf> {
        // Flat layout: a name must be a bare filename
        if name.is_empty() || name.contains('/') || name.contains('\\') {
            return Err(FsError::InvalidPath(name.to_string()));
        }
        Ok(self.root.join(name))
    }

    /// Copy a source file into the area under `dest_name`
    pub fn copy_from(&self, source_dir: &Path, source_name: &str, dest_name: &str) -> Result<PathBuf> {
        let source = source_dir.join(source_name);
        if !source.is_file() {
            return Err(FsError::NotFound(source));
        }

        let dest = self.path_of(dest_name)?;
        std::fs::copy(&source, &dest).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => FsError::AccessDenied(source.clone()),
            _ => FsError::Io(e),
        })?;

        tracing::info!("Copied: {} -> {}", source.display(), dest.display());
        Ok(dest)
    }

    /// Delete a named file from the area
    pub fn remove_file(&self, name: &str) -> Result<()> {
        let path = self.path_of(name)?;
        if !path.exists() {
            return Err(FsError::NotFound(path));
        }

        std::fs::remove_file(&path)?;
        tracing::info!("Removed: {}", path.display());

        Ok(())
    }

    /// Does a named file exist in the area?
    pub fn contains(&self, name: &str) -> bool {
        self.path_of(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// List the names of all files currently in the area
    pub fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_root() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("images");

        let area = FileArea::open(&root).unwrap();
        assert!(root.is_dir());
        assert_eq!(area.root(), root);
    }

    #[test]
    fn test_copy_from() {
        let temp = TempDir::new().unwrap();
        let source_dir = temp.path().join("camera");
        fs::create_dir_all(&source_dir).unwrap();
        fs::write(source_dir.join("cam.jpg"), b"jpeg-bytes").unwrap();

        let area = FileArea::open(temp.path().join("images")).unwrap();
        let dest = area.copy_from(&source_dir, "cam.jpg", "1000.jpg").unwrap();

        assert_eq!(dest, area.root().join("1000.jpg"));
        assert_eq!(fs::read(dest).unwrap(), b"jpeg-bytes");
        assert!(area.contains("1000.jpg"));
    }

    #[test]
    fn test_copy_from_missing_source() {
        let temp = TempDir::new().unwrap();
        let area = FileArea::open(temp.path().join("images")).unwrap();

        let err = area
            .copy_from(temp.path(), "nope.jpg", "1000.jpg")
            .unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
        assert!(!area.contains("1000.jpg"));
    }

    #[test]
    fn test_remove_file() {
        let temp = TempDir::new().unwrap();
        let area = FileArea::open(temp.path().join("images")).unwrap();
        fs::write(area.root().join("1000.jpg"), b"x").unwrap();

        area.remove_file("1000.jpg").unwrap();
        assert!(!area.contains("1000.jpg"));

        let err = area.remove_file("1000.jpg").unwrap_err();
        assert!(matches!(err, FsError::NotFound(_)));
    }

    #[test]
    fn test_rejects_nested_names() {
        let temp = TempDir::new().unwrap();
        let area = FileArea::open(temp.path().join("images")).unwrap();

        assert!(matches!(
            area.path_of("../escape.jpg").unwrap_err(),
            FsError::InvalidPath(_)
        ));
        assert!(matches!(area.path_of("").unwrap_err(), FsError::InvalidPath(_)));
    }

    #[test]
    fn test_list_names() {
        let temp = TempDir::new().unwrap();
        let area = FileArea::open(temp.path().join("images")).unwrap();
        fs::write(area.root().join("1000.jpg"), b"a").unwrap();
        fs::write(area.root().join("2000.jpg"), b"b").unwrap();

        let mut names = area.list_names().unwrap();
        names.sort();
        assert_eq!(names, vec!["1000.jpg", "2000.jpg"]);
    }
}
