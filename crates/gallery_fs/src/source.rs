//! Source references for image import
//!
//! A capture source hands over either a plain directory entry or an opaque
//! content reference (a gallery picker URI). The resolver turns both into a
//! concrete (directory, filename) pair before the copy happens.

use crate::{FsError, Result};
use std::path::{Path, PathBuf};

/// Where an image to import comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRef {
    /// A file already addressable as directory + name
    Directory { dir: PathBuf, name: String },
    /// An opaque content reference that needs resolving first
    Content(String),
}

impl SourceRef {
    /// Convenience constructor for the directory form
    pub fn directory(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        SourceRef::Directory {
            dir: dir.into(),
            name: name.into(),
        }
    }
}

/// Resolves a source reference to a concrete directory entry
pub trait SourceResolver: Send + Sync {
    fn resolve(&self, source: &SourceRef) -> Result<(PathBuf, String)>;
}

/// Resolver for sources reachable through the local filesystem
///
/// Content references are expected as `file://` URIs or plain absolute paths.
pub struct LocalSourceResolver;

impl SourceResolver for LocalSourceResolver {
    fn resolve(&self, source: &SourceRef) -> Result<(PathBuf, String)> {
        match source {
            SourceRef::Directory { dir, name } => Ok((dir.clone(), name.clone())),
            SourceRef::Content(reference) => {
                let raw = reference.strip_prefix("file://").unwrap_or(reference);
                let path = Path::new(raw);

                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .ok_or_else(|| FsError::InvalidPath(reference.clone()))?;
                let dir = path
                    .parent()
                    .map(Path::to_path_buf)
                    .ok_or_else(|| FsError::InvalidPath(reference.clone()))?;

                Ok((dir, name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_directory_passthrough() {
        let resolver = LocalSourceResolver;
        let source = SourceRef::directory("/tmp/camera", "cam.jpg");

        let (dir, name) = resolver.resolve(&source).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/camera"));
        assert_eq!(name, "cam.jpg");
    }

    #[test]
    fn test_resolve_file_uri() {
        let resolver = LocalSourceResolver;
        let source = SourceRef::Content("file:///tmp/picker/pic.jpg".to_string());

        let (dir, name) = resolver.resolve(&source).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/picker"));
        assert_eq!(name, "pic.jpg");
    }

    #[test]
    fn test_resolve_plain_path() {
        let resolver = LocalSourceResolver;
        let source = SourceRef::Content("/tmp/picker/pic.jpg".to_string());

        let (dir, name) = resolver.resolve(&source).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/picker"));
        assert_eq!(name, "pic.jpg");
    }

    #[test]
    fn test_resolve_rejects_bare_root() {
        let resolver = LocalSourceResolver;
        let source = SourceRef::Content("file:///".to_string());

        assert!(matches!(
            resolver.resolve(&source).unwrap_err(),
            FsError::InvalidPath(_)
        ));
    }
}
