//! Display path resolution
//!
//! Resolved references are session-specific and never persisted; they are
//! rebuilt from the file path on every load.

use std::path::Path;

/// Maps an absolute file path to a reference the display layer can load
pub trait PathResolver: Send + Sync {
    /// Pure and deterministic; empty string for an absent input
    fn resolve(&self, path: Option<&Path>) -> String;
}

/// Rewrites an absolute path into an app URI scheme
pub struct AppUriResolver {
    scheme: String,
}

impl AppUriResolver {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }
}

impl PathResolver for AppUriResolver {
    fn resolve(&self, path: Option<&Path>) -> String {
        match path {
            None => String::new(),
            Some(p) => {
                let raw = p.to_string_lossy();
                let trimmed = raw.trim_start_matches(['/', '\\']);
                format!("{}://localhost/{}", self.scheme, trimmed.replace('\\', "/"))
            }
        }
    }
}
