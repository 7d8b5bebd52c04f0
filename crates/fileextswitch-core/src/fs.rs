//! Directory listing abstraction.
//!
//! Hosts obtain the sibling names of the active file through a
//! `DirectoryLister`, so the switch flow can be tested without touching disk.
//!
//! ```ignore
//! let listing = RealFileSystem.list_dir(Path::new("src/app"))?;
//! assert!(listing.contains("app.component.ts"));
//! ```

use crate::error::{SwitchError, SwitchResult};
use std::collections::HashSet;
use std::path::Path;

/// File names present in one directory, without any path prefix.
///
/// Taken fresh for every resolution; never cached or watched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    names: HashSet<String>,
}

impl DirectoryListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DirectoryListing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Source of directory listings.
pub trait DirectoryLister: Send + Sync + std::fmt::Debug {
    /// List the entry names of `dir`.
    ///
    /// Entries of every kind are returned, matching a plain `readdir`.
    fn list_dir(&self, dir: &Path) -> SwitchResult<DirectoryListing>;
}

/// Lister backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFileSystem;

impl DirectoryLister for RealFileSystem {
    fn list_dir(&self, dir: &Path) -> SwitchResult<DirectoryListing> {
        let read_error = |source: std::io::Error| SwitchError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        };

        let mut listing = DirectoryListing::new();
        for entry in std::fs::read_dir(dir).map_err(read_error)? {
            let entry = entry.map_err(read_error)?;
            match entry.file_name().into_string() {
                Ok(name) => {
                    listing.insert(name);
                }
                // Non-UTF-8 names can never equal a candidate built from &str
                Err(name) => tracing::debug!(?name, "skipping non-UTF-8 entry"),
            }
        }
        Ok(listing)
    }
}
