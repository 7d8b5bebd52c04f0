//! Ordered candidate paths with O(1) membership checks.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Companion paths in the order they were discovered.
///
/// Built once per resolution and then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// Append `path` even if it is already present.
    ///
    /// The folder-name fallback appends one entry per matching extension
    /// without a membership check, so a repeated extension yields a repeated
    /// path.
    pub fn push(&mut self, path: PathBuf) {
        self.seen.insert(path.clone());
        self.paths.push(path);
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Index of the first occurrence of `path`.
    pub fn position(&self, path: &Path) -> Option<usize> {
        if !self.contains(path) {
            return None;
        }
        self.paths.iter().position(|p| p == path)
    }

    /// Entry following `current`, wrapping to the start.
    ///
    /// When `current` is absent the first entry is returned. `None` only for an
    /// empty list.
    pub fn next_after(&self, current: &Path) -> Option<&Path> {
        if self.paths.is_empty() {
            return None;
        }
        let next = self.position(current).map_or(0, |index| index + 1) % self.paths.len();
        self.paths.get(next).map(PathBuf::as_path)
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}
