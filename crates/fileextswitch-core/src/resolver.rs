//! Companion file resolution.
//!
//! Given the active file, a validated [`Request`] and the names in the active
//! file's directory, pick the next companion to open:
//!
//! 1. Split the file name on `.` (`foo.component.spec.ts` has four components).
//! 2. For every extension in request order, keep the first `i` components for
//!    `i = n - 1` down to `1` and append the extension. Existing names other
//!    than the file itself become candidates, least truncated first.
//! 3. With no candidates, look for `<parent dir name><extension>` instead.
//! 4. Return the candidate after the active file, wrapping around. When the
//!    active file is not a candidate this is the first one.

use std::path::{Path, PathBuf};

use crate::candidates::CandidateList;
use crate::fs::DirectoryListing;
use crate::request::Request;

/// Dot-delimited components of a file name.
///
/// Purely lexical: `a.d.ts` is `["a", "d", "ts"]` and `.gitignore` is
/// `["", "gitignore"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameComponents<'a> {
    parts: Vec<&'a str>,
}

impl<'a> NameComponents<'a> {
    pub fn split(file_name: &'a str) -> Self {
        Self {
            parts: file_name.split('.').collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The first `keep` components joined by `.`.
    pub fn base(&self, keep: usize) -> String {
        self.parts[..keep.min(self.parts.len())].join(".")
    }

    /// Candidate bases from least to most truncated, always keeping at least
    /// one component.
    pub fn truncations(&self) -> impl Iterator<Item = String> + '_ {
        (1..self.parts.len()).rev().map(|keep| self.base(keep))
    }
}

/// Collect every companion of `current`, in cycling order.
pub fn collect_candidates(
    current: &Path,
    request: &Request,
    entries: &DirectoryListing,
) -> CandidateList {
    let mut candidates = CandidateList::new();

    let Some(file_name) = current.file_name().and_then(|n| n.to_str()) else {
        return candidates;
    };
    let dir = current.parent().unwrap_or_else(|| Path::new(""));
    let components = NameComponents::split(file_name);

    for extension in request.extensions() {
        for base in components.truncations() {
            let next_file = base + extension.as_str();
            if entries.contains(&next_file) && next_file != file_name {
                candidates.insert(dir.join(&next_file));
            }
        }
    }

    if candidates.is_empty() {
        push_folder_matches(&mut candidates, dir, request, entries);
    }

    tracing::debug!(
        current = %current.display(),
        candidates = candidates.len(),
        "collected companion candidates"
    );
    candidates
}

/// `src/button/button.css` for `src/button/index.ts` when `.css` is requested.
fn push_folder_matches(
    candidates: &mut CandidateList,
    dir: &Path,
    request: &Request,
    entries: &DirectoryListing,
) {
    // The filesystem root has no name; it matches files named after the empty string.
    let dir_name = match dir.file_name() {
        None => "",
        Some(name) => match name.to_str() {
            Some(name) => name,
            None => return,
        },
    };
    for extension in request.extensions() {
        let folder_file = format!("{dir_name}{extension}");
        if entries.contains(&folder_file) {
            candidates.push(dir.join(folder_file));
        }
    }
}

/// Pick the companion to open after `current`, or `None` when nothing matches.
pub fn resolve(current: &Path, request: &Request, entries: &DirectoryListing) -> Option<PathBuf> {
    let candidates = collect_candidates(current, request, entries);
    let target = candidates.next_after(current).map(Path::to_path_buf);
    if let Some(target) = &target {
        tracing::debug!(companion = %target.display(), "resolved companion");
    }
    target
}
