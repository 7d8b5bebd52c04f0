//! The editor-facing surface the switch flow drives.

use std::path::{Path, PathBuf};

use crate::column::ViewColumn;
use crate::error::SwitchResult;
use crate::fs::DirectoryListing;

/// Operations the switch flow needs from the environment it runs in.
///
/// The CLI implements this over the terminal; the LSP server records the
/// calls and replays them to the client.
pub trait Host {
    /// File currently being edited. `None` makes the command a no-op.
    fn active_file_path(&self) -> Option<PathBuf>;

    /// Column of the active editor, if the host has columns at all.
    fn active_column(&self) -> Option<ViewColumn>;

    /// Entry names of `dir`.
    fn list_directory(&self, dir: &Path) -> SwitchResult<DirectoryListing>;

    /// Open `path` in `column`. Completion is not awaited.
    fn open_document(&self, path: &Path, column: ViewColumn);

    fn show_warning(&self, message: &str);

    fn show_info(&self, message: &str);

    fn show_error(&self, message: &str);
}

/// Recorded host call, used by hosts that cannot act synchronously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEffect {
    Open { path: PathBuf, column: ViewColumn },
    Warning(String),
    Info(String),
    Error(String),
}
