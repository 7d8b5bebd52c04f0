//! Terminal host: the active file comes from the command line, notifications
//! go to stderr and the opened path is printed by the caller.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use colored::Colorize;
use fileextswitch_core::{
    DirectoryLister, DirectoryListing, Host, RealFileSystem, SwitchResult, ViewColumn,
};

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "info:".cyan().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".red().bold(), message);
}

pub struct TerminalHost {
    active: Option<PathBuf>,
    column: Option<ViewColumn>,
    fs: RealFileSystem,
    opened: RefCell<Option<(PathBuf, ViewColumn)>>,
}

impl TerminalHost {
    pub fn new(active: Option<PathBuf>, column: Option<ViewColumn>) -> Self {
        Self {
            active,
            column,
            fs: RealFileSystem,
            opened: RefCell::new(None),
        }
    }

    /// Path and column the switch asked to open, if any.
    #[cfg(test)]
    pub fn opened(&self) -> Option<(PathBuf, ViewColumn)> {
        self.opened.borrow().clone()
    }
}

impl Host for TerminalHost {
    fn active_file_path(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn active_column(&self) -> Option<ViewColumn> {
        self.column
    }

    fn list_directory(&self, dir: &Path) -> SwitchResult<DirectoryListing> {
        self.fs.list_dir(dir)
    }

    fn open_document(&self, path: &Path, column: ViewColumn) {
        tracing::debug!(path = %path.display(), %column, "open requested");
        *self.opened.borrow_mut() = Some((path.to_path_buf(), column));
    }

    fn show_warning(&self, message: &str) {
        print_warning(message);
    }

    fn show_info(&self, message: &str) {
        print_info(message);
    }

    fn show_error(&self, message: &str) {
        print_error(message);
    }
}
