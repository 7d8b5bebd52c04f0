//! Host that records switch effects for asynchronous replay.
//!
//! The switch flow is synchronous and runs on a blocking thread, while every
//! client call is async. `DeferredHost` answers the read-side questions up
//! front and queues the side effects; the backend sends them afterwards.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use fileextswitch_core::{
    DirectoryLister, DirectoryListing, Host, HostEffect, RealFileSystem, SwitchResult, ViewColumn,
};

#[derive(Debug)]
pub struct DeferredHost<L = RealFileSystem> {
    active: Option<PathBuf>,
    column: Option<ViewColumn>,
    lister: L,
    effects: RefCell<Vec<HostEffect>>,
}

impl DeferredHost {
    pub fn new(active: Option<PathBuf>, column: Option<ViewColumn>) -> Self {
        Self::with_lister(active, column, RealFileSystem)
    }
}

impl<L: DirectoryLister> DeferredHost<L> {
    pub fn with_lister(active: Option<PathBuf>, column: Option<ViewColumn>, lister: L) -> Self {
        Self {
            active,
            column,
            lister,
            effects: RefCell::new(Vec::new()),
        }
    }

    /// Queued effects in the order the switch flow produced them.
    pub fn into_effects(self) -> Vec<HostEffect> {
        self.effects.into_inner()
    }

    fn record(&self, effect: HostEffect) {
        self.effects.borrow_mut().push(effect);
    }
}

impl<L: DirectoryLister> Host for DeferredHost<L> {
    fn active_file_path(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn active_column(&self) -> Option<ViewColumn> {
        self.column
    }

    fn list_directory(&self, dir: &Path) -> SwitchResult<DirectoryListing> {
        self.lister.list_dir(dir)
    }

    fn open_document(&self, path: &Path, column: ViewColumn) {
        self.record(HostEffect::Open {
            path: path.to_path_buf(),
            column,
        });
    }

    fn show_warning(&self, message: &str) {
        self.record(HostEffect::Warning(message.to_string()));
    }

    fn show_info(&self, message: &str) {
        self.record(HostEffect::Info(message.to_string()));
    }

    fn show_error(&self, message: &str) {
        self.record(HostEffect::Error(message.to_string()));
    }
}
