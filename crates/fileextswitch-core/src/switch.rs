//! The `fileextswitch` command: validate arguments, list the active file's
//! directory, resolve a companion and hand it to the host.

use std::path::{Path, PathBuf};

use rust_i18n::t;
use serde_json::Value;

use crate::candidates::CandidateList;
use crate::column::{ViewColumn, determine_column};
use crate::error::SwitchError;
use crate::host::Host;
use crate::request::{Request, parse_args};
use crate::resolver::collect_candidates;

/// Name the command is registered under.
pub const COMMAND_NAME: &str = "fileextswitch";

/// Where users are pointed when their keybinding arguments are rejected.
pub const CONFIG_HELP_URL: &str = "https://goo.gl/gsCYrW";

/// What a single invocation did.
#[derive(Debug)]
pub enum SwitchOutcome {
    /// No file was active; nothing was shown.
    NoActiveFile,
    /// The host was asked to open `path` in `column`.
    Opened { path: PathBuf, column: ViewColumn },
    /// Nothing matched; the host showed an informational message.
    NoMatch,
    /// Listing the directory failed; the host showed an error.
    Failed(SwitchError),
}

impl SwitchOutcome {
    pub fn target(&self) -> Option<&Path> {
        match self {
            Self::Opened { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Everything known about the active file's companions before one is picked.
#[derive(Debug)]
pub enum Companions {
    NoActiveFile,
    /// Listing the directory failed; the host showed an error.
    Failed(SwitchError),
    Found {
        current: PathBuf,
        request: Request,
        candidates: CandidateList,
    },
}

/// Warning shown for rejected command arguments.
pub fn keybinding_warning() -> String {
    t!(
        "core.switch.keybinding_warning",
        command = COMMAND_NAME,
        url = CONFIG_HELP_URL
    )
    .to_string()
}

/// Informational message shown when nothing matched.
pub fn no_match_message() -> String {
    t!("core.switch.no_match").to_string()
}

/// Error message shown when the directory could not be listed.
pub fn io_error_message(error: &SwitchError) -> String {
    t!(
        "core.switch.io_error",
        command = COMMAND_NAME,
        error = error.detail()
    )
    .to_string()
}

/// Validate `raw_args`, list the active file's directory and collect every
/// companion in cycling order.
///
/// Rejected arguments are reported through `host.show_warning` and an I/O
/// error through `host.show_error`. Nothing is opened.
pub fn gather_companions(host: &dyn Host, raw_args: &Value) -> Companions {
    let Some(current) = host.active_file_path() else {
        return Companions::NoActiveFile;
    };

    let validated = parse_args(raw_args);
    if validated.warning.is_some() {
        host.show_warning(&keybinding_warning());
    }
    let request = validated.request;

    let dir = current.parent().unwrap_or_else(|| Path::new(""));
    let entries = match host.list_directory(dir) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::error!(dir = %dir.display(), %error, "directory listing failed");
            host.show_error(&io_error_message(&error));
            return Companions::Failed(error);
        }
    };

    let candidates = collect_candidates(&current, &request, &entries);
    Companions::Found {
        current,
        request,
        candidates,
    }
}

/// Run the command against `host` with the raw argument payload.
///
/// Every failure stays local to this call: misconfigured arguments warn and
/// continue with no extensions, I/O errors are reported and end the call.
pub fn switch_to_companion(host: &dyn Host, raw_args: &Value) -> SwitchOutcome {
    let (current, request, candidates) = match gather_companions(host, raw_args) {
        Companions::NoActiveFile => return SwitchOutcome::NoActiveFile,
        Companions::Failed(error) => return SwitchOutcome::Failed(error),
        Companions::Found {
            current,
            request,
            candidates,
        } => (current, request, candidates),
    };

    match candidates.next_after(&current).map(Path::to_path_buf) {
        Some(path) => {
            tracing::debug!(companion = %path.display(), "resolved companion");
            let column = determine_column(host.active_column(), request.use_other_column());
            host.open_document(&path, column);
            SwitchOutcome::Opened { path, column }
        }
        None => {
            host.show_info(&no_match_message());
            SwitchOutcome::NoMatch
        }
    }
}
