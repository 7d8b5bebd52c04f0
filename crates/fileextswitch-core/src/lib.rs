//! # fileextswitch-core
//!
//! Companion file switching for editors.
//!
//! Given the file being edited and an ordered list of extensions, find the
//! sibling that shares its base name (`foo.component.ts` ->
//! `foo.component.spec.ts` -> `foo.component.css`) and cycle through those
//! siblings on repeated invocations.
//!
//! The resolution itself ([`resolve`]) is pure. [`switch_to_companion`] wraps
//! it with argument validation, a directory listing and user notifications,
//! all routed through a [`Host`].

rust_i18n::i18n!("locales", fallback = "en");

pub mod candidates;
pub mod column;
pub mod config;
mod error;
pub mod fs;
pub mod host;
pub mod i18n;
pub mod registry;
pub mod request;
pub mod resolver;
pub mod switch;

pub use candidates::CandidateList;
pub use column::{ViewColumn, determine_column};
pub use config::{ConfigWarning, SwitchConfig};
pub use error::{SwitchError, SwitchResult};
pub use fs::{DirectoryLister, DirectoryListing, RealFileSystem};
pub use host::{Host, HostEffect};
pub use registry::{CommandRegistry, Registration, activate, deactivate};
pub use request::{ArgumentWarning, CommandArguments, Extension, Request, ValidatedArgs, parse_args};
pub use resolver::{collect_candidates, resolve};
pub use switch::{
    COMMAND_NAME, CONFIG_HELP_URL, Companions, SwitchOutcome, gather_companions, switch_to_companion,
};
