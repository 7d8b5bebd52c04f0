//! Error types shared by the resolver, the hosts and the config loader

use std::path::PathBuf;
use thiserror::Error;

pub type SwitchResult<T> = Result<T, SwitchError>;

/// Errors that abort a single switch invocation or a config load.
///
/// Misconfigured command arguments are not errors. They degrade to an empty
/// extension list plus an [`ArgumentWarning`](crate::ArgumentWarning).
#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("Failed to read directory: {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command already registered: {name}")]
    AlreadyRegistered { name: String },

    #[error("Failed to read config: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SwitchError {
    /// Message suitable for a user-facing notification, including the
    /// underlying cause.
    pub fn detail(&self) -> String {
        match self {
            Self::DirectoryRead { source, .. } | Self::ConfigRead { source, .. } => {
                format!("{self}: {source}")
            }
            Self::ConfigParse { source, .. } => format!("{self}: {}", source.message()),
            Self::AlreadyRegistered { .. } => self.to_string(),
        }
    }
}
