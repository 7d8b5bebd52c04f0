//! Configuration file support.
//!
//! `.fileextswitch.toml` stores named bindings, the terminal counterpart of
//! editor keybindings that carry an `args` payload:
//!
//! ```toml
//! locale = "es"
//!
//! [bindings.test]
//! extensions = [".spec.ts", ".ts"]
//! useOtherColumn = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rust_i18n::t;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{SwitchError, SwitchResult};
use crate::request::parse_args;

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".fileextswitch.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwitchConfig {
    /// Preferred UI locale (e.g. "en", "es")
    #[serde(default)]
    pub locale: Option<String>,

    /// Named argument payloads, validated only when used
    #[serde(default)]
    pub bindings: BTreeMap<String, toml::Table>,
}

/// A problem found by [`SwitchConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl SwitchConfig {
    /// Load config from file
    pub fn load<P: AsRef<Path>>(path: P) -> SwitchResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SwitchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SwitchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config or use default, returning any load warning
    ///
    /// A config path that cannot be read or parsed yields the default config
    /// and a localised warning rather than an error.
    pub fn load_or_default(path: Option<&PathBuf>) -> (Self, Option<String>) {
        match path {
            Some(p) => match Self::load(p) {
                Ok(config) => (config, None),
                Err(e) => {
                    let warning = t!(
                        "core.config.load_warning",
                        path = p.display().to_string(),
                        error = e.detail()
                    );
                    (Self::default(), Some(warning.to_string()))
                }
            },
            None => (Self::default(), None),
        }
    }

    /// Raw payload for `name`, ready for [`parse_args`].
    pub fn binding(&self, name: &str) -> Option<Value> {
        let table = self.bindings.get(name)?;
        // Every TOML value has a JSON counterpart
        serde_json::to_value(table).ok()
    }

    /// Report bindings whose payload would be rejected at use time.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        self.bindings
            .keys()
            .filter_map(|name| {
                let warning = parse_args(&self.binding(name)?).warning?;
                Some(ConfigWarning {
                    field: format!("bindings.{name}"),
                    message: t!(
                        "core.config.invalid_binding",
                        name = name,
                        reason = warning.reason()
                    )
                    .to_string(),
                    suggestion: Some(t!("core.config.invalid_binding_suggestion").to_string()),
                })
            })
            .collect()
    }
}

/// Config file to use when none was given explicitly: the working directory
/// first, then the user config directory.
pub fn discover_config(cwd: &Path, user_config_dir: Option<&Path>) -> Option<PathBuf> {
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    let global = user_config_dir?.join("fileextswitch").join("config.toml");
    global.is_file().then_some(global)
}
