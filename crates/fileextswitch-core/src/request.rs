//! Argument validation for the switch command.
//!
//! Editors hand the command an untyped payload (typically the `args` object of
//! a keybinding). [`parse_args`] is the only place that payload is inspected;
//! everything downstream works with a [`Request`] whose extensions are known to
//! carry their leading `.`.
//!
//! Validation never fails. A malformed payload produces a request with no
//! extensions together with an [`ArgumentWarning`] that the caller surfaces to
//! the user, and resolution then simply finds nothing.

use std::fmt;

use rust_i18n::t;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape of the command payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandArguments {
    /// The extensions to switch to, each with a leading period
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Open the file in the other editor column
    #[serde(default)]
    pub use_other_column: bool,
}

/// A file extension known to start with `.`.
///
/// The dot is part of the value: candidate names are built by plain
/// concatenation (`"foo" + ".spec.ts"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// Wrap `value` if it starts with `.`.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        value.starts_with('.').then_some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated command arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    extensions: Vec<Extension>,
    use_other_column: bool,
}

/// Why a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentWarning {
    /// No `extensions` array in the payload
    MissingExtensions,
    /// `extensions` was present but empty
    EmptyExtensions,
    /// The entry at `index` is not a string starting with `.`
    InvalidExtension { index: usize, value: String },
}

impl ArgumentWarning {
    /// Localised, human-readable reason.
    pub fn reason(&self) -> String {
        match self {
            Self::MissingExtensions => t!("core.args.missing_extensions").to_string(),
            Self::EmptyExtensions => t!("core.args.empty_extensions").to_string(),
            Self::InvalidExtension { index, value } => t!(
                "core.args.invalid_extension",
                index = index.to_string(),
                value = value
            )
            .to_string(),
        }
    }
}

impl fmt::Display for ArgumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason())
    }
}

/// Outcome of argument validation: always a usable request, plus the reason
/// it was emptied if the payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedArgs {
    pub request: Request,
    pub warning: Option<ArgumentWarning>,
}

impl Request {
    /// Build a request directly from already-validated extensions.
    pub fn new(extensions: Vec<Extension>, use_other_column: bool) -> Self {
        Self {
            extensions,
            use_other_column,
        }
    }

    /// Validate the typed payload shape.
    pub fn from_arguments(args: CommandArguments) -> ValidatedArgs {
        let CommandArguments {
            extensions,
            use_other_column,
        } = args;
        let values: Vec<Value> = extensions.into_iter().map(Value::String).collect();
        validate(Some(values.as_slice()), use_other_column)
    }

    /// Convert back to the wire shape. Feeding the result to
    /// [`Request::from_arguments`] yields an equal request.
    pub fn to_arguments(&self) -> CommandArguments {
        CommandArguments {
            extensions: self
                .extensions
                .iter()
                .map(|ext| ext.as_str().to_string())
                .collect(),
            use_other_column: self.use_other_column,
        }
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn use_other_column(&self) -> bool {
        self.use_other_column
    }
}

/// Validate an untyped command payload.
///
/// The payload is accepted when it is an object whose `extensions` member is a
/// non-empty array of strings that all start with `.`. Otherwise the request
/// carries no extensions and a warning is returned. `useOtherColumn` is read
/// with JavaScript truthiness since keybinding files are JSON written by hand.
pub fn parse_args(raw: &Value) -> ValidatedArgs {
    let extensions = raw.get("extensions").and_then(Value::as_array);
    let use_other_column = raw.get("useOtherColumn").is_some_and(is_truthy);
    validate(extensions.map(Vec::as_slice), use_other_column)
}

fn validate(extensions: Option<&[Value]>, use_other_column: bool) -> ValidatedArgs {
    let checked = match extensions {
        None => Err(ArgumentWarning::MissingExtensions),
        Some([]) => Err(ArgumentWarning::EmptyExtensions),
        Some(values) => values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .as_str()
                    .and_then(|s| Extension::new(s))
                    .ok_or_else(|| ArgumentWarning::InvalidExtension {
                        index,
                        value: display_value(value),
                    })
            })
            .collect::<Result<Vec<_>, _>>(),
    };

    match checked {
        Ok(extensions) => ValidatedArgs {
            request: Request::new(extensions, use_other_column),
            warning: None,
        },
        Err(warning) => {
            tracing::warn!(%warning, "rejecting command extensions");
            ValidatedArgs {
                request: Request::new(Vec::new(), use_other_column),
                warning: Some(warning),
            }
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
