//! cfn-lint command line construction.
//!
//! Settings are translated through a fixed table of
//! {setting key, expected shape, cfn-lint flag}. The argument list always
//! requests JSON output and ends with `-- <path>`.

use std::path::Path;

use crate::config::{SettingValue, Settings};
use crate::error::{ConfigError, Result};

/// Value shape a setting must have to be turned into a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// `flag item...`, skipped when empty or when any item is empty.
    StringList,
    /// `flag`, only when true.
    Boolean,
    /// `flag value`, skipped when empty.
    String,
}

impl ValueShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StringList => "string[]",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }
}

/// One row of the settings-to-flags table.
#[derive(Debug, Clone, Copy)]
pub struct FlagMapping {
    pub key: &'static str,
    pub shape: ValueShape,
    pub flag: &'static str,
}

/// Settings forwarded to cfn-lint, in emission order.
pub const FLAG_TABLE: &[FlagMapping] = &[
    FlagMapping {
        key: "regions",
        shape: ValueShape::StringList,
        flag: "--regions",
    },
    FlagMapping {
        key: "ignoreBadTemplate",
        shape: ValueShape::Boolean,
        flag: "--ignore-bad-template",
    },
    FlagMapping {
        key: "includeRules",
        shape: ValueShape::StringList,
        flag: "--include-checks",
    },
    FlagMapping {
        key: "ignoreRules",
        shape: ValueShape::StringList,
        flag: "--ignore-checks",
    },
    FlagMapping {
        key: "customRules",
        shape: ValueShape::StringList,
        flag: "--append-rules",
    },
    FlagMapping {
        key: "includeExperimentalRules",
        shape: ValueShape::Boolean,
        flag: "--include-experimental",
    },
    FlagMapping {
        key: "ruleConfigurations",
        shape: ValueShape::StringList,
        flag: "--configure-rule",
    },
    FlagMapping {
        key: "overrideSpecPath",
        shape: ValueShape::String,
        flag: "--override-spec",
    },
];

/// Build the cfn-lint arguments for linting `path`.
pub fn build_args(settings: &Settings, path: &Path) -> Result<Vec<String>> {
    let mut args = vec!["--format".to_string(), "json".to_string()];

    for mapping in FLAG_TABLE {
        let Some(value) = settings.get(mapping.key) else {
            continue;
        };
        match (mapping.shape, value) {
            (ValueShape::StringList, SettingValue::List(items)) => {
                if !items.is_empty() && !items.iter().any(String::is_empty) {
                    args.push(mapping.flag.to_string());
                    args.extend(items.iter().cloned());
                }
            }
            (ValueShape::Boolean, SettingValue::Bool(enabled)) => {
                if *enabled {
                    args.push(mapping.flag.to_string());
                }
            }
            (ValueShape::String, SettingValue::Str(s)) => {
                if !s.is_empty() {
                    args.push(mapping.flag.to_string());
                    args.push(s.clone());
                }
            }
            (shape, other) => {
                return Err(ConfigError::UnsupportedShape {
                    key: mapping.key.to_string(),
                    expected: shape.as_str(),
                    found: other.shape(),
                }
                .into());
            }
        }
    }

    args.push("--".to_string());
    args.push(path.to_string_lossy().into_owned());
    Ok(args)
}

/// Split the `path` setting into the program and any leading arguments.
///
/// Returns `None` when the setting is blank.
pub fn split_linter_path(linter_path: &str) -> Option<(String, Vec<String>)> {
    let mut words = linter_path.split_whitespace().map(String::from);
    let program = words.next()?;
    Some((program, words.collect()))
}

/// Render a command line for logs and dry runs.
pub fn display_command(program: &str, args: &[String]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(program.to_string());
    parts.extend(args.iter().map(|a| {
        if a.is_empty() || a.contains(char::is_whitespace) {
            format!("\"{}\"", a)
        } else {
            a.clone()
        }
    }));
    parts.join(" ")
}
