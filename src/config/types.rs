use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the settings namespace, both in config files and in
/// configuration-change events.
pub const SETTINGS_SECTION: &str = "cfnlint";

/// Linter executable used when `path` is not configured.
pub const DEFAULT_LINTER_PATH: &str = "cfn-lint";

/// A single setting value.
///
/// cfn-lint options are lists, booleans or strings. Numbers are accepted at
/// parse time so that a misconfigured key can be reported by name instead of
/// failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
    Number(f64),
}

impl SettingValue {
    /// Shape name used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
            Self::List(_) => "string[]",
            Self::Number(_) => "number",
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<&str>> for SettingValue {
    fn from(v: Vec<&str>) -> Self {
        Self::List(v.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(v: Vec<String>) -> Self {
        Self::List(v)
    }
}

/// The flat `cfnlint` settings namespace: option name to value.
///
/// Keys follow the editor setting names (`ignoreRules`, `lintOnSave`, ...).
/// Keys that map onto cfn-lint flags are interpreted by the command builder;
/// the accessors below cover the ones this crate consumes itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: BTreeMap<String, SettingValue>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.values.iter()
    }

    /// Linter command line prefix (`path`), defaulting to `cfn-lint`.
    pub fn linter_path(&self) -> &str {
        match self.values.get("path") {
            Some(SettingValue::Str(s)) if !s.trim().is_empty() => s,
            _ => DEFAULT_LINTER_PATH,
        }
    }

    /// Extra detection patterns (`detectCfnRegExps`).
    pub fn detect_patterns(&self) -> &[String] {
        self.list("detectCfnRegExps")
    }

    /// Message denylist patterns (`ignoreRulesRegExps`).
    pub fn ignore_message_patterns(&self) -> &[String] {
        self.list("ignoreRulesRegExps")
    }

    pub fn lint_on_open(&self) -> bool {
        self.flag("lintOnOpen", true)
    }

    pub fn lint_on_change(&self) -> bool {
        self.flag("lintOnChange", false)
    }

    pub fn lint_on_save(&self) -> bool {
        self.flag("lintOnSave", true)
    }

    fn list(&self, key: &str) -> &[String] {
        match self.values.get(key) {
            Some(SettingValue::List(items)) => items,
            _ => &[],
        }
    }

    fn flag(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(SettingValue::Bool(b)) => *b,
            _ => default,
        }
    }
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cfnlint: Settings,
}
