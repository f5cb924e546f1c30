//! Core types for cfn-lint results and the diagnostics derived from them.
//!
//! - `LintResult` - one finding as emitted by `cfn-lint --format json`
//! - `Level` - cfn-lint's severity vocabulary
//! - `Severity` - editor severity
//! - `Diagnostic` - 0-based, editor-facing projection of a `LintResult`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CfnLintBridgeError, Result};

/// Source tag attached to every diagnostic.
pub const SOURCE: &str = "cfn-lint";

/// A 1-based line/column pair as reported by cfn-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinePosition {
    pub line_number: u32,
    pub column_number: u32,
}

/// Location of a finding inside the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub start: LinePosition,
    pub end: LinePosition,
    /// Path through the template to the offending node. Entries are keys or
    /// list indices.
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

/// Rule metadata attached to a finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rule {
    /// Rule identifier, e.g. "E3012".
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub source: String,
}

/// One finding reported by cfn-lint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LintResult {
    #[serde(default)]
    pub filename: String,
    /// Raw severity string; see [`Level`].
    pub level: String,
    pub location: Location,
    pub message: String,
    pub rule: Rule,
}

impl LintResult {
    /// Parse the level string into a known [`Level`].
    pub fn level(&self) -> Result<Level> {
        Level::parse(&self.level)
    }

    /// Project this finding into a 0-based editor diagnostic.
    pub fn to_diagnostic(&self) -> Result<Diagnostic> {
        let severity = self.level()?.severity();
        let start = &self.location.start;
        let end = &self.location.end;
        Ok(Diagnostic {
            range: Range::new(
                Position::from_one_based(start.line_number, start.column_number),
                Position::from_one_based(end.line_number, end.column_number),
            ),
            severity,
            message: format!("[{}] {}: {}", SOURCE, self.rule.id, self.message),
            source: SOURCE.to_string(),
        })
    }
}

/// Severity vocabulary used by cfn-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warning,
    Informational,
}

impl Level {
    /// Parse an exact cfn-lint level string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "Error" => Ok(Self::Error),
            "Warning" => Ok(Self::Warning),
            "Informational" => Ok(Self::Informational),
            other => Err(CfnLintBridgeError::UnsupportedSeverity(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Informational => "Informational",
        }
    }

    /// Editor severity for this level.
    pub fn severity(&self) -> Severity {
        match self {
            Self::Error => Severity::Error,
            Self::Warning => Severity::Warning,
            Self::Informational => Severity::Information,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity levels (matches the LSP numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error = 1,
    Warning = 2,
    Information = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A 0-based position in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Convert a 1-based line/column pair. Zero inputs clamp to zero.
    pub fn from_one_based(line: u32, column: u32) -> Self {
        Self::new(line.saturating_sub(1), column.saturating_sub(1))
    }
}

/// A 0-based, end-exclusive range in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The whole first line, used for diagnostics that are not tied to a
    /// location in the template.
    pub fn first_line() -> Self {
        Self::new(Position::new(0, 0), Position::new(0, u32::MAX))
    }
}

/// An editor diagnostic for the current revision of one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub range: Range,
    pub severity: Severity,
    pub message: String,
    pub source: String,
}

impl Diagnostic {
    /// A first-line error diagnostic reporting a problem with the linter
    /// itself rather than the template.
    pub fn synthetic(message: impl AsRef<str>) -> Self {
        Self {
            range: Range::first_line(),
            severity: Severity::Error,
            message: format!("[{}] {}", SOURCE, message.as_ref()),
            source: SOURCE.to_string(),
        }
    }
}
