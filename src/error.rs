//! Error types for cfn-lint-bridge.

use thiserror::Error;

/// Errors raised while building, running or interpreting a cfn-lint invocation.
#[derive(Debug, Error)]
pub enum CfnLintBridgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// cfn-lint reported a `Level` we do not know how to map.
    #[error("Unsupported severity returned by cfn-lint: \"{0}\"")]
    UnsupportedSeverity(String),

    /// stdout was not the JSON array `--format json` promises.
    #[error("Failed to parse cfn-lint output: {0}")]
    InvalidOutput(#[from] serde_json::Error),

    #[error("Invalid regular expression /{pattern}/: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Errors in the `cfnlint` settings namespace or the files it is loaded from.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("setting \"{key}\" must be {expected}, found {found}")]
    UnsupportedShape {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to parse configuration: {0}")]
    ParsingFailed(String),

    #[error("Configuration file not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, CfnLintBridgeError>;
