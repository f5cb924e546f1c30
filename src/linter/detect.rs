//! Template detection.
//!
//! A buffer is worth handing to cfn-lint when it carries both standard
//! CloudFormation markers, or when one of the user's `detectCfnRegExps`
//! matches it.

use log::info;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use crate::error::{CfnLintBridgeError, Result};

static VERSION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""?AWSTemplateFormatVersion"?\s*"#).unwrap());
static RESOURCES_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\n?"?Resources"?\s*:"#).unwrap());

/// Compile user patterns case-insensitively.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|source| CfnLintBridgeError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
        })
        .collect()
}

/// True when the text contains both `AWSTemplateFormatVersion` and a
/// `Resources:` key.
pub fn is_standard_template(text: &str) -> bool {
    VERSION_MARKER.is_match(text) && RESOURCES_MARKER.is_match(text)
}

/// Index of the first user pattern matching the text.
pub fn match_custom_template(text: &str, patterns: &[Regex]) -> Option<usize> {
    patterns.iter().position(|re| re.is_match(text))
}

/// Decide whether `text` (from `path`, used for logging) should be linted.
pub fn is_template(text: &str, path: &str, custom_patterns: &[String]) -> Result<bool> {
    if is_standard_template(text) {
        info!(
            "Detected CloudFormation file {} because it contains \"AWSTemplateFormatVersion:\" and \"Resources:\"",
            path
        );
        return Ok(true);
    }

    let compiled = compile_patterns(custom_patterns)?;
    if let Some(idx) = match_custom_template(text, &compiled) {
        info!(
            "Detected CloudFormation file {} because RegExp /{}/ in setting \"cfnlint.detectCfnRegExps\" matched",
            path, custom_patterns[idx]
        );
        return Ok(true);
    }

    info!(
        "Skipped linting {} because (1) it doesn't look like a standard CloudFormation or SAM template; (2) none of the RegExps defined in the setting \"cfnlint.detectCfnRegExps\" matched",
        path
    );
    Ok(false)
}
