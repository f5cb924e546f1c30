use std::fs;
use std::path::Path;

use crate::common::command_utils::{command_version, is_command_available};
use crate::config::Settings;
use crate::document::TextDocument;
use crate::linter::command::split_linter_path;
use crate::linter::detect::{compile_patterns, is_standard_template, match_custom_template};
use crate::linter::runner::Invocation;

/// Explain whether `file` would be linted.
pub fn handle_detect(file: &Path, settings: &Settings) -> crate::Result<(String, bool)> {
    let text = fs::read_to_string(file)?;

    if is_standard_template(&text) {
        return Ok((
            format!(
                "{}: template (contains AWSTemplateFormatVersion and Resources)",
                file.display()
            ),
            true,
        ));
    }

    let patterns = settings.detect_patterns();
    let compiled = compile_patterns(patterns)?;
    if let Some(idx) = match_custom_template(&text, &compiled) {
        return Ok((
            format!(
                "{}: template (matched cfnlint.detectCfnRegExps /{}/)",
                file.display(),
                patterns[idx]
            ),
            true,
        ));
    }

    Ok((format!("{}: not a template", file.display()), false))
}

/// The command line `lint` would run for `file`.
///
/// The path is made absolute the way `lint` resolves it, since cfn-lint runs
/// from the project root rather than the current directory.
pub fn handle_args(file: &Path, settings: &Settings, project_root: &Path) -> crate::Result<String> {
    let path = TextDocument::from_path(file, String::new()).fs_path();
    let invocation = Invocation::new(settings, &path, project_root)?;
    Ok(invocation.display())
}

/// Check that the configured linter starts, and report its version.
pub fn handle_doctor(settings: &Settings) -> (String, bool) {
    let linter_path = settings.linter_path();
    let Some((program, prefix)) = split_linter_path(linter_path) else {
        return ("cfn-lint path is empty".to_string(), false);
    };
    let prefix: Vec<&str> = prefix.iter().map(String::as_str).collect();

    if !is_command_available(&program, &prefix) {
        return (
            format!(
                "✗ unable to start '{}'. Is cfn-lint installed correctly? (pip install cfn-lint)",
                linter_path
            ),
            false,
        );
    }

    match command_version(&program, &prefix) {
        Some(version) => (format!("✓ {} ({})", version, linter_path), true),
        None => (
            format!("✗ '{} --version' did not exit successfully", linter_path),
            false,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_detect_messages() {
        let dir = tempdir().unwrap();
        let std_tpl = dir.path().join("std.yaml");
        fs::write(&std_tpl, "AWSTemplateFormatVersion: x\nResources:\n").unwrap();
        let sam = dir.path().join("sam.yaml");
        fs::write(&sam, "Transform: AWS::Serverless-2016-10-31\n").unwrap();

        let (msg, is_tpl) = handle_detect(&std_tpl, &Settings::new()).unwrap();
        assert!(is_tpl);
        assert!(msg.contains("AWSTemplateFormatVersion"));

        let (_, is_tpl) = handle_detect(&sam, &Settings::new()).unwrap();
        assert!(!is_tpl);

        let settings = Settings::new().with("detectCfnRegExps", vec!["aws::serverless"]);
        let (msg, is_tpl) = handle_detect(&sam, &settings).unwrap();
        assert!(is_tpl);
        assert!(msg.contains("/aws::serverless/"));
    }

    #[test]
    fn test_args() {
        let settings = Settings::new().with("ignoreBadTemplate", true);
        let dir = tempdir().unwrap();
        let file = dir.path().join("t.yaml");
        let line = handle_args(&file, &settings, Path::new("/elsewhere")).unwrap();
        assert_eq!(
            line,
            format!("cfn-lint --format json --ignore-bad-template -- {}", file.display())
        );
    }

    #[test]
    fn test_args_relative_file_is_absolute() {
        let line = handle_args(Path::new("t.yaml"), &Settings::new(), Path::new("/elsewhere")).unwrap();
        let expected = std::env::current_dir().unwrap().join("t.yaml");
        assert!(expected.is_absolute());
        assert!(line.ends_with(&format!("-- {}", expected.display())));
    }

    #[test]
    fn test_doctor_missing_linter() {
        let settings = Settings::new().with("path", "/nonexistent/cfn-lint-for-tests");
        let (msg, ok) = handle_doctor(&settings);
        assert!(!ok);
        assert!(msg.contains("unable to start"));
    }
}
