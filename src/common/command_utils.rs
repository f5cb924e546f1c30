use crate::error::Result;
use std::process::{Command, Output};

/// Execute a command safely and return the output
pub fn execute_command(cmd: &str, args: &[&str]) -> Result<Output> {
    let output = Command::new(cmd).args(args).output()?;

    Ok(output)
}

/// Check if a command can be started
pub fn is_command_available(cmd: &str, prefix_args: &[&str]) -> bool {
    let mut args = prefix_args.to_vec();
    args.push("--version");
    execute_command(cmd, &args).is_ok()
}

/// Version reported by `<cmd> [prefix_args] --version`, first non-empty line.
///
/// cfn-lint prints e.g. "cfn-lint 1.3.0".
pub fn command_version(cmd: &str, prefix_args: &[&str]) -> Option<String> {
    let mut args = prefix_args.to_vec();
    args.push("--version");
    let output = execute_command(cmd, &args).ok()?;
    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    stdout
        .lines()
        .chain(stderr.lines())
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_command() {
        assert!(!is_command_available("/nonexistent/cfn-lint-for-tests", &[]));
        assert_eq!(command_version("/nonexistent/cfn-lint-for-tests", &[]), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_command_version_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("v.sh");
        std::fs::write(&script, "echo\necho 'cfn-lint 1.3.0'\necho extra\n").unwrap();
        let script = script.to_string_lossy().into_owned();
        assert!(is_command_available("sh", &[&script]));
        assert_eq!(
            command_version("sh", &[&script]),
            Some("cfn-lint 1.3.0".to_string())
        );
    }
}
