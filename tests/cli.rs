use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = "AWSTemplateFormatVersion: '2010-09-09'\nResources:\n  Bucket:\n    Type: AWS::S3::Bucket\n";

const FINDINGS: &str = r#"[
  {
    "Level": "Error",
    "Location": {
      "Start": {"LineNumber": 4, "ColumnNumber": 5},
      "End": {"LineNumber": 4, "ColumnNumber": 9},
      "Path": ["Resources", "Bucket", "Type"]
    },
    "Message": "Invalid resource type",
    "Rule": {"Id": "E3001"}
  },
  {
    "Level": "Warning",
    "Location": {
      "Start": {"LineNumber": 1, "ColumnNumber": 1},
      "End": {"LineNumber": 1, "ColumnNumber": 10},
      "Path": []
    },
    "Message": "Unused parameter",
    "Rule": {"Id": "W2001"}
  }
]"#;

/// Binary under test, isolated from the developer's home configuration.
fn bridge(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cfn-lint-bridge").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Write a shell script standing in for cfn-lint and a config pointing at it.
fn fake_linter_config(dir: &Path, body: &str) -> std::path::PathBuf {
    let script = dir.join("fake-cfn-lint.sh");
    fs::write(&script, body).unwrap();
    let config = dir.join("bridge.toml");
    fs::write(
        &config,
        format!("[cfnlint]\npath = 'sh {}'\n", script.display()),
    )
    .unwrap();
    config
}

#[test]
fn test_detect_template() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stack.yaml");
    fs::write(&file, TEMPLATE).unwrap();

    bridge(dir.path())
        .current_dir(dir.path())
        .arg("detect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("template (contains AWSTemplateFormatVersion"));
}

#[test]
fn test_detect_non_template_exits_1() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("values.yaml");
    fs::write(&file, "replicas: 3\n").unwrap();

    bridge(dir.path())
        .current_dir(dir.path())
        .arg("detect")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("not a template"));
}

#[test]
fn test_detect_uses_local_config_patterns() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".cfn-lint-bridge.toml"),
        "[cfnlint]\ndetectCfnRegExps = ['\"Transform\"\\s*:\\s*\"AWS::Serverless']\n",
    )
    .unwrap();
    let file = dir.path().join("sam.json");
    fs::write(&file, "{\"Transform\": \"AWS::Serverless-2016-10-31\"}\n").unwrap();

    bridge(dir.path())
        .current_dir(dir.path())
        .arg("detect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("matched cfnlint.detectCfnRegExps"));
}

#[test]
fn test_args_reflect_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bridge.toml");
    fs::write(
        &config,
        "[cfnlint]\nignoreRules = ['W2001', 'E3012']\nregions = ['eu-west-1']\nincludeExperimentalRules = true\n",
    )
    .unwrap();

    bridge(dir.path())
        .current_dir(dir.path())
        .args(["args", "stack.yaml", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "cfn-lint --format json --regions eu-west-1 --ignore-checks W2001 E3012 --include-experimental -- {}",
            dir.path().join("stack.yaml").display()
        )));
}

#[test]
fn test_args_path_is_absolute_with_other_project_root() {
    let work = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();

    let output = bridge(work.path())
        .current_dir(work.path())
        .args(["args", "stack.yaml", "--project-root"])
        .arg(root.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let line = String::from_utf8(output).unwrap();
    let path = line.trim_end().rsplit(" -- ").next().unwrap();
    assert!(Path::new(path).is_absolute());
    assert!(path.ends_with("stack.yaml"));
    assert!(!root.path().join("stack.yaml").exists());
}

#[test]
fn test_args_wrong_shape_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bridge.toml");
    fs::write(&config, "[cfnlint]\nignoreRules = 'W2001'\n").unwrap();

    bridge(dir.path())
        .args(["args", "stack.yaml", "-c"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("ignoreRules")));
}

#[test]
fn test_missing_config_file_is_fatal() {
    let dir = TempDir::new().unwrap();

    bridge(dir.path())
        .args(["args", "stack.yaml", "-c"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(2);
}

#[test]
fn test_lint_missing_linter_reports_start_failure() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stack.yaml");
    fs::write(&file, TEMPLATE).unwrap();
    let config = dir.path().join("bridge.toml");
    fs::write(&config, "[cfnlint]\npath = '/nonexistent/cfn-lint-for-tests'\n").unwrap();

    bridge(dir.path())
        .args(["lint", "--format", "compact", "-c"])
        .arg(&config)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[cfn-lint] Error: unable to start cfn-lint. Is cfn-lint installed correctly?",
        ));
}

#[test]
fn test_lint_skips_non_templates() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("values.yaml");
    fs::write(&file, "replicas: 3\n").unwrap();
    let config = dir.path().join("bridge.toml");
    fs::write(&config, "[cfnlint]\npath = '/nonexistent/cfn-lint-for-tests'\n").unwrap();

    let output = bridge(dir.path())
        .args(["lint", "--format", "json", "-c"])
        .arg(&config)
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["skipped"], true);
    assert!(parsed[0]["diagnostics"].as_array().unwrap().is_empty());
}

#[cfg(unix)]
#[test]
fn test_lint_json_output_is_zero_based() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stack.yaml");
    fs::write(&file, TEMPLATE).unwrap();
    let config = fake_linter_config(dir.path(), &format!("cat <<'EOF'\n{}\nEOF\n", FINDINGS));

    let output = bridge(dir.path())
        .args(["lint", "--format", "json", "-c"])
        .arg(&config)
        .arg(&file)
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let report = &parsed[0];
    assert_eq!(report["errorCount"], 1);
    assert_eq!(report["warningCount"], 1);

    let first = &report["diagnostics"][0];
    assert_eq!(first["message"], "[cfn-lint] E3001: Invalid resource type");
    assert_eq!(first["severity"], "error");
    assert_eq!(first["range"]["start"]["line"], 3);
    assert_eq!(first["range"]["start"]["character"], 4);
    assert_eq!(first["range"]["end"]["character"], 8);
}

#[cfg(unix)]
#[test]
fn test_lint_ignore_message_patterns() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stack.yaml");
    fs::write(&file, TEMPLATE).unwrap();
    let config = fake_linter_config(dir.path(), &format!("cat <<'EOF'\n{}\nEOF\n", FINDINGS));
    let mut contents = fs::read_to_string(&config).unwrap();
    contents.push_str("ignoreRulesRegExps = ['invalid resource']\n");
    fs::write(&config, contents).unwrap();

    bridge(dir.path())
        .args(["lint", "--format", "compact", "-c"])
        .arg(&config)
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("W2001: Unused parameter")
                .and(predicate::str::contains("E3001").not()),
        );
}

#[cfg(unix)]
#[test]
fn test_lint_stderr_becomes_single_diagnostic() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("stack.yaml");
    fs::write(&file, TEMPLATE).unwrap();
    let config = fake_linter_config(dir.path(), "echo 'Traceback: boom' >&2\nexit 1\n");

    bridge(dir.path())
        .args(["lint", "--format", "compact", "-c"])
        .arg(&config)
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[cfn-lint] Error occurred. See the log for details",
        ));
}

#[cfg(unix)]
#[test]
fn test_doctor_reports_version() {
    let dir = TempDir::new().unwrap();
    let config = fake_linter_config(dir.path(), "echo 'cfn-lint 1.2.3'\n");

    bridge(dir.path())
        .args(["doctor", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("cfn-lint 1.2.3"));
}
