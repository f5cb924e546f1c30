//! cfn-lint process runner and result parser.
//!
//! Spawns the linter with JSON output requested, collects stdout/stderr and
//! turns the outcome into diagnostics. Problems with the linter itself
//! (cannot start, writes to stderr) become a single synthetic diagnostic on
//! the first line so they stay visible in the editor.

use log::{debug, error, info};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use crate::config::{Settings, types::DEFAULT_LINTER_PATH};
use crate::error::Result;
use crate::linter::command::{build_args, display_command, split_linter_path};
use crate::linter::detect::compile_patterns;
use crate::linter::types::{Diagnostic, LintResult};

/// Message for a linter that could not be started.
pub const START_FAILURE_MESSAGE: &str =
    "Error: unable to start cfn-lint. Is cfn-lint installed correctly?";

/// Message for a linter run that wrote to stderr.
pub const STDERR_MESSAGE: &str = "Error occurred. See the log for details";

/// A fully resolved linter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory, so cfn-lint picks up the project's `.cfnlintrc`.
    pub cwd: PathBuf,
}

impl Invocation {
    /// Resolve the command for linting `path` from `cwd`.
    pub fn new(settings: &Settings, path: &Path, cwd: &Path) -> Result<Self> {
        let (program, mut args) = split_linter_path(settings.linter_path())
            .unwrap_or_else(|| (DEFAULT_LINTER_PATH.to_string(), Vec::new()));
        args.extend(build_args(settings, path)?);
        Ok(Self {
            program,
            args,
            cwd: cwd.to_path_buf(),
        })
    }

    pub fn display(&self) -> String {
        display_command(&self.program, &self.args)
    }
}

/// What came back from one linter process.
#[derive(Debug)]
pub enum RunOutput {
    /// The process could not be spawned.
    StartFailed(std::io::Error),
    /// The process wrote to stderr; stdout is not trusted.
    Stderr { stderr: String, code: Option<i32> },
    /// The process exited quietly.
    Completed { stdout: String, code: Option<i32> },
}

/// Spawn the linter and wait for it to exit.
pub async fn execute(invocation: &Invocation) -> Result<RunOutput> {
    info!("Executing '{}'", invocation.display());

    let child = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(err) => {
            error!("{}: {}", START_FAILURE_MESSAGE, err);
            return Ok(RunOutput::StartFailed(err));
        }
    };

    let output = child.wait_with_output().await?;
    let code = output.status.code();
    info!("cfn-lint exited with code {:?}", code);

    if !output.stderr.is_empty() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        error!("{}", stderr.trim_end());
        return Ok(RunOutput::Stderr { stderr, code });
    }

    Ok(RunOutput::Completed {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        code,
    })
}

/// Parse `--format json` output. Blank output means no findings.
pub fn parse_results(stdout: &str) -> Result<Vec<LintResult>> {
    if stdout.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(stdout)?)
}

/// Drop results whose message matches any of the denylist patterns.
pub fn filter_results(results: Vec<LintResult>, ignore: &[Regex]) -> Vec<LintResult> {
    if ignore.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|r| !ignore.iter().any(|re| re.is_match(&r.message)))
        .collect()
}

/// Map results to diagnostics, failing on an unknown severity level.
pub fn to_diagnostics(results: &[LintResult]) -> Result<Vec<Diagnostic>> {
    results.iter().map(LintResult::to_diagnostic).collect()
}

/// Interpret a finished run against the `ignoreRulesRegExps` denylist.
pub fn interpret(output: RunOutput, ignore: &[Regex]) -> Result<Vec<Diagnostic>> {
    match output {
        RunOutput::StartFailed(_) => Ok(vec![Diagnostic::synthetic(START_FAILURE_MESSAGE)]),
        RunOutput::Stderr { .. } => Ok(vec![Diagnostic::synthetic(STDERR_MESSAGE)]),
        RunOutput::Completed { stdout, .. } => {
            let results = parse_results(&stdout)?;
            let total = results.len();
            info!("cfn-lint returned {} results", total);

            let results = filter_results(results, ignore);
            if results.len() != total {
                info!(
                    "Filtered to {} results after applying \"cfnlint.ignoreRulesRegExps\"",
                    results.len()
                );
            }
            to_diagnostics(&results)
        }
    }
}

/// Lint the file at `path` with cfn-lint, running from `cwd`.
pub async fn run(settings: &Settings, path: &Path, cwd: &Path) -> Result<Vec<Diagnostic>> {
    let ignore = compile_patterns(settings.ignore_message_patterns())?;
    let invocation = Invocation::new(settings, path, cwd)?;
    let output = execute(&invocation).await?;
    let diagnostics = interpret(output, &ignore)?;
    debug!("{} diagnostics for {}", diagnostics.len(), path.display());
    Ok(diagnostics)
}
