use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::document::TextDocument;
use crate::linter::formatter::{FileReport, OutputFormat, format_reports};
use crate::linter::{DiagnosticCollection, LintEngine, LintOutcome};

/// Rendered lint output plus whether any Error diagnostic was produced.
pub struct LintReport {
    pub output: String,
    pub has_errors: bool,
    pub reports: Vec<FileReport>,
}

pub async fn handle_lint(
    files: &[PathBuf],
    settings: Settings,
    project_root: &Path,
    format: OutputFormat,
    force: bool,
) -> crate::Result<LintReport> {
    let mut engine = LintEngine::new(settings, project_root, DiagnosticCollection::new());
    let mut reports = Vec::with_capacity(files.len());

    for file in files {
        let text = fs::read_to_string(file)?;
        let document = TextDocument::from_path(file, text);

        let outcome = if force {
            engine.lint_unchecked(&document).await?
        } else {
            engine.lint(&document).await?
        };
        if outcome.is_skipped() {
            warn!(
                "{} does not look like a CloudFormation template; pass --force to lint it anyway",
                file.display()
            );
        }

        reports.push(FileReport {
            file_path: file.display().to_string(),
            uri: document.uri.clone(),
            skipped: matches!(outcome, LintOutcome::Skipped),
            diagnostics: outcome.diagnostics().to_vec(),
        });
    }

    let has_errors = reports.iter().any(FileReport::has_errors);
    Ok(LintReport {
        output: format_reports(&reports, format),
        has_errors,
        reports,
    })
}
