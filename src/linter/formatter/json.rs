//! JSON output formatter.

use serde_json::json;

use crate::linter::formatter::FileReport;
use crate::linter::types::Severity;

/// Format reports as JSON. Ranges stay 0-based, as published to the editor.
pub fn format(reports: &[FileReport]) -> String {
    let output: Vec<serde_json::Value> = reports
        .iter()
        .map(|report| {
            json!({
                "filePath": report.file_path,
                "uri": report.uri,
                "skipped": report.skipped,
                "diagnostics": report.diagnostics,
                "errorCount": report.count(Severity::Error),
                "warningCount": report.count(Severity::Warning),
                "infoCount": report.count(Severity::Information),
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}
