//! Output formatters for diagnostics.
//!
//! - Stylish - colored terminal output (default)
//! - JSON - machine-readable JSON output
//! - Compact - one line per diagnostic

pub mod json;
pub mod stylish;

use crate::linter::types::{Diagnostic, Severity};

/// Output format for lint reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Stylish colored terminal output (default)
    #[default]
    Stylish,
    /// JSON format for machine processing
    Json,
    /// Single line per diagnostic
    Compact,
}

/// Diagnostics for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_path: String,
    pub uri: String,
    /// True when the file did not look like a template and was not linted.
    pub skipped: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }
}

/// Format reports according to the specified format.
pub fn format_reports(reports: &[FileReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Stylish => stylish::format(reports),
        OutputFormat::Json => json::format(reports),
        OutputFormat::Compact => format_compact(reports),
    }
}

/// Compact format (one line per diagnostic, 1-based positions).
fn format_compact(reports: &[FileReport]) -> String {
    let mut output = String::new();

    for report in reports {
        for diag in &report.diagnostics {
            output.push_str(&format!(
                "{}:{}:{}: {} {}\n",
                report.file_path,
                diag.range.start.line + 1,
                diag.range.start.character.saturating_add(1),
                diag.severity,
                diag.message
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::types::{Position, Range};

    pub(crate) fn make_report() -> FileReport {
        FileReport {
            file_path: "stack.yaml".to_string(),
            uri: "file:///work/stack.yaml".to_string(),
            skipped: false,
            diagnostics: vec![
                Diagnostic {
                    range: Range::new(Position::new(4, 2), Position::new(4, 9)),
                    severity: Severity::Error,
                    message: "[cfn-lint] E3001: Invalid type".to_string(),
                    source: "cfn-lint".to_string(),
                },
                Diagnostic {
                    range: Range::new(Position::new(0, 0), Position::new(0, 5)),
                    severity: Severity::Warning,
                    message: "[cfn-lint] W2001: Parameter not used".to_string(),
                    source: "cfn-lint".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_compact_format_is_one_based() {
        let output = format_compact(&[make_report()]);
        assert!(output.contains("stack.yaml:5:3: error [cfn-lint] E3001: Invalid type"));
        assert!(output.contains("stack.yaml:1:1: warning"));
    }

    #[test]
    fn test_counts() {
        let report = make_report();
        assert!(report.has_errors());
        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Information), 0);
    }
}
