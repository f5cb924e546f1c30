//! Stylish (colored terminal) output formatter.

use colored::Colorize;

use crate::linter::formatter::FileReport;
use crate::linter::types::Severity;

/// Format reports for a terminal. Positions are shown 1-based.
pub fn format(reports: &[FileReport]) -> String {
    let mut output = String::new();
    let mut total_errors = 0;
    let mut total_warnings = 0;
    let mut total_infos = 0;

    for report in reports {
        if report.skipped {
            output.push_str(&format!(
                "\n{} {}\n",
                report.file_path.bold(),
                "(skipped: not a CloudFormation template)".dimmed()
            ));
            continue;
        }
        if report.diagnostics.is_empty() {
            continue;
        }

        output.push_str(&format!("\n{}\n", report.file_path.bold().underline()));

        for diag in &report.diagnostics {
            let severity_str = match diag.severity {
                Severity::Error => "error".red().to_string(),
                Severity::Warning => "warning".yellow().to_string(),
                Severity::Information => "info".blue().to_string(),
            };
            let position = format!(
                "{}:{}",
                diag.range.start.line + 1,
                diag.range.start.character.saturating_add(1)
            );

            output.push_str(&format!(
                "  {}  {}  {}\n",
                position.dimmed(),
                severity_str,
                diag.message
            ));

            match diag.severity {
                Severity::Error => total_errors += 1,
                Severity::Warning => total_warnings += 1,
                Severity::Information => total_infos += 1,
            }
        }
    }

    let total = total_errors + total_warnings + total_infos;
    if total > 0 {
        let mut parts = Vec::new();
        if total_errors > 0 {
            parts.push(plural(total_errors, "error"));
        }
        if total_warnings > 0 {
            parts.push(plural(total_warnings, "warning"));
        }
        if total_infos > 0 {
            parts.push(plural(total_infos, "info"));
        }

        let summary = format!(
            "\n{} problem{} ({})\n",
            total,
            if total == 1 { "" } else { "s" },
            parts.join(", ")
        );
        if total_errors > 0 {
            output.push_str(&summary.red().bold().to_string());
        } else {
            output.push_str(&summary.yellow().bold().to_string());
        }
    }

    output
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 || word == "info" {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::formatter::tests::make_report;

    #[test]
    fn test_stylish_format() {
        colored::control::set_override(false);
        let output = format(&[make_report()]);
        assert!(output.contains("stack.yaml"));
        assert!(output.contains("5:3  error  [cfn-lint] E3001: Invalid type"));
        assert!(output.contains("2 problems (1 error, 1 warning)"));
    }

    #[test]
    fn test_stylish_skipped_and_clean() {
        colored::control::set_override(false);
        let mut skipped = make_report();
        skipped.skipped = true;
        skipped.diagnostics.clear();
        let mut clean = make_report();
        clean.file_path = "clean.yaml".to_string();
        clean.diagnostics.clear();

        let output = format(&[skipped, clean]);
        assert!(output.contains("skipped"));
        assert!(!output.contains("clean.yaml"));
        assert!(!output.contains("problem"));
    }
}
