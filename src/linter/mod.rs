//! cfn-lint integration.
//!
//! Runs the external [cfn-lint](https://github.com/aws-cloudformation/cfn-lint)
//! binary on CloudFormation templates and turns its `--format json` output
//! into editor diagnostics.
//!
//! # Example
//!
//! ```rust,no_run
//! use cfn_lint_bridge::config::Settings;
//! use cfn_lint_bridge::document::TextDocument;
//! use cfn_lint_bridge::linter::{DiagnosticCollection, LintEngine};
//!
//! # async fn demo() -> cfn_lint_bridge::Result<()> {
//! let settings = Settings::new().with("ignoreRules", vec!["W2001"]);
//! let mut engine = LintEngine::new(settings, ".", DiagnosticCollection::new());
//!
//! let text = std::fs::read_to_string("template.yaml")?;
//! let doc = TextDocument::from_path("template.yaml".as_ref(), text);
//! for diag in engine.lint(&doc).await?.diagnostics() {
//!     println!("{}:{} {}", diag.range.start.line, diag.range.start.character, diag.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod detect;
pub mod engine;
pub mod formatter;
pub mod runner;
pub mod types;

pub use command::{FLAG_TABLE, FlagMapping, ValueShape, build_args};
pub use detect::{is_standard_template, is_template};
pub use engine::{DiagnosticCollection, DiagnosticSink, LintEngine, LintOutcome};
pub use formatter::{FileReport, OutputFormat, format_reports};
pub use runner::{Invocation, RunOutput};
pub use types::{Diagnostic, Level, LintResult, Position, Range, Severity};
