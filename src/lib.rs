//! # cfn-lint bridge
//!
//! Runs the external `cfn-lint` tool on AWS CloudFormation templates and turns
//! its JSON findings into 0-based, editor-style diagnostics.
//!
//! ## Features
//!
//! - **Template Detection**: Recognizes templates by their
//!   `AWSTemplateFormatVersion`/`Resources` keys or by user-supplied patterns
//! - **Settings Mapping**: Translates `cfnlint.*` settings into cfn-lint flags
//! - **Diagnostics**: Parses cfn-lint output and publishes per-document
//!   diagnostic sets through a [`linter::DiagnosticSink`]
//! - **Editor Events**: Lints on open, change and save, and re-lints open
//!   documents when settings change
//!
//! ## Example
//!
//! ```rust,no_run
//! use cfn_lint_bridge::config::Settings;
//! use cfn_lint_bridge::document::TextDocument;
//! use cfn_lint_bridge::linter::{DiagnosticCollection, LintEngine};
//!
//! # async fn demo() -> cfn_lint_bridge::Result<()> {
//! let settings = Settings::new().with("ignoreRules", vec!["W2001"]);
//! let mut engine = LintEngine::new(settings, ".", DiagnosticCollection::new());
//! let doc = TextDocument::new("file:///work/template.yaml", 1, "AWSTemplateFormatVersion: x\nResources:\n");
//! for diagnostic in engine.lint(&doc).await?.diagnostics() {
//!     println!("{}", diagnostic.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod common;
pub mod config;
pub mod document;
pub mod error;
pub mod events;
pub mod handlers;
pub mod linter;

// Re-export commonly used types and functions
pub use error::{CfnLintBridgeError, ConfigError, Result};
pub use handlers::*;
use cli::Commands;
use std::path::{Path, PathBuf};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a subcommand and print its output.
///
/// Returns `Ok(false)` when the command ran but found problems: lint
/// reported Error diagnostics, a file is not a template, or the linter
/// cannot be started.
pub async fn run_command(command: Commands, config_path: Option<&Path>) -> Result<bool> {
    match command {
        Commands::Lint {
            files,
            project_root,
            format,
            force,
        } => {
            let root = resolve_project_root(project_root)?;
            let settings = config::resolve_settings(config_path, &root)?;
            let report = handlers::handle_lint(&files, settings, &root, format.into(), force).await?;
            print!("{}", report.output);
            Ok(!report.has_errors)
        }
        Commands::Detect { file } => {
            let root = resolve_project_root(None)?;
            let settings = config::resolve_settings(config_path, &root)?;
            let (message, is_template) = handlers::handle_detect(&file, &settings)?;
            println!("{}", message);
            Ok(is_template)
        }
        Commands::Args { file, project_root } => {
            let root = resolve_project_root(project_root)?;
            let settings = config::resolve_settings(config_path, &root)?;
            println!("{}", handlers::handle_args(&file, &settings, &root)?);
            Ok(true)
        }
        Commands::Doctor { project_root } => {
            let root = resolve_project_root(project_root)?;
            let settings = config::resolve_settings(config_path, &root)?;
            let (message, ok) = handlers::handle_doctor(&settings);
            println!("{}", message);
            Ok(ok)
        }
    }
}

fn resolve_project_root(project_root: Option<PathBuf>) -> Result<PathBuf> {
    match project_root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}
