//! Per-document lint orchestration.
//!
//! The engine ties the detector, command builder and runner together and
//! publishes diagnostics through a [`DiagnosticSink`], the seam to the host
//! editor. A document's diagnostic set is replaced wholesale, and only when
//! it differs from the last set published for that document.

use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::document::TextDocument;
use crate::error::Result;
use crate::linter::detect::is_template;
use crate::linter::runner;
use crate::linter::types::Diagnostic;

/// Receiver of per-document diagnostic sets (the editor's collection).
pub trait DiagnosticSink {
    /// Replace all diagnostics for `uri`.
    fn publish(&mut self, uri: &str, diagnostics: Vec<Diagnostic>);
}

/// In-memory diagnostic collection keyed by document URI.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollection {
    entries: HashMap<String, Vec<Diagnostic>>,
    publish_count: usize,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, uri: &str) -> Option<&[Diagnostic]> {
        self.entries.get(uri).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of times a set has been published.
    pub fn publish_count(&self) -> usize {
        self.publish_count
    }
}

impl DiagnosticSink for DiagnosticCollection {
    fn publish(&mut self, uri: &str, diagnostics: Vec<Diagnostic>) {
        self.publish_count += 1;
        self.entries.insert(uri.to_string(), diagnostics);
    }
}

/// Result of one lint request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// The document does not look like a template.
    Skipped,
    /// Diagnostics matched the last published set; nothing was published.
    Unchanged(Vec<Diagnostic>),
    /// A new diagnostic set was published.
    Published(Vec<Diagnostic>),
}

impl LintOutcome {
    /// Diagnostics for the document, empty when skipped.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Self::Skipped => &[],
            Self::Unchanged(d) | Self::Published(d) => d,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Runs cfn-lint for documents and keeps their latest diagnostics.
pub struct LintEngine<S: DiagnosticSink> {
    settings: Settings,
    project_root: PathBuf,
    sink: S,
    latest: HashMap<String, Vec<Diagnostic>>,
}

impl<S: DiagnosticSink> LintEngine<S> {
    pub fn new(settings: Settings, project_root: impl Into<PathBuf>, sink: S) -> Self {
        let project_root = project_root.into();
        info!(
            "Using {} as the working directory to execute cfn-lint",
            project_root.display()
        );
        Self {
            settings,
            project_root,
            sink,
            latest: HashMap::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap in new settings; later lints use them.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Drop the last published set for a closed document.
    pub fn forget(&mut self, uri: &str) {
        self.latest.remove(uri);
    }

    /// Number of documents with a remembered diagnostic set.
    pub fn tracked_documents(&self) -> usize {
        self.latest.len()
    }

    /// Lint a document if it looks like a template.
    pub async fn lint(&mut self, document: &TextDocument) -> Result<LintOutcome> {
        let path = document.fs_path();
        let path_str = path.display().to_string();
        if !is_template(&document.text, &path_str, self.settings.detect_patterns())? {
            return Ok(LintOutcome::Skipped);
        }
        self.lint_unchecked(document).await
    }

    /// Lint a document without template detection.
    pub async fn lint_unchecked(&mut self, document: &TextDocument) -> Result<LintOutcome> {
        let path = document.fs_path();
        info!("Linting {}...", path.display());

        let diagnostics = runner::run(&self.settings, &path, &self.project_root).await?;
        Ok(self.publish(&document.uri, diagnostics))
    }

    fn publish(&mut self, uri: &str, diagnostics: Vec<Diagnostic>) -> LintOutcome {
        if self.latest.get(uri) == Some(&diagnostics) {
            return LintOutcome::Unchanged(diagnostics);
        }
        info!("Lint results have changed. Refreshing collection");
        self.latest.insert(uri.to_string(), diagnostics.clone());
        self.sink.publish(uri, diagnostics.clone());
        LintOutcome::Published(diagnostics)
    }
}
