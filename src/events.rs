//! Editor event handling.
//!
//! Decides which document lifecycle events trigger a lint, following the
//! `lintOnOpen`, `lintOnChange` and `lintOnSave` settings, and re-lints every
//! open document when the `cfnlint` configuration section changes.

use log::{debug, error};
use std::collections::HashMap;

use crate::config::{SETTINGS_SECTION, Settings};
use crate::document::TextDocument;
use crate::error::Result;
use crate::linter::engine::{DiagnosticSink, LintEngine, LintOutcome};

/// A document lifecycle or configuration event from the host editor.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// A document was opened or its buffer was entered.
    Opened(TextDocument),
    /// A document's contents changed.
    Changed(TextDocument),
    /// A document was saved.
    Saved(TextDocument),
    /// Configuration changed. `section` is the affected setting path, e.g.
    /// `cfnlint` or `cfnlint.ignoreRules`. `settings` carries the new values
    /// when the host has already resolved them.
    ConfigurationChanged {
        section: String,
        settings: Option<Settings>,
    },
    /// A document was closed.
    Closed { uri: String },
}

/// True when a configuration path falls under the `cfnlint` namespace.
pub fn affects_settings(section: &str) -> bool {
    section == SETTINGS_SECTION
        || section
            .strip_prefix(SETTINGS_SECTION)
            .is_some_and(|rest| rest.starts_with('.'))
}

/// Owns an engine and the open documents, and routes editor events to it.
pub struct Session<S: DiagnosticSink> {
    engine: LintEngine<S>,
    open: HashMap<String, TextDocument>,
    last_versions: HashMap<String, i32>,
}

impl<S: DiagnosticSink> Session<S> {
    pub fn new(engine: LintEngine<S>) -> Self {
        Self {
            engine,
            open: HashMap::new(),
            last_versions: HashMap::new(),
        }
    }

    pub fn engine(&self) -> &LintEngine<S> {
        &self.engine
    }

    pub fn open_documents(&self) -> impl Iterator<Item = &TextDocument> {
        self.open.values()
    }

    /// Handle one event, returning the outcome of every lint it triggered.
    pub async fn handle(&mut self, event: EditorEvent) -> Result<Vec<LintOutcome>> {
        match event {
            EditorEvent::Opened(doc) => {
                self.track(&doc);
                if !self.engine.settings().lint_on_open() {
                    return Ok(Vec::new());
                }
                self.lint(&doc).await
            }
            EditorEvent::Changed(doc) => {
                self.track(&doc);
                if !self.engine.settings().lint_on_change() {
                    return Ok(Vec::new());
                }
                if self.last_versions.get(&doc.uri) == Some(&doc.version) {
                    debug!("Skipping {}: version {} already linted", doc.uri, doc.version);
                    return Ok(Vec::new());
                }
                self.lint(&doc).await
            }
            EditorEvent::Saved(doc) => {
                self.track(&doc);
                if !self.engine.settings().lint_on_save() {
                    return Ok(Vec::new());
                }
                self.lint(&doc).await
            }
            EditorEvent::ConfigurationChanged { section, settings } => {
                if !affects_settings(&section) {
                    return Ok(Vec::new());
                }
                if let Some(settings) = settings {
                    self.engine.set_settings(settings);
                }
                let mut docs: Vec<TextDocument> = self.open.values().cloned().collect();
                docs.sort_by(|a, b| a.uri.cmp(&b.uri));

                // One failing document must not leave the others stale.
                let mut outcomes = Vec::with_capacity(docs.len());
                let mut first_error = None;
                for doc in &docs {
                    match self.lint(doc).await {
                        Ok(done) => outcomes.extend(done),
                        Err(e) => {
                            error!("Failed to lint {}: {}", doc.uri, e);
                            if first_error.is_none() {
                                first_error = Some(e);
                            }
                        }
                    }
                }
                match first_error {
                    Some(e) => Err(e),
                    None => Ok(outcomes),
                }
            }
            EditorEvent::Closed { uri } => {
                self.open.remove(&uri);
                self.last_versions.remove(&uri);
                self.engine.forget(&uri);
                Ok(Vec::new())
            }
        }
    }

    fn track(&mut self, doc: &TextDocument) {
        self.open.insert(doc.uri.clone(), doc.clone());
    }

    async fn lint(&mut self, doc: &TextDocument) -> Result<Vec<LintOutcome>> {
        self.last_versions.insert(doc.uri.clone(), doc.version);
        Ok(vec![self.engine.lint(doc).await?])
    }
}
