//! Diagnostic log threaded through the compilation pipeline
//!
//! Every stage recovers per-item failures locally: the offending record,
//! template, or alteration is excluded from its output map and a diagnostic
//! is recorded here. Entries are also emitted through `tracing` so the log
//! doubles as the side-channel report handed back to the caller.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single warning or error, keyed by the component it concerns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the record, template, page, or alteration the entry concerns
    pub component: String,
    pub message: String,
}

/// Ordered collection of diagnostics for one compilation run
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning for the given component
    pub fn warning(&mut self, component: impl Into<String>, message: impl Into<String>) {
        let component = component.into();
        let message = message.into();
        warn!(component = %component, "{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            component,
            message,
        });
    }

    /// Record an error for the given component
    pub fn error(&mut self, component: impl Into<String>, message: impl Into<String>) {
        let component = component.into();
        let message = message.into();
        error!(component = %component, "{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            component,
            message,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }

    /// All entries concerning the given component, in emission order
    pub fn for_component<'a>(&'a self, component: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |d| d.component == component)
    }

    /// Whether any entry concerning the component has the given severity
    pub fn has(&self, component: &str, severity: Severity) -> bool {
        self.for_component(component).any(|d| d.severity == severity)
    }
}
