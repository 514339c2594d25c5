//! Error types for the compilation pipeline
//!
//! Per-item failures never surface here; each stage recovers them into the
//! diagnostic log. This module covers the run-level outcomes only.

use thiserror::Error;

use super::executor::CompileReport;

/// Errors that can fail a compilation run as a whole
#[derive(Error, Debug)]
pub enum CompileError {
    /// The run completed but accumulated error diagnostics, and the
    /// configuration asked for that to block finalization
    #[error("design contains {count} error diagnostic(s)")]
    DesignErrors {
        count: usize,
        report: Box<CompileReport>,
    },
}

impl CompileError {
    /// The full report of the refused run
    pub fn report(&self) -> &CompileReport {
        match self {
            CompileError::DesignErrors { report, .. } => report,
        }
    }
}

/// Result type for compilation runs
pub type CompileResult<T> = Result<T, CompileError>;
