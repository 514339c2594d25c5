//! Compiler configuration types

use serde::{Deserialize, Serialize};

/// Configuration of a compilation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Run the pre-flight design validation before resolution
    pub validate_design: bool,
    /// Refuse to finalize the run when error diagnostics accumulated
    ///
    /// The refusal is a returned error value carrying the full report; the
    /// caller decides what to do with it.
    pub fail_on_errors: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            validate_design: true,
            fail_on_errors: false,
        }
    }
}

impl CompilerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the pre-flight design validation
    pub fn with_validate_design(mut self, validate_design: bool) -> Self {
        self.validate_design = validate_design;
        self
    }

    /// Escalate accumulated error diagnostics into a returned error
    pub fn with_fail_on_errors(mut self, fail_on_errors: bool) -> Self {
        self.fail_on_errors = fail_on_errors;
        self
    }
}
