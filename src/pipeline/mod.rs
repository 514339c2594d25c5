//! Compilation pipeline for application designs
//!
//! This module orchestrates the four stages over one design:
//! - **Resolve**: flatten extended records, detect cycles and bad references
//! - **Derive**: convert resolved and composite records into forms
//! - **Expand**: expand page templates against the forms into pages
//! - **Alter**: apply named patches to the expanded and authored pages
//!
//! # Example
//!
//! ```rust,ignore
//! use app_design_sdk::pipeline::{CompilerConfig, DesignCompiler};
//! use app_design_sdk::models::ApplicationDesign;
//!
//! let design = ApplicationDesign::from_yaml_str(&yaml)?;
//! let compiler = DesignCompiler::new(CompilerConfig::new());
//! let output = compiler.compile(&design)?;
//!
//! println!(
//!     "{} forms, {} pages, {} warnings",
//!     output.forms.len(),
//!     output.pages.len(),
//!     output.report.diagnostics.warning_count()
//! );
//! ```
//!
//! Per-item failures (a cyclic record, a template without a form, an
//! alteration against a missing page) are recovered locally and reported in
//! the diagnostic log; with `fail_on_errors` set, an accumulated error count
//! turns into a returned error after the full report has been produced.

mod config;
mod error;
mod executor;

pub use config::CompilerConfig;
pub use error::{CompileError, CompileResult};
pub use executor::{CompileOutput, CompileReport, DesignCompiler};

use crate::models::design::ApplicationDesign;

/// Compile a design with the given configuration
///
/// This is a convenience function for simple one-shot compilation.
pub fn compile_design(
    design: &ApplicationDesign,
    config: CompilerConfig,
) -> CompileResult<CompileOutput> {
    DesignCompiler::new(config).compile(design)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_design_empty() {
        let output = compile_design(&ApplicationDesign::new(), CompilerConfig::new()).unwrap();
        assert!(output.forms.is_empty());
        assert!(output.pages.is_empty());
        assert!(output.report.is_success());
    }
}
