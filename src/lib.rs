//! App Design SDK - Shared library for compiling application designs
//!
//! Provides unified interfaces for:
//! - Record resolution (extended records flattened against their mains)
//! - Form derivation (client-facing shapes of the resolved records)
//! - Page template expansion (list/view/save/grid/master recipes)
//! - Page alteration (named patches over the generated pages)
//! - Pre-flight design validation
//!
//! Reading designs from disk and writing the compiled artifacts are
//! external collaborators; the SDK consumes an in-memory
//! [`models::ApplicationDesign`] and produces in-memory form and page maps.

pub mod alter;
pub mod diagnostics;
pub mod expand;
pub mod forms;
pub mod models;
pub mod pipeline;
pub mod resolve;
pub mod validate;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticLog, Severity};
pub use pipeline::{
    compile_design, CompileError, CompileOutput, CompileReport, CompileResult, CompilerConfig,
    DesignCompiler,
};

pub use alter::{apply_alteration, apply_alterations};
pub use expand::{expand_templates, ExpandError};
pub use forms::{derive_forms, DeriveError};
pub use resolve::{resolve_records, ResolveError, ResolveOutcome};
pub use validate::validate_design;

// Re-export models
pub use models::{ApplicationDesign, Form, Page, PageAlteration, PageTemplate, Record};
pub use models::enums::*;
