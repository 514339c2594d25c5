//! Design compiler running the full pipeline

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};
use uuid::Uuid;

use super::config::CompilerConfig;
use super::error::{CompileError, CompileResult};
use crate::alter::apply_alterations;
use crate::diagnostics::DiagnosticLog;
use crate::expand::expand_templates;
use crate::forms::derive_forms;
use crate::models::design::ApplicationDesign;
use crate::models::form::Form;
use crate::models::page::Page;
use crate::resolve::resolve_records;
use crate::validate::validate_design;

/// Compiler that runs all stages over one design
pub struct DesignCompiler {
    config: CompilerConfig,
}

/// Summary of one compilation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileReport {
    pub run_id: String,
    pub compiled_at: Option<DateTime<Utc>>,
    pub duration_ms: u64,
    pub records_resolved: usize,
    pub records_failed: usize,
    pub forms_derived: usize,
    pub pages_expanded: usize,
    pub alterations_applied: usize,
    pub diagnostics: DiagnosticLog,
}

impl CompileReport {
    /// Whether the run finished without error diagnostics
    pub fn is_success(&self) -> bool {
        self.diagnostics.error_count() == 0
    }
}

/// Output of a compilation run: the two artifact maps plus the report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOutput {
    pub forms: BTreeMap<String, Form>,
    pub pages: BTreeMap<String, Page>,
    pub report: CompileReport,
}

impl DesignCompiler {
    /// Create a new compiler with the given configuration
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    /// Compile a design into its form and page maps
    ///
    /// Stages run strictly in order: validate, resolve, derive, expand,
    /// alter. Per-item failures are recovered into the report's diagnostic
    /// log; the run itself only fails when `fail_on_errors` is set and
    /// errors accumulated.
    pub fn compile(&self, design: &ApplicationDesign) -> CompileResult<CompileOutput> {
        let run_id = Uuid::new_v4().to_string();
        let _span = info_span!("design_compile", run_id = %run_id).entered();
        let start = Instant::now();
        let mut log = DiagnosticLog::new();

        if self.config.validate_design {
            validate_design(design, &mut log);
        }

        let outcome = resolve_records(&design.records, &mut log);
        info!(
            resolved = outcome.resolved.len(),
            failed = outcome.failed.len(),
            "Records resolved"
        );

        let composites = design.composites();
        let forms = derive_forms(&outcome.resolved, &composites, &mut log);
        info!(forms = forms.len(), "Forms derived");

        let mut pages = design.pages.clone();
        let expanded = expand_templates(&design.page_templates, &forms, &pages, &mut log);
        let pages_expanded = expanded.len();
        pages.extend(expanded);
        info!(pages = pages.len(), "Pages expanded");

        let alterations_applied = apply_alterations(&mut pages, &design.page_alterations, &mut log);

        let report = CompileReport {
            run_id,
            compiled_at: Some(Utc::now()),
            duration_ms: start.elapsed().as_millis() as u64,
            records_resolved: outcome.resolved.len(),
            records_failed: outcome.failed.len(),
            forms_derived: forms.len(),
            pages_expanded,
            alterations_applied,
            diagnostics: log,
        };

        info!(
            duration_ms = report.duration_ms,
            errors = report.diagnostics.error_count(),
            warnings = report.diagnostics.warning_count(),
            "Compilation finished"
        );

        if self.config.fail_on_errors && !report.is_success() {
            let count = report.diagnostics.error_count();
            return Err(CompileError::DesignErrors {
                count,
                report: Box::new(report),
            });
        }

        Ok(CompileOutput {
            forms,
            pages,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_design() -> ApplicationDesign {
        ApplicationDesign::from_yaml_str(
            r#"
records:
  Customer:
    recordType: simple
    name: Customer
    operations: [get, save, filter]
    fields:
      - name: id
        kind: primaryKey
        valueType: integer
      - name: name
        kind: required
pageTemplates:
  Customer:
    templateType: master
    name: Customer
    formName: Customer
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_compile_minimal_design() {
        let compiler = DesignCompiler::new(CompilerConfig::new());
        let output = compiler.compile(&minimal_design()).unwrap();

        assert_eq!(output.forms.len(), 1);
        assert_eq!(output.pages.len(), 3);
        assert!(output.report.is_success());
        assert_eq!(output.report.records_resolved, 1);
        assert_eq!(output.report.pages_expanded, 3);
    }

    #[test]
    fn test_fail_on_errors_returns_report() {
        let mut design = minimal_design();
        design.records.remove("Customer");

        let compiler = DesignCompiler::new(CompilerConfig::new().with_fail_on_errors(true));
        let err = compiler.compile(&design).unwrap_err();
        assert!(err.report().diagnostics.error_count() > 0);
    }

    #[test]
    fn test_broken_items_do_not_fail_the_run_by_default() {
        let mut design = minimal_design();
        design.records.remove("Customer");

        let compiler = DesignCompiler::new(CompilerConfig::new());
        let output = compiler.compile(&design).unwrap();
        assert!(output.pages.is_empty());
        assert!(!output.report.is_success());
    }
}
