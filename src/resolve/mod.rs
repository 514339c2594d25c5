//! Record resolution
//!
//! Flattens every `extended` record against its main record, producing a
//! map of resolved simple records plus the set of names that failed.
//! Resolution is a depth-first walk over an explicit dependency stack with a
//! memoized result map, so cycle detection cost is bounded by stack depth
//! and no name is ever recomputed.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;
use tracing::debug;

use crate::diagnostics::DiagnosticLog;
use crate::models::record::{ExtendedRecord, Field, FieldSelection, Record, SimpleRecord};

/// Errors that can fail a single record's resolution
///
/// Each is recovered locally: the record joins the failed set and the run
/// continues with the remaining records.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// The record extends itself
    #[error("record '{0}' extends itself")]
    SelfReference(String),

    /// A chain of extensions leads back to this record
    #[error("cyclic extension chain: {}", .0.join(" -> "))]
    Cycle(Vec<String>),

    /// The main record does not exist in the design
    #[error("record '{record}' extends unknown record '{main}'")]
    UnknownMain { record: String, main: String },

    /// The main record is composite, which cannot be extended
    #[error("record '{record}' extends composite record '{main}'")]
    CompositeMain { record: String, main: String },

    /// The main record itself failed resolution
    #[error("record '{record}' extends record '{main}', which failed to resolve")]
    FailedMain { record: String, main: String },

    /// A selected field name does not exist on the main record
    #[error("record '{record}' selects unknown field '{field}' of record '{main}'")]
    UnknownField {
        record: String,
        main: String,
        field: String,
    },
}

/// Result of resolving a design's records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOutcome {
    /// Simple records plus flattened extended records, keyed by name
    pub resolved: BTreeMap<String, SimpleRecord>,
    /// Names whose resolution failed; downstream stages skip them silently
    pub failed: BTreeSet<String>,
}

/// Resolve every record of the design
///
/// Simple records pass through verbatim; composite records are left to the
/// form deriver; extended records are flattened against their mains.
pub fn resolve_records(
    records: &BTreeMap<String, Record>,
    log: &mut DiagnosticLog,
) -> ResolveOutcome {
    let mut outcome = ResolveOutcome::default();
    let mut stack: Vec<String> = Vec::new();

    for name in records.keys() {
        resolve_one(name, records, &mut outcome, &mut stack, log);
        debug_assert!(stack.is_empty());
    }

    debug!(
        resolved = outcome.resolved.len(),
        failed = outcome.failed.len(),
        "Record resolution finished"
    );
    outcome
}

fn resolve_one(
    name: &str,
    records: &BTreeMap<String, Record>,
    outcome: &mut ResolveOutcome,
    stack: &mut Vec<String>,
    log: &mut DiagnosticLog,
) {
    // Memoized: resolved and failed names are never recomputed.
    if outcome.resolved.contains_key(name) || outcome.failed.contains(name) {
        return;
    }

    let Some(record) = records.get(name) else {
        return;
    };

    let ext = match record {
        Record::Simple(simple) => {
            outcome.resolved.insert(name.to_string(), simple.clone());
            return;
        }
        // Composites are not flattened here; the form deriver links them.
        Record::Composite(_) => return,
        Record::Extended(ext) => ext,
    };

    if let Some(pos) = stack.iter().position(|n| n == name) {
        // The cyclic segment runs from the first occurrence to the stack top;
        // every name on it is unresolvable.
        let segment: Vec<String> = stack[pos..].to_vec();
        let err = ResolveError::Cycle(segment.clone());
        for member in &segment {
            outcome.failed.insert(member.clone());
        }
        log.error(name, err.to_string());
        return;
    }

    let main = ext.main_record_name.as_str();

    if main == name {
        fail(outcome, log, name, ResolveError::SelfReference(name.to_string()));
        return;
    }
    match records.get(main) {
        None => {
            fail(
                outcome,
                log,
                name,
                ResolveError::UnknownMain {
                    record: name.to_string(),
                    main: main.to_string(),
                },
            );
            return;
        }
        Some(Record::Composite(_)) => {
            fail(
                outcome,
                log,
                name,
                ResolveError::CompositeMain {
                    record: name.to_string(),
                    main: main.to_string(),
                },
            );
            return;
        }
        Some(_) => {}
    }

    stack.push(name.to_string());
    resolve_one(main, records, outcome, stack, log);
    stack.pop();

    // A cycle detected deeper down may already have failed this record.
    if outcome.failed.contains(name) {
        return;
    }

    let Some(main_record) = outcome.resolved.get(main).cloned() else {
        fail(
            outcome,
            log,
            name,
            ResolveError::FailedMain {
                record: name.to_string(),
                main: main.to_string(),
            },
        );
        return;
    };

    let merged = merge_extended(ext, &main_record, log);
    outcome.resolved.insert(name.to_string(), merged);
}

fn fail(outcome: &mut ResolveOutcome, log: &mut DiagnosticLog, name: &str, err: ResolveError) {
    outcome.failed.insert(name.to_string());
    log.error(name, err.to_string());
}

/// Merge an extended record onto its resolved main record
///
/// The result is a simple record: the main record's attributes overlaid with
/// the extension's explicit overrides, fields selected or inherited, then
/// `additional_fields` replacing same-named fields in place and appending the
/// rest.
fn merge_extended(
    ext: &ExtendedRecord,
    main: &SimpleRecord,
    log: &mut DiagnosticLog,
) -> SimpleRecord {
    let mut fields = select_fields(ext, main, log);

    for additional in &ext.additional_fields {
        match fields.iter_mut().find(|f| f.name == additional.name) {
            Some(existing) => *existing = additional.clone(),
            None => fields.push(additional.clone()),
        }
    }

    SimpleRecord {
        name: ext.name.clone(),
        label: ext.label.clone().or_else(|| main.label.clone()),
        client_visible: ext.client_visible.unwrap_or(main.client_visible),
        operations: ext
            .operations
            .clone()
            .unwrap_or_else(|| main.operations.clone()),
        fields,
    }
}

fn select_fields(ext: &ExtendedRecord, main: &SimpleRecord, log: &mut DiagnosticLog) -> Vec<Field> {
    match &ext.field_names {
        Some(selection) if !selection.is_all() => {
            let FieldSelection::Names(names) = selection else {
                return main.fields.clone();
            };
            let mut fields = Vec::with_capacity(names.len());
            for field_name in names {
                match main.fields.iter().find(|f| &f.name == field_name) {
                    Some(field) => fields.push(field.clone()),
                    None => {
                        let err = ResolveError::UnknownField {
                            record: ext.name.clone(),
                            main: main.name.clone(),
                            field: field_name.clone(),
                        };
                        log.error(&ext.name, err.to_string());
                    }
                }
            }
            fields
        }
        // Wildcard or no selection: the main record's fields, order preserved.
        _ => main.fields.clone(),
    }
}
