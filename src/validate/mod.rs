//! Pre-flight design validation
//!
//! Structural checks that later stages do not repeat: map keys must equal
//! entity names, names must be well-formed identifiers, child records must
//! reference known records, and the extension graph is scanned for cycles
//! so a broken design is reported as a whole before per-record resolution
//! deals with each member.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;

use crate::diagnostics::DiagnosticLog;
use crate::models::design::ApplicationDesign;
use crate::models::page::{PageComponent, Panel};
use crate::models::record::Record;

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("identifier regex"));

/// Validate the design's structural invariants, logging diagnostics
///
/// Key/name mismatches are errors; everything else here is a warning, since
/// the affected stage will fail the offending item itself.
pub fn validate_design(design: &ApplicationDesign, log: &mut DiagnosticLog) {
    check_keys(design, log);
    check_identifiers(design, log);
    check_child_references(design, log);
    check_component_names(design, log);
    check_extension_cycles(design, log);
}

fn check_keys(design: &ApplicationDesign, log: &mut DiagnosticLog) {
    for (key, record) in &design.records {
        if key != record.name() {
            log.error(
                key,
                format!(
                    "record map key '{}' does not match record name '{}'",
                    key,
                    record.name()
                ),
            );
        }
    }
    for (key, template) in &design.page_templates {
        if key != template.name() {
            log.error(
                key,
                format!(
                    "template map key '{}' does not match template name '{}'",
                    key,
                    template.name()
                ),
            );
        }
    }
    for (key, page) in &design.pages {
        if *key != page.name {
            log.error(
                key,
                format!(
                    "page map key '{}' does not match page name '{}'",
                    key, page.name
                ),
            );
        }
    }
    for (key, alteration) in &design.page_alterations {
        if *key != alteration.name {
            log.error(
                key,
                format!(
                    "alteration map key '{}' does not match alteration name '{}'",
                    key, alteration.name
                ),
            );
        }
    }
}

fn check_identifiers(design: &ApplicationDesign, log: &mut DiagnosticLog) {
    for record in design.records.values() {
        if !IDENTIFIER.is_match(record.name()) {
            log.warning(
                record.name(),
                format!("record name '{}' is not a valid identifier", record.name()),
            );
        }
        if let Record::Simple(simple) = record {
            for field in &simple.fields {
                if !IDENTIFIER.is_match(&field.name) {
                    log.warning(
                        record.name(),
                        format!("field name '{}' is not a valid identifier", field.name),
                    );
                }
            }
        }
    }
}

fn check_child_references(design: &ApplicationDesign, log: &mut DiagnosticLog) {
    for record in design.records.values() {
        let Record::Composite(composite) = record else {
            continue;
        };
        for child in &composite.child_records {
            if !design.records.contains_key(&child.record_name) {
                log.warning(
                    &composite.name,
                    format!(
                        "child '{}' references unknown record '{}'",
                        child.name, child.record_name
                    ),
                );
            }
        }
    }
}

/// Component names must be unique within one container level of an
/// authored page; generated pages satisfy this by construction
fn check_component_names(design: &ApplicationDesign, log: &mut DiagnosticLog) {
    fn walk(panel: &Panel, page_name: &str, log: &mut DiagnosticLog) {
        let mut seen = std::collections::HashSet::new();
        for component in &panel.components {
            if !seen.insert(component.name()) {
                log.error(
                    page_name,
                    format!(
                        "duplicate component name '{}' in panel '{}'",
                        component.name(),
                        panel.name
                    ),
                );
            }
            if let PageComponent::Panel(child) = component {
                walk(child, page_name, log);
            }
        }
    }

    for page in design.pages.values() {
        walk(&page.root, &page.name, log);
    }
}

/// Report extension cycles over the whole design in one pass
///
/// Resolution fails each member individually; this check names the full
/// cycle up front, the same way relationship validation reports a cycle
/// path rather than a single bad edge.
fn check_extension_cycles(design: &ApplicationDesign, log: &mut DiagnosticLog) {
    let mut graph: DiGraph<&str, ()> = DiGraph::new();
    let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();

    for record in design.records.values() {
        if let Record::Extended(ext) = record {
            if !design.records.contains_key(&ext.main_record_name) {
                continue;
            }
            let from = *nodes
                .entry(ext.name.as_str())
                .or_insert_with(|| graph.add_node(ext.name.as_str()));
            let to = *nodes
                .entry(ext.main_record_name.as_str())
                .or_insert_with(|| graph.add_node(ext.main_record_name.as_str()));
            graph.add_edge(from, to, ());
        }
    }

    for component in tarjan_scc(&graph) {
        let is_cycle = component.len() > 1
            || component
                .first()
                .is_some_and(|&n| graph.find_edge(n, n).is_some());
        if is_cycle {
            let mut names: Vec<&str> = component.iter().map(|&n| graph[n]).collect();
            names.sort_unstable();
            log.warning(
                names[0],
                format!("extension cycle detected: {}", names.join(" -> ")),
            );
        }
    }
}
