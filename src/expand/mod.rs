//! Page template expansion
//!
//! Expands each template against its form into one or more concrete pages:
//! - `master`: synthesizes a list, a view, and a save template by naming
//!   convention, each expanded independently (always exactly three pages)
//! - `list`: filter action, row navigation, single read-only table
//! - `view`: read-only detail panel(s) with get/close actions
//! - `save`: editable modal surface with get/save/cancel/close actions
//! - `grid`: editable table with getData/submitData/cancel actions
//!
//! Pre-authored pages always win: a template expanding to an existing page
//! name is skipped with a conflict warning.

pub mod grid;
pub mod list;
pub mod master;
pub mod save;
pub mod view;

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::diagnostics::DiagnosticLog;
use crate::models::form::{DataField, Form};
use crate::models::page::{
    FieldComponent, Page, PageComponent, PageInput, Panel, TableColumn,
};
use crate::models::template::{PageTemplate, TabSpec};

/// Errors that can fail a single template's expansion
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpandError {
    /// The template references a form that was never derived
    #[error("template '{template}' ({kind}): no form named '{form}' was derived")]
    FormNotFound {
        template: String,
        kind: &'static str,
        form: String,
    },
}

/// Expand every template of the design against the derived forms
///
/// `authored` is the pre-authored page map; names already present there (or
/// expanded earlier in the same run) are never overwritten.
pub fn expand_templates(
    templates: &BTreeMap<String, PageTemplate>,
    forms: &BTreeMap<String, Form>,
    authored: &BTreeMap<String, Page>,
    log: &mut DiagnosticLog,
) -> BTreeMap<String, Page> {
    let mut expanded = BTreeMap::new();

    for template in templates.values() {
        match template {
            PageTemplate::Master(m) => {
                for derived in master::synthesize(m) {
                    expand_into(&derived, forms, authored, &mut expanded, log);
                }
            }
            concrete => expand_into(concrete, forms, authored, &mut expanded, log),
        }
    }

    debug!(pages = expanded.len(), "Template expansion finished");
    expanded
}

fn expand_into(
    template: &PageTemplate,
    forms: &BTreeMap<String, Form>,
    authored: &BTreeMap<String, Page>,
    expanded: &mut BTreeMap<String, Page>,
    log: &mut DiagnosticLog,
) {
    let name = template.name();

    if authored.contains_key(name) || expanded.contains_key(name) {
        log.warning(
            name,
            format!(
                "page '{}' already exists; expansion of '{}' template skipped",
                name,
                template.kind_name()
            ),
        );
        return;
    }

    let Some(form) = forms.get(template.form_name()) else {
        let err = ExpandError::FormNotFound {
            template: name.to_string(),
            kind: template.kind_name(),
            form: template.form_name().to_string(),
        };
        log.error(name, err.to_string());
        return;
    };

    let page = match template {
        PageTemplate::List(t) => list::expand(t, form, log),
        PageTemplate::View(t) => view::expand(t, form, log),
        PageTemplate::Save(t) => save::expand(t, form, log),
        PageTemplate::Grid(t) => grid::expand(t, form, log),
        // Masters were synthesized away by the caller.
        PageTemplate::Master(_) => return,
    };
    expanded.insert(name.to_string(), page);
}

/// An empty page bound to the form, titled from template or form label
pub(crate) fn page_shell(name: &str, label: Option<&str>, form: &Form) -> Page {
    let mut page = Page::new(name);
    page.form_name = Some(form.name.clone());
    page.title = label.map(str::to_string).or_else(|| form.label.clone());
    page
}

/// The form's key fields declared as required navigation inputs
pub(crate) fn key_inputs(form: &Form) -> BTreeMap<String, PageInput> {
    form.key_field_params()
        .into_iter()
        .map(|name| (name, PageInput::required()))
        .collect()
}

/// A field widget for the given data field
pub(crate) fn field_component(field: &DataField, read_only: bool) -> FieldComponent {
    FieldComponent {
        name: field.name.clone(),
        label: field.label.clone(),
        render_as: if read_only {
            field.render_as.as_read_only()
        } else {
            field.render_as
        },
        read_only,
        hidden: false,
    }
}

/// A table column for the given data field
pub(crate) fn table_column(field: &DataField, editable: bool) -> TableColumn {
    TableColumn {
        name: field.name.clone(),
        label: field.label.clone(),
        render_as: if editable {
            field.render_as
        } else {
            field.render_as.as_read_only()
        },
        editable,
    }
}

/// Lay the form's fields out on the page root: a single flat panel, or one
/// panel per declared tab
pub(crate) fn layout_fields(
    page: &mut Page,
    form: &Form,
    tabs: Option<&[TabSpec]>,
    hide_fields: &[String],
    read_only: bool,
    log: &mut DiagnosticLog,
) {
    match tabs {
        Some(tabs) => {
            page.root.tabbed = true;
            for tab in tabs {
                let mut panel = Panel::new(&tab.name);
                panel.label = tab.label.clone();
                for field_name in &tab.fields {
                    if hide_fields.contains(field_name) {
                        continue;
                    }
                    match form.fields.get(field_name) {
                        Some(field) => panel
                            .components
                            .push(PageComponent::Field(field_component(field, read_only))),
                        None => log.warning(
                            &page.name,
                            format!(
                                "tab '{}' lists unknown field '{}' of form '{}'",
                                tab.name, field_name, form.name
                            ),
                        ),
                    }
                }
                page.root.components.push(PageComponent::Panel(panel));
            }
        }
        None => {
            for field in form.ordered_fields() {
                if hide_fields.contains(&field.name) {
                    continue;
                }
                page.root
                    .components
                    .push(PageComponent::Field(field_component(field, read_only)));
            }
        }
    }
}
