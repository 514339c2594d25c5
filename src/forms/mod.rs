//! Form derivation
//!
//! Converts resolved simple records and composite records into client-facing
//! Forms. Every conversion is an explicit field-mapping function; nothing is
//! copied reflectively.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::debug;

use crate::diagnostics::DiagnosticLog;
use crate::models::enums::{FieldKind, RenderAs, ValueType};
use crate::models::form::{ChildForm, DataField, Form};
use crate::models::record::{CompositeRecord, Field, SimpleRecord};

/// Errors that can fail a single form's derivation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeriveError {
    /// A composite record's main record has no derived form
    #[error("composite record '{record}': main record '{main}' has no derived form")]
    MissingMainForm { record: String, main: String },

    /// A composite record's main record is itself composite
    #[error("composite record '{record}': main record '{main}' is itself composite")]
    CompositeMain { record: String, main: String },
}

/// Derive forms for every client-visible resolved record, then link
/// composite records against the forms derived so far
pub fn derive_forms(
    resolved: &BTreeMap<String, SimpleRecord>,
    composites: &BTreeMap<String, CompositeRecord>,
    log: &mut DiagnosticLog,
) -> BTreeMap<String, Form> {
    let mut forms = BTreeMap::new();

    for (name, record) in resolved {
        if !record.client_visible {
            continue;
        }
        forms.insert(name.clone(), form_from_record(record));
    }

    for (name, composite) in composites {
        if !composite.client_visible {
            continue;
        }
        match composite_form(composite, &forms, composites) {
            Ok(form) => {
                forms.insert(name.clone(), form);
            }
            Err(err) => log.error(name, err.to_string()),
        }
    }

    debug!(forms = forms.len(), "Form derivation finished");
    forms
}

/// Explicit Record -> Form mapping
fn form_from_record(record: &SimpleRecord) -> Form {
    let mut form = Form::new(&record.name, &record.name);
    form.label = record.label.clone();
    form.operations = record
        .operations
        .iter()
        .map(|op| (op.clone(), true))
        .collect();

    for field in &record.fields {
        form.field_order.push(field.name.clone());
        form.fields
            .insert(field.name.clone(), data_field_from(field));
    }

    let key_fields = record.key_field_names();
    form.key_fields = (!key_fields.is_empty()).then_some(key_fields);
    form
}

/// Explicit Field -> DataField mapping
fn data_field_from(field: &Field) -> DataField {
    DataField {
        name: field.name.clone(),
        label: field.label.clone(),
        value_type: field.value_type,
        kind: field.kind,
        is_required: field.kind.is_required_input(),
        render_as: field.render_as.unwrap_or_else(|| default_render_as(field)),
        list_name: field.list_name.clone(),
    }
}

/// Default widget for a field without an explicit rendering hint
///
/// List-bound fields render as a selector, booleans as a checkbox,
/// client-supplied keys and data fields as a text input, and everything
/// else (server-generated keys) as read-only output.
pub fn default_render_as(field: &Field) -> RenderAs {
    if field.list_name.is_some() {
        RenderAs::Select
    } else if field.value_type == ValueType::Boolean {
        RenderAs::Checkbox
    } else if field.kind.is_required_input() || field.kind == FieldKind::Optional {
        RenderAs::Text
    } else {
        RenderAs::Output
    }
}

/// Derive a composite record's form from its main record's form
fn composite_form(
    composite: &CompositeRecord,
    forms: &BTreeMap<String, Form>,
    composites: &BTreeMap<String, CompositeRecord>,
) -> Result<Form, DeriveError> {
    if composites.contains_key(&composite.main_record_name) {
        return Err(DeriveError::CompositeMain {
            record: composite.name.clone(),
            main: composite.main_record_name.clone(),
        });
    }
    let main_form =
        forms
            .get(&composite.main_record_name)
            .ok_or_else(|| DeriveError::MissingMainForm {
                record: composite.name.clone(),
                main: composite.main_record_name.clone(),
            })?;

    let mut form = Form::new(&composite.name, &composite.name);
    form.label = composite.label.clone().or_else(|| main_form.label.clone());
    form.operations = main_form.operations.clone();
    form.field_order = main_form.field_order.clone();
    form.fields = main_form.fields.clone();
    form.key_fields = main_form.key_fields.clone();

    let child_forms: BTreeMap<String, ChildForm> = composite
        .child_records
        .iter()
        .map(|child| {
            (
                child.name.clone(),
                ChildForm {
                    form_name: child.record_name.clone(),
                    link_field: child.link_field.clone(),
                    label: child.label.clone(),
                },
            )
        })
        .collect();
    form.child_forms = (!child_forms.is_empty()).then_some(child_forms);

    Ok(form)
}
