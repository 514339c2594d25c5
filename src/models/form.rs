//! Form model: the client-facing derivation of a record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{FieldKind, RenderAs, ValueType};

/// A rendering-ready field of a form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value_type: ValueType,
    pub kind: FieldKind,
    /// Whether the client must supply a value when saving
    pub is_required: bool,
    /// Widget the field renders as; declared on the field or defaulted by the deriver
    pub render_as: RenderAs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
}

/// Reference from a composite form to one of its child forms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildForm {
    /// Name of the Form the child resolves to
    pub form_name: String,
    /// Field in the child form that links back to the parent's key
    pub link_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Client-facing form derived from a record
///
/// Field order is carried by `field_order`; `fields` maps each name to its
/// rendering-ready definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Name of the record this form was derived from
    pub record_name: String,
    /// Supported server operations as a membership map
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub operations: BTreeMap<String, bool>,
    pub field_order: Vec<String>,
    pub fields: BTreeMap<String, DataField>,
    /// Ordered key-field names; absent when the record declares no key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_fields: Option<Vec<String>>,
    /// Child forms of a composite record, keyed by child name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_forms: Option<BTreeMap<String, ChildForm>>,
}

impl Form {
    /// Create an empty form for the given record
    pub fn new(name: impl Into<String>, record_name: impl Into<String>) -> Self {
        let name = name.into();
        let id = Self::generate_id(&name);
        Self {
            id,
            name,
            label: None,
            record_name: record_name.into(),
            operations: BTreeMap::new(),
            field_order: Vec::new(),
            fields: BTreeMap::new(),
            key_fields: None,
            child_forms: None,
        }
    }

    /// Generate a deterministic UUID v5 for a form based on its name
    ///
    /// The same form name always produces the same id, so repeated compilation
    /// runs emit stable artifacts.
    pub fn generate_id(name: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_DNS, format!("form:{name}").as_bytes())
    }

    /// Data fields in declaration order
    pub fn ordered_fields(&self) -> impl Iterator<Item = &DataField> {
        self.field_order.iter().filter_map(|n| self.fields.get(n))
    }

    /// Key-field names bound as retrieval parameters, empty when keyless
    pub fn key_field_params(&self) -> Vec<String> {
        self.key_fields.clone().unwrap_or_default()
    }
}
