//! Record and field models for the SDK
//!
//! Records are the server-side data-shape definitions supplied by the
//! application design. A record is either `simple` (owns its fields),
//! `extended` (derives from a main record), or `composite` (a main record
//! plus linked child records).

use serde::{Deserialize, Serialize};

use super::enums::{FieldKind, RenderAs, ValueType};

/// A single field of a record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,
    /// Role the field plays (key / required / optional)
    pub kind: FieldKind,
    /// Value type
    #[serde(default)]
    pub value_type: ValueType,
    /// Named list this field's values are drawn from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
    /// Explicit rendering hint; the form deriver computes a default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_as: Option<RenderAs>,
    /// Display label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Field {
    /// Create a new field with the given name, kind, and value type
    pub fn new(name: impl Into<String>, kind: FieldKind, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            kind,
            value_type,
            list_name: None,
            render_as: None,
            label: None,
        }
    }

    /// Bind this field's values to a named list
    pub fn with_list(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = Some(list_name.into());
        self
    }

    /// Set an explicit rendering hint
    pub fn with_render_as(mut self, render_as: RenderAs) -> Self {
        self.render_as = Some(render_as);
        self
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Field subset selection of an extended record
///
/// Serialized either as the literal `"*"` (keep every field of the main
/// record) or as an explicit list of field names whose order becomes the
/// resolved field order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldSelection {
    Names(Vec<String>),
    Wildcard(String),
}

impl FieldSelection {
    /// The wildcard selection, `"*"`
    pub fn all() -> Self {
        FieldSelection::Wildcard("*".to_string())
    }

    /// Whether this selection keeps every field of the main record
    pub fn is_all(&self) -> bool {
        matches!(self, FieldSelection::Wildcard(_))
    }
}

/// A record owning its own ordered field list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRecord {
    /// Record name; must equal the record's key in the design map
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether a Form is derived for this record
    #[serde(default = "default_true")]
    pub client_visible: bool,
    /// Server operations the record supports (get, save, filter, ...)
    #[serde(default)]
    pub operations: Vec<String>,
    pub fields: Vec<Field>,
}

impl SimpleRecord {
    /// Create a new simple record with the given name and fields
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            label: None,
            client_visible: true,
            operations: Vec::new(),
            fields,
        }
    }

    /// Names of the key fields, in declaration order
    pub fn key_field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.kind.is_key())
            .map(|f| f.name.clone())
            .collect()
    }
}

/// A record deriving its shape from a main record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedRecord {
    pub name: String,
    /// Name of the record this one extends; must resolve to a non-composite record
    pub main_record_name: String,
    /// Subset / reordering of the main record's fields; absent keeps all
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_names: Option<FieldSelection>,
    /// Fields appended to the selection, or replacing same-named fields in place
    #[serde(default)]
    pub additional_fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Overrides the main record's visibility when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_visible: Option<bool>,
    /// Overrides the main record's operations when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operations: Option<Vec<String>>,
}

impl ExtendedRecord {
    /// Create a new extended record referencing the given main record
    pub fn new(name: impl Into<String>, main_record_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            main_record_name: main_record_name.into(),
            field_names: None,
            additional_fields: Vec::new(),
            label: None,
            client_visible: None,
            operations: None,
        }
    }
}

/// A linked child record of a composite record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChildRecord {
    /// Mapping key the child form is published under
    pub name: String,
    /// Name of the child record (and of the Form it resolves to)
    pub record_name: String,
    /// Field in the child record that links back to the parent's key
    pub link_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A record composed of a main record plus linked child records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompositeRecord {
    pub name: String,
    /// Main record whose fields the composite presents
    pub main_record_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default = "default_true")]
    pub client_visible: bool,
    #[serde(default)]
    pub child_records: Vec<ChildRecord>,
}

/// A record definition of any of the three kinds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "recordType", rename_all = "camelCase")]
pub enum Record {
    Simple(SimpleRecord),
    Extended(ExtendedRecord),
    Composite(CompositeRecord),
}

impl Record {
    /// Name of the record
    pub fn name(&self) -> &str {
        match self {
            Record::Simple(r) => &r.name,
            Record::Extended(r) => &r.name,
            Record::Composite(r) => &r.name,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Record::Composite(_))
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, Record::Extended(_))
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tagged_serde() {
        let json = r#"{
            "recordType": "extended",
            "name": "Employee",
            "mainRecordName": "Person",
            "fieldNames": ["id", "name"],
            "additionalFields": [
                {"name": "salary", "kind": "required", "valueType": "decimal"}
            ]
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        match &record {
            Record::Extended(ext) => {
                assert_eq!(ext.main_record_name, "Person");
                assert_eq!(
                    ext.field_names,
                    Some(FieldSelection::Names(vec![
                        "id".to_string(),
                        "name".to_string()
                    ]))
                );
                assert_eq!(ext.additional_fields.len(), 1);
            }
            _ => panic!("Expected extended record"),
        }
        assert_eq!(record.name(), "Employee");
    }

    #[test]
    fn test_field_selection_wildcard() {
        let sel: FieldSelection = serde_json::from_str("\"*\"").unwrap();
        assert!(sel.is_all());
        let sel: FieldSelection = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert!(!sel.is_all());
    }

    #[test]
    fn test_key_field_names_in_order() {
        let record = SimpleRecord::new(
            "Order",
            vec![
                Field::new("tenant", FieldKind::PrimaryKey, ValueType::Text),
                Field::new("label", FieldKind::Optional, ValueType::Text),
                Field::new("id", FieldKind::GeneratedPrimaryKey, ValueType::Integer),
            ],
        );
        assert_eq!(record.key_field_names(), vec!["tenant", "id"]);
    }

    #[test]
    fn test_client_visible_defaults_true() {
        let json = r#"{"name": "Person", "fields": []}"#;
        let record: SimpleRecord = serde_json::from_str(json).unwrap();
        assert!(record.client_visible);
    }
}
