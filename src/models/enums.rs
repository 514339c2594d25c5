//! Shared enums for the design and artifact models

use serde::{Deserialize, Serialize};

/// Role a field plays within its record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// Client-supplied primary key
    PrimaryKey,
    /// Server-generated primary key
    GeneratedPrimaryKey,
    /// Mandatory data field
    Required,
    /// Optional data field
    Optional,
}

impl FieldKind {
    /// Whether this kind participates in the record's key
    pub fn is_key(&self) -> bool {
        matches!(self, FieldKind::PrimaryKey | FieldKind::GeneratedPrimaryKey)
    }

    /// Whether a value must be supplied by the client when saving
    ///
    /// Generated keys are assigned server-side, so they are not required input
    /// even though they are part of the key.
    pub fn is_required_input(&self) -> bool {
        matches!(self, FieldKind::PrimaryKey | FieldKind::Required)
    }
}

/// Value type of a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValueType {
    #[default]
    Text,
    Integer,
    Decimal,
    Boolean,
    Date,
    Timestamp,
}

/// Widget a data field renders as on the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RenderAs {
    /// Free text input
    Text,
    /// Boolean checkbox
    Checkbox,
    /// Dropdown selector bound to a named list
    Select,
    /// Read-only output
    Output,
    /// Read-only output of a list-bound value (label, not raw value)
    SelectOutput,
}

impl RenderAs {
    /// The read-only counterpart of this widget, used by display-only surfaces
    pub fn as_read_only(&self) -> RenderAs {
        match self {
            RenderAs::Select | RenderAs::SelectOutput => RenderAs::SelectOutput,
            _ => RenderAs::Output,
        }
    }
}

/// What a page action does when invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    /// Invoke a server operation on the bound form
    ServerCall,
    /// Navigate to another page
    Navigate,
    /// Close the current page or dialog
    Dismiss,
}
