//! Page alteration model
//!
//! An alteration is a named patch applied to a page after expansion:
//! flat-attribute overrides plus tree add/change/delete instructions keyed
//! by child component name.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::enums::RenderAs;
use super::page::{Action, Button, PageComponent, PageInput, Trigger};

/// New sibling components inserted around a named child
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAddition {
    /// Insert immediately before the matched child instead of after it
    #[serde(default)]
    pub insert_before: bool,
    pub components: Vec<PageComponent>,
}

/// Attribute overrides applied to a named child component
///
/// Attributes are statically enumerated; an attribute a component kind does
/// not carry is ignored for that component.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render_as: Option<RenderAs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
}

impl ComponentChange {
    /// Shallow-overwrite the named attributes on the component
    pub fn apply_to(&self, component: &mut PageComponent) {
        match component {
            PageComponent::Field(field) => {
                if let Some(label) = &self.label {
                    field.label = Some(label.clone());
                }
                if let Some(render_as) = self.render_as {
                    field.render_as = render_as;
                }
                if let Some(read_only) = self.read_only {
                    field.read_only = read_only;
                }
                if let Some(hidden) = self.hidden {
                    field.hidden = hidden;
                }
            }
            PageComponent::Panel(panel) => {
                if let Some(label) = &self.label {
                    panel.label = Some(label.clone());
                }
            }
            PageComponent::Table(table) => {
                if let Some(editable) = self.editable {
                    table.editable = editable;
                }
            }
            PageComponent::Button(button) => {
                if let Some(label) = &self.label {
                    button.label = label.clone();
                }
            }
        }
    }
}

/// A named patch applied to one page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageAlteration {
    /// Name of the page the alteration targets; must equal the map key
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_visible: Option<bool>,
    /// Merged into the page's action map, add-or-replace
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, Action>,
    /// Merged into the page's input map, add-or-replace
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, PageInput>,
    /// Appended to the page's load-action list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_load_actions: Vec<String>,
    /// Appended to the page's button list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    /// Appended to the page's trigger list
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Trigger>,
    /// Sibling insertions keyed by the child they anchor to
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additions: BTreeMap<String, ComponentAddition>,
    /// Attribute overrides keyed by child name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub changes: BTreeMap<String, ComponentChange>,
    /// Children removed from the tree
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub deletions: BTreeSet<String>,
}

impl PageAlteration {
    /// Create an empty alteration for the given page
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Total number of tree-edit tasks, computed once before the walk
    pub fn task_count(&self) -> usize {
        self.additions.len() + self.changes.len() + self.deletions.len()
    }
}
