//! Page model: a concrete, renderable screen definition
//!
//! A page carries its action map, button list, declared inputs, and a root
//! panel holding the component tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{ActionKind, RenderAs};

/// An invokable action of a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub kind: ActionKind,
    /// Server operation name, for `serverCall` actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Target page, for `navigate` actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_page: Option<String>,
    /// Field names bound as parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl Action {
    /// A server-call action for the given operation
    pub fn server_call(operation: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            kind: ActionKind::ServerCall,
            operation: Some(operation.into()),
            target_page: None,
            parameters,
        }
    }

    /// A navigation action to the given page
    pub fn navigate(target_page: impl Into<String>, parameters: Vec<String>) -> Self {
        Self {
            kind: ActionKind::Navigate,
            operation: None,
            target_page: Some(target_page.into()),
            parameters,
        }
    }

    /// A dismiss action closing the current page
    pub fn dismiss() -> Self {
        Self {
            kind: ActionKind::Dismiss,
            operation: None,
            target_page: None,
            parameters: Vec::new(),
        }
    }
}

/// A button wired to a named action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub name: String,
    pub label: String,
    /// Name of the action invoked when pressed
    pub action: String,
}

/// An event-to-action binding
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    /// Event name the trigger listens on
    pub on: String,
    pub action: String,
}

/// A declared navigation input of a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default = "default_true")]
    pub required: bool,
}

impl PageInput {
    pub fn required() -> Self {
        Self {
            label: None,
            required: true,
        }
    }
}

/// A field widget inside a panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldComponent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub render_as: RenderAs,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// A container of components; the root of every page is a panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the direct children are tab panels
    #[serde(default)]
    pub tabbed: bool,
    #[serde(default)]
    pub components: Vec<PageComponent>,
}

impl Panel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            tabbed: false,
            components: Vec::new(),
        }
    }

    /// Names of the direct children, for uniqueness checks
    pub fn child_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name()).collect()
    }
}

/// A column of a table component
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub render_as: RenderAs,
    #[serde(default)]
    pub editable: bool,
}

/// A tabular widget over the page's form rows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableComponent {
    pub name: String,
    #[serde(default)]
    pub editable: bool,
    /// Action invoked when a row is clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_row_click: Option<String>,
    pub columns: Vec<TableColumn>,
}

/// A component of a page tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "componentType", rename_all = "camelCase")]
pub enum PageComponent {
    Field(FieldComponent),
    Panel(Panel),
    Table(TableComponent),
    Button(Button),
}

impl PageComponent {
    /// Name of the component, unique within its container level
    pub fn name(&self) -> &str {
        match self {
            PageComponent::Field(c) => &c.name,
            PageComponent::Panel(c) => &c.name,
            PageComponent::Table(c) => &c.name,
            PageComponent::Button(c) => &c.name,
        }
    }

    /// Whether the component holds children of its own
    pub fn is_container(&self) -> bool {
        matches!(self, PageComponent::Panel(_))
    }
}

/// A concrete, renderable page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: Uuid,
    pub name: String,
    /// Form the page binds to; absent for free-form authored pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the page appears in the application menu
    #[serde(default = "default_true")]
    pub menu_visible: bool,
    /// Whether the page appears in its module's navigation
    #[serde(default = "default_true")]
    pub module_visible: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inputs: BTreeMap<String, PageInput>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
    /// Action names run when the page loads, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub on_load_actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub triggers: Vec<Trigger>,
    pub root: Panel,
}

impl Page {
    /// Create an empty page with a bare root panel
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = Self::generate_id(&name);
        Self {
            id,
            name,
            form_name: None,
            title: None,
            menu_visible: true,
            module_visible: true,
            inputs: BTreeMap::new(),
            actions: BTreeMap::new(),
            buttons: Vec::new(),
            on_load_actions: Vec::new(),
            triggers: Vec::new(),
            root: Panel::new("root"),
        }
    }

    /// Generate a deterministic UUID v5 for a page based on its name
    pub fn generate_id(name: &str) -> Uuid {
        Uuid::new_v5(&Uuid::NAMESPACE_DNS, format!("page:{name}").as_bytes())
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::Form;

    #[test]
    fn test_action_constructors() {
        let get = Action::server_call("get", vec!["id".to_string()]);
        assert_eq!(get.kind, ActionKind::ServerCall);
        assert_eq!(get.operation.as_deref(), Some("get"));
        assert_eq!(get.parameters, vec!["id"]);

        let nav = Action::navigate("CustomerView", Vec::new());
        assert_eq!(nav.kind, ActionKind::Navigate);
        assert_eq!(nav.target_page.as_deref(), Some("CustomerView"));

        let close = Action::dismiss();
        assert_eq!(close.kind, ActionKind::Dismiss);
        assert!(close.operation.is_none());
    }

    #[test]
    fn test_component_name_dispatch() {
        let field = PageComponent::Field(FieldComponent {
            name: "email".to_string(),
            label: None,
            render_as: RenderAs::Text,
            read_only: false,
            hidden: false,
        });
        assert_eq!(field.name(), "email");
        assert!(!field.is_container());

        let panel = PageComponent::Panel(Panel::new("details"));
        assert_eq!(panel.name(), "details");
        assert!(panel.is_container());
    }

    #[test]
    fn test_page_roundtrip() {
        let mut page = Page::new("CustomerView");
        page.actions
            .insert("get".to_string(), Action::server_call("get", Vec::new()));
        let json = serde_json::to_string(&page).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }

    #[test]
    fn test_page_id_deterministic() {
        assert_eq!(Page::generate_id("X"), Page::generate_id("X"));
        assert_ne!(Page::generate_id("X"), Form::generate_id("X"));
    }
}
