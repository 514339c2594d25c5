//! Page template models
//!
//! A template is a parametrized recipe for generating one or more pages from
//! a form. The `master` kind is never expanded directly; it synthesizes a
//! list, a view, and a save template by naming convention.

use serde::{Deserialize, Serialize};

/// Navigation entry of a list page (row menu or row click)
///
/// This is the canonical action-wiring shape; `parameters` left empty means
/// "bind the form's key fields" at expansion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Action name the entry is published under
    pub name: String,
    /// Page navigated to
    pub target_page: String,
    /// Field names bound as navigation parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

/// Button declaration on a template, wired to a navigation action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ButtonSpec {
    /// Button and action name
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Page navigated to when pressed
    pub target_page: String,
}

/// Tab declaration on a view or save template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TabSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Field names laid out on this tab
    pub fields: Vec<String>,
}

/// Column declaration on a grid template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridColumn {
    /// Field name the column binds to
    pub name: String,
    /// Editable columns keep the field's own widget; others force read-only output
    #[serde(default = "default_true")]
    pub editable: bool,
}

/// Master template: synthesizes `<name>List`, `<name>View`, and `<name>Save`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MasterTemplate {
    pub name: String,
    pub form_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// List page template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListTemplate {
    pub name: String,
    pub form_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Explicit column field names; absent shows every form field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Field names bound as filter-action parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_fields: Vec<String>,
    /// Row navigation entries; the first doubles as the row-click action
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menus: Vec<MenuEntry>,
    /// Button creating a new record, wired to its own navigation action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_button: Option<ButtonSpec>,
}

/// View page template (read-only detail surface)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewTemplate {
    pub name: String,
    pub form_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<TabSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_button: Option<ButtonSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_button: Option<ButtonSpec>,
}

/// Save page template (modal-style edit surface)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveTemplate {
    pub name: String,
    pub form_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Field names left out of the layout
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hide_fields: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs: Option<Vec<TabSpec>>,
}

/// Grid page template (editable table surface)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridTemplate {
    pub name: String,
    pub form_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub columns: Vec<GridColumn>,
}

/// A page template of any of the five kinds
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "templateType", rename_all = "camelCase")]
pub enum PageTemplate {
    Master(MasterTemplate),
    List(ListTemplate),
    View(ViewTemplate),
    Save(SaveTemplate),
    Grid(GridTemplate),
}

impl PageTemplate {
    /// Name of the template (and of the page it expands to)
    pub fn name(&self) -> &str {
        match self {
            PageTemplate::Master(t) => &t.name,
            PageTemplate::List(t) => &t.name,
            PageTemplate::View(t) => &t.name,
            PageTemplate::Save(t) => &t.name,
            PageTemplate::Grid(t) => &t.name,
        }
    }

    /// Name of the form the template expands against
    pub fn form_name(&self) -> &str {
        match self {
            PageTemplate::Master(t) => &t.form_name,
            PageTemplate::List(t) => &t.form_name,
            PageTemplate::View(t) => &t.form_name,
            PageTemplate::Save(t) => &t.form_name,
            PageTemplate::Grid(t) => &t.form_name,
        }
    }

    /// Kind tag, as serialized
    pub fn kind_name(&self) -> &'static str {
        match self {
            PageTemplate::Master(_) => "master",
            PageTemplate::List(_) => "list",
            PageTemplate::View(_) => "view",
            PageTemplate::Save(_) => "save",
            PageTemplate::Grid(_) => "grid",
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_tagged_serde() {
        let yaml = r#"
templateType: list
name: CustomerList
formName: Customer
filterFields: [name]
menus:
  - name: view
    targetPage: CustomerView
"#;
        let tpl: PageTemplate = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tpl.kind_name(), "list");
        assert_eq!(tpl.name(), "CustomerList");
        assert_eq!(tpl.form_name(), "Customer");
        match tpl {
            PageTemplate::List(list) => {
                assert_eq!(list.menus.len(), 1);
                assert_eq!(list.menus[0].target_page, "CustomerView");
                assert!(list.menus[0].parameters.is_empty());
            }
            _ => panic!("Expected list template"),
        }
    }

    #[test]
    fn test_unknown_template_kind_is_a_parse_error() {
        let yaml = "templateType: carousel\nname: X\nformName: Y\n";
        let result: Result<PageTemplate, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_column_editable_defaults_true() {
        let col: GridColumn = serde_json::from_str(r#"{"name": "qty"}"#).unwrap();
        assert!(col.editable);
    }
}
