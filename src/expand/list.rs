//! List page expansion: a filterable read-only table

use super::{page_shell, table_column};
use crate::diagnostics::DiagnosticLog;
use crate::models::form::Form;
use crate::models::page::{Action, Button, Page, PageComponent, TableComponent};
use crate::models::template::ListTemplate;

/// Expand a list template against its form
///
/// Builds a `filter` action, one navigation action per menu entry (empty
/// entry parameters default to the form's key fields), an optional "new"
/// button with its own navigation action, and a single read-only table.
/// Columns default to every form field unless explicit names are given.
pub fn expand(template: &ListTemplate, form: &Form, log: &mut DiagnosticLog) -> Page {
    let mut page = page_shell(&template.name, template.label.as_deref(), form);

    page.actions.insert(
        "filter".to_string(),
        Action::server_call("filter", template.filter_fields.clone()),
    );
    page.on_load_actions.push("filter".to_string());

    for entry in &template.menus {
        let parameters = if entry.parameters.is_empty() {
            form.key_field_params()
        } else {
            entry.parameters.clone()
        };
        page.actions.insert(
            entry.name.clone(),
            Action::navigate(&entry.target_page, parameters),
        );
    }

    if let Some(button) = &template.new_button {
        page.actions.insert(
            button.name.clone(),
            Action::navigate(&button.target_page, Vec::new()),
        );
        page.buttons.push(Button {
            name: button.name.clone(),
            label: button.label.clone().unwrap_or_else(|| button.name.clone()),
            action: button.name.clone(),
        });
    }

    let columns = match &template.columns {
        Some(names) => {
            let mut columns = Vec::with_capacity(names.len());
            for name in names {
                match form.fields.get(name) {
                    Some(field) => columns.push(table_column(field, false)),
                    None => log.warning(
                        &page.name,
                        format!("column '{}' is not a field of form '{}'", name, form.name),
                    ),
                }
            }
            columns
        }
        None => form
            .ordered_fields()
            .map(|field| table_column(field, false))
            .collect(),
    };

    let table = TableComponent {
        name: format!("{}Table", form.name),
        editable: false,
        on_row_click: template.menus.first().map(|entry| entry.name.clone()),
        columns,
    };
    page.root.components.push(PageComponent::Table(table));
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{ActionKind, FieldKind, RenderAs, ValueType};
    use crate::models::record::{Field, SimpleRecord};
    use crate::models::template::{ButtonSpec, MenuEntry};
    use std::collections::BTreeMap;

    fn form() -> Form {
        let record = SimpleRecord::new(
            "Customer",
            vec![
                Field::new("id", FieldKind::PrimaryKey, ValueType::Integer),
                Field::new("name", FieldKind::Required, ValueType::Text),
                Field::new("country", FieldKind::Optional, ValueType::Text).with_list("countries"),
            ],
        );
        let mut resolved = BTreeMap::new();
        resolved.insert("Customer".to_string(), record);
        let mut log = DiagnosticLog::new();
        crate::forms::derive_forms(&resolved, &BTreeMap::new(), &mut log)
            .remove("Customer")
            .unwrap()
    }

    fn template() -> ListTemplate {
        ListTemplate {
            name: "CustomerList".to_string(),
            form_name: "Customer".to_string(),
            label: None,
            columns: None,
            filter_fields: vec!["name".to_string()],
            menus: vec![MenuEntry {
                name: "view".to_string(),
                target_page: "CustomerView".to_string(),
                parameters: Vec::new(),
            }],
            new_button: Some(ButtonSpec {
                name: "new".to_string(),
                label: Some("New".to_string()),
                target_page: "CustomerSave".to_string(),
            }),
        }
    }

    fn the_table(page: &Page) -> &TableComponent {
        match &page.root.components[0] {
            PageComponent::Table(table) => table,
            _ => panic!("Expected table component"),
        }
    }

    #[test]
    fn test_filter_action_bound_to_filter_fields() {
        let mut log = DiagnosticLog::new();
        let page = expand(&template(), &form(), &mut log);

        let filter = page.actions.get("filter").unwrap();
        assert_eq!(filter.kind, ActionKind::ServerCall);
        assert_eq!(filter.parameters, vec!["name"]);
        assert_eq!(page.on_load_actions, vec!["filter"]);
    }

    #[test]
    fn test_menu_entry_defaults_to_key_parameters() {
        let mut log = DiagnosticLog::new();
        let page = expand(&template(), &form(), &mut log);

        let view = page.actions.get("view").unwrap();
        assert_eq!(view.kind, ActionKind::Navigate);
        assert_eq!(view.target_page.as_deref(), Some("CustomerView"));
        assert_eq!(view.parameters, vec!["id"]);
    }

    #[test]
    fn test_new_button_has_own_action() {
        let mut log = DiagnosticLog::new();
        let page = expand(&template(), &form(), &mut log);

        let new = page.actions.get("new").unwrap();
        assert_eq!(new.kind, ActionKind::Navigate);
        assert!(new.parameters.is_empty());
        assert_eq!(page.buttons[0].label, "New");
    }

    #[test]
    fn test_columns_default_to_every_field() {
        let mut log = DiagnosticLog::new();
        let page = expand(&template(), &form(), &mut log);

        let table = the_table(&page);
        let names: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "country"]);
        assert!(!table.editable);
        assert_eq!(table.on_row_click.as_deref(), Some("view"));
        // Display-only columns force read-only widgets.
        assert_eq!(table.columns[1].render_as, RenderAs::Output);
        assert_eq!(table.columns[2].render_as, RenderAs::SelectOutput);
    }

    #[test]
    fn test_explicit_columns_and_unknown_column_warning() {
        let mut tpl = template();
        tpl.columns = Some(vec!["name".to_string(), "bogus".to_string()]);
        let mut log = DiagnosticLog::new();
        let page = expand(&tpl, &form(), &mut log);

        let table = the_table(&page);
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.columns[0].name, "name");
        assert_eq!(log.warning_count(), 1);
    }
}
