//! Grid page expansion: an editable table surface

use super::{page_shell, table_column};
use crate::diagnostics::DiagnosticLog;
use crate::models::form::Form;
use crate::models::page::{Action, Page, PageComponent, TableComponent};
use crate::models::template::GridTemplate;

/// Expand a grid template against its form
///
/// Builds `getData`, `submitData`, and `cancel` actions and a single
/// editable table. Editable columns keep the field's own widget;
/// non-editable columns force read-only output.
pub fn expand(template: &GridTemplate, form: &Form, log: &mut DiagnosticLog) -> Page {
    let mut page = page_shell(&template.name, template.label.as_deref(), form);

    page.actions.insert(
        "getData".to_string(),
        Action::server_call("getData", Vec::new()),
    );
    page.actions.insert(
        "submitData".to_string(),
        Action::server_call("submitData", Vec::new()),
    );
    page.actions.insert("cancel".to_string(), Action::dismiss());
    page.on_load_actions.push("getData".to_string());

    let mut columns = Vec::with_capacity(template.columns.len());
    for column in &template.columns {
        match form.fields.get(&column.name) {
            Some(field) => columns.push(table_column(field, column.editable)),
            None => log.warning(
                &page.name,
                format!(
                    "grid column '{}' is not a field of form '{}'",
                    column.name, form.name
                ),
            ),
        }
    }

    let table = TableComponent {
        name: format!("{}Table", form.name),
        editable: true,
        on_row_click: None,
        columns,
    };
    page.root.components.push(PageComponent::Table(table));
    page
}
