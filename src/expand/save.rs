//! Save page expansion: a modal-style edit surface

use super::{key_inputs, layout_fields, page_shell};
use crate::diagnostics::DiagnosticLog;
use crate::models::form::Form;
use crate::models::page::{Action, Page};
use crate::models::template::SaveTemplate;

/// Expand a save template against its form
///
/// The page carries exactly the `get`, `save`, `cancel`, and `close`
/// actions, lays fields out editable (honoring `hide_fields`), and is
/// excluded from menu and module navigation.
pub fn expand(template: &SaveTemplate, form: &Form, log: &mut DiagnosticLog) -> Page {
    let mut page = page_shell(&template.name, template.label.as_deref(), form);
    let key_params = form.key_field_params();

    page.inputs = key_inputs(form);
    page.actions
        .insert("get".to_string(), Action::server_call("get", key_params));
    page.actions
        .insert("save".to_string(), Action::server_call("save", Vec::new()));
    page.actions.insert("cancel".to_string(), Action::dismiss());
    page.actions.insert("close".to_string(), Action::dismiss());
    page.on_load_actions.push("get".to_string());

    page.menu_visible = false;
    page.module_visible = false;

    layout_fields(
        &mut page,
        form,
        template.tabs.as_deref(),
        &template.hide_fields,
        false,
        log,
    );
    page
}
