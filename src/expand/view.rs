//! View page expansion: a read-only detail surface

use super::{key_inputs, layout_fields, page_shell};
use crate::diagnostics::DiagnosticLog;
use crate::models::form::Form;
use crate::models::page::{Action, Button, Page};
use crate::models::template::{ButtonSpec, ViewTemplate};

/// Expand a view template against its form
///
/// Builds a `get` action bound to the key fields and a `close` action;
/// optional edit/add buttons get a navigation action each. Fields render
/// read-only: list-bound fields as select-output, everything else as output.
pub fn expand(template: &ViewTemplate, form: &Form, log: &mut DiagnosticLog) -> Page {
    let mut page = page_shell(&template.name, template.label.as_deref(), form);
    let key_params = form.key_field_params();

    page.inputs = key_inputs(form);
    page.actions
        .insert("get".to_string(), Action::server_call("get", key_params.clone()));
    page.actions.insert("close".to_string(), Action::dismiss());
    page.on_load_actions.push("get".to_string());

    if let Some(button) = &template.edit_button {
        wire_button(&mut page, button, key_params.clone());
    }
    if let Some(button) = &template.add_button {
        // Adding starts from a blank record; no key parameters travel along.
        wire_button(&mut page, button, Vec::new());
    }

    layout_fields(
        &mut page,
        form,
        template.tabs.as_deref(),
        &[],
        true,
        log,
    );
    page
}

fn wire_button(page: &mut Page, button: &ButtonSpec, parameters: Vec<String>) {
    page.actions.insert(
        button.name.clone(),
        Action::navigate(&button.target_page, parameters),
    );
    page.buttons.push(Button {
        name: button.name.clone(),
        label: button.label.clone().unwrap_or_else(|| button.name.clone()),
        action: button.name.clone(),
    });
}
