//! Master template synthesis
//!
//! A master template is never expanded directly. It yields a list, a view,
//! and a save template named by convention, wired together with default
//! buttons and menus: the list row-click opens the view, the list "new"
//! button and the view "edit" button open the save page.

use crate::models::template::{
    ButtonSpec, ListTemplate, MasterTemplate, MenuEntry, PageTemplate, SaveTemplate, ViewTemplate,
};

/// Derive the three concrete templates of a master template
pub fn synthesize(master: &MasterTemplate) -> [PageTemplate; 3] {
    let list_name = format!("{}List", master.name);
    let view_name = format!("{}View", master.name);
    let save_name = format!("{}Save", master.name);

    let list = ListTemplate {
        name: list_name,
        form_name: master.form_name.clone(),
        label: master.label.clone(),
        columns: None,
        filter_fields: Vec::new(),
        menus: vec![MenuEntry {
            name: "view".to_string(),
            target_page: view_name.clone(),
            parameters: Vec::new(),
        }],
        new_button: Some(ButtonSpec {
            name: "new".to_string(),
            label: Some("New".to_string()),
            target_page: save_name.clone(),
        }),
    };

    let view = ViewTemplate {
        name: view_name,
        form_name: master.form_name.clone(),
        label: master.label.clone(),
        tabs: None,
        edit_button: Some(ButtonSpec {
            name: "edit".to_string(),
            label: Some("Edit".to_string()),
            target_page: save_name.clone(),
        }),
        add_button: None,
    };

    let save = SaveTemplate {
        name: save_name,
        form_name: master.form_name.clone(),
        label: master.label.clone(),
        hide_fields: Vec::new(),
        tabs: None,
    };

    [
        PageTemplate::List(list),
        PageTemplate::View(view),
        PageTemplate::Save(save),
    ]
}
