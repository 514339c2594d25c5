//! Template expansion tests, run through the full pipeline

use app_design_sdk::models::{ApplicationDesign, PageComponent};
use app_design_sdk::pipeline::{compile_design, CompilerConfig};
use app_design_sdk::{ActionKind, RenderAs};

fn compile(yaml: &str) -> app_design_sdk::CompileOutput {
    let design = ApplicationDesign::from_yaml_str(yaml).unwrap();
    compile_design(&design, CompilerConfig::new()).unwrap()
}

const CUSTOMER_RECORD: &str = r#"
  Customer:
    recordType: simple
    name: Customer
    label: Customer
    operations: [get, save, filter]
    fields:
      - name: id
        kind: generatedPrimaryKey
        valueType: integer
      - name: name
        kind: required
      - name: country
        kind: optional
        listName: countries
"#;

mod master_tests {
    use super::*;

    #[test]
    fn test_master_always_yields_three_pages() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  Customer:
    templateType: master
    name: Customer
    formName: Customer
"#
        ));

        assert_eq!(output.pages.len(), 3);
        for name in ["CustomerList", "CustomerView", "CustomerSave"] {
            assert!(output.pages.contains_key(name), "missing {name}");
        }
    }

    #[test]
    fn test_master_wiring_connects_the_three_pages() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  Customer:
    templateType: master
    name: Customer
    formName: Customer
"#
        ));

        let list = &output.pages["CustomerList"];
        assert_eq!(
            list.actions["view"].target_page.as_deref(),
            Some("CustomerView")
        );
        assert_eq!(
            list.actions["new"].target_page.as_deref(),
            Some("CustomerSave")
        );

        let view = &output.pages["CustomerView"];
        assert_eq!(
            view.actions["edit"].target_page.as_deref(),
            Some("CustomerSave")
        );

        let save = &output.pages["CustomerSave"];
        assert!(!save.menu_visible);
        assert!(!save.module_visible);
    }
}

mod save_tests {
    use super::*;

    #[test]
    fn test_save_action_names_are_exact() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  CustomerSave:
    templateType: save
    name: CustomerSave
    formName: Customer
"#
        ));

        let page = &output.pages["CustomerSave"];
        let names: Vec<&str> = page.actions.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["cancel", "close", "get", "save"]);
        assert_eq!(page.actions["get"].parameters, vec!["id"]);
        assert_eq!(page.actions["cancel"].kind, ActionKind::Dismiss);
    }

    #[test]
    fn test_save_honors_hide_fields() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  CustomerSave:
    templateType: save
    name: CustomerSave
    formName: Customer
    hideFields: [country]
"#
        ));

        let page = &output.pages["CustomerSave"];
        let names: Vec<&str> = page.root.components.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["id", "name"]);
    }
}

mod view_tests {
    use super::*;

    #[test]
    fn test_view_forces_read_only_rendering() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  CustomerView:
    templateType: view
    name: CustomerView
    formName: Customer
"#
        ));

        let page = &output.pages["CustomerView"];
        for component in &page.root.components {
            match component {
                PageComponent::Field(field) => {
                    assert!(field.read_only);
                    if field.name == "country" {
                        assert_eq!(field.render_as, RenderAs::SelectOutput);
                    } else {
                        assert_eq!(field.render_as, RenderAs::Output);
                    }
                }
                other => panic!("unexpected component {:?}", other.name()),
            }
        }
    }

    #[test]
    fn test_view_tabs_one_panel_each() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  CustomerView:
    templateType: view
    name: CustomerView
    formName: Customer
    tabs:
      - name: general
        label: General
        fields: [id, name]
      - name: location
        fields: [country]
"#
        ));

        let page = &output.pages["CustomerView"];
        assert!(page.root.tabbed);
        let names: Vec<&str> = page.root.components.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["general", "location"]);
    }
}

mod grid_tests {
    use super::*;

    #[test]
    fn test_grid_actions_and_column_widgets() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  CustomerGrid:
    templateType: grid
    name: CustomerGrid
    formName: Customer
    columns:
      - name: id
        editable: false
      - name: name
      - name: country
"#
        ));

        let page = &output.pages["CustomerGrid"];
        for action in ["getData", "submitData", "cancel"] {
            assert!(page.actions.contains_key(action), "missing {action}");
        }

        match &page.root.components[0] {
            PageComponent::Table(table) => {
                assert!(table.editable);
                assert_eq!(table.columns[0].render_as, RenderAs::Output);
                assert_eq!(table.columns[1].render_as, RenderAs::Text);
                // Editable list-bound column keeps its selector.
                assert_eq!(table.columns[2].render_as, RenderAs::Select);
            }
            other => panic!("unexpected component {:?}", other.name()),
        }
    }
}

mod conflict_tests {
    use super::*;

    #[test]
    fn test_authored_page_survives_expansion() {
        let output = compile(&format!(
            r#"
records:{CUSTOMER_RECORD}
pageTemplates:
  Customer:
    templateType: master
    name: Customer
    formName: Customer
pages:
  CustomerView:
    id: 00000000-0000-0000-0000-000000000000
    name: CustomerView
    title: Hand-written view
    root:
      name: root
"#
        ));

        let page = &output.pages["CustomerView"];
        assert_eq!(page.title.as_deref(), Some("Hand-written view"));
        assert_eq!(output.report.diagnostics.warning_count(), 1);
        // The other two master pages still expand.
        assert!(output.pages.contains_key("CustomerList"));
        assert!(output.pages.contains_key("CustomerSave"));
    }

    #[test]
    fn test_template_without_form_is_excluded() {
        let output = compile(
            r#"
pageTemplates:
  GhostList:
    templateType: list
    name: GhostList
    formName: Ghost
"#,
        );
        assert!(output.pages.is_empty());
        assert_eq!(output.report.diagnostics.error_count(), 1);
        assert!(!output.report.is_success());
    }

    #[test]
    fn test_failed_record_skipped_silently_downstream() {
        // The template's form is missing because the record failed; the
        // only error diagnostics come from resolution and expansion, not a
        // re-derivation of the failure.
        let output = compile(
            r#"
records:
  Broken:
    recordType: extended
    name: Broken
    mainRecordName: Broken
pageTemplates:
  BrokenList:
    templateType: list
    name: BrokenList
    formName: Broken
"#,
        );
        assert!(output.forms.is_empty());
        assert!(output.pages.is_empty());
        assert_eq!(output.report.records_failed, 1);
    }
}
