//! Page alteration
//!
//! Applies named patches to pages in place. Flat attributes are merged
//! first; the component tree is then edited depth-first under a single task
//! countdown shared by the whole walk, so once every addition, change, and
//! deletion has fired the remaining subtree passes through untouched.

use std::collections::BTreeMap;

use tracing::debug;

use crate::diagnostics::DiagnosticLog;
use crate::models::alteration::PageAlteration;
use crate::models::page::{Page, PageComponent, Panel};

/// Apply every alteration of the design to its target page
///
/// An alteration naming a page that does not exist is skipped with a
/// warning. Returns the number of alterations that found their page.
pub fn apply_alterations(
    pages: &mut BTreeMap<String, Page>,
    alterations: &BTreeMap<String, PageAlteration>,
    log: &mut DiagnosticLog,
) -> usize {
    let mut applied = 0;
    for (name, alteration) in alterations {
        match pages.get_mut(name) {
            Some(page) => {
                apply_alteration(page, alteration, log);
                applied += 1;
            }
            None => log.warning(
                name,
                format!("alteration targets unknown page '{name}'; skipped"),
            ),
        }
    }
    applied
}

/// Apply one alteration to one page, in place
pub fn apply_alteration(page: &mut Page, alteration: &PageAlteration, log: &mut DiagnosticLog) {
    apply_flat_attributes(page, alteration);

    let budget = alteration.task_count();
    if budget > 0 {
        let remaining = apply_tree_edits(&mut page.root, alteration, budget, &page.name, log);
        debug!(
            page = %page.name,
            tasks = budget,
            unapplied = remaining,
            "Tree edits applied"
        );
    }
}

/// Phase 1: scalars overwrite, maps merge add-or-replace, arrays append
fn apply_flat_attributes(page: &mut Page, alteration: &PageAlteration) {
    if let Some(title) = &alteration.title {
        page.title = Some(title.clone());
    }
    if let Some(form_name) = &alteration.form_name {
        page.form_name = Some(form_name.clone());
    }
    if let Some(menu_visible) = alteration.menu_visible {
        page.menu_visible = menu_visible;
    }
    if let Some(module_visible) = alteration.module_visible {
        page.module_visible = module_visible;
    }

    for (name, action) in &alteration.actions {
        page.actions.insert(name.clone(), action.clone());
    }
    for (name, input) in &alteration.inputs {
        page.inputs.insert(name.clone(), input.clone());
    }

    page.on_load_actions
        .extend(alteration.on_load_actions.iter().cloned());
    page.buttons.extend(alteration.buttons.iter().cloned());
    page.triggers.extend(alteration.triggers.iter().cloned());
}

/// Phase 2: depth-first tree edit under a shared countdown
///
/// Returns the remaining task budget so sibling walks continue the same
/// countdown. A deletion that collides with a change on the same child is
/// ignored with a warning; the change still applies.
fn apply_tree_edits(
    panel: &mut Panel,
    alteration: &PageAlteration,
    budget: usize,
    page_name: &str,
    log: &mut DiagnosticLog,
) -> usize {
    let mut remaining = budget;
    let prior = std::mem::take(&mut panel.components);
    let mut next = Vec::with_capacity(prior.len());

    for mut component in prior {
        // Budget exhausted: the rest of the tree passes through unchanged.
        if remaining == 0 {
            next.push(component);
            continue;
        }

        let name = component.name().to_string();

        if alteration.deletions.contains(&name) {
            remaining = remaining.saturating_sub(1);
            if alteration.changes.contains_key(&name) {
                log.warning(
                    page_name,
                    format!("deletion of '{name}' ignored; a change targets the same component"),
                );
            } else {
                continue;
            }
        }

        if let Some(change) = alteration.changes.get(&name) {
            change.apply_to(&mut component);
            remaining = remaining.saturating_sub(1);
        }

        let addition = alteration.additions.get(&name);
        if let Some(addition) = addition {
            remaining = remaining.saturating_sub(1);
            if addition.insert_before {
                next.extend(addition.components.iter().cloned());
            }
        }

        if remaining > 0 {
            if let PageComponent::Panel(child) = &mut component {
                remaining = apply_tree_edits(child, alteration, remaining, page_name, log);
            }
        }

        next.push(component);
        if let Some(addition) = addition {
            if !addition.insert_before {
                next.extend(addition.components.iter().cloned());
            }
        }
    }

    panel.components = next;
    remaining
}
