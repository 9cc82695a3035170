//! Tab layout for a member's dynamic properties.

use std::collections::BTreeMap;

use crate::models::{DisplayProperty, MemberEntity, MemberProperty, PropertyValue, Tab};
use crate::provider::{MembershipProvider, ProviderRole};
use crate::services::TextService;

/// Lay out the entity's dynamic properties into tabs and apply the lock-state
/// visibility override.
pub fn resolve_tabs(
    entity: &MemberEntity,
    provider: &dyn MembershipProvider,
    text: &dyn TextService,
) -> Vec<Tab> {
    let tabs = base_layout(entity, text);
    apply_lock_override(tabs, provider, text)
}

/// Group persisted dynamic properties into tabs, in first-seen group order.
///
/// Properties whose backing type has no identity yet are skipped: there is nothing to
/// render for them until the type is saved.
fn base_layout(entity: &MemberEntity, text: &dyn TextService) -> Vec<Tab> {
    let mut groups: Vec<(String, Vec<&MemberProperty>)> = Vec::new();

    for prop in entity.properties.iter().filter(|p| p.type_has_identity) {
        let label = prop
            .group
            .clone()
            .unwrap_or_else(|| text.text("general", "properties"));
        match groups.iter().position(|(name, _)| *name == label) {
            Some(index) => groups[index].1.push(prop),
            None => groups.push((label, vec![prop])),
        }
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(index, (label, mut props))| {
            props.sort_by_key(|p| p.sort_order);
            Tab {
                id: index as i64 + 1,
                label,
                sort_order: index as i32,
                properties: props.into_iter().map(to_display_property).collect(),
            }
        })
        .collect()
}

/// Project a dynamic property into its display form.
pub(crate) fn to_display_property(prop: &MemberProperty) -> DisplayProperty {
    DisplayProperty {
        alias: prop.alias.clone(),
        label: prop.label.clone(),
        value: prop.value.clone(),
        view: prop.view.clone(),
        config: BTreeMap::new(),
    }
}

/// Render the lock-state property inert unless the member is actually locked out.
///
/// An admin can only un-lock a member: the affirmative state stays editable, anything
/// else becomes a read-only localized "no".
fn apply_lock_override(
    tabs: Vec<Tab>,
    provider: &dyn MembershipProvider,
    text: &dyn TextService,
) -> Vec<Tab> {
    let lock_alias = provider.field_alias(ProviderRole::LockedOut).to_string();
    let no_label = text.text("general", "no");

    replace_property(tabs, &lock_alias, |prop| {
        if prop.value.is_truthy_flag() {
            prop
        } else {
            DisplayProperty {
                view: "readonlyvalue".to_string(),
                value: PropertyValue::Text(no_label.clone()),
                ..prop
            }
        }
    })
}

/// Produce a new tab sequence with the property at `alias` rewritten.
///
/// Layout output is treated as immutable; replacing instead of mutating keeps reused
/// layouts free of aliasing surprises.
pub(crate) fn replace_property<F>(tabs: Vec<Tab>, alias: &str, rewrite: F) -> Vec<Tab>
where
    F: Fn(DisplayProperty) -> DisplayProperty,
{
    tabs.into_iter()
        .map(|mut tab| {
            let properties = std::mem::take(&mut tab.properties);
            tab.properties = properties
                .into_iter()
                .map(|prop| {
                    if prop.alias == alias {
                        rewrite(prop)
                    } else {
                        prop
                    }
                })
                .collect();
            tab
        })
        .collect()
}
