//! Composition of the built-in generic fields: login, email, password and group
//! membership.

use std::collections::BTreeMap;

use crate::conventions;
use crate::models::{DisplayProperty, MemberEntity, PropertyValue, Tab};
use crate::provider::{MembershipProvider, ProviderRole};
use crate::services::{RoleService, TextService};

use super::tabs::replace_property;

/// Compose the generic editable fields for one entity, in fixed order.
///
/// Pure over its arguments: composing twice for the same entity and provider state
/// yields identical output.
pub fn compose_generic_properties(
    entity: &MemberEntity,
    provider: &dyn MembershipProvider,
    roles: &dyn RoleService,
    text: &dyn TextService,
) -> Vec<DisplayProperty> {
    vec![
        login_property(entity, provider, text),
        email_property(entity, text),
        password_property(entity, provider, text),
        membergroup_property(&entity.username, roles, text),
    ]
}

/// Build the login field.
///
/// External providers cannot rename existing accounts, so the field is editable only
/// for new entities or under the native provider.
fn login_property(
    entity: &MemberEntity,
    provider: &dyn MembershipProvider,
    text: &dyn TextService,
) -> DisplayProperty {
    let mut prop = DisplayProperty {
        alias: conventions::login_alias(),
        label: text.text("general", "login"),
        value: PropertyValue::Text(entity.username.clone()),
        view: "readonlyvalue".to_string(),
        config: BTreeMap::new(),
    };

    if provider.allows_username_edit(entity.is_new()) {
        prop.view = "textbox".to_string();
        prop.config
            .insert("isRequired".to_string(), PropertyValue::Bool(true));
    }

    prop
}

fn email_property(entity: &MemberEntity, text: &dyn TextService) -> DisplayProperty {
    DisplayProperty {
        alias: conventions::email_alias(),
        label: text.text("general", "email"),
        value: PropertyValue::Text(entity.email.clone()),
        view: "email".to_string(),
        config: BTreeMap::from([("isRequired".to_string(), PropertyValue::Bool(true))]),
    }
}

/// Build the password field.
///
/// The value only carries the transient sub-values the UI needs: a pre-generated
/// password if one exists, and the pending new password when creating a member.
/// Absent additional-data entries resolve to null.
fn password_property(
    entity: &MemberEntity,
    provider: &dyn MembershipProvider,
    text: &dyn TextService,
) -> DisplayProperty {
    let mut value = BTreeMap::new();
    for key in [
        conventions::GENERATED_PASSWORD_KEY,
        conventions::NEW_PASSWORD_KEY,
    ] {
        value.insert(
            key.to_string(),
            entity
                .additional_data
                .get(key)
                .cloned()
                .unwrap_or(PropertyValue::Null),
        );
    }

    let mut config = provider.password_config();
    // The change-password toggle is only shown once a password is assigned.
    config.insert(
        "hasPassword".to_string(),
        PropertyValue::Bool(!entity.password.trim().is_empty()),
    );

    DisplayProperty {
        alias: conventions::password_alias(),
        label: text.text("general", "password"),
        value: PropertyValue::Map(value),
        view: "changepassword".to_string(),
        config,
    }
}

fn membergroup_property(
    username: &str,
    roles: &dyn RoleService,
    text: &dyn TextService,
) -> DisplayProperty {
    DisplayProperty {
        alias: conventions::membergroup_alias(),
        label: text.text("content", "membergroup"),
        value: member_group_value(username, roles),
        view: "membergroups".to_string(),
        config: BTreeMap::from([("isRequired".to_string(), PropertyValue::Bool(true))]),
    }
}

/// Build the role membership map for a username.
///
/// Every distinct role appears exactly once. A blank username maps every role to
/// `false` without performing a membership lookup. Internal access-control roles are
/// included with their true membership state; hiding them is a rendering concern.
pub fn member_group_value(username: &str, roles: &dyn RoleService) -> PropertyValue {
    let mut result: BTreeMap<String, PropertyValue> = BTreeMap::new();
    let username_blank = username.trim().is_empty();

    for role in roles.all_roles() {
        if result.contains_key(&role) {
            continue;
        }
        let in_role = !username_blank && roles.is_user_in_role(username, &role);
        result.insert(role, PropertyValue::Bool(in_role));
    }

    PropertyValue::Map(result)
}

/// Default new members to the approved state.
///
/// Rewrites the display property matching the provider's approval alias to `1`.
/// Idempotent; a tab set without that property is returned unchanged.
pub fn apply_new_member_approval(
    tabs: Vec<Tab>,
    entity: &MemberEntity,
    provider: &dyn MembershipProvider,
) -> Vec<Tab> {
    if !entity.is_new() {
        return tabs;
    }

    let approved_alias = provider.field_alias(ProviderRole::Approved).to_string();
    replace_property(tabs, &approved_alias, |prop| DisplayProperty {
        value: PropertyValue::Int(1),
        ..prop
    })
}
