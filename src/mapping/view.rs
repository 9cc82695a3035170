//! Top-level view assembly.

use uuid::Uuid;

use crate::conventions;
use crate::errors::MapperError;
use crate::models::{
    DisplayProperty, ExternalUserRecord, MemberBasicView, MemberDisplay, MemberEntity,
    MemberTypeInfo, Tab, GENERIC_TAB_ID, SYNTHESIZED_MEMBER_ID,
};
use crate::provider::{provider_field_mapping, MembershipProvider};
use crate::services::{MemberTypeRegistry, RoleService, TextService};

use super::generic::{apply_new_member_approval, compose_generic_properties};
use super::scenario::classify;
use super::tabs::{resolve_tabs, to_display_property};

/// Assembles display views for members, adapting to the active membership provider.
///
/// Stateless: each call works on its own freshly-built view, so one mapper can serve
/// concurrent requests as long as the provider configuration stays stable.
pub struct MemberViewMapper<'a> {
    provider: &'a dyn MembershipProvider,
    types: &'a dyn MemberTypeRegistry,
    roles: &'a dyn RoleService,
    text: &'a dyn TextService,
}

impl<'a> MemberViewMapper<'a> {
    /// Create a mapper over the four collaborators.
    pub fn new(
        provider: &'a dyn MembershipProvider,
        types: &'a dyn MemberTypeRegistry,
        roles: &'a dyn RoleService,
        text: &'a dyn TextService,
    ) -> Self {
        Self {
            provider,
            types,
            roles,
            text,
        }
    }

    /// Produce the full editing view for a member.
    ///
    /// Steps are ordered: metadata is copied first, the scenario and provider field
    /// mapping are attached, the dynamic tabs are resolved, then the generic fields
    /// are appended as their own tab and the new-member approval default is applied
    /// across the merged result. Absent optional data degrades to defaults; nothing
    /// in assembly fails for missing data.
    pub fn to_display(&self, entity: &MemberEntity) -> MemberDisplay {
        let scenario = classify(self.provider, self.types);
        let field_mapping = provider_field_mapping(self.provider);

        let mut tabs = resolve_tabs(entity, self.provider, self.text);

        let generic = compose_generic_properties(entity, self.provider, self.roles, self.text);
        tabs.push(Tab {
            id: GENERIC_TAB_ID,
            label: self.text.text("general", "properties"),
            sort_order: tabs.len() as i32,
            properties: generic,
        });

        let tabs = apply_new_member_approval(tabs, entity, self.provider);

        MemberDisplay {
            id: entity.id,
            key: entity.key,
            username: entity.username.clone(),
            email: entity.email.clone(),
            icon: entity.member_type.icon.clone(),
            member_type_alias: entity.member_type.alias.clone(),
            member_type_name: entity.member_type.name.clone(),
            owner: entity.owner.clone(),
            tabs,
            membership_scenario: scenario,
            provider_field_mapping: field_mapping,
        }
    }

    /// Produce the flat, non-editing projection of a member.
    ///
    /// Provider-controlled membership properties are excluded: their values are set
    /// through the provider and must not round-trip through an editing form.
    pub fn to_basic(&self, entity: &MemberEntity) -> MemberBasicView {
        let properties: Vec<DisplayProperty> = entity
            .properties
            .iter()
            .filter(|prop| !conventions::is_reserved_alias(&prop.alias))
            .map(to_display_property)
            .collect();

        MemberBasicView {
            id: entity.id,
            key: entity.key,
            username: entity.username.clone(),
            email: entity.email.clone(),
            icon: entity.member_type.icon.clone(),
            member_type_alias: entity.member_type.alias.clone(),
            owner: entity.owner.clone(),
            properties,
        }
    }

    /// Synthesize a member entity from an externally-authenticated user record.
    ///
    /// The entity is given the sentinel maximum identity so the rest of the system
    /// treats it as existing without mistaking it for a stored row. The password is
    /// an opaque stand-in when the account already exists (the record carries a
    /// creation timestamp) and empty for a brand-new account.
    ///
    /// Password recovery question and answer are not supported for external accounts
    /// and are left unset; the provider owns them.
    pub fn from_external_user(
        &self,
        record: &ExternalUserRecord,
    ) -> Result<MemberEntity, MapperError> {
        let key = Uuid::parse_str(record.provider_key.trim())?;

        let password = if record.created_at.is_some() {
            Uuid::new_v4().simple().to_string()
        } else {
            String::new()
        };

        let member_type = self
            .types
            .find_type(conventions::MEMBER_TYPE_ALIAS)
            .unwrap_or_else(MemberTypeInfo::generic);

        Ok(MemberEntity {
            id: Some(SYNTHESIZED_MEMBER_ID),
            key: Some(key),
            username: record.username.clone(),
            email: record.email.clone(),
            password,
            created_at: record.created_at,
            updated_at: record.last_activity_at,
            last_password_changed_at: record.last_password_changed_at,
            is_approved: false,
            is_locked_out: false,
            comments: record.comment.clone(),
            member_type,
            owner: None,
            properties: Vec::new(),
            additional_data: Default::default(),
        })
    }

    /// Convert a batch of external records, reporting failures per record.
    ///
    /// A record whose key cannot be converted yields an error in its slot without
    /// aborting the rest of the batch.
    pub fn from_external_users(
        &self,
        records: &[ExternalUserRecord],
    ) -> Vec<Result<MemberEntity, MapperError>> {
        records
            .iter()
            .map(|record| {
                let converted = self.from_external_user(record);
                if let Err(err) = &converted {
                    tracing::warn!(
                        username = %record.username,
                        "external user conversion failed: {}",
                        err
                    );
                }
                converted
            })
            .collect()
    }

    /// Produce the editing view for an external user record directly.
    pub fn external_user_to_display(
        &self,
        record: &ExternalUserRecord,
    ) -> Result<MemberDisplay, MapperError> {
        let entity = self.from_external_user(record)?;
        Ok(self.to_display(&entity))
    }
}
