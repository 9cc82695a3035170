//! Membership provider capability interface.
//!
//! The provider is a descriptor of the active authentication backend: callers query
//! it for identity, field aliases and password policy. It never authenticates
//! anything here, and callers never branch on a concrete provider type.

use std::collections::BTreeMap;

use crate::config::Config;
use crate::conventions;
use crate::errors::MapperError;
use crate::models::PropertyValue;

/// Logical roles a provider maps to concrete property aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderRole {
    LockedOut,
    Approved,
    Comments,
}

impl ProviderRole {
    /// Canonical property alias for this role.
    pub fn canonical_alias(&self) -> &'static str {
        match self {
            ProviderRole::LockedOut => conventions::IS_LOCKED_OUT,
            ProviderRole::Approved => conventions::IS_APPROVED,
            ProviderRole::Comments => conventions::COMMENTS,
        }
    }

    /// All roles, in mapping order.
    pub fn all() -> [ProviderRole; 3] {
        [
            ProviderRole::LockedOut,
            ProviderRole::Approved,
            ProviderRole::Comments,
        ]
    }
}

/// Capability descriptor for the active membership provider.
///
/// Pure queries against process-wide authentication configuration; no side effects.
pub trait MembershipProvider: Send + Sync {
    /// Name of the installed provider.
    fn name(&self) -> &str;

    /// Whether the native membership provider is installed.
    fn is_native(&self) -> bool;

    /// Concrete property alias backing the given role.
    fn field_alias(&self, role: ProviderRole) -> &str;

    /// Whether the username may be edited.
    ///
    /// External providers cannot rename existing accounts, so only new entities are
    /// editable under them.
    fn allows_username_edit(&self, entity_is_new: bool) -> bool {
        entity_is_new || self.is_native()
    }

    /// Password-policy configuration merged into the password field's editor config.
    fn password_config(&self) -> BTreeMap<String, PropertyValue> {
        BTreeMap::new()
    }
}

/// Build the canonical-alias -> provider-alias mapping for the three reserved roles.
pub fn provider_field_mapping(provider: &dyn MembershipProvider) -> BTreeMap<String, String> {
    ProviderRole::all()
        .iter()
        .map(|role| {
            (
                role.canonical_alias().to_string(),
                provider.field_alias(*role).to_string(),
            )
        })
        .collect()
}

/// Provider descriptor assembled from configuration.
///
/// This is the only implementation the crate ships; real providers live outside and
/// implement [`MembershipProvider`] themselves.
#[derive(Debug, Clone)]
pub struct ConfiguredProvider {
    pub name: String,
    pub native: bool,
    pub lock_alias: String,
    pub approved_alias: String,
    pub comments_alias: String,
    pub min_password_length: u32,
    pub min_non_alphanumeric_chars: u32,
}

impl ConfiguredProvider {
    /// Build the provider descriptor from configuration.
    ///
    /// Fails when the configuration names no provider at all; that is a wiring
    /// mistake, not a mappable state.
    pub fn from_config(config: &Config) -> Result<Self, MapperError> {
        if config.provider_name.trim().is_empty() {
            return Err(MapperError::MissingCollaborator(
                "no membership provider is configured".to_string(),
            ));
        }

        Ok(Self {
            name: config.provider_name.clone(),
            native: config.provider_is_native,
            lock_alias: config.lock_alias.clone(),
            approved_alias: config.approved_alias.clone(),
            comments_alias: config.comments_alias.clone(),
            min_password_length: config.min_password_length,
            min_non_alphanumeric_chars: config.min_non_alphanumeric_chars,
        })
    }
}

impl MembershipProvider for ConfiguredProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_native(&self) -> bool {
        self.native
    }

    fn field_alias(&self, role: ProviderRole) -> &str {
        match role {
            ProviderRole::LockedOut => &self.lock_alias,
            ProviderRole::Approved => &self.approved_alias,
            ProviderRole::Comments => &self.comments_alias,
        }
    }

    fn password_config(&self) -> BTreeMap<String, PropertyValue> {
        BTreeMap::from([
            (
                "minPasswordLength".to_string(),
                PropertyValue::Int(i64::from(self.min_password_length)),
            ),
            (
                "minNonAlphaNumericChars".to_string(),
                PropertyValue::Int(i64::from(self.min_non_alphanumeric_chars)),
            ),
        ])
    }
}
