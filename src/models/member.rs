//! Domain member entity as provided by the persistence layer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conventions;

use super::PropertyValue;

/// Sentinel identity for members synthesized from an external user record: not a real
/// stored entity, but not new either.
pub const SYNTHESIZED_MEMBER_ID: i64 = i64::MAX;

/// Member type metadata carried by the entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberTypeInfo {
    pub alias: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl MemberTypeInfo {
    /// Placeholder type for members synthesized from an external provider.
    pub fn generic() -> Self {
        Self {
            alias: conventions::MEMBER_TYPE_ALIAS.to_string(),
            name: conventions::MEMBER_TYPE_ALIAS.to_string(),
            icon: None,
        }
    }
}

/// Reference to the user who owns an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRef {
    pub id: i64,
    pub name: String,
}

/// A dynamic property on a member, defined by the member type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProperty {
    pub alias: String,
    pub label: String,
    #[serde(default)]
    pub value: PropertyValue,
    /// Property editor view used when the property is editable.
    #[serde(default)]
    pub view: String,
    /// Tab the layout engine assigned this property to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    /// False while the backing property type has not been persisted yet.
    #[serde(default = "default_true")]
    pub type_has_identity: bool,
}

fn default_true() -> bool {
    true
}

/// A domain member entity.
///
/// `id` is `None` for a member that has not been persisted yet. Property aliases are
/// unique within `properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Uuid>,
    pub username: String,
    pub email: String,
    /// Stored password hash or placeholder; empty when no password is set yet.
    #[serde(default)]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_password_changed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub is_locked_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub member_type: MemberTypeInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    #[serde(default)]
    pub properties: Vec<MemberProperty>,
    /// Free-form transient values (generated passwords and the like).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub additional_data: BTreeMap<String, PropertyValue>,
}

impl MemberEntity {
    /// Create a blank, unsaved member of the given type.
    pub fn new(username: &str, email: &str, member_type: MemberTypeInfo) -> Self {
        Self {
            id: None,
            key: None,
            username: username.to_string(),
            email: email.to_string(),
            password: String::new(),
            created_at: None,
            updated_at: None,
            last_password_changed_at: None,
            is_approved: false,
            is_locked_out: false,
            comments: None,
            member_type,
            owner: None,
            properties: Vec::new(),
            additional_data: BTreeMap::new(),
        }
    }

    /// Whether this entity has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}
