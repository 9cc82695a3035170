//! Display models consumed by the member editing UI.
//!
//! These match the frontend interfaces exactly; they are created fresh per request
//! and never persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MembershipScenario, OwnerRef, PropertyValue};

/// Tab id of the synthetic tab holding the generic fields.
pub const GENERIC_TAB_ID: i64 = -1;

/// A single property as rendered by the editing UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProperty {
    pub alias: String,
    pub label: String,
    #[serde(default)]
    pub value: PropertyValue,
    /// Property editor view; `"readonlyvalue"` renders the value inert.
    pub view: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, PropertyValue>,
}

/// An ordered grouping of display properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: i64,
    pub label: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub properties: Vec<DisplayProperty>,
}

/// Rendering-ready projection of a member for the editing UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Uuid>,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub member_type_alias: String,
    pub member_type_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    pub tabs: Vec<Tab>,
    pub membership_scenario: MembershipScenario,
    /// Canonical membership alias -> concrete provider alias for the lock, approval
    /// and comments roles.
    pub provider_field_mapping: BTreeMap<String, String>,
}

impl MemberDisplay {
    /// Iterate every property across all tabs.
    pub fn properties(&self) -> impl Iterator<Item = &DisplayProperty> {
        self.tabs.iter().flat_map(|tab| tab.properties.iter())
    }

    /// Look up a property by alias across all tabs.
    pub fn property(&self, alias: &str) -> Option<&DisplayProperty> {
        self.properties().find(|prop| prop.alias == alias)
    }
}

/// Flat, non-editing projection of a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberBasicView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<Uuid>,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub member_type_alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
    pub properties: Vec<DisplayProperty>,
}
