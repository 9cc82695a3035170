//! Property value representation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A property or configuration value as exchanged with the editing UI.
///
/// Kept as an explicit union rather than raw JSON so serialization and tests stay
/// precise. `Map` covers the structured values (password sub-fields, group membership
/// flags).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Text(String),
    Map(BTreeMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Whether this value is the truthy sentinel used by flag properties.
    ///
    /// Flag properties store `"1"`, `1` or `true` for the affirmative state.
    pub fn is_truthy_flag(&self) -> bool {
        match self {
            PropertyValue::Bool(flag) => *flag,
            PropertyValue::Int(number) => *number == 1,
            PropertyValue::Text(text) => text == "1",
            _ => false,
        }
    }

    /// The contained text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The contained map, if this is a structured value.
    pub fn as_map(&self) -> Option<&BTreeMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_untagged() {
        assert_eq!(serde_json::json!(PropertyValue::Null), serde_json::json!(null));
        assert_eq!(serde_json::json!(PropertyValue::Int(1)), serde_json::json!(1));
        assert_eq!(
            serde_json::json!(PropertyValue::Map(BTreeMap::from([(
                "hasPassword".to_string(),
                PropertyValue::Bool(false)
            )]))),
            serde_json::json!({"hasPassword": false})
        );
    }

    #[test]
    fn test_truthy_flag() {
        assert!(PropertyValue::Text("1".to_string()).is_truthy_flag());
        assert!(PropertyValue::Int(1).is_truthy_flag());
        assert!(PropertyValue::Bool(true).is_truthy_flag());
        assert!(!PropertyValue::Text("0".to_string()).is_truthy_flag());
        assert!(!PropertyValue::Null.is_truthy_flag());
    }
}
