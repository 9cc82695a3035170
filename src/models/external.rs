//! User records sourced from an external authentication system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as reported by a non-native membership provider.
///
/// No password value is trusted from this source; the provider owns credential state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserRecord {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Absent for accounts that have not actually been created yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_password_changed_at: Option<DateTime<Utc>>,
    /// Opaque provider-specific key; expected to parse as a UUID.
    pub provider_key: String,
}
