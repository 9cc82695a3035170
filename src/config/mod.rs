//! Configuration module for the member view mapper.
//!
//! Describes the process-wide membership provider via environment variables with
//! sensible defaults.

use std::env;

use crate::conventions;

/// Membership provider configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the installed membership provider (empty = none installed)
    pub provider_name: String,
    /// Whether the installed provider is the native one
    pub provider_is_native: bool,
    /// Property alias backing the lock-state role
    pub lock_alias: String,
    /// Property alias backing the approval role
    pub approved_alias: String,
    /// Property alias backing the comments role
    pub comments_alias: String,
    /// Minimum password length enforced by the provider
    pub min_password_length: u32,
    /// Minimum count of non-alphanumeric password characters
    pub min_non_alphanumeric_chars: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let provider_name = env::var("MEMBER_PROVIDER_NAME")
            .unwrap_or_else(|_| conventions::NATIVE_PROVIDER_NAME.to_string());

        let provider_is_native = env::var("MEMBER_PROVIDER_NATIVE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(provider_name == conventions::NATIVE_PROVIDER_NAME);

        let lock_alias = env::var("MEMBER_LOCK_ALIAS")
            .unwrap_or_else(|_| conventions::IS_LOCKED_OUT.to_string());

        let approved_alias = env::var("MEMBER_APPROVED_ALIAS")
            .unwrap_or_else(|_| conventions::IS_APPROVED.to_string());

        let comments_alias = env::var("MEMBER_COMMENTS_ALIAS")
            .unwrap_or_else(|_| conventions::COMMENTS.to_string());

        let min_password_length = env::var("MEMBER_MIN_PASSWORD_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(8);

        let min_non_alphanumeric_chars = env::var("MEMBER_MIN_NON_ALPHANUMERIC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);

        Self {
            provider_name,
            provider_is_native,
            lock_alias,
            approved_alias,
            comments_alias,
            min_password_length,
            min_non_alphanumeric_chars,
        }
    }
}
