//! Naming conventions shared between the membership layer and the editing UI.
//!
//! The aliases defined here are reserved: they identify the built-in generic fields
//! and the provider-controlled membership properties, and are never treated as
//! ordinary dynamic properties.

/// Prefix marking the built-in generic field aliases.
pub const GENERIC_PROPERTY_PREFIX: &str = "_builtin_";

/// Canonical alias of the lock-state membership property.
pub const IS_LOCKED_OUT: &str = "memberLockedOut";

/// Canonical alias of the approval membership property.
pub const IS_APPROVED: &str = "memberApproved";

/// Canonical alias of the comments membership property.
pub const COMMENTS: &str = "memberComments";

/// Roles carrying this prefix are internal access-control roles.
pub const INTERNAL_ROLE_PREFIX: &str = "__internalRole";

/// Conventional alias of the member type an external provider links to.
pub const MEMBER_TYPE_ALIAS: &str = "Member";

/// Name of the native membership provider.
pub const NATIVE_PROVIDER_NAME: &str = "NativeMembershipProvider";

/// Additional-data key holding a pre-generated password.
pub const GENERATED_PASSWORD_KEY: &str = "generatedPassword";

/// Additional-data key holding the pending new password.
pub const NEW_PASSWORD_KEY: &str = "newPassword";

/// Alias of the built-in login field.
pub fn login_alias() -> String {
    format!("{}login", GENERIC_PROPERTY_PREFIX)
}

/// Alias of the built-in email field.
pub fn email_alias() -> String {
    format!("{}email", GENERIC_PROPERTY_PREFIX)
}

/// Alias of the built-in password field.
pub fn password_alias() -> String {
    format!("{}password", GENERIC_PROPERTY_PREFIX)
}

/// Alias of the built-in group membership field.
pub fn membergroup_alias() -> String {
    format!("{}membergroup", GENERIC_PROPERTY_PREFIX)
}

/// The membership property aliases controlled by the provider.
///
/// Their values are set through the provider, so they must not round-trip through an
/// editing form.
pub fn standard_property_aliases() -> [&'static str; 3] {
    [IS_LOCKED_OUT, IS_APPROVED, COMMENTS]
}

/// Whether an alias belongs to the reserved built-in set.
pub fn is_reserved_alias(alias: &str) -> bool {
    alias.starts_with(GENERIC_PROPERTY_PREFIX)
        || standard_property_aliases().contains(&alias)
}
