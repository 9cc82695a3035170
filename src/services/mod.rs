//! External collaborator interfaces consumed by the mapper.
//!
//! These are potentially-latent external calls; an absent or empty result is an
//! ordinary outcome, never an error.

use crate::models::MemberTypeInfo;

/// Member type lookups.
pub trait MemberTypeRegistry: Send + Sync {
    /// Find a member type by alias.
    fn find_type(&self, alias: &str) -> Option<MemberTypeInfo>;
}

/// Role enumeration and membership checks.
pub trait RoleService: Send + Sync {
    /// All known role names. May contain duplicates; callers de-duplicate.
    fn all_roles(&self) -> Vec<String>;

    /// Whether the given user belongs to the given role.
    fn is_user_in_role(&self, username: &str, role: &str) -> bool;
}

/// Localized text lookups.
pub trait TextService: Send + Sync {
    /// Resolve a localized string by category and key.
    fn text(&self, category: &str, key: &str) -> String;
}
