//! Membership scenario classification.

use serde::{Deserialize, Serialize};

/// Which authentication backend is active and how it relates to the member type
/// system.
///
/// A function of process-wide provider state at evaluation time, never stored per
/// entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipScenario {
    /// The native membership provider is installed.
    NativeSystem,
    /// An external provider is installed and the conventional member type exists.
    ExternalLinkedToType,
    /// An external provider is installed with no member type to link to.
    ExternalStandalone,
}

impl MembershipScenario {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipScenario::NativeSystem => "NativeSystem",
            MembershipScenario::ExternalLinkedToType => "ExternalLinkedToType",
            MembershipScenario::ExternalStandalone => "ExternalStandalone",
        }
    }
}
