//! Classification of the active membership scenario.

use crate::conventions;
use crate::models::MembershipScenario;
use crate::provider::MembershipProvider;
use crate::services::MemberTypeRegistry;

/// Classify the current authentication mode.
///
/// Cheap and deterministic, so the result is never cached. A missing member type is
/// an ordinary outcome, not an error.
pub fn classify(
    provider: &dyn MembershipProvider,
    types: &dyn MemberTypeRegistry,
) -> MembershipScenario {
    if provider.is_native() {
        return MembershipScenario::NativeSystem;
    }

    let scenario = match types.find_type(conventions::MEMBER_TYPE_ALIAS) {
        Some(_) => MembershipScenario::ExternalLinkedToType,
        None => MembershipScenario::ExternalStandalone,
    };

    tracing::debug!(
        provider = provider.name(),
        scenario = scenario.as_str(),
        "classified membership scenario"
    );

    scenario
}
