//! Shared state for the override-rule scenarios.

use config_resolver::ResolverError;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use serde_json::Value;

/// Accumulates the config document and user groups built up by `given`
/// steps, and the outcome recorded by the `when` step.
#[derive(Debug, Default, ScenarioState)]
pub struct ResolveContext {
    pub defaults: Slot<Value>,
    pub rules: Slot<Vec<Value>>,
    pub groups: Slot<Vec<String>>,
    pub outcome: Slot<Result<Value, ResolverError>>,
}

/// Creates an empty context for each scenario.
#[fixture]
pub fn resolve_context() -> ResolveContext {
    ResolveContext::default()
}
