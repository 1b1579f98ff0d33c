//! Shared fixtures for the list-building scenarios.

use fixture_forge::{Builder, FixtureResult};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use test_helpers::pojo::{Pojo, Text};

/// Scenario state carried between list-building steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ForgeContext {
    /// Builder configured by the `Given` steps.
    pub builder: Slot<Builder>,
    /// Names assigned to explicitly declared elements, in order.
    pub element_names: Slot<Vec<Text>>,
    /// Value shared by every element of the list.
    pub shared_value: Slot<Text>,
    /// Outcome of the most recent build.
    pub result: Slot<FixtureResult<Vec<Pojo>>>,
}

/// Creates a clean context for each scenario.
#[fixture]
pub fn forge_context() -> ForgeContext {
    ForgeContext::default()
}
