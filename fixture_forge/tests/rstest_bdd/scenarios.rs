//! Binds the behavioural feature files to the step registry.

use crate::fixtures::{ForgeContext, forge_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/list_building.feature",
    fixtures = [forge_context: ForgeContext]
);
