//! Binds the feature files to the step registry.

use crate::fixtures::{ResolveContext, resolve_context};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/override_rules.feature",
    fixtures = [resolve_context: ResolveContext]
);
