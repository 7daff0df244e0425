//! Behavioural tests for override-rule resolution using `rstest-bdd`.
//!
//! [`fixtures`] holds the per-scenario state, [`steps`] registers the step
//! definitions and [`scenarios`] binds the feature files to both.

mod fixtures;
mod scenarios;
mod steps;
