//! Test helpers shared across crates.
//!
//! Provides fixture loading for scenario directories and text helpers for
//! parsing step arguments.

pub mod fixtures;
pub mod text;
