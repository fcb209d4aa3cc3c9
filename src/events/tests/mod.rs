//! Event generation tests
//!
//! Contains test suites for event-handle generation:
//! - Taxonomy tests (ordering, identifiers)
//! - Exclusion rule tests
//! - Generator tests (counts, names, declarations)

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
mod rules_tests;
#[cfg(test)]
mod types_tests;
