//! Flag extraction tests
//!
//! Contains test suites for the YCM flag extractor:
//! - Scanner state machine tests
//! - Flag map aggregation and rendering tests
//! - Database loading tests
//! - Template parsing and substitution tests
//! - End-to-end extraction tests against a temporary directory

#[cfg(test)]
mod template_tests;
