//! Assertion helpers shared by the workspace test suites.

pub mod result;
