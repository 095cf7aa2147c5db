//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Stroke parsing and formatting
//! - Rules loading and validation
//! - Dictionary generation, serialisation and collisions

#[cfg(test)]
mod rules_tests;
