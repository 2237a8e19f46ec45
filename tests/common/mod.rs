//! Common utilities for integration tests
//!
//! Each test crate uses a subset of these helpers.
#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mock_models::{ConstantYield, NoYield};
#[allow(unused_imports)]
pub use test_helpers::{assert_series_consistent, create_scenario, relative_error};
