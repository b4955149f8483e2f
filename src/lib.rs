#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal calorie tracker: log food and exercise, edit entries in place.

pub mod logging;
pub mod model;
pub mod tui;
