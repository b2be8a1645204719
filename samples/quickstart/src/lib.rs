//! # Quickstart Samples
//!
//! Runnable CRUD walkthroughs against MongoDB. Each sample resets its
//! database, seeds it with generated people and then exercises the driver
//! through a typed collection handle and a schema-less `Document` handle.
//!
//! - **read**: find by id, find by gender
//! - **update**: `$set` a phone by id, `$set` salaries in a range
//! - **delete**: delete by id, delete by salary range

pub mod delete;
pub mod read;
pub mod runner;
pub mod sample;
pub mod update;

pub use crate::delete::DeleteReport;
pub use crate::read::ReadReport;
pub use crate::runner::{
    database_config, run_sample, run_samples, select_samples, SampleContext, SampleOutcome,
};
pub use crate::sample::Sample;
pub use crate::update::UpdateReport;

/// Exclusive salary bounds used by the range filters.
pub const SALARY_LOWER_BOUND: f64 = 1200.0;
pub const SALARY_UPPER_BOUND: f64 = 3500.0;
