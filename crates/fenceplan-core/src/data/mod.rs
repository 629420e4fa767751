//! Reference data
//!
//! Manufacturer tables that feed the calculations but are not part of the
//! algorithms themselves.

pub mod corrugations;

pub use corrugations::{standard_table, CorrugationTable, HEIGHT_STEP_MM};
