//! # Fenceplan Core
//!
//! Core types and utilities shared by the Fenceplan crates: unit
//! normalization, loosely typed field values, perimeter side identities,
//! plinth systems, and the corrugation reference table.

pub mod data;
pub mod error;
pub mod field;
pub mod side;
pub mod units;

pub use data::{standard_table, CorrugationTable, HEIGHT_STEP_MM};
pub use error::{Error, Result};
pub use field::FieldValue;
pub use side::{PanelType, PlinthSystem, SideId};
pub use units::{
    format_length, from_canonical, parse_length, parse_quantity, to_canonical, LengthUnit,
};
