//! # Fenceplan Layout
//!
//! Panel layout for perimeter fences built from fixed-width panels, posts,
//! and precast plinths.
//!
//! ## Modules
//!
//! - **Plan**: Sides, gate and wicket, and panel parameters ([`FencePlan`])
//! - **Solver**: Panel count and gap per side inside a tolerance band
//! - **Perimeter**: Corner detection and whole-property totals
//! - **Placement**: Gate and wicket position checks
//! - **Presets**: Common selections of fenced sides
//! - **BOM**: Bill of materials and its delimited text rendering
//!
//! ## Example
//!
//! ```
//! use fenceplan_layout::{build_bom, compute_layout, FencePlan};
//!
//! let plan = FencePlan::default();
//! let totals = compute_layout(&plan);
//! let bom = build_bom(&plan, &totals);
//! assert_eq!(bom.find("Fence panel").map(|i| i.quantity), Some(totals.total_panels));
//! ```

pub mod bom;
pub mod error;
pub mod perimeter;
pub mod placement;
pub mod plan;
pub mod presets;
pub mod solver;
pub mod warnings;

pub use bom::{build_bom, BillOfMaterials, BomItem, CSV_HEADER};
pub use error::{LayoutError, LayoutResult, ParameterError, ParameterResult};
pub use perimeter::{
    active_corners, compute_layout, count_corners, count_corners_by_system, CornerConnectors,
    PerimeterTotals,
};
pub use placement::check_openings;
pub use plan::{FencePlan, LayoutParameters, Opening, OpeningKind, SideConfig};
pub use presets::PerimeterPreset;
pub use solver::{solve_side, solve_spacing, SideLayout, SolveMethod, SpacingSolution};
pub use warnings::LayoutWarning;
