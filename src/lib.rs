//! # Fenceplan
//!
//! Fence planning calculator for perimeter fences built from fixed-width
//! panels, posts, and precast plinths.
//!
//! ## Architecture
//!
//! Fenceplan is organized as a workspace with multiple crates:
//!
//! 1. **fenceplan-core** - Units, loosely typed fields, sides, plinth systems, reference data
//! 2. **fenceplan-layout** - Per-side solver, perimeter totals, placement checks, bill of materials
//! 3. **fenceplan-settings** - Plan files (JSON/TOML) and their normalization
//! 4. **fenceplan** - This crate: re-exports, logging, text reports, and the CLI binary

pub mod report;

pub use fenceplan_core::{
    format_length, parse_length, parse_quantity, standard_table, CorrugationTable, Error,
    FieldValue, LengthUnit, PanelType, PlinthSystem, Result, SideId,
};
pub use fenceplan_layout::{
    build_bom, compute_layout, BillOfMaterials, BomItem, FencePlan, LayoutParameters,
    LayoutWarning, Opening, OpeningKind, PerimeterPreset, PerimeterTotals, SideConfig, SideLayout,
};
pub use fenceplan_settings::{load_plan, PlanFile, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging
///
/// Logs go to stderr so that reports on stdout stay machine-readable.
/// `RUST_LOG` overrides `default_level`.
pub fn init_logging(format: LogFormat, default_level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false),
            )
            .try_init()?,
    }

    Ok(())
}
