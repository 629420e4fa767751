//! Fenceplan Settings Crate
//!
//! Handles plan files: loading, saving, validation, and normalization of
//! loosely typed fields into a [`FencePlan`] in millimeters.

pub mod config;
pub mod error;

pub use config::{
    CorrugationEntry, OpeningEntry, PanelSection, PlanFile, SideEntry, SidesSection,
    APP_DIR_NAME, DEFAULT_PLAN_FILE,
};
pub use error::{ConfigError, SettingsError, SettingsResult};

use fenceplan_layout::FencePlan;
use std::path::Path;

/// Load a plan file and normalize it for the layout
pub fn load_plan(path: &Path) -> SettingsResult<FencePlan> {
    Ok(PlanFile::load_from_file(path)?.to_plan())
}
