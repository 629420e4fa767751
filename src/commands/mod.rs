pub mod bom;
pub mod compute;
pub mod init;

use anyhow::{Context, Result};
use fenceplan::{FencePlan, PerimeterPreset, PlanFile};
use std::path::{Path, PathBuf};

/// Explicit path, or the user plan in the config directory
pub fn resolve_plan_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => PlanFile::default_path().context("Cannot locate the default plan file"),
    }
}

/// Load a plan file, apply an optional preset, and normalize it
pub fn load_plan(path: &Path, preset: Option<PerimeterPreset>) -> Result<FencePlan> {
    if !path.exists() {
        anyhow::bail!(
            "Plan file {} not found; create one with `fenceplan init`",
            path.display()
        );
    }

    let mut file = PlanFile::load_from_file(path)
        .with_context(|| format!("Failed to load plan file {}", path.display()))?;

    if let Some(preset) = preset {
        tracing::info!("Applying preset {}", preset);
        file.apply_preset(preset);
    }

    tracing::info!("Loaded plan {}", path.display());
    Ok(file.to_plan())
}
