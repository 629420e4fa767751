use anyhow::{Context, Result};
use fenceplan::PlanFile;
use std::path::PathBuf;

pub fn run(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = super::resolve_plan_path(path)?;

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; use --force to overwrite it",
            path.display()
        );
    }

    PlanFile::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write plan file {}", path.display()))?;

    tracing::info!("Wrote default plan to {}", path.display());
    println!("{}", path.display());
    Ok(())
}
