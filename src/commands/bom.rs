use anyhow::{Context, Result};
use fenceplan::report::bom_report;
use fenceplan::{build_bom, compute_layout, PerimeterPreset};
use std::path::PathBuf;

pub fn run(
    plan: Option<PathBuf>,
    preset: Option<PerimeterPreset>,
    csv: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let path = super::resolve_plan_path(plan)?;
    let plan = super::load_plan(&path, preset)?;
    let totals = compute_layout(&plan);
    let bom = build_bom(&plan, &totals);

    let text = if csv { bom.to_csv() } else { bom_report(&bom) };

    match output {
        Some(output) => {
            std::fs::write(&output, text)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            tracing::info!(
                "Wrote bill of materials ({} items) to {}",
                bom.len(),
                output.display()
            );
        }
        None if csv => println!("{}", text),
        None => print!("{}", text),
    }

    Ok(())
}
