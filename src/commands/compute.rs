use anyhow::{Context, Result};
use fenceplan::report::layout_report;
use fenceplan::{compute_layout, PerimeterPreset};
use std::path::PathBuf;

pub fn run(
    plan: Option<PathBuf>,
    preset: Option<PerimeterPreset>,
    json: bool,
    strict: bool,
) -> Result<()> {
    let path = super::resolve_plan_path(plan)?;
    let plan = super::load_plan(&path, preset)?;

    if strict {
        plan.validate().context("Plan rejected in strict mode")?;
    }

    let totals = compute_layout(&plan);

    if json {
        let text = serde_json::to_string_pretty(&totals).context("Failed to serialize totals")?;
        println!("{}", text);
    } else {
        print!("{}", layout_report(&totals, plan.display_unit));
    }

    Ok(())
}
