//! Plain-text reports for the terminal

use fenceplan_core::{format_length, LengthUnit};
use fenceplan_layout::{BillOfMaterials, PerimeterTotals, SideLayout};

fn side_row(side: &SideLayout, unit: LengthUnit) -> String {
    format!(
        "{:<6} {:>10} {:>10} {:>7} {:>9} {:>6}  {}",
        side.side.to_string(),
        format_length(side.length, unit, 2),
        format_length(side.available, unit, 2),
        side.panel_count,
        format!("{:.1} mm", side.gap),
        side.linear_posts,
        side.system.label()
    )
}

/// Per-side table, totals, and warnings
pub fn layout_report(totals: &PerimeterTotals, unit: LengthUnit) -> String {
    let mut out = String::new();

    if totals.sides.is_empty() {
        out.push_str("No active sides.\n");
    } else {
        out.push_str(&format!(
            "{:<6} {:>10} {:>10} {:>7} {:>9} {:>6}  System\n",
            "Side", "Length", "Available", "Panels", "Gap", "Posts"
        ));
        for side in &totals.sides {
            out.push_str(&side_row(side, unit));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Total length:  {}\n",
        format_length(totals.total_length, unit, 2)
    ));
    out.push_str(&format!("Panels:        {}\n", totals.total_panels));
    out.push_str(&format!("Posts:         {}\n", totals.total_posts));
    out.push_str(&format!("Plinths:       {}\n", totals.total_plinths));
    out.push_str(&format!("Corners:       {}\n", totals.corners));
    out.push_str(&format!(
        "Clamps:        {} ({} per post)\n",
        totals.total_clamps, totals.clamps_per_post
    ));

    if totals.has_warnings() {
        out.push_str("\nWarnings:\n");
        for warning in &totals.warnings {
            out.push_str(&format!("  - {}\n", warning));
        }
    }

    out
}

/// Bill of materials as an aligned table
pub fn bom_report(bom: &BillOfMaterials) -> String {
    let width = bom
        .iter()
        .map(|item| item.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Element".len());

    let mut out = format!("{:<width$}  {:>8}  Details\n", "Element", "Quantity");
    for item in bom {
        out.push_str(&format!(
            "{:<width$}  {:>8}  {}\n",
            item.name, item.quantity, item.details
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fenceplan_layout::{build_bom, compute_layout, FencePlan};

    #[test]
    fn test_layout_report_lists_sides_and_warnings() {
        let plan = FencePlan::default();
        let totals = compute_layout(&plan);
        let report = layout_report(&totals, plan.display_unit);

        assert!(report.starts_with("Side"));
        assert!(report.contains("front"));
        assert!(report.contains("10.00 m"));
        assert!(report.contains(&format!("Panels:        {}", totals.total_panels)));
        assert!(report.contains("Warnings:"));
        assert!(report.contains("gap out of tolerance"));
    }

    #[test]
    fn test_layout_report_without_sides() {
        let mut plan = FencePlan::default();
        for side in plan.sides.iter_mut() {
            side.enabled = false;
        }
        plan.gate.enabled = false;
        plan.wicket.enabled = false;
        let report = layout_report(&compute_layout(&plan), LengthUnit::Meter);
        assert!(report.starts_with("No active sides."));
        assert!(!report.contains("Warnings:"));
    }

    #[test]
    fn test_layout_report_totals_block() {
        let plan = FencePlan::default();
        let totals = compute_layout(&plan);
        let report = layout_report(&totals, plan.display_unit);
        let lines: Vec<&str> = report.lines().collect();

        let start = lines.iter().position(|l| l.starts_with("Total length:")).unwrap();
        assert_eq!(lines[start - 1], "");
        assert_eq!(lines[start], "Total length:  50.00 m");
        assert_eq!(lines[start + 4], "Corners:       4");
        assert_eq!(
            lines[start + 5],
            format!(
                "Clamps:        {} ({} per post)",
                totals.total_clamps, totals.clamps_per_post
            )
        );
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_bom_report_alignment() {
        let plan = FencePlan::default();
        let bom = build_bom(&plan, &compute_layout(&plan));
        let report = bom_report(&bom);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), bom.len() + 1);
        let column = lines[0].find("Quantity").unwrap();
        assert!(lines[1].starts_with("Fence panel"));
        assert!(lines.iter().all(|l| l.len() > column));
    }
}
