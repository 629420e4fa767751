use fenceplan::report::{bom_report, layout_report};
use fenceplan::{build_bom, compute_layout, load_plan, PerimeterPreset, PlanFile, SideId};
use tempfile::TempDir;

#[test]
fn test_default_plan_from_disk_to_reports() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("plan.toml");
    PlanFile::default().save_to_file(&path).unwrap();

    let plan = load_plan(&path).unwrap();
    let totals = compute_layout(&plan);
    assert_eq!(totals.corners, 4);
    assert_eq!(totals.side(SideId::Front).unwrap().reserved, 5000.0);

    let report = layout_report(&totals, plan.display_unit);
    assert!(report.contains("Corners:       4"));

    let bom = build_bom(&plan, &totals);
    let table = bom_report(&bom);
    assert!(table.contains("Gate"));
    assert!(table.contains("Wicket"));

    let csv_path = temp_dir.path().join("bom.csv");
    std::fs::write(&csv_path, bom.to_csv()).unwrap();
    let written = std::fs::read_to_string(&csv_path).unwrap();
    assert!(written.starts_with("\u{feff}Element;Quantity;Details\n"));
}

#[test]
fn test_preset_applied_to_file() {
    let mut file = PlanFile::default();
    file.apply_preset(PerimeterPreset::FrontOnly);
    let totals = compute_layout(&file.to_plan());
    assert_eq!(totals.corners, 0);
    assert_eq!(totals.sides.len(), 1);
    assert!(totals.corner_connectors.concrete_base == 0);
}
