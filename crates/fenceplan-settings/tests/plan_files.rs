use fenceplan_core::{LengthUnit, PlinthSystem, SideId};
use fenceplan_layout::{compute_layout, FencePlan, PerimeterPreset};
use fenceplan_settings::{
    load_plan, ConfigError, CorrugationEntry, PlanFile, SettingsError, DEFAULT_PLAN_FILE,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(DEFAULT_PLAN_FILE);

    let mut file = PlanFile::default();
    file.sides.right.system = PlinthSystem::ChannelBase;
    file.corrugation_table.push(CorrugationEntry {
        height: 1500,
        corrugations: 3,
    });
    file.save_to_file(&path).unwrap();

    let loaded = PlanFile::load_from_file(&path).unwrap();
    assert_eq!(loaded, file);
}

#[test]
fn test_json_round_trip_in_new_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("plan.json");

    let mut file = PlanFile::default();
    file.apply_preset(PerimeterPreset::FrontRight);
    file.save_to_file(&path).unwrap();

    assert!(path.exists());
    assert_eq!(PlanFile::load_from_file(&path).unwrap(), file);
}

#[test]
fn test_hand_written_toml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("garden.toml");
    fs::write(
        &path,
        r#"
unit = "mm"

[panel]
width = 2500
height = "830"
type = "2D"
min_gap = 5
max_gap = 20

[sides.front]
length = "10000"
system = "beton"

[sides.right]
enabled = false

[sides.back]
enabled = false

[sides.left]
length = 10000
system = "channel_base"

[gate]
enabled = false

[wicket]
enabled = true
side = "left"
width = 1000
height = 1600
offset = ""
"#,
    )
    .unwrap();

    let plan = load_plan(&path).unwrap();
    assert_eq!(plan.display_unit, LengthUnit::Millimeter);
    assert_eq!(plan.params.clamps_per_post(), 2);
    assert_eq!(plan.side(SideId::Left).system, PlinthSystem::ChannelBase);
    assert_eq!(plan.wicket.offset, 0.0);
    assert!(!plan.gate.enabled);

    let totals = compute_layout(&plan);
    // left-front is the only corner
    assert_eq!(totals.corners, 1);
    assert_eq!(totals.corner_connectors.concrete_base, 1);
    assert_eq!(totals.corner_connectors.channel_base, 1);
    assert_eq!(totals.side(SideId::Left).unwrap().available, 9000.0);
}

#[test]
fn test_default_file_matches_default_plan_totals() {
    let from_file = compute_layout(&PlanFile::default().to_plan());
    let built_in = compute_layout(&FencePlan::default());
    assert_eq!(from_file.total_panels, built_in.total_panels);
    assert_eq!(from_file.total_posts, built_in.total_posts);
    assert_eq!(from_file.corners, built_in.corners);
}

#[test]
fn test_invalid_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let path = temp_dir.path().join("plan.toml");
    fs::write(&path, "[[corrugation_table]]\nheight = 835\ncorrugations = 2\n").unwrap();
    assert!(matches!(
        PlanFile::load_from_file(&path),
        Err(SettingsError::Config(ConfigError::InvalidCorrugationHeight { height: 835, .. }))
    ));

    let path = temp_dir.path().join("plan.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        PlanFile::load_from_file(&path),
        Err(SettingsError::JsonError(_))
    ));

    let path = temp_dir.path().join("missing.toml");
    assert!(matches!(
        PlanFile::load_from_file(&path),
        Err(SettingsError::IoError(_))
    ));

    let path = temp_dir.path().join("plan.txt");
    fs::write(&path, "").unwrap();
    assert!(matches!(
        PlanFile::load_from_file(&path),
        Err(SettingsError::Config(ConfigError::UnsupportedFormat(_)))
    ));
}
