//! Plan files for Fenceplan
//!
//! A plan file describes one property: the display unit, the panel system,
//! four sides, the gate, and the wicket. Files are JSON or TOML, chosen by
//! extension, and are stored by default in the platform config directory.
//!
//! Every length is written in the file's `unit`. Numeric fields accept a
//! number or a string, so hand-edited files such as `width = "2.5"` or
//! `length = ""` still load; anything unparseable counts as 0. Missing
//! sections fall back to the defaults of [`PlanFile::default`].

use crate::error::{ConfigError, SettingsError, SettingsResult};
use fenceplan_core::{
    standard_table, FieldValue, LengthUnit, PanelType, PlinthSystem, SideId, HEIGHT_STEP_MM,
};
use fenceplan_layout::{
    FencePlan, LayoutParameters, Opening, OpeningKind, PerimeterPreset, SideConfig,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "fenceplan";

/// File name of the default plan
pub const DEFAULT_PLAN_FILE: &str = "plan.toml";

/// One side as written in a plan file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideEntry {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub length: FieldValue,
    #[serde(default)]
    pub system: PlinthSystem,
}

fn default_true() -> bool {
    true
}

impl SideEntry {
    fn new(length: f64) -> Self {
        Self {
            enabled: true,
            length: FieldValue::from(length),
            system: PlinthSystem::ConcreteBase,
        }
    }

    fn to_config(&self, unit: LengthUnit) -> SideConfig {
        SideConfig {
            enabled: self.enabled,
            length: self.length.to_mm(unit),
            system: self.system,
        }
    }
}

/// The four sides, front first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidesSection {
    pub front: SideEntry,
    pub right: SideEntry,
    pub back: SideEntry,
    pub left: SideEntry,
}

impl Default for SidesSection {
    fn default() -> Self {
        Self {
            front: SideEntry::new(10.0),
            right: SideEntry::new(15.0),
            back: SideEntry::new(10.0),
            left: SideEntry::new(15.0),
        }
    }
}

impl SidesSection {
    pub fn get(&self, id: SideId) -> &SideEntry {
        match id {
            SideId::Front => &self.front,
            SideId::Right => &self.right,
            SideId::Back => &self.back,
            SideId::Left => &self.left,
        }
    }

    pub fn get_mut(&mut self, id: SideId) -> &mut SideEntry {
        match id {
            SideId::Front => &mut self.front,
            SideId::Right => &mut self.right,
            SideId::Back => &mut self.back,
            SideId::Left => &mut self.left,
        }
    }
}

/// Gate or wicket as written in a plan file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpeningEntry {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_side")]
    pub side: SideId,
    #[serde(default)]
    pub width: FieldValue,
    #[serde(default)]
    pub height: FieldValue,
    /// Distance from the start of the side
    #[serde(default)]
    pub offset: FieldValue,
}

fn default_side() -> SideId {
    SideId::Front
}

impl OpeningEntry {
    fn new(width: f64, height: f64, offset: f64) -> Self {
        Self {
            enabled: true,
            side: SideId::Front,
            width: width.into(),
            height: height.into(),
            offset: offset.into(),
        }
    }

    fn to_opening(&self, kind: OpeningKind, unit: LengthUnit) -> Opening {
        Opening {
            kind,
            enabled: self.enabled,
            side: self.side,
            width: self.width.to_mm(unit),
            height: self.height.to_mm(unit),
            offset: self.offset.to_mm(unit),
        }
    }
}

/// Panel system section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSection {
    pub width: FieldValue,
    pub height: FieldValue,
    #[serde(rename = "type")]
    pub panel_type: PanelType,
    pub min_gap: FieldValue,
    pub max_gap: FieldValue,
    pub post_width: FieldValue,
    pub plinth_height: FieldValue,
    /// Clamps per post; absent or blank derives it from the panel height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrugations_per_post: Option<FieldValue>,
}

impl Default for PanelSection {
    fn default() -> Self {
        Self {
            width: 2.5.into(),
            height: 1.5.into(),
            panel_type: PanelType::Corrugated,
            min_gap: 0.005.into(),
            max_gap: 0.02.into(),
            post_width: 0.06.into(),
            plinth_height: 0.2.into(),
            corrugations_per_post: None,
        }
    }
}

/// Extra entry for the corrugation table (heights in mm)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrugationEntry {
    pub height: u32,
    pub corrugations: u32,
}

/// Contents of a plan file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanFile {
    /// Unit of every length in the file
    pub unit: LengthUnit,
    pub panel: PanelSection,
    pub sides: SidesSection,
    pub gate: OpeningEntry,
    pub wicket: OpeningEntry,
    /// Entries added to, or replacing, the standard corrugation table
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub corrugation_table: Vec<CorrugationEntry>,
}

impl Default for PlanFile {
    fn default() -> Self {
        Self {
            unit: LengthUnit::Meter,
            panel: PanelSection::default(),
            sides: SidesSection::default(),
            gate: OpeningEntry::new(4.0, 1.6, 3.0),
            wicket: OpeningEntry::new(1.0, 1.6, 8.0),
            corrugation_table: Vec::new(),
        }
    }
}

enum FileFormat {
    Json,
    Toml,
}

fn file_format(path: &Path) -> Result<FileFormat, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(FileFormat::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

impl PlanFile {
    /// Create a plan file with the default property
    pub fn new() -> Self {
        Self::default()
    }

    /// Default plan location: `<config dir>/fenceplan/plan.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_PLAN_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Parse plan file text in the given format
    pub fn from_json_str(content: &str) -> SettingsResult<Self> {
        let plan: Self = serde_json::from_str(content)?;
        plan.validate()?;
        Ok(plan)
    }

    pub fn from_toml_str(content: &str) -> SettingsResult<Self> {
        let plan: Self = toml::from_str(content)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Load a plan from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = file_format(path)?;
        let content = std::fs::read_to_string(path)?;

        let plan = match format {
            FileFormat::Json => Self::from_json_str(&content)?,
            FileFormat::Toml => Self::from_toml_str(&content)?,
        };

        tracing::debug!("Loaded plan file {}", path.display());
        Ok(plan)
    }

    /// Save the plan to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_format(path)? {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        tracing::debug!("Saved plan file {}", path.display());
        Ok(())
    }

    /// Validate the parts of a plan the layout cannot recover from
    ///
    /// Loosely typed lengths are not checked here: they normalize to 0 and
    /// the layout reports what it could not build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.corrugation_table {
            if entry.height % HEIGHT_STEP_MM != 0 {
                return Err(ConfigError::InvalidCorrugationHeight {
                    height: entry.height,
                    step: HEIGHT_STEP_MM,
                });
            }
        }

        if let Some(value) = &self.panel.corrugations_per_post {
            if value.value() < 0.0 {
                return Err(ConfigError::ValueOutOfRange {
                    key: "panel.corrugations_per_post".to_string(),
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Explicit clamps-per-post override, if one holds a number
    ///
    /// Blank or unparseable text derives the count from the panel height.
    fn corrugation_override(&self) -> Option<u32> {
        self.panel
            .corrugations_per_post
            .as_ref()
            .and_then(FieldValue::as_number)
            .map(|value| value.round().max(0.0) as u32)
    }

    /// Normalize every field into a layout input in millimeters
    pub fn to_plan(&self) -> FencePlan {
        let unit = self.unit;
        let panel = &self.panel;

        let mut corrugation_table = standard_table();
        for entry in &self.corrugation_table {
            corrugation_table.add_entry(entry.height, entry.corrugations);
        }

        let params = LayoutParameters {
            panel_width: panel.width.to_mm(unit),
            panel_height: panel.height.to_mm(unit),
            min_gap: panel.min_gap.to_mm(unit),
            max_gap: panel.max_gap.to_mm(unit),
            corrugations_per_post: self.corrugation_override(),
            corrugation_table,
            panel_type: panel.panel_type,
            post_width: panel.post_width.to_mm(unit),
            plinth_height: panel.plinth_height.to_mm(unit),
        };

        FencePlan {
            sides: SideId::ALL.map(|id| self.sides.get(id).to_config(unit)),
            gate: self.gate.to_opening(OpeningKind::Gate, unit),
            wicket: self.wicket.to_opening(OpeningKind::Wicket, unit),
            params,
            display_unit: unit,
        }
    }

    /// Enable exactly the preset's sides
    pub fn apply_preset(&mut self, preset: PerimeterPreset) {
        let enabled = preset.enabled_sides();
        for id in SideId::ALL {
            self.sides.get_mut(id).enabled = enabled.contains(&id);
        }
    }
}
