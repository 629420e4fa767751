//! Plan inputs
//!
//! A [`FencePlan`] is an immutable snapshot of everything the layout needs:
//! four sides, the gate and wicket, and the panel parameters. All lengths are
//! in millimeters; conversion from user units happens before a plan is built.

use crate::error::{LayoutError, LayoutResult, ParameterError, ParameterResult};
use crate::presets::PerimeterPreset;
use fenceplan_core::{standard_table, CorrugationTable, LengthUnit, PanelType, PlinthSystem, SideId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration of one side of the perimeter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideConfig {
    /// Whether the side is fenced at all
    pub enabled: bool,
    /// Run length (mm)
    pub length: f64,
    /// Plinth system used along this side
    pub system: PlinthSystem,
}

impl SideConfig {
    pub fn new(length: f64, system: PlinthSystem) -> Self {
        Self {
            enabled: true,
            length,
            system,
        }
    }

    pub fn disabled(length: f64, system: PlinthSystem) -> Self {
        Self {
            enabled: false,
            length,
            system,
        }
    }

    /// An active side takes part in panel counting and corner adjacency
    pub fn is_active(&self) -> bool {
        self.enabled && self.length > 0.0
    }
}

/// Kind of opening in the fence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    /// Vehicle gate
    Gate,
    /// Pedestrian door
    Wicket,
}

impl OpeningKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Gate => "Gate",
            Self::Wicket => "Wicket",
        }
    }
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gate => write!(f, "gate"),
            Self::Wicket => write!(f, "wicket"),
        }
    }
}

/// A gate or wicket assigned to one side
///
/// Only `width` affects the quantities: it is reserved from the side's run
/// length. Height and offset are carried for the bill of materials and the
/// placement checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub kind: OpeningKind,
    pub enabled: bool,
    /// Side the opening is built into
    pub side: SideId,
    /// Clear width (mm)
    pub width: f64,
    /// Height (mm)
    pub height: f64,
    /// Distance from the start of the side to the opening (mm)
    pub offset: f64,
}

impl Opening {
    pub fn new(kind: OpeningKind, side: SideId, width: f64, height: f64, offset: f64) -> Self {
        Self {
            kind,
            enabled: true,
            side,
            width,
            height,
            offset,
        }
    }

    /// A disabled opening of the given kind
    pub fn none(kind: OpeningKind) -> Self {
        Self {
            kind,
            enabled: false,
            side: SideId::Front,
            width: 0.0,
            height: 0.0,
            offset: 0.0,
        }
    }

    /// Width this opening takes away from `side`
    pub fn reserved_on(&self, side: SideId) -> f64 {
        if self.enabled && self.side == side {
            self.width
        } else {
            0.0
        }
    }

    /// End position along the side (mm)
    pub fn end(&self) -> f64 {
        self.offset + self.width
    }
}

/// Panel system and tolerance parameters
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParameters {
    /// Panel width (mm)
    pub panel_width: f64,
    /// Panel height (mm)
    pub panel_height: f64,
    /// Smallest acceptable gap between neighbouring panels (mm)
    pub min_gap: f64,
    /// Largest acceptable gap between neighbouring panels (mm)
    pub max_gap: f64,
    /// Clamps per post; `None` derives the count from the panel height
    pub corrugations_per_post: Option<u32>,
    /// Height to corrugation reference data
    pub corrugation_table: CorrugationTable,
    /// Panel profile, reported in the bill of materials
    pub panel_type: PanelType,
    /// Square post section (mm), reported in the bill of materials
    pub post_width: f64,
    /// Plinth board height (mm), reported in the bill of materials
    pub plinth_height: f64,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            panel_width: 2500.0,
            panel_height: 1500.0,
            min_gap: 5.0,
            max_gap: 20.0,
            corrugations_per_post: None,
            corrugation_table: standard_table(),
            panel_type: PanelType::Corrugated,
            post_width: 60.0,
            plinth_height: 200.0,
        }
    }
}

impl LayoutParameters {
    /// Clamps per post: explicit override, else table lookup, else 0
    pub fn clamps_per_post(&self) -> u32 {
        self.corrugation_table
            .resolve(self.corrugations_per_post, self.panel_height)
    }

    /// Strict validation; the layout computation does not require it
    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("panel_width", self.panel_width),
            ("panel_height", self.panel_height),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ParameterError::NotPositive {
                    name: name.to_string(),
                    value,
                });
            }
        }

        for (name, value) in [
            ("min_gap", self.min_gap),
            ("max_gap", self.max_gap),
            ("post_width", self.post_width),
            ("plinth_height", self.plinth_height),
        ] {
            if value < 0.0 {
                return Err(ParameterError::Negative {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if self.min_gap > self.max_gap {
            return Err(ParameterError::InvertedGapRange {
                min: self.min_gap,
                max: self.max_gap,
            });
        }

        Ok(())
    }
}

/// Complete input of one layout computation
#[derive(Debug, Clone, PartialEq)]
pub struct FencePlan {
    /// Sides indexed by [`SideId::index`]
    pub sides: [SideConfig; 4],
    pub gate: Opening,
    pub wicket: Opening,
    pub params: LayoutParameters,
    /// Unit used when quantities are shown to the user
    pub display_unit: LengthUnit,
}

impl Default for FencePlan {
    fn default() -> Self {
        let system = PlinthSystem::ConcreteBase;
        Self {
            sides: [
                SideConfig::new(10_000.0, system),
                SideConfig::new(15_000.0, system),
                SideConfig::new(10_000.0, system),
                SideConfig::new(15_000.0, system),
            ],
            gate: Opening::new(OpeningKind::Gate, SideId::Front, 4000.0, 1600.0, 3000.0),
            wicket: Opening::new(OpeningKind::Wicket, SideId::Front, 1000.0, 1600.0, 8000.0),
            params: LayoutParameters::default(),
            display_unit: LengthUnit::Meter,
        }
    }
}

impl FencePlan {
    /// Plan with the given sides, no openings, and default parameters
    pub fn new(sides: [SideConfig; 4], params: LayoutParameters) -> Self {
        Self {
            sides,
            gate: Opening::none(OpeningKind::Gate),
            wicket: Opening::none(OpeningKind::Wicket),
            params,
            display_unit: LengthUnit::Millimeter,
        }
    }

    pub fn side(&self, id: SideId) -> &SideConfig {
        &self.sides[id.index()]
    }

    pub fn side_mut(&mut self, id: SideId) -> &mut SideConfig {
        &mut self.sides[id.index()]
    }

    /// Sides paired with their identity, in cyclic order
    pub fn iter_sides(&self) -> impl Iterator<Item = (SideId, &SideConfig)> {
        SideId::ALL.into_iter().zip(self.sides.iter())
    }

    /// Gate and wicket
    pub fn openings(&self) -> [&Opening; 2] {
        [&self.gate, &self.wicket]
    }

    /// Total opening width reserved on a side (mm)
    pub fn reserved_width(&self, id: SideId) -> f64 {
        self.openings().iter().map(|o| o.reserved_on(id)).sum()
    }

    pub fn apply_preset(&mut self, preset: PerimeterPreset) {
        preset.apply(&mut self.sides);
    }

    pub fn with_preset(mut self, preset: PerimeterPreset) -> Self {
        self.apply_preset(preset);
        self
    }

    /// Strict validation of parameters and openings
    ///
    /// [`compute_layout`](crate::compute_layout) accepts any plan; this is
    /// for callers that want to refuse degenerate input instead of receiving
    /// warnings.
    pub fn validate(&self) -> LayoutResult<()> {
        self.params.validate()?;

        for (id, side) in self.iter_sides() {
            if side.length < 0.0 {
                return Err(ParameterError::Negative {
                    name: format!("{}.length", id),
                    value: side.length,
                }
                .into());
            }
        }

        if let Some(warning) = crate::placement::check_openings(self).into_iter().next() {
            return Err(LayoutError::InvalidPlan(warning.to_string()));
        }

        Ok(())
    }
}
