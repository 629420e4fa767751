//! Perimeter presets
//!
//! Quick selections of which sides are fenced. Lengths and plinth systems
//! are left as they are.

use crate::plan::SideConfig;
use fenceplan_core::{Error, SideId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PerimeterPreset {
    /// Street side only
    FrontOnly,
    /// Front and right side
    FrontRight,
    /// Front and left side
    FrontLeft,
    /// Closed perimeter
    All,
}

impl PerimeterPreset {
    pub const ALL: [PerimeterPreset; 4] = [
        Self::FrontOnly,
        Self::FrontRight,
        Self::FrontLeft,
        Self::All,
    ];

    /// Sides enabled by this preset
    pub fn enabled_sides(self) -> &'static [SideId] {
        match self {
            Self::FrontOnly => &[SideId::Front],
            Self::FrontRight => &[SideId::Front, SideId::Right],
            Self::FrontLeft => &[SideId::Front, SideId::Left],
            Self::All => &SideId::ALL,
        }
    }

    /// Enable exactly the preset's sides
    pub fn apply(self, sides: &mut [SideConfig; 4]) {
        let enabled = self.enabled_sides();
        for (id, side) in SideId::ALL.into_iter().zip(sides.iter_mut()) {
            side.enabled = enabled.contains(&id);
        }
    }
}

impl fmt::Display for PerimeterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrontOnly => write!(f, "front-only"),
            Self::FrontRight => write!(f, "front-right"),
            Self::FrontLeft => write!(f, "front-left"),
            Self::All => write!(f, "all"),
        }
    }
}

impl FromStr for PerimeterPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "front-only" | "front" => Ok(Self::FrontOnly),
            "front-right" => Ok(Self::FrontRight),
            "front-left" => Ok(Self::FrontLeft),
            "all" => Ok(Self::All),
            other => Err(Error::other(format!("Unknown perimeter preset: {}", other))),
        }
    }
}
