//! Perimeter side identities, plinth systems and panel types

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four sides of a property
///
/// The declaration order is the walking order of the perimeter. The last
/// side is adjacent to the first, which closes the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideId {
    Front,
    Right,
    Back,
    Left,
}

impl SideId {
    /// All sides in cyclic order
    pub const ALL: [SideId; 4] = [Self::Front, Self::Right, Self::Back, Self::Left];

    /// Position in the cycle (0..4)
    pub fn index(self) -> usize {
        match self {
            Self::Front => 0,
            Self::Right => 1,
            Self::Back => 2,
            Self::Left => 3,
        }
    }

    /// The following side in the cycle, wrapping from `Left` to `Front`
    pub fn next(self) -> SideId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "Front",
            Self::Right => "Right",
            Self::Back => "Back",
            Self::Left => "Left",
        }
    }
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Right => write!(f, "right"),
            Self::Back => write!(f, "back"),
            Self::Left => write!(f, "left"),
        }
    }
}

impl FromStr for SideId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "right" => Ok(Self::Right),
            "back" => Ok(Self::Back),
            "left" => Ok(Self::Left),
            other => Err(Error::InvalidSide(other.to_string())),
        }
    }
}

/// Prefabricated plinth (base course) system used along a side
///
/// The system decides which corner connector is needed where two sides meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlinthSystem {
    /// Concrete connector posts, 2450 mm plinth boards
    #[serde(alias = "beton")]
    ConcreteBase,
    /// Steel channel, 2500 mm plinth boards
    #[serde(alias = "ceownik")]
    ChannelBase,
}

impl Default for PlinthSystem {
    fn default() -> Self {
        Self::ConcreteBase
    }
}

impl PlinthSystem {
    pub const ALL: [PlinthSystem; 2] = [Self::ConcreteBase, Self::ChannelBase];

    /// Label used on drawings and in the bill of materials
    pub fn label(self) -> &'static str {
        match self {
            Self::ConcreteBase => "Concrete connector (2450)",
            Self::ChannelBase => "Steel channel (2500)",
        }
    }

    /// Nominal plinth board length in millimeters
    pub fn board_length_mm(self) -> u32 {
        match self {
            Self::ConcreteBase => 2450,
            Self::ChannelBase => 2500,
        }
    }
}

impl fmt::Display for PlinthSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlinthSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concrete" | "concrete_base" | "beton" => Ok(Self::ConcreteBase),
            "channel" | "channel_base" | "ceownik" => Ok(Self::ChannelBase),
            other => Err(Error::InvalidSystem(other.to_string())),
        }
    }
}

/// Panel profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelType {
    /// Flat double-wire panel, no corrugations
    #[serde(rename = "2D")]
    Flat,
    /// Panel with stiffening corrugations
    #[serde(rename = "3D")]
    Corrugated,
}

impl Default for PanelType {
    fn default() -> Self {
        Self::Corrugated
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "2D"),
            Self::Corrugated => write!(f, "3D"),
        }
    }
}

impl FromStr for PanelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "2D" => Ok(Self::Flat),
            "3D" => Ok(Self::Corrugated),
            other => Err(Error::InvalidPanelType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(SideId::Front.next(), SideId::Right);
        assert_eq!(SideId::Back.next(), SideId::Left);
        assert_eq!(SideId::Left.next(), SideId::Front);
        for (i, side) in SideId::ALL.iter().enumerate() {
            assert_eq!(side.index(), i);
        }
    }

    #[test]
    fn test_side_parse_and_display() {
        for side in SideId::ALL {
            assert_eq!(side.to_string().parse::<SideId>().unwrap(), side);
        }
        assert!("north".parse::<SideId>().is_err());
    }

    #[test]
    fn test_plinth_system_aliases() {
        assert_eq!("beton".parse::<PlinthSystem>().unwrap(), PlinthSystem::ConcreteBase);
        assert_eq!("ceownik".parse::<PlinthSystem>().unwrap(), PlinthSystem::ChannelBase);
        let parsed: PlinthSystem = serde_json::from_str(r#""ceownik""#).unwrap();
        assert_eq!(parsed, PlinthSystem::ChannelBase);
        assert_eq!(
            serde_json::to_string(&PlinthSystem::ConcreteBase).unwrap(),
            r#""concrete_base""#
        );
    }

    #[test]
    fn test_panel_type_serde() {
        assert_eq!(serde_json::to_string(&PanelType::Flat).unwrap(), r#""2D""#);
        assert_eq!("3d".parse::<PanelType>().unwrap(), PanelType::Corrugated);
    }
}
