//! Soft warnings attached to a layout
//!
//! None of these stop a computation. They flag results the user should look
//! at before ordering material.

use crate::plan::OpeningKind;
use fenceplan_core::SideId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// No panel count gives a gap inside the tolerance band; the gap was
    /// clamped and the built run will be slightly longer or shorter.
    GapOutOfTolerance {
        side: SideId,
        panel_count: u32,
        required_gap: f64,
        applied_gap: f64,
    },

    /// The run left after openings is shorter than one panel; a single
    /// overlapping panel is placed.
    RunShorterThanPanel {
        side: SideId,
        available: f64,
        panel_width: f64,
    },

    /// Panel width is zero, negative or not a number.
    InvalidPanelWidth { panel_width: f64 },

    /// Minimum gap is larger than maximum gap.
    InvertedGapRange { min_gap: f64, max_gap: f64 },

    /// An enabled opening sits on a side that is disabled or has no length.
    OpeningOnInactiveSide { opening: OpeningKind, side: SideId },

    /// An enabled opening has no width.
    OpeningWithoutWidth { opening: OpeningKind, side: SideId },

    /// Offset plus width runs past the end of the side (or offset < 0).
    OpeningOutOfBounds {
        opening: OpeningKind,
        side: SideId,
        offset: f64,
        width: f64,
        side_length: f64,
    },

    /// Gate and wicket on the same side overlap.
    OpeningsOverlap { side: SideId },
}

impl LayoutWarning {
    /// Side the warning refers to, if any
    pub fn side(&self) -> Option<SideId> {
        match self {
            Self::GapOutOfTolerance { side, .. }
            | Self::RunShorterThanPanel { side, .. }
            | Self::OpeningOnInactiveSide { side, .. }
            | Self::OpeningWithoutWidth { side, .. }
            | Self::OpeningOutOfBounds { side, .. }
            | Self::OpeningsOverlap { side } => Some(*side),
            Self::InvalidPanelWidth { .. } | Self::InvertedGapRange { .. } => None,
        }
    }
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GapOutOfTolerance {
                side,
                panel_count,
                required_gap,
                applied_gap,
            } => write!(
                f,
                "{}: gap out of tolerance (required {:.1} mm), clamped to {:.1} mm with {} panels",
                side, required_gap, applied_gap, panel_count
            ),
            Self::RunShorterThanPanel {
                side,
                available,
                panel_width,
            } => write!(
                f,
                "{}: available run {:.0} mm is shorter than one panel ({:.0} mm)",
                side, available, panel_width
            ),
            Self::InvalidPanelWidth { panel_width } => {
                write!(f, "panel width must be positive, got {}", panel_width)
            }
            Self::InvertedGapRange { min_gap, max_gap } => write!(
                f,
                "minimum gap {} mm exceeds maximum gap {} mm",
                min_gap, max_gap
            ),
            Self::OpeningOnInactiveSide { opening, side } => {
                write!(f, "{} is assigned to inactive side {}", opening, side)
            }
            Self::OpeningWithoutWidth { opening, side } => {
                write!(f, "{} on {} has no width", opening, side)
            }
            Self::OpeningOutOfBounds {
                opening,
                side,
                offset,
                width,
                side_length,
            } => write!(
                f,
                "{} on {} spans {:.0}..{:.0} mm, outside the side (0..{:.0} mm)",
                opening,
                side,
                offset,
                offset + width,
                side_length
            ),
            Self::OpeningsOverlap { side } => {
                write!(f, "gate and wicket overlap on {}", side)
            }
        }
    }
}
