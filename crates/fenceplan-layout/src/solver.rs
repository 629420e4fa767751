//! Per-side panel layout solver
//!
//! Fits fixed-width panels into the run left on a side after gates and
//! wickets are reserved, keeping the gap between neighbouring panels inside
//! a tolerance band.
//!
//! Candidate panel counts are tried in a fixed order: the floor estimate
//! `n0`, then `n0 + 1`, then `n0 - 1`. The first count whose gap lands in
//! `[min_gap, max_gap]` wins. A single panel is always accepted with a zero
//! gap. When no candidate fits, the count closest to `available / width` is
//! used and its gap is clamped into the band; the built run then differs
//! slightly from the measured one and a warning is raised.

use crate::plan::{LayoutParameters, SideConfig};
use crate::warnings::LayoutWarning;
use fenceplan_core::{PlinthSystem, SideId};
use serde::{Deserialize, Serialize};

/// How a spacing was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    /// A candidate count produced an in-tolerance gap
    Exact,
    /// No candidate fitted; the gap was clamped into the band
    Clamped,
}

/// Panel count and gap for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingSolution {
    pub panel_count: u32,
    /// Gap between neighbouring panels (mm)
    pub gap: f64,
    /// Gap the run would need with this panel count, before clamping (mm)
    pub required_gap: f64,
    pub method: SolveMethod,
}

impl SpacingSolution {
    fn exact(panel_count: u32, gap: f64) -> Self {
        Self {
            panel_count,
            gap,
            required_gap: gap,
            method: SolveMethod::Exact,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.method == SolveMethod::Exact
    }

    /// Length actually covered by panels and gaps (mm)
    pub fn built_length(&self, panel_width: f64) -> f64 {
        let n = self.panel_count as f64;
        n * panel_width + (n - 1.0).max(0.0) * self.gap
    }
}

/// Clamp without panicking on an inverted band; the lower bound wins
fn clamp_gap(gap: f64, min_gap: f64, max_gap: f64) -> f64 {
    gap.min(max_gap).max(min_gap)
}

/// Gap for `count` panels if it falls inside the band
fn try_count(
    available: f64,
    panel_width: f64,
    min_gap: f64,
    max_gap: f64,
    count: u32,
) -> Option<SpacingSolution> {
    match count {
        0 => None,
        1 => Some(SpacingSolution::exact(1, 0.0)),
        n => {
            let gap = (available - n as f64 * panel_width) / (n - 1) as f64;
            (gap >= min_gap && gap <= max_gap).then(|| SpacingSolution::exact(n, gap))
        }
    }
}

/// Solve the spacing of one run
///
/// * `available` - Run length left after openings (mm); negative or
///   non-finite values are treated as 0
/// * `panel_width` - Panel width (mm)
/// * `min_gap`, `max_gap` - Tolerance band for the gap (mm)
///
/// Always returns at least one panel.
pub fn solve_spacing(
    available: f64,
    panel_width: f64,
    min_gap: f64,
    max_gap: f64,
) -> SpacingSolution {
    let available = if available.is_finite() {
        available.max(0.0)
    } else {
        0.0
    };

    if !panel_width.is_finite() || panel_width <= 0.0 {
        return SpacingSolution {
            panel_count: 1,
            gap: 0.0,
            required_gap: 0.0,
            method: SolveMethod::Clamped,
        };
    }

    let step = panel_width + min_gap;
    let n0 = if step > 0.0 {
        (available / step).floor().max(1.0) as u32
    } else {
        1
    };

    let candidates = [Some(n0), n0.checked_add(1), n0.checked_sub(1)];
    if let Some(solution) = candidates
        .into_iter()
        .flatten()
        .find_map(|n| try_count(available, panel_width, min_gap, max_gap, n))
    {
        return solution;
    }

    let count = (available / panel_width).round().max(1.0) as u32;
    let required_gap =
        (available - count as f64 * panel_width) / count.saturating_sub(1).max(1) as f64;

    SpacingSolution {
        panel_count: count,
        gap: clamp_gap(required_gap, min_gap, max_gap),
        required_gap,
        method: SolveMethod::Clamped,
    }
}

/// Solved layout of one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideLayout {
    pub side: SideId,
    pub system: PlinthSystem,
    /// Measured side length (mm)
    pub length: f64,
    /// Width taken by gate and wicket (mm)
    pub reserved: f64,
    /// Run left for panels (mm)
    pub available: f64,
    pub panel_count: u32,
    /// Gap between neighbouring panels (mm)
    pub gap: f64,
    /// Posts along the side, both ends included
    pub linear_posts: u32,
    pub plinths: u32,
    /// Reserved width plus available run (mm)
    pub used_length: f64,
    pub method: SolveMethod,
    pub warnings: Vec<LayoutWarning>,
}

/// Solve one side of the perimeter
///
/// `reserved` is the total opening width assigned to the side.
pub fn solve_side(
    side: SideId,
    config: &SideConfig,
    reserved: f64,
    params: &LayoutParameters,
) -> SideLayout {
    let available = (config.length - reserved).max(0.0);
    let solution = solve_spacing(available, params.panel_width, params.min_gap, params.max_gap);

    tracing::debug!(
        "Solved {}: available {:.1} mm -> {} panels, gap {:.2} mm ({:?})",
        side,
        available,
        solution.panel_count,
        solution.gap,
        solution.method
    );

    let mut warnings = Vec::new();
    let panel_width_valid = params.panel_width > 0.0 && params.panel_width.is_finite();

    if panel_width_valid && available < params.panel_width {
        tracing::warn!(
            "{}: available run {:.1} mm shorter than panel width {:.1} mm",
            side,
            available,
            params.panel_width
        );
        warnings.push(LayoutWarning::RunShorterThanPanel {
            side,
            available,
            panel_width: params.panel_width,
        });
    }

    if panel_width_valid && solution.method == SolveMethod::Clamped {
        tracing::warn!(
            "{}: no panel count fits the gap band {:.1}..{:.1} mm, required {:.2} mm, using {:.2} mm",
            side,
            params.min_gap,
            params.max_gap,
            solution.required_gap,
            solution.gap
        );
        warnings.push(LayoutWarning::GapOutOfTolerance {
            side,
            panel_count: solution.panel_count,
            required_gap: solution.required_gap,
            applied_gap: solution.gap,
        });
    }

    SideLayout {
        side,
        system: config.system,
        length: config.length,
        reserved,
        available,
        panel_count: solution.panel_count,
        gap: solution.gap,
        linear_posts: solution.panel_count.saturating_add(1),
        plinths: solution.panel_count,
        used_length: available + reserved,
        method: solution.method,
        warnings,
    }
}
