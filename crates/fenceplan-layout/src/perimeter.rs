//! Perimeter aggregation
//!
//! Reduces the per-side layouts into whole-property totals: panels, posts,
//! plinths, corners, clamps, and corner connectors per plinth system.
//!
//! Corner posts are added on top of the linear posts of each side, whose
//! count already includes both end posts.

use crate::placement::check_openings;
use crate::plan::{FencePlan, SideConfig};
use crate::solver::{solve_side, SideLayout};
use crate::warnings::LayoutWarning;
use fenceplan_core::{PlinthSystem, SideId};
use serde::{Deserialize, Serialize};

/// Corner connector quantities per plinth system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerConnectors {
    pub concrete_base: u32,
    pub channel_base: u32,
}

impl CornerConnectors {
    pub fn count(&self, system: PlinthSystem) -> u32 {
        match system {
            PlinthSystem::ConcreteBase => self.concrete_base,
            PlinthSystem::ChannelBase => self.channel_base,
        }
    }

    fn count_mut(&mut self, system: PlinthSystem) -> &mut u32 {
        match system {
            PlinthSystem::ConcreteBase => &mut self.concrete_base,
            PlinthSystem::ChannelBase => &mut self.channel_base,
        }
    }
}

/// Whole-property result of one layout computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerimeterTotals {
    /// Active sides in cyclic order
    pub sides: Vec<SideLayout>,
    pub total_panels: u32,
    /// Linear posts of all sides plus one post per corner
    pub total_posts: u32,
    pub total_plinths: u32,
    pub corners: u32,
    pub clamps_per_post: u32,
    pub total_clamps: u32,
    pub corner_clamps: u32,
    pub linear_clamps: u32,
    pub corner_connectors: CornerConnectors,
    /// Sum of used lengths (mm)
    pub total_length: f64,
    /// Plan-level, placement and per-side warnings
    pub warnings: Vec<LayoutWarning>,
}

impl PerimeterTotals {
    pub fn side(&self, id: SideId) -> Option<&SideLayout> {
        self.sides.iter().find(|s| s.side == id)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Adjacent pairs around the cycle where both sides are active
pub fn active_corners(sides: &[SideConfig; 4]) -> impl Iterator<Item = (SideId, SideId)> + '_ {
    SideId::ALL
        .into_iter()
        .map(|a| (a, a.next()))
        .filter(move |(a, b)| sides[a.index()].is_active() && sides[b.index()].is_active())
}

/// Number of perimeter turns between active sides (0..=4)
pub fn count_corners(sides: &[SideConfig; 4]) -> u32 {
    active_corners(sides).count() as u32
}

/// Corners touching at least one side built on `system`
///
/// A corner between two different systems counts for both.
pub fn count_corners_by_system(sides: &[SideConfig; 4], system: PlinthSystem) -> u32 {
    active_corners(sides)
        .filter(|(a, b)| sides[a.index()].system == system || sides[b.index()].system == system)
        .count() as u32
}

fn saturating_sum(values: impl Iterator<Item = u32>) -> u32 {
    values.fold(0, u32::saturating_add)
}

fn parameter_warnings(plan: &FencePlan) -> Vec<LayoutWarning> {
    let params = &plan.params;
    let mut warnings = Vec::new();

    if !params.panel_width.is_finite() || params.panel_width <= 0.0 {
        tracing::warn!("Panel width {} is not usable", params.panel_width);
        warnings.push(LayoutWarning::InvalidPanelWidth {
            panel_width: params.panel_width,
        });
    }

    if params.min_gap > params.max_gap {
        tracing::warn!(
            "Gap band inverted: min {} mm > max {} mm",
            params.min_gap,
            params.max_gap
        );
        warnings.push(LayoutWarning::InvertedGapRange {
            min_gap: params.min_gap,
            max_gap: params.max_gap,
        });
    }

    warnings
}

/// Compute the layout of a whole plan
///
/// Pure: the same plan always gives the same totals. Never fails; problems
/// are reported in [`PerimeterTotals::warnings`].
pub fn compute_layout(plan: &FencePlan) -> PerimeterTotals {
    let mut warnings = parameter_warnings(plan);
    warnings.extend(check_openings(plan));

    let sides: Vec<SideLayout> = plan
        .iter_sides()
        .filter(|(_, config)| config.is_active())
        .map(|(id, config)| solve_side(id, config, plan.reserved_width(id), &plan.params))
        .collect();

    for layout in &sides {
        warnings.extend(layout.warnings.iter().cloned());
    }

    let corners = count_corners(&plan.sides);
    let linear_posts = saturating_sum(sides.iter().map(|s| s.linear_posts));
    let total_posts = linear_posts.saturating_add(corners);

    let clamps_per_post = plan.params.clamps_per_post();
    let total_clamps = clamps_per_post.saturating_mul(total_posts);
    let corner_clamps = clamps_per_post.saturating_mul(corners);

    let mut corner_connectors = CornerConnectors::default();
    for system in PlinthSystem::ALL {
        *corner_connectors.count_mut(system) = count_corners_by_system(&plan.sides, system);
    }

    let totals = PerimeterTotals {
        total_panels: saturating_sum(sides.iter().map(|s| s.panel_count)),
        total_plinths: saturating_sum(sides.iter().map(|s| s.plinths)),
        total_length: sides.iter().map(|s| s.used_length).sum(),
        total_posts,
        corners,
        clamps_per_post,
        total_clamps,
        corner_clamps,
        linear_clamps: total_clamps - corner_clamps,
        corner_connectors,
        sides,
        warnings,
    };

    tracing::debug!(
        "Layout: {} sides, {} panels, {} posts, {} corners, {} warnings",
        totals.sides.len(),
        totals.total_panels,
        totals.total_posts,
        totals.corners,
        totals.warnings.len()
    );

    totals
}
