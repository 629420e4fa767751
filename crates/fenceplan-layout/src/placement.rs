//! Opening placement checks
//!
//! The solver only subtracts an opening's width from its side. Whether the
//! opening actually fits where it was placed is checked here, separately,
//! and reported as warnings. Quantities are never changed by these checks.

use crate::plan::{FencePlan, Opening};
use crate::warnings::LayoutWarning;

/// Check one enabled opening against its side
fn check_opening(plan: &FencePlan, opening: &Opening) -> Vec<LayoutWarning> {
    let mut warnings = Vec::new();
    let side = plan.side(opening.side);

    if !side.is_active() {
        warnings.push(LayoutWarning::OpeningOnInactiveSide {
            opening: opening.kind,
            side: opening.side,
        });
        return warnings;
    }

    if opening.width <= 0.0 {
        warnings.push(LayoutWarning::OpeningWithoutWidth {
            opening: opening.kind,
            side: opening.side,
        });
    }

    if opening.offset < 0.0 || opening.end() > side.length {
        warnings.push(LayoutWarning::OpeningOutOfBounds {
            opening: opening.kind,
            side: opening.side,
            offset: opening.offset,
            width: opening.width,
            side_length: side.length,
        });
    }

    warnings
}

/// Half-open spans `[offset, offset + width)` intersect
fn overlaps(a: &Opening, b: &Opening) -> bool {
    a.offset < b.end() && b.offset < a.end()
}

/// All placement problems of the plan's gate and wicket
pub fn check_openings(plan: &FencePlan) -> Vec<LayoutWarning> {
    let mut warnings: Vec<LayoutWarning> = plan
        .openings()
        .into_iter()
        .filter(|o| o.enabled)
        .flat_map(|o| check_opening(plan, o))
        .collect();

    let (gate, wicket) = (&plan.gate, &plan.wicket);
    if gate.enabled
        && wicket.enabled
        && gate.side == wicket.side
        && gate.width > 0.0
        && wicket.width > 0.0
        && overlaps(gate, wicket)
    {
        warnings.push(LayoutWarning::OpeningsOverlap { side: gate.side });
    }

    for warning in &warnings {
        tracing::warn!("Opening placement: {}", warning);
    }

    warnings
}
