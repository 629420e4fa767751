//! Bill of materials
//!
//! Turns computed totals into an ordered list of line items with
//! human-readable details, plus a semicolon-delimited text rendering for
//! spreadsheets.

use crate::perimeter::PerimeterTotals;
use crate::plan::{FencePlan, Opening};
use fenceplan_core::{format_length, LengthUnit, PlinthSystem};
use serde::{Deserialize, Serialize};

/// Header row of the delimited rendering
pub const CSV_HEADER: &str = "Element;Quantity;Details";

/// UTF-8 byte order mark; spreadsheet programs need it to detect the encoding
const UTF8_BOM: char = '\u{feff}';

/// One line of the bill of materials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BomItem {
    pub name: String,
    pub quantity: u32,
    pub details: String,
}

impl BomItem {
    fn new(name: impl Into<String>, quantity: u32, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub items: Vec<BomItem>,
}

impl BillOfMaterials {
    pub fn iter(&self) -> std::slice::Iter<'_, BomItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First item with the given name
    pub fn find(&self, name: &str) -> Option<&BomItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Semicolon-delimited rendering with a byte order mark
    ///
    /// Semicolons inside details are replaced by commas so each row keeps
    /// exactly three fields.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.items.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for item in &self.items {
            lines.push(format!(
                "{};{};{}",
                item.name,
                item.quantity,
                item.details.replace(';', ",")
            ));
        }

        let mut csv = String::new();
        csv.push(UTF8_BOM);
        csv.push_str(&lines.join("\n"));
        csv
    }
}

impl<'a> IntoIterator for &'a BillOfMaterials {
    type Item = &'a BomItem;
    type IntoIter = std::slice::Iter<'a, BomItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn opening_item(opening: &Opening, unit: LengthUnit) -> BomItem {
    BomItem::new(
        opening.kind.label(),
        1,
        format!(
            "side: {}, width {}, height {}",
            opening.side,
            format_length(opening.width, unit, 2),
            format_length(opening.height, unit, 2)
        ),
    )
}

/// Build the bill of materials for a plan and its computed totals
///
/// Lengths in the details are shown in the plan's display unit.
pub fn build_bom(plan: &FencePlan, totals: &PerimeterTotals) -> BillOfMaterials {
    let unit = plan.display_unit;
    let params = &plan.params;
    let mut items = Vec::new();

    items.push(BomItem::new(
        "Fence panel",
        totals.total_panels,
        format!(
            "type {}, width {}, height {}",
            params.panel_type,
            format_length(params.panel_width, unit, 2),
            format_length(params.panel_height, unit, 2)
        ),
    ));

    let post_section = format_length(params.post_width, unit, 3);
    items.push(BomItem::new(
        "Post",
        totals.total_posts,
        format!("section {} × {}", post_section, post_section),
    ));

    if totals.clamps_per_post > 0 {
        items.push(BomItem::new(
            "Mounting clamp (linear)",
            totals.linear_clamps,
            format!("{} pcs / linear post", totals.clamps_per_post),
        ));
        items.push(BomItem::new(
            "Mounting clamp (corner)",
            totals.corner_clamps,
            format!("{} pcs / corner post", totals.clamps_per_post),
        ));
    }

    items.push(BomItem::new(
        "Precast plinth",
        totals.total_plinths,
        format!(
            "under panel: {} × height {}",
            format_length(params.panel_width, unit, 2),
            format_length(params.plinth_height, unit, 2)
        ),
    ));

    let concrete = totals.corner_connectors.concrete_base;
    if concrete > 0 {
        items.push(BomItem::new(
            "Concrete corner connector",
            concrete,
            format!(
                "for {} mm boards",
                PlinthSystem::ConcreteBase.board_length_mm()
            ),
        ));
    }

    let channel = totals.corner_connectors.channel_base;
    if channel > 0 {
        items.push(BomItem::new(
            "Corner channel (to verify)",
            channel,
            format!(
                "for {} mm boards",
                PlinthSystem::ChannelBase.board_length_mm()
            ),
        ));
    }

    for opening in plan.openings() {
        if opening.enabled {
            items.push(opening_item(opening, unit));
        }
    }

    BillOfMaterials { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perimeter::compute_layout;

    #[test]
    fn test_default_plan_items() {
        let plan = FencePlan::default();
        let totals = compute_layout(&plan);
        let bom = build_bom(&plan, &totals);

        let names: Vec<&str> = bom.iter().map(|i| i.name.as_str()).collect();
        // 1500 mm panels have no table entry, so no clamp lines
        assert_eq!(
            names,
            vec![
                "Fence panel",
                "Post",
                "Precast plinth",
                "Concrete corner connector",
                "Gate",
                "Wicket"
            ]
        );

        let panel = bom.find("Fence panel").unwrap();
        assert_eq!(panel.quantity, totals.total_panels);
        assert_eq!(panel.details, "type 3D, width 2.50 m, height 1.50 m");

        let post = bom.find("Post").unwrap();
        assert_eq!(post.details, "section 0.060 m × 0.060 m");

        let gate = bom.find("Gate").unwrap();
        assert_eq!(gate.quantity, 1);
        assert_eq!(gate.details, "side: front, width 4.00 m, height 1.60 m");
    }

    #[test]
    fn test_clamp_lines_present_when_corrugated() {
        let mut plan = FencePlan::default();
        plan.params.corrugations_per_post = Some(3);
        let totals = compute_layout(&plan);
        let bom = build_bom(&plan, &totals);

        let linear = bom.find("Mounting clamp (linear)").unwrap();
        let corner = bom.find("Mounting clamp (corner)").unwrap();
        assert_eq!(linear.quantity + corner.quantity, totals.total_clamps);
        assert_eq!(corner.quantity, 3 * totals.corners);
        assert_eq!(corner.details, "3 pcs / corner post");
    }

    #[test]
    fn test_channel_connector_line() {
        let mut plan = FencePlan::default();
        for side in plan.sides.iter_mut() {
            side.system = PlinthSystem::ChannelBase;
        }
        plan.gate.enabled = false;
        let totals = compute_layout(&plan);
        let bom = build_bom(&plan, &totals);

        assert!(bom.find("Concrete corner connector").is_none());
        assert_eq!(bom.find("Corner channel (to verify)").unwrap().quantity, 4);
        assert!(bom.find("Gate").is_none());
        assert!(bom.find("Wicket").is_some());
    }

    #[test]
    fn test_csv_rendering() {
        let bom = BillOfMaterials {
            items: vec![
                BomItem::new("Post", 12, "section 60 mm"),
                BomItem::new("Gate", 1, "side: front; width 4 m"),
            ],
        };
        let csv = bom.to_csv();
        assert!(csv.starts_with('\u{feff}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').lines().collect();
        assert_eq!(
            lines,
            vec![
                "Element;Quantity;Details",
                "Post;12;section 60 mm",
                "Gate;1;side: front, width 4 m"
            ]
        );
    }
}
