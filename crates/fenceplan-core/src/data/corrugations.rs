//! Corrugation reference data
//!
//! A corrugated (3D) panel is fixed to each post with one clamp per
//! corrugation, so the clamp count per post follows from the panel height.
//! The mapping is manufacturer data and still incomplete, which is why it
//! lives in an injectable table instead of the solver.

use std::collections::BTreeMap;

/// Heights are looked up after rounding to this step (mm)
pub const HEIGHT_STEP_MM: u32 = 10;

/// Panel height (mm) to corrugation count mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrugationTable {
    entries: BTreeMap<u32, u32>,
}

impl CorrugationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the count for a nominal panel height
    pub fn add_entry(&mut self, height_mm: u32, corrugations: u32) {
        if let Some(previous) = self.entries.insert(height_mm, corrugations) {
            tracing::debug!(
                "Corrugation entry for {} mm replaced: {} -> {}",
                height_mm,
                previous,
                corrugations
            );
        }
    }

    /// Builder-style variant of [`add_entry`](Self::add_entry)
    pub fn with_entry(mut self, height_mm: u32, corrugations: u32) -> Self {
        self.add_entry(height_mm, corrugations);
        self
    }

    /// Merge another table into this one; entries in `other` win
    pub fn extend_from(&mut self, other: &CorrugationTable) {
        for (height, count) in other.iter() {
            self.add_entry(height, count);
        }
    }

    /// Corrugation count for a panel height, if the table knows it
    ///
    /// The height is rounded to the nearest 10 mm first, so 828 mm and
    /// 834 mm both resolve to the 830 mm entry.
    pub fn lookup(&self, panel_height_mm: f64) -> Option<u32> {
        if !panel_height_mm.is_finite() || panel_height_mm < 0.0 {
            return None;
        }
        let step = HEIGHT_STEP_MM as f64;
        let rounded = (panel_height_mm / step).round() * step;
        self.entries.get(&(rounded as u32)).copied()
    }

    /// Clamps per post: an explicit override wins, then the table, then 0
    pub fn resolve(&self, explicit: Option<u32>, panel_height_mm: f64) -> u32 {
        explicit
            .or_else(|| self.lookup(panel_height_mm))
            .unwrap_or(0)
    }

    /// Iterate over `(height_mm, corrugations)` in ascending height
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|(h, c)| (*h, *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The manufacturer heights known so far
pub fn standard_table() -> CorrugationTable {
    CorrugationTable::new()
        .with_entry(830, 2)
        .with_entry(2230, 4)
        .with_entry(2430, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_entries() {
        let table = standard_table();
        assert_eq!(table.len(), 3);
        assert_eq!(table.lookup(830.0), Some(2));
        assert_eq!(table.lookup(2230.0), Some(4));
        assert_eq!(table.lookup(2430.0), Some(4));
    }

    #[test]
    fn test_lookup_rounds_to_ten() {
        let table = standard_table();
        assert_eq!(table.lookup(826.0), Some(2));
        assert_eq!(table.lookup(834.9), Some(2));
        assert_eq!(table.lookup(825.0), Some(2));
        assert_eq!(table.lookup(824.9), None);
        assert_eq!(table.lookup(1500.0), None);
    }

    #[test]
    fn test_lookup_rejects_nonsense() {
        let table = standard_table();
        assert_eq!(table.lookup(f64::NAN), None);
        assert_eq!(table.lookup(-830.0), None);
    }

    #[test]
    fn test_resolve_prefers_override() {
        let table = standard_table();
        assert_eq!(table.resolve(None, 830.0), 2);
        assert_eq!(table.resolve(Some(0), 830.0), 0);
        assert_eq!(table.resolve(Some(3), 1500.0), 3);
        assert_eq!(table.resolve(None, 1500.0), 0);
    }

    #[test]
    fn test_extend_from_overrides() {
        let mut table = standard_table();
        let extra = CorrugationTable::new().with_entry(1530, 3).with_entry(830, 1);
        table.extend_from(&extra);
        assert_eq!(table.lookup(1530.0), Some(3));
        assert_eq!(table.lookup(830.0), Some(1));
        assert_eq!(table.len(), 4);
    }
}
