//! Property tests for field normalization.

use fenceplan_core::{parse_quantity, to_canonical, CorrugationTable, FieldValue, LengthUnit};
use proptest::prelude::*;

fn unit_strategy() -> impl Strategy<Value = LengthUnit> {
    prop_oneof![
        Just(LengthUnit::Millimeter),
        Just(LengthUnit::Centimeter),
        Just(LengthUnit::Meter),
    ]
}

proptest! {
    #[test]
    fn any_text_normalizes_to_a_finite_number(input in ".*") {
        prop_assert!(parse_quantity(&input).is_finite());
        prop_assert!(FieldValue::from(input.as_str()).to_mm(LengthUnit::Meter).is_finite());
    }

    #[test]
    fn numeric_text_matches_number(value in -1.0e6f64..1.0e6, unit in unit_strategy()) {
        let text = FieldValue::from(value.to_string());
        prop_assert_eq!(text.to_mm(unit), to_canonical(value, unit));
    }

    #[test]
    fn table_lookup_tolerates_rounding(
        height in 1u32..500,
        corrugations in 0u32..10,
        delta in -4.9f64..4.9,
    ) {
        let table = CorrugationTable::new().with_entry(height * 10, corrugations);
        prop_assert_eq!(table.lookup((height * 10) as f64 + delta), Some(corrugations));
    }
}
