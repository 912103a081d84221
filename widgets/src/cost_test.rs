use super::*;

#[test]
fn default_comparator_starts_at_three_visits() {
    let comparator = CostComparator::default();
    assert_eq!(comparator.visits_per_month(), 3);
    assert_eq!(comparator.rates(), CostRates { baseline_unit_cost: 8, service_unit_cost: 2 });
}

#[test]
fn three_visits_at_default_rates() {
    let breakdown = CostComparator::default().derive();
    assert_eq!(breakdown, CostBreakdown { baseline_cost: 24, service_cost: 6, savings: 18 });
}

#[test]
fn slider_bounds_at_default_rates() {
    let mut comparator = CostComparator::default();

    comparator.set_visits(1).expect("1 is in range");
    assert_eq!(comparator.derive(), CostBreakdown { baseline_cost: 8, service_cost: 2, savings: 6 });

    comparator.set_visits(12).expect("12 is in range");
    assert_eq!(comparator.derive(), CostBreakdown { baseline_cost: 96, service_cost: 24, savings: 72 });
}

#[test]
fn savings_matches_clamped_difference_across_range() {
    let mut comparator = CostComparator::default();
    for visits in MIN_VISITS..=MAX_VISITS {
        comparator.set_visits(i64::from(visits)).expect("in range");
        let b = comparator.derive();
        let expected = (i64::from(b.baseline_cost) - i64::from(b.service_cost)).max(0);
        assert_eq!(i64::from(b.savings), expected, "visits {visits}");
    }
}

#[test]
fn out_of_range_visits_are_rejected_without_change() {
    let mut comparator = CostComparator::default();
    comparator.set_visits(5).expect("in range");

    for bad in [0, 13, -1, 256, i64::MAX] {
        let err = comparator.set_visits(bad).expect_err("should reject");
        assert_eq!(err, WidgetError::VisitsOutOfRange { value: bad, min: 1, max: 12 });
        assert_eq!(comparator.visits_per_month(), 5);
    }
}

#[test]
fn inverted_rates_floor_savings_at_zero() {
    let rates = CostRates { baseline_unit_cost: 8, service_unit_cost: 10 };
    let mut comparator = CostComparator::new(rates);
    for visits in MIN_VISITS..=MAX_VISITS {
        comparator.set_visits(i64::from(visits)).expect("in range");
        let b = comparator.derive();
        assert!(b.service_cost > b.baseline_cost);
        assert_eq!(b.savings, 0);
    }
}

#[test]
fn slider_input_is_parsed_and_applied() {
    let mut comparator = CostComparator::default();
    comparator.set_visits_from_input(" 7 ").expect("numeric input");
    assert_eq!(comparator.visits_per_month(), 7);
}

#[test]
fn non_integer_slider_input_is_rejected_without_change() {
    let mut comparator = CostComparator::default();
    for raw in ["", "abc", "3.5", "NaN"] {
        let err = comparator.set_visits_from_input(raw).expect_err("should reject");
        assert_eq!(err, WidgetError::InvalidVisits(raw.to_owned()));
        assert_eq!(comparator.visits_per_month(), DEFAULT_VISITS);
    }
}

#[test]
fn out_of_range_slider_input_is_rejected() {
    let mut comparator = CostComparator::default();
    assert!(matches!(comparator.set_visits_from_input("13"), Err(WidgetError::VisitsOutOfRange { value: 13, .. })));
    assert_eq!(comparator.visits_per_month(), DEFAULT_VISITS);
}
