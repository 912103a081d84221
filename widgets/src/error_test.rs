use super::*;

#[test]
fn script_errors_are_configuration_errors() {
    assert!(WidgetError::EmptyScript.is_configuration());
    assert!(WidgetError::StepOutOfOrder { position: 1, expected: 2, found: 4 }.is_configuration());
    assert!(WidgetError::BlankStep { index: 3, field: "reply" }.is_configuration());
}

#[test]
fn input_errors_are_not_configuration_errors() {
    assert!(!WidgetError::VisitsOutOfRange { value: 13, min: 1, max: 12 }.is_configuration());
    assert!(!WidgetError::InvalidVisits("abc".to_owned()).is_configuration());
}

#[test]
fn out_of_range_message_names_bounds() {
    let err = WidgetError::VisitsOutOfRange { value: 0, min: 1, max: 12 };
    assert_eq!(err.to_string(), "visits per month 0 outside 1..=12");
}
