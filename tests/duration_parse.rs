use chrono::Duration;
use exodus_bot::commands::remind::parse_duration;

#[test]
fn full_form_parses() {
    assert_eq!(
        parse_duration("1h30m15s").unwrap(),
        Duration::hours(1) + Duration::minutes(30) + Duration::seconds(15)
    );
}

#[test]
fn missing_segments_default_to_zero() {
    assert_eq!(
        parse_duration("2h30m").unwrap(),
        Duration::hours(2) + Duration::minutes(30)
    );
    assert_eq!(parse_duration("45s").unwrap(), Duration::seconds(45));
    assert_eq!(parse_duration("2h").unwrap(), Duration::hours(2));
    assert_eq!(parse_duration("10m").unwrap(), Duration::minutes(10));
}

#[test]
fn zero_values_are_legal() {
    assert_eq!(parse_duration("0s").unwrap(), Duration::zero());
    assert_eq!(parse_duration("0h0m0s").unwrap(), Duration::zero());
}

#[test]
fn empty_string_is_rejected() {
    assert!(parse_duration("").is_err());
}

#[test]
fn out_of_order_units_are_rejected() {
    assert!(parse_duration("m5h").is_err());
    assert!(parse_duration("30m2h").is_err());
    assert!(parse_duration("15s1h").is_err());
}

#[test]
fn non_numeric_segments_are_rejected() {
    assert!(parse_duration("h30m").is_err());
    assert!(parse_duration("xh").is_err());
    assert!(parse_duration("1h2xm").is_err());
    assert!(parse_duration("-5m").is_err());
}

#[test]
fn trailing_garbage_is_rejected() {
    assert!(parse_duration("10").is_err());
    assert!(parse_duration("1h2m3s4").is_err());
    assert!(parse_duration("5s!").is_err());
}
