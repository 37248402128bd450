use exodus_bot::commands::weather::{compose_location, Unit};
use exodus_bot::services::geocode::ResolvedPlace;

fn resolved_austin() -> ResolvedPlace {
    ResolvedPlace {
        city: Some("Austin".to_string()),
        state_province: Some("Texas".to_string()),
        country: Some("United States".to_string()),
        lat: 30.27,
        lon: -97.74,
    }
}

#[test]
fn parse_accepts_case_insensitive_letters() {
    assert_eq!(Unit::parse("C"), Some(Unit::Celsius));
    assert_eq!(Unit::parse("f"), Some(Unit::Fahrenheit));
    assert_eq!(Unit::parse(" k "), Some(Unit::Kelvin));
    assert_eq!(Unit::parse("X"), None);
    assert_eq!(Unit::parse(""), None);
}

#[test]
fn formats_convert_from_metric() {
    assert_eq!(Unit::Celsius.format(20.0), "20.0°C");
    assert_eq!(Unit::Fahrenheit.format(20.0), "68.0°F");
    assert_eq!(Unit::Kelvin.format(20.0), "293.15K");
    assert_eq!(Unit::Fahrenheit.format(-40.0), "-40.0°F");
}

#[test]
fn default_unit_is_celsius() {
    assert_eq!(Unit::default(), Unit::Celsius);
}

#[test]
fn explicit_location_parts_win_over_resolution() {
    let composed = compose_location(
        Some("atx".to_string()),
        Some("TX".to_string()),
        None,
        &resolved_austin(),
    );
    assert_eq!(composed, "atx, TX, United States");
}

#[test]
fn resolved_components_fill_missing_parts() {
    let composed = compose_location(None, None, None, &resolved_austin());
    assert_eq!(composed, "Austin, Texas, United States");
}

#[test]
fn unresolved_components_are_skipped() {
    let mut place = resolved_austin();
    place.state_province = None;
    place.country = None;
    assert_eq!(compose_location(None, None, None, &place), "Austin");
}
