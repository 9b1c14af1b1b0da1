// Host-side tests for the magnitude-to-radius mapping.

use acqmap_core::{Feature, Geometry, MagnitudeRadius, Position};
use serde_json::{json, Value};

fn feature_with(props: Value) -> Feature {
    let Value::Object(map) = props else {
        panic!("properties must be an object");
    };
    Feature::new(
        Geometry::Point {
            coordinates: Position::new(0.0, 0.0),
        },
        map,
    )
}

#[test]
fn radius_stays_within_zero_and_max() {
    for max in [1.0, 10.0, 20.0] {
        let mapper = MagnitudeRadius::new(max);
        for m in [1e-9, 0.1, 0.5, 1.0, 1.5, 2.0, 5.0, 10.0, 1e3, 1e12, 1e300, f64::MAX] {
            let r = mapper.radius(m);
            assert!(r >= 0.0 && r <= max, "m={} max={} r={}", m, max, r);
        }
    }
}

#[test]
fn radius_is_monotone_in_magnitude() {
    let mapper = MagnitudeRadius::new(10.0);
    let mut prev = mapper.radius(1e-6);
    let mut m = 1e-6;
    while m < 1e50 {
        m *= 1.7;
        let r = mapper.radius(m);
        assert!(r >= prev, "radius fell from {} to {} at m={}", prev, r, m);
        prev = r;
    }
}

#[test]
fn matches_sqrt_of_log_over_domain() {
    let mapper = MagnitudeRadius::new(10.0);
    // ln(e^25) = 25, sqrt(25 / 100) = 0.5
    let m = 25f64.exp();
    assert!((mapper.radius(m) - 5.0).abs() < 1e-9);
    // a magnitude of 4.5 maps to sqrt(ln 4.5 / 100) * 10
    let expected = (4.5f64.ln() / 100.0).sqrt() * 10.0;
    assert!((mapper.radius(4.5) - expected).abs() < 1e-12);
}

#[test]
fn non_positive_and_missing_magnitudes_map_to_zero() {
    let mapper = MagnitudeRadius::new(10.0);
    assert_eq!(mapper.radius(0.0), 0.0);
    assert_eq!(mapper.radius(-3.0), 0.0);
    assert_eq!(mapper.radius(f64::NAN), 0.0);
    assert_eq!(mapper.radius(1.0), 0.0);

    assert_eq!(mapper.feature_radius(&feature_with(json!({}))), 0.0);
    assert_eq!(mapper.feature_radius(&feature_with(json!({ "mag": null }))), 0.0);
    assert_eq!(mapper.feature_radius(&feature_with(json!({ "mag": "big" }))), 0.0);
    let f = feature_with(json!({ "mag": 3.2 }));
    assert_eq!(mapper.feature_radius(&f), mapper.radius(3.2));
}

#[test]
fn zero_max_radius_always_yields_zero() {
    let mapper = MagnitudeRadius::new(0.0);
    assert_eq!(mapper.radius(1e6), 0.0);
    assert_eq!(MagnitudeRadius::new(-4.0).max_radius(), 0.0);
}
