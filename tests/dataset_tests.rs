use acqmap_core::dataset::{parse_locations, reformat, LocationRecord, ReformatOptions, ReformatReport};
use acqmap_core::Position;
use pretty_assertions::assert_eq;
use serde_json::json;

const LOCATIONS: &str = r#"{
  "Paris, France": {
    "address": "Paris, France",
    "magnitude": 55,
    "longitude": 2.35,
    "latitude": 48.85,
    "org names": {"Bibliotheque": 40, "Musee": 15}
  },
  "Nowhere": {"address": "Nowhere", "magnitude": 3},
  "Ottawa, Canada": {"address": "Ottawa, Canada", "count": 12, "lon": -75.7, "lat": 45.4},
  "zero": {"address": "Zero", "magnitude": 0, "longitude": 1, "latitude": 1},
  "anonymous": {"magnitude": 4, "longitude": 1, "latitude": 1}
}"#;

#[test]
fn keeps_document_order() {
    let locations = parse_locations(LOCATIONS).unwrap();
    let keys: Vec<&str> = locations.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["Paris, France", "Nowhere", "Ottawa, Canada", "zero", "anonymous"]
    );
}

#[test]
fn skips_incomplete_records() {
    let locations = parse_locations(LOCATIONS).unwrap();
    let (fc, report) = reformat(&locations, ReformatOptions::default());
    assert_eq!(
        report,
        ReformatReport {
            records: 5,
            written: 2,
            skipped: 3
        }
    );
    let ids: Vec<_> = fc.features.iter().map(|f| f.id.clone()).collect();
    assert_eq!(ids, vec![Some(json!("Paris, France")), Some(json!("Ottawa, Canada"))]);
}

#[test]
fn scales_counts_and_lifts_points() {
    let locations = parse_locations(LOCATIONS).unwrap();
    let (fc, _) = reformat(&locations, ReformatOptions::default());
    let paris = &fc.features[0];
    assert_eq!(paris.magnitude(), Some(5.5));
    assert_eq!(paris.place(), Some("Paris, France"));
    assert_eq!(paris.point(), Some(Position::with_alt(2.35, 48.85, 9.0)));
    assert_eq!(paris.popup_content(), None);

    let ottawa = &fc.features[1];
    assert_eq!(ottawa.magnitude(), Some(1.2));
    assert_eq!(ottawa.point(), Some(Position::with_alt(-75.7, 45.4, 9.0)));
}

#[test]
fn popups_carry_institutions_in_order() {
    let locations = parse_locations(LOCATIONS).unwrap();
    let (fc, _) = reformat(&locations, ReformatOptions { with_popups: true });
    let popup = fc.features[0].popup_content().unwrap();
    let keys: Vec<&str> = popup.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Bibliotheque", "Musee"]);
    assert_eq!(popup["Bibliotheque"], json!(40));
    // no institutions, no popup
    assert_eq!(fc.features[1].popup_content(), None);
}

#[test]
fn metadata_describes_the_collection() {
    let locations = parse_locations(LOCATIONS).unwrap();
    let (fc, _) = reformat(&locations, ReformatOptions::default());
    let meta = fc.metadata.unwrap();
    assert_eq!(meta["title"], json!("Acquisitions"));
    assert_eq!(meta["url"], json!("data/acquisitions.geojson"));
    assert_eq!(meta["status"], json!(200));
    assert_eq!(meta["count"], json!(5));
}

#[test]
fn output_is_geojson() {
    let locations = parse_locations(LOCATIONS).unwrap();
    let (fc, _) = reformat(&locations, ReformatOptions::default());
    let v = serde_json::to_value(&fc).unwrap();
    assert_eq!(v["type"], json!("FeatureCollection"));
    assert_eq!(v["features"][0]["type"], json!("Feature"));
    assert_eq!(v["features"][0]["geometry"]["type"], json!("Point"));
    assert_eq!(v["features"][0]["geometry"]["coordinates"], json!([2.35, 48.85, 9.0]));
}

#[test]
fn both_key_spellings_are_read() {
    let locations = parse_locations(
        r#"{"A": {"address": "A", "count": 12, "magnitude": 30, "lon": 1, "longitude": 5, "lat": 2}}"#,
    )
    .unwrap();
    let rec = &locations[0].1;
    assert_eq!(rec.magnitude, Some(30.0));
    assert_eq!(rec.longitude, Some(1.0));
    assert_eq!(rec.latitude, Some(2.0));
}

#[test]
fn numeric_strings_are_numbers() {
    let locations =
        parse_locations(r#"{"A": {"address": "A", "count": "12", "lon": "1.5", "lat": 2}}"#).unwrap();
    let (fc, _) = reformat(&locations, ReformatOptions::default());
    assert_eq!(fc.features[0].magnitude(), Some(1.2));
    assert_eq!(fc.features[0].point(), Some(Position::with_alt(1.5, 2.0, 9.0)));
}

#[test]
fn bad_records_are_skipped_one_at_a_time() {
    let locations = parse_locations(
        r#"{
          "good": {"address": "Good", "magnitude": 20, "lon": 1, "lat": 2},
          "text": "not a record",
          "words": {"address": "Words", "count": "many", "lon": 1, "lat": 2},
          "array": [1, 2, 3]
        }"#,
    )
    .unwrap();
    assert_eq!(locations[1].1, LocationRecord::default());
    let (fc, report) = reformat(&locations, ReformatOptions::default());
    assert_eq!(
        report,
        ReformatReport {
            records: 4,
            written: 1,
            skipped: 3
        }
    );
    assert_eq!(fc.features[0].place(), Some("Good"));
}

#[test]
fn only_a_non_object_document_is_an_error() {
    assert!(parse_locations("[]").is_err());
    assert!(parse_locations("{").is_err());
    assert_eq!(parse_locations("{}").unwrap(), vec![]);
}
