use acqmap_core::sources::{parse_feature_collection, parse_topology};
use acqmap_core::{Choice, DataSources, Error, TimeWindow, PAST_WEEK_URL, WORLD_URL};
use pretty_assertions::assert_eq;

#[test]
fn past_week_reads_the_bundled_collection() {
    let sources = DataSources::default();
    assert_eq!(sources.url(TimeWindow::PastWeek), "data/acquisitions.geojson");
    assert_eq!(sources.url(TimeWindow::PastWeek), PAST_WEEK_URL);
    assert_eq!(sources.world, WORLD_URL);
}

#[test]
fn every_window_has_its_own_url() {
    let sources = DataSources::default();
    sources.validate().unwrap();
    let day = sources.url(TimeWindow::PastDay);
    let month = sources.url(TimeWindow::PastMonth);
    assert!(day.starts_with("https://"));
    assert!(month.starts_with("https://"));
    assert_ne!(day, month);
}

#[test]
fn overrides_keep_missing_fields() {
    let sources = DataSources::from_json(r#"{"past-day": "local/day.geojson"}"#).unwrap();
    assert_eq!(sources.url(TimeWindow::PastDay), "local/day.geojson");
    assert_eq!(sources.past_week, PAST_WEEK_URL);
    assert_eq!(sources.world, WORLD_URL);
}

#[test]
fn shared_urls_are_rejected() {
    let err = DataSources::from_json(
        r#"{"past-day": "same.geojson", "past-month": "same.geojson"}"#,
    )
    .unwrap_err();
    match err {
        Error::DuplicateSource { first, second, url } => {
            assert_eq!(first, TimeWindow::PastDay.label());
            assert_eq!(second, TimeWindow::PastMonth.label());
            assert_eq!(url, "same.geojson");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn malformed_overrides_are_errors() {
    assert!(matches!(
        DataSources::from_json("{\"past-day\": 3}"),
        Err(Error::Json(_))
    ));
}

#[test]
fn reads_a_usgs_summary_feed() {
    let body = r#"{
      "type": "FeatureCollection",
      "metadata": {"generated": 1559586926000, "title": "USGS All Earthquakes, Past Day", "count": 2},
      "features": [
        {"type": "Feature", "id": "ci1",
         "properties": {"mag": 1.2, "place": "10km N of Somewhere", "time": 1559586000000},
         "geometry": {"type": "Point", "coordinates": [-117.5, 35.6, 7.3]}},
        {"type": "Feature", "id": "ak2",
         "properties": {"mag": null, "place": "Alaska"},
         "geometry": {"type": "Point", "coordinates": [-150.1, 61.2]}}
      ],
      "bbox": [-150.1, 35.6, 7.3, -117.5, 61.2, 7.3]
    }"#;
    let fc = parse_feature_collection(body).unwrap();
    assert_eq!(fc.len(), 2);
    assert_eq!(fc.features[0].magnitude(), Some(1.2));
    assert_eq!(fc.features[0].place(), Some("10km N of Somewhere"));
    let p = fc.features[0].point().unwrap();
    assert_eq!((p.lon, p.lat, p.alt), (-117.5, 35.6, Some(7.3)));
    assert_eq!(fc.features[1].magnitude(), None);
}

#[test]
fn truncated_bodies_are_errors() {
    assert!(parse_feature_collection(r#"{"type": "FeatureCollection", "features": ["#).is_err());
    assert!(parse_topology("[]").is_err());
}
