// Tooltip markup and caption choice for the Leaflet acquisitions page.

use acqmap_core::{tooltip_html, Caption};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn feature(properties: &str) -> Value {
    let properties: Value = serde_json::from_str(properties).unwrap();
    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {"type": "Point", "coordinates": [2.35, 48.85, 9]}
    })
}

#[test]
fn tooltip_lists_place_then_entries() {
    let f = feature(r#"{"place": "Paris", "popupContent": {"2020": 5, "2021": 7}}"#);
    assert_eq!(
        tooltip_html(&f),
        "Paris<br><ul><li>5 - 2020</li><li>7 - 2021</li></ul>"
    );
}

#[test]
fn tooltip_entries_keep_document_order() {
    let f = feature(r#"{"popupContent": {"Zeta": 1, "Alpha": 2}}"#);
    assert_eq!(tooltip_html(&f), "<ul><li>1 - Zeta</li><li>2 - Alpha</li></ul>");
}

#[test]
fn tooltip_with_place_only() {
    let f = feature(r#"{"place": "Ottawa", "mag": 1.2}"#);
    assert_eq!(tooltip_html(&f), "Ottawa<br>");
}

#[test]
fn tooltip_strings_are_unquoted() {
    let f = feature(r#"{"place": "", "popupContent": {"Library": "many"}}"#);
    assert_eq!(tooltip_html(&f), "<ul><li>many - Library</li></ul>");
}

#[test]
fn tooltip_is_empty_without_content() {
    let f = feature("{}");
    assert_eq!(tooltip_html(&f), "");
}

#[test]
fn tooltip_whole_floats_print_without_decimals() {
    let f = feature(r#"{"place": "Paris", "popupContent": {"2020": 5.0, "2021": 2.5}}"#);
    assert_eq!(
        tooltip_html(&f),
        "Paris<br><ul><li>5 - 2020</li><li>2.5 - 2021</li></ul>"
    );
}

#[test]
fn tooltip_ignores_a_broken_geometry() {
    let f = json!({
        "type": "Feature",
        "properties": {"place": "Paris", "popupContent": {"2020": 5}},
        "geometry": {"type": "Point", "coordinates": [2.3]}
    });
    assert_eq!(tooltip_html(&f), "Paris<br><ul><li>5 - 2020</li></ul>");
}

#[test]
fn tooltip_without_properties_is_empty() {
    assert_eq!(tooltip_html(&json!({"type": "Feature", "properties": null})), "");
}

#[test]
fn french_caption_only_for_fr() {
    assert_eq!(Caption::for_language(Some("fr")), Caption::French);
    assert_eq!(Caption::for_language(Some("en")), Caption::English);
    assert_eq!(Caption::for_language(Some("FR")), Caption::English);
    assert_eq!(Caption::for_language(Some("")), Caption::English);
    assert_eq!(Caption::for_language(None), Caption::English);
}

#[test]
fn exactly_one_caption_is_visible() {
    for c in [Caption::English, Caption::French] {
        let (en, fr) = c.visibility();
        assert!(en ^ fr);
    }
    assert_eq!(Caption::French.visibility(), (false, true));
}
