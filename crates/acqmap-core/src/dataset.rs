//! Building the bundled acquisitions collection from a geocoded locations
//! file.
//!
//! The locations file maps an address key to a record carrying the address,
//! an acquisition count, coordinates and optionally the institutions that
//! made acquisitions there.

use crate::error::Result;
use crate::geo::{Feature, FeatureCollection, Geometry, Position};
use serde_json::{json, Map, Value};

/// Third coordinate written for every acquisition point.
pub const POINT_ALTITUDE: f64 = 9.0;
/// Acquisition counts are divided by this to form `mag`.
pub const COUNT_DIVISOR: f64 = 10.0;

/// One entry of the locations file. Fields that are missing or unreadable
/// are `None`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocationRecord {
    pub address: Option<String>,
    pub magnitude: Option<f64>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub org_names: Option<Map<String, Value>>,
}

impl LocationRecord {
    /// Read a record leniently. `magnitude` wins over `count`, `lon`/`lat`
    /// over `longitude`/`latitude`; numbers may also be numeric strings.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };
        let number = |keys: &[&str]| keys.iter().find_map(|k| obj.get(*k).and_then(as_number));
        Self {
            address: obj.get("address").and_then(Value::as_str).map(str::to_string),
            magnitude: number(&["magnitude", "count"]),
            longitude: number(&["lon", "longitude"]),
            latitude: number(&["lat", "latitude"]),
            org_names: obj.get("org names").and_then(Value::as_object).cloned(),
        }
    }
}

fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|f: &f64| f.is_finite())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReformatOptions {
    /// Copy the institution names into `popupContent`.
    pub with_popups: bool,
}

/// Counts of what [`reformat`] kept and dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReformatReport {
    pub records: usize,
    pub written: usize,
    pub skipped: usize,
}

/// Parse a locations file, keeping the key order of the document.
///
/// Only a document that is not a JSON object is an error; a malformed
/// record comes back empty and is skipped by [`reformat`].
pub fn parse_locations(json: &str) -> Result<Vec<(String, LocationRecord)>> {
    let raw: Map<String, Value> = serde_json::from_str(json)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            if !value.is_object() {
                log::warn!("location {:?} is not an object", key);
            }
            let record = LocationRecord::from_value(&value);
            (key, record)
        })
        .collect())
}

pub fn reformat(
    locations: &[(String, LocationRecord)],
    options: ReformatOptions,
) -> (FeatureCollection, ReformatReport) {
    let mut report = ReformatReport {
        records: locations.len(),
        ..Default::default()
    };
    let mut features = Vec::with_capacity(locations.len());
    for (key, rec) in locations {
        match to_feature(key, rec, options) {
            Some(f) => features.push(f),
            None => {
                log::debug!("skipping location {:?}", key);
                report.skipped += 1;
            }
        }
    }
    report.written = features.len();

    let mut fc = FeatureCollection::new(features);
    fc.metadata = Some(json!({
        "generated": 1559586926000u64,
        "url": "data/acquisitions.geojson",
        "title": "Acquisitions",
        "status": 200,
        "api": "1.8.1",
        "count": locations.len(),
    }));
    (fc, report)
}

fn to_feature(key: &str, rec: &LocationRecord, options: ReformatOptions) -> Option<Feature> {
    let address = rec.address.as_ref()?;
    let magnitude = rec.magnitude.filter(|m| *m > 0.0)?;
    let (lon, lat) = (rec.longitude?, rec.latitude?);

    let mut properties = Map::new();
    properties.insert("place".into(), Value::from(address.as_str()));
    properties.insert("mag".into(), Value::from(magnitude / COUNT_DIVISOR));
    if options.with_popups {
        if let Some(orgs) = &rec.org_names {
            properties.insert("popupContent".into(), Value::Object(orgs.clone()));
        }
    }
    let mut feature = Feature::new(
        Geometry::Point {
            coordinates: Position::with_alt(lon, lat, POINT_ALTITUDE),
        },
        properties,
    );
    feature.id = Some(Value::from(key));
    Some(feature)
}
