//! GeoJSON model.
//!
//! Only the parts the globe and the map page read are typed; everything
//! else in `properties` is kept as JSON in document order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `[longitude, latitude]` with an optional third coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Position {
    pub lon: f64,
    pub lat: f64,
    pub alt: Option<f64>,
}

impl Position {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: None,
        }
    }

    pub const fn with_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Self {
            lon,
            lat,
            alt: Some(alt),
        }
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(v: Vec<f64>) -> std::result::Result<Self, Self::Error> {
        match v.as_slice() {
            [lon, lat] => Ok(Self::new(*lon, *lat)),
            [lon, lat, alt, ..] => Ok(Self::with_alt(*lon, *lat, *alt)),
            _ => Err(format!("position needs at least 2 coordinates, got {}", v.len())),
        }
    }
}

impl From<Position> for Vec<f64> {
    fn from(p: Position) -> Self {
        match p.alt {
            Some(alt) => vec![p.lon, p.lat, alt],
            None => vec![p.lon, p.lat],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point {
        coordinates: Position,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    pub fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            kind: feature_type(),
            id: None,
            geometry: Some(geometry),
            properties: Some(properties),
        }
    }

    #[inline]
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }

    /// The `mag` property, when it is a number.
    pub fn magnitude(&self) -> Option<f64> {
        self.property("mag").and_then(Value::as_f64)
    }

    pub fn place(&self) -> Option<&str> {
        self.property("place").and_then(Value::as_str)
    }

    /// The `popupContent` mapping, in document order.
    pub fn popup_content(&self) -> Option<&Map<String, Value>> {
        self.property("popupContent").and_then(Value::as_object)
    }

    /// Coordinates of a point feature.
    pub fn point(&self) -> Option<Position> {
        match self.geometry.as_ref()? {
            Geometry::Point { coordinates } => Some(*coordinates),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            kind: collection_type(),
            metadata: None,
            features,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
