//! TopoJSON decoding into GeoJSON geometry.
//!
//! Handles quantized topologies (delta-encoded arcs plus a transform) and
//! plain ones. Objects that are geometry collections become feature
//! collections with one feature per member.

use crate::error::{Error, Result};
use crate::geo::{Feature, FeatureCollection, Geometry, Position};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    Point {
        coordinates: Vec<f64>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    MultiPoint {
        coordinates: Vec<Vec<f64>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    LineString {
        arcs: Vec<i64>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    MultiLineString {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<Value>,
        #[serde(default)]
        properties: Option<Map<String, Value>>,
    },
    GeometryCollection {
        geometries: Vec<Member>,
    },
}

/// A collection member. Members with a `null` type (no geometry) are kept
/// as raw JSON and skipped on conversion.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Member {
    Geometry(TopoGeometry),
    Null(Value),
}

impl Member {
    fn geometry(&self) -> Option<&TopoGeometry> {
        match self {
            Self::Geometry(g) => Some(g),
            Self::Null(_) => None,
        }
    }
}

impl TopoGeometry {
    fn id_and_properties(&self) -> (Option<Value>, Option<Map<String, Value>>) {
        match self {
            Self::Point { id, properties, .. }
            | Self::MultiPoint { id, properties, .. }
            | Self::LineString { id, properties, .. }
            | Self::MultiLineString { id, properties, .. }
            | Self::Polygon { id, properties, .. }
            | Self::MultiPolygon { id, properties, .. } => (id.clone(), properties.clone()),
            Self::GeometryCollection { .. } => (None, None),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: BTreeMap<String, TopoGeometry>,
}

/// A topology with its arcs decoded to absolute longitude/latitude.
pub struct DecodedTopology {
    transform: Option<Transform>,
    arcs: Vec<Vec<Position>>,
    objects: BTreeMap<String, TopoGeometry>,
}

impl Topology {
    pub fn decode(self) -> DecodedTopology {
        let arcs = self
            .arcs
            .iter()
            .map(|arc| decode_arc(arc, self.transform.as_ref()))
            .collect();
        DecodedTopology {
            transform: self.transform,
            arcs,
            objects: self.objects,
        }
    }
}

fn decode_arc(arc: &[Vec<f64>], transform: Option<&Transform>) -> Vec<Position> {
    let Some(t) = transform else {
        return arc
            .iter()
            .filter(|p| p.len() >= 2)
            .map(|p| Position::new(p[0], p[1]))
            .collect();
    };
    let (mut x, mut y) = (0.0, 0.0);
    arc.iter()
        .filter(|p| p.len() >= 2)
        .map(|p| {
            x += p[0];
            y += p[1];
            Position::new(x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
        })
        .collect()
}

fn decode_point(p: &[f64], transform: Option<&Transform>) -> Option<Position> {
    let (x, y) = match p {
        [x, y, ..] => (*x, *y),
        _ => return None,
    };
    Some(match transform {
        Some(t) => Position::new(x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1]),
        None => Position::new(x, y),
    })
}

impl DecodedTopology {
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Convert the named object to GeoJSON.
    pub fn feature(&self, name: &str) -> Result<FeatureCollection> {
        let object = self
            .objects
            .get(name)
            .ok_or_else(|| Error::MissingObject(name.to_string()))?;
        let features = match object {
            TopoGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .filter_map(Member::geometry)
                .map(|g| self.to_feature(g))
                .collect::<Result<Vec<_>>>()?,
            other => vec![self.to_feature(other)?],
        };
        Ok(FeatureCollection::new(features))
    }

    fn to_feature(&self, g: &TopoGeometry) -> Result<Feature> {
        let (id, properties) = g.id_and_properties();
        let mut feature = Feature::new(self.geometry(g)?, properties.unwrap_or_default());
        feature.id = id;
        Ok(feature)
    }

    fn geometry(&self, g: &TopoGeometry) -> Result<Geometry> {
        let t = self.transform.as_ref();
        Ok(match g {
            TopoGeometry::Point { coordinates, .. } => Geometry::Point {
                coordinates: decode_point(coordinates, t)
                    .ok_or(Error::InvalidPosition(coordinates.len()))?,
            },
            TopoGeometry::MultiPoint { coordinates, .. } => Geometry::MultiPoint {
                coordinates: coordinates
                    .iter()
                    .filter_map(|p| decode_point(p, t))
                    .collect(),
            },
            TopoGeometry::LineString { arcs, .. } => Geometry::LineString {
                coordinates: self.line(arcs)?,
            },
            TopoGeometry::MultiLineString { arcs, .. } => Geometry::MultiLineString {
                coordinates: arcs.iter().map(|a| self.line(a)).collect::<Result<_>>()?,
            },
            TopoGeometry::Polygon { arcs, .. } => Geometry::Polygon {
                coordinates: self.rings(arcs)?,
            },
            TopoGeometry::MultiPolygon { arcs, .. } => Geometry::MultiPolygon {
                coordinates: arcs.iter().map(|p| self.rings(p)).collect::<Result<_>>()?,
            },
            TopoGeometry::GeometryCollection { geometries } => Geometry::GeometryCollection {
                geometries: geometries
                    .iter()
                    .filter_map(Member::geometry)
                    .map(|g| self.geometry(g))
                    .collect::<Result<_>>()?,
            },
        })
    }

    fn rings(&self, rings: &[Vec<i64>]) -> Result<Vec<Vec<Position>>> {
        rings.iter().map(|r| self.ring(r)).collect()
    }

    fn ring(&self, arcs: &[i64]) -> Result<Vec<Position>> {
        let mut points = self.line(arcs)?;
        // degenerate rings still need four positions to close
        while !points.is_empty() && points.len() < 4 {
            points.push(points[0]);
        }
        Ok(points)
    }

    /// Stitch arcs end to end, dropping the point each arc shares with the
    /// previous one. Negative indices name the reversed arc `!index`.
    fn line(&self, arcs: &[i64]) -> Result<Vec<Position>> {
        let mut points: Vec<Position> = Vec::new();
        for &index in arcs {
            let (i, reversed) = if index < 0 { (!index, true) } else { (index, false) };
            let arc = usize::try_from(i)
                .ok()
                .and_then(|i| self.arcs.get(i))
                .ok_or(Error::ArcIndex {
                    index,
                    len: self.arcs.len(),
                })?;
            points.pop();
            if reversed {
                points.extend(arc.iter().rev().copied());
            } else {
                points.extend(arc.iter().copied());
            }
        }
        if points.len() < 2 {
            if let Some(&p) = points.first() {
                points.push(p);
            }
        }
        Ok(points)
    }
}
