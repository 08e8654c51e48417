//! `TopoJSON` topology decoding.
//!
//! Converts the polygon geometries of one topology object into `GeoJSON`
//! features. Arcs are delta-decoded when the topology is quantized, and
//! rings are stitched from arc references (a negative index `i` refers to
//! arc `!i` traversed in reverse).

use std::collections::BTreeMap;

use geojson::{Feature, Geometry, JsonObject};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::GeographyError;

/// A `TopoJSON` `Topology`.
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    /// Shared arcs. Each position holds at least `[x, y]`.
    #[serde(default)]
    pub arcs: Vec<Vec<Vec<f64>>>,
    /// Quantization transform, present for quantized topologies.
    pub transform: Option<Transform>,
    /// Named geometry objects.
    #[serde(default, deserialize_with = "object_map")]
    pub objects: BTreeMap<String, TopoObject>,
}

/// Quantization transform of a topology.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Transform {
    /// Per-axis scale.
    pub scale: [f64; 2],
    /// Per-axis translation.
    pub translate: [f64; 2],
}

/// A geometry object inside a topology.
///
/// Only the polygonal types carry country shapes; everything else,
/// including null geometries (`"type": null`), is skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoObject {
    /// A collection of nested geometries.
    GeometryCollection {
        /// Member geometries.
        #[serde(default, deserialize_with = "object_list")]
        geometries: Vec<TopoObject>,
    },
    /// A polygon given as rings of arc indexes.
    Polygon {
        /// Rings of arc indexes.
        arcs: Vec<Vec<i64>>,
        /// Feature properties.
        #[serde(default)]
        properties: Option<JsonObject>,
    },
    /// A multipolygon given as polygons of rings of arc indexes.
    MultiPolygon {
        /// Polygons of rings of arc indexes.
        arcs: Vec<Vec<Vec<i64>>>,
        /// Feature properties.
        #[serde(default)]
        properties: Option<JsonObject>,
    },
    /// Any non-polygonal geometry.
    #[serde(other)]
    Unsupported,
}

impl Topology {
    /// Converts the polygons of the named object into `GeoJSON` features.
    ///
    /// Falls back to the first object (by name) when `object` is `None` or
    /// not present in the topology.
    ///
    /// # Errors
    ///
    /// Returns [`GeographyError::Conversion`] if the topology has no
    /// objects or a ring references an arc that does not exist.
    pub fn features(&self, object: Option<&str>) -> Result<Vec<Feature>, GeographyError> {
        let named = object.and_then(|name| self.objects.get(name));
        if let Some(name) = object
            && named.is_none()
        {
            log::warn!("Topology has no object named '{name}', using the first object");
        }

        let root = named
            .or_else(|| self.objects.values().next())
            .ok_or_else(|| GeographyError::Conversion {
                message: "Topology contains no objects".to_string(),
            })?;

        let arcs = self.decoded_arcs();
        let mut features = Vec::new();
        collect_features(root, &arcs, &mut features)?;
        Ok(features)
    }

    /// Returns the arcs in absolute coordinates.
    fn decoded_arcs(&self) -> Vec<Vec<Vec<f64>>> {
        self.arcs
            .iter()
            .map(|arc| {
                let points = arc.iter().filter(|p| p.len() >= 2);
                match self.transform {
                    Some(t) => {
                        let (mut x, mut y) = (0.0, 0.0);
                        points
                            .map(|p| {
                                x += p[0];
                                y += p[1];
                                vec![
                                    x.mul_add(t.scale[0], t.translate[0]),
                                    y.mul_add(t.scale[1], t.translate[1]),
                                ]
                            })
                            .collect()
                    }
                    None => points.map(|p| vec![p[0], p[1]]).collect(),
                }
            })
            .collect()
    }
}

/// Null or untyped geometries become [`TopoObject::Unsupported`]; serde's
/// `other` fallback only covers unknown string tags.
fn object_from_value<E: de::Error>(value: Value) -> Result<TopoObject, E> {
    if value.get("type").is_none_or(Value::is_null) {
        return Ok(TopoObject::Unsupported);
    }
    TopoObject::deserialize(value).map_err(E::custom)
}

fn object_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<TopoObject>, D::Error> {
    Vec::<Value>::deserialize(deserializer)?
        .into_iter()
        .map(object_from_value)
        .collect()
}

fn object_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, TopoObject>, D::Error> {
    BTreeMap::<String, Value>::deserialize(deserializer)?
        .into_iter()
        .map(|(name, value)| object_from_value(value).map(|object| (name, object)))
        .collect()
}

fn collect_features(
    object: &TopoObject,
    arcs: &[Vec<Vec<f64>>],
    out: &mut Vec<Feature>,
) -> Result<(), GeographyError> {
    match object {
        TopoObject::GeometryCollection { geometries } => {
            for geometry in geometries {
                collect_features(geometry, arcs, out)?;
            }
        }
        TopoObject::Polygon {
            arcs: rings,
            properties,
        } => {
            let polygon = polygon(rings, arcs)?;
            out.push(feature(geojson::Value::Polygon(polygon), properties.clone()));
        }
        TopoObject::MultiPolygon {
            arcs: polygons,
            properties,
        } => {
            let polygons = polygons
                .iter()
                .map(|rings| polygon(rings, arcs))
                .collect::<Result<Vec<_>, _>>()?;
            out.push(feature(
                geojson::Value::MultiPolygon(polygons),
                properties.clone(),
            ));
        }
        TopoObject::Unsupported => {
            log::debug!("Skipping non-polygonal topology object");
        }
    }
    Ok(())
}

fn feature(value: geojson::Value, properties: Option<JsonObject>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties,
        foreign_members: None,
    }
}

fn polygon(
    rings: &[Vec<i64>],
    arcs: &[Vec<Vec<f64>>],
) -> Result<Vec<Vec<Vec<f64>>>, GeographyError> {
    rings.iter().map(|ring| stitch_ring(ring, arcs)).collect()
}

/// Concatenates the referenced arcs into one ring, dropping the shared
/// first point of every arc after the first.
fn stitch_ring(indexes: &[i64], arcs: &[Vec<Vec<f64>>]) -> Result<Vec<Vec<f64>>, GeographyError> {
    let mut ring: Vec<Vec<f64>> = Vec::new();

    for &index in indexes {
        let (arc_index, reversed) = if index >= 0 {
            (index, false)
        } else {
            (!index, true)
        };

        let arc = usize::try_from(arc_index)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or_else(|| GeographyError::Conversion {
                message: format!("Ring references missing arc {index}"),
            })?;

        let skip = usize::from(!ring.is_empty());
        if reversed {
            ring.extend(arc.iter().rev().skip(skip).cloned());
        } else {
            ring.extend(arc.iter().skip(skip).cloned());
        }
    }

    Ok(ring)
}
