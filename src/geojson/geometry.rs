//! Canonical, validated GeoJSON geometries.

use super::input::GeometryInput;
use super::validate::{validate_point, validate_polygon};
use crate::error::GeoJsonError;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::str::FromStr;

/// A GeoJSON position reduced to its planar `[x, y]` pair.
pub type Position = [f64; 2];

/// A validated GeoJSON Point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointGeometry {
    pub coordinates: Position,
}

/// A validated GeoJSON Polygon.
///
/// The first ring is the exterior, any further rings are holes. Every ring is
/// closed (first position repeated last) and has at least three distinct
/// positions.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonGeometry {
    pub coordinates: Vec<Vec<Position>>,
}

impl PolygonGeometry {
    /// The exterior ring, closing position included.
    pub fn exterior(&self) -> &[Position] {
        self.coordinates.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// The hole rings, closing positions included.
    pub fn holes(&self) -> &[Vec<Position>] {
        self.coordinates.get(1..).unwrap_or(&[])
    }

    /// Total number of positions over all rings.
    pub fn vertex_count(&self) -> usize {
        self.coordinates.iter().map(Vec::len).sum()
    }
}

impl Serialize for PointGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PointGeometry", 2)?;
        state.serialize_field("type", "Point")?;
        state.serialize_field("coordinates", &self.coordinates)?;
        state.end()
    }
}

impl Serialize for PolygonGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PolygonGeometry", 2)?;
        state.serialize_field("type", "Polygon")?;
        state.serialize_field("coordinates", &self.coordinates)?;
        state.end()
    }
}

impl FromStr for PointGeometry {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_point(GeometryInput::from(s))
    }
}

impl FromStr for PolygonGeometry {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_polygon(GeometryInput::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn holed() -> PolygonGeometry {
        PolygonGeometry {
            coordinates: vec![
                vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
                vec![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0], [1.0, 1.0]],
            ],
        }
    }

    #[test]
    fn test_rings_accessors() {
        let polygon = holed();
        assert_eq!(polygon.exterior().len(), 5);
        assert_eq!(polygon.holes().len(), 1);
        assert_eq!(polygon.vertex_count(), 10);
    }

    #[test]
    fn test_polygon_serializes_as_geojson() {
        let value = serde_json::to_value(holed()).unwrap();
        assert_eq!(value["type"], json!("Polygon"));
        assert_eq!(value["coordinates"][1][2], json!([2.0, 2.0]));
    }

    #[test]
    fn test_point_serializes_as_geojson() {
        let point = PointGeometry {
            coordinates: [-104.94189, 39.743764],
        };
        assert_eq!(
            serde_json::to_value(point).unwrap(),
            json!({"type": "Point", "coordinates": [-104.94189, 39.743764]})
        );
    }

    #[test]
    fn test_from_str_round_trips_through_validation() {
        let text = serde_json::to_string(&holed()).unwrap();
        let parsed: PolygonGeometry = text.parse().unwrap();
        assert_eq!(parsed, holed());

        let point: PointGeometry = r#"{"type":"Point","coordinates":[1,2]}"#.parse().unwrap();
        assert_eq!(point.coordinates, [1.0, 2.0]);
    }
}
