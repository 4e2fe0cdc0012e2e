//! Structural validation of GeoJSON Point and Polygon values.

use super::geometry::{PointGeometry, PolygonGeometry, Position};
use super::input::GeometryInput;
use crate::error::{GeoJsonError, GeometryKind};
use serde_json::{Map, Value};

/// Validates a raw input as a GeoJSON Point.
///
/// Checks run in a fixed order and the first failure wins: empty input,
/// unparseable text, wrong shape or `type`, then missing coordinates.
pub fn validate_point(input: impl Into<GeometryInput>) -> Result<PointGeometry, GeoJsonError> {
    let kind = GeometryKind::Point;
    let value = input.into().into_value()?;
    let object = geometry_object(&value, kind)?;
    let coordinates = required_coordinates(object, kind)?;

    Ok(PointGeometry {
        coordinates: position(coordinates, kind)?,
    })
}

/// Validates a raw input as a GeoJSON Polygon.
///
/// Beyond the shape checks every ring must hold at least four positions, be
/// closed and contain at least three distinct positions. A missing,
/// misspelled, `null` or empty `coordinates` member yields
/// [`GeoJsonError::MissingCoordinates`], never an empty polygon.
pub fn validate_polygon(
    input: impl Into<GeometryInput>,
) -> Result<PolygonGeometry, GeoJsonError> {
    let kind = GeometryKind::Polygon;
    let value = input.into().into_value()?;
    let object = geometry_object(&value, kind)?;
    let coordinates = required_coordinates(object, kind)?;

    let rings = coordinates
        .as_array()
        .ok_or_else(|| GeoJsonError::shape(kind, "coordinates must be an array of linear rings"))?;

    let coordinates = rings
        .iter()
        .enumerate()
        .map(|(index, ring)| linear_ring(ring, index, kind))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PolygonGeometry { coordinates })
}

/// Checks the value is an object whose `type` member names `kind`.
fn geometry_object(value: &Value, kind: GeometryKind) -> Result<&Map<String, Value>, GeoJsonError> {
    let object = value.as_object().ok_or_else(|| {
        GeoJsonError::shape(kind, format!("expected a JSON object, found {}", json_type(value)))
    })?;

    match object.get("type") {
        None => Err(GeoJsonError::shape(kind, "missing required member: [type]")),
        Some(Value::String(name)) if name == kind.as_str() => Ok(object),
        Some(Value::String(name)) => Err(GeoJsonError::shape(
            kind,
            format!("expected type \"{kind}\", found \"{name}\""),
        )),
        Some(other) => Err(GeoJsonError::shape(
            kind,
            format!("member [type] must be a string, found {}", json_type(other)),
        )),
    }
}

fn required_coordinates(object: &Map<String, Value>, kind: GeometryKind) -> Result<&Value, GeoJsonError> {
    match object.get("coordinates") {
        None | Some(Value::Null) => Err(GeoJsonError::MissingCoordinates { kind }),
        Some(Value::Array(items)) if items.is_empty() => {
            Err(GeoJsonError::MissingCoordinates { kind })
        }
        Some(coordinates) => Ok(coordinates),
    }
}

/// A position is 2 or 3 finite numbers; altitude is dropped.
fn position(value: &Value, kind: GeometryKind) -> Result<Position, GeoJsonError> {
    let values = value.as_array().ok_or_else(|| {
        GeoJsonError::shape(
            kind,
            format!("a position must be an array of numbers, found {}", json_type(value)),
        )
    })?;

    if !(2..=3).contains(&values.len()) {
        return Err(GeoJsonError::shape(
            kind,
            format!("a position must have 2 or 3 values, found {}", values.len()),
        ));
    }

    let mut xy = [0.0; 2];
    for (slot, item) in xy.iter_mut().zip(values) {
        *slot = item
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GeoJsonError::shape(kind, "position values must be finite numbers"))?;
    }
    if let Some(altitude) = values.get(2) {
        if !altitude.as_f64().is_some_and(f64::is_finite) {
            return Err(GeoJsonError::shape(kind, "position values must be finite numbers"));
        }
    }

    Ok(xy)
}

fn linear_ring(value: &Value, index: usize, kind: GeometryKind) -> Result<Vec<Position>, GeoJsonError> {
    let items = value.as_array().ok_or_else(|| {
        GeoJsonError::shape(
            kind,
            format!("ring {index} must be an array of positions, found {}", json_type(value)),
        )
    })?;

    let positions = items
        .iter()
        .map(|item| position(item, kind))
        .collect::<Result<Vec<_>, _>>()?;

    if positions.len() < 4 {
        return Err(GeoJsonError::shape(
            kind,
            format!("ring {index} must have at least 4 positions, found {}", positions.len()),
        ));
    }
    if positions.first() != positions.last() {
        return Err(GeoJsonError::shape(
            kind,
            format!("ring {index} is not closed: first and last positions differ"),
        ));
    }
    if !has_three_distinct(&positions) {
        return Err(GeoJsonError::shape(
            kind,
            format!("ring {index} must have at least 3 distinct positions"),
        ));
    }

    Ok(positions)
}

fn has_three_distinct(positions: &[Position]) -> bool {
    let Some(&first) = positions.first() else {
        return false;
    };
    let Some(&second) = positions.iter().find(|p| **p != first) else {
        return false;
    };
    positions.iter().any(|p| *p != first && *p != second)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const POLY_GOOD: &str = r#"{"type": "Polygon", "coordinates": [[[ 100.0, 0.0 ], [ 101.0, 0.0 ], [ 101.0, 1.0 ], [ 100.0, 1.0 ], [ 100.0, 0.0 ]]]}"#;

    fn shape_reason(result: Result<PolygonGeometry, GeoJsonError>) -> String {
        match result {
            Err(GeoJsonError::Shape { kind, reason }) => {
                assert_eq!(kind, GeometryKind::Polygon);
                reason
            }
            other => panic!("expected a shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_polygon_text_and_value_agree() {
        let from_text = validate_polygon(POLY_GOOD).unwrap();
        let value: Value = serde_json::from_str(POLY_GOOD).unwrap();
        let from_value = validate_polygon(value).unwrap();
        assert_eq!(from_text, from_value);
        assert_eq!(from_text.exterior()[1], [101.0, 0.0]);
    }

    #[test]
    fn test_polygon_with_hole_and_extra_members() {
        let value = json!({
            "type": "Polygon",
            "bbox": [0, 0, 4, 4],
            "coordinates": [
                [[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
                [[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]]
            ]
        });
        let polygon = validate_polygon(value).unwrap();
        assert_eq!(polygon.holes().len(), 1);
    }

    #[test]
    fn test_altitude_is_accepted_and_dropped() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0, 5], [1, 0, 5], [1, 1, 5], [0, 0, 5]]]
        });
        let polygon = validate_polygon(value).unwrap();
        assert_eq!(polygon.exterior()[1], [1.0, 0.0]);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(validate_polygon(""), Err(GeoJsonError::Empty));
        assert_eq!(validate_polygon(json!({})), Err(GeoJsonError::Empty));
        assert_eq!(validate_polygon(json!([])), Err(GeoJsonError::Empty));
        assert_eq!(validate_point(json!(null)), Err(GeoJsonError::Empty));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(validate_polygon("*"), Err(GeoJsonError::NotJson(_))));
        let missing_comma = r#"{ "type": "Polygon", "coordinates": [ [ [ 1208064 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] ] }"#;
        assert!(matches!(validate_polygon(missing_comma), Err(GeoJsonError::NotJson(_))));
    }

    #[test]
    fn test_quoted_empty_string_is_not_an_object() {
        let reason = shape_reason(validate_polygon(r#""""#));
        assert!(reason.contains("expected a JSON object"), "{reason}");
    }

    #[test]
    fn test_missing_or_misspelled_coordinates() {
        let misspelled = json!({"type": "Polygon", "coord": [[[0, 0], [1, 0], [1, 1], [0, 0]]]});
        let missing = json!({"type": "Polygon"});
        let null = json!({"type": "Polygon", "coordinates": null});
        let empty = json!({"type": "Polygon", "coordinates": []});

        for value in [misspelled, missing, null, empty] {
            assert_eq!(
                validate_polygon(value),
                Err(GeoJsonError::MissingCoordinates {
                    kind: GeometryKind::Polygon
                })
            );
        }
    }

    #[test]
    fn test_type_errors_win_over_missing_coordinates() {
        let reason = shape_reason(validate_polygon(json!({"tipe": "Polygon"})));
        assert!(reason.contains("[type]"), "{reason}");
    }

    #[test]
    fn test_wrong_type_values() {
        for name in ["Poli", "LineString", "polygon", "Point"] {
            let value = json!({"type": name, "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]});
            let reason = shape_reason(validate_polygon(value));
            assert!(reason.contains(name), "{reason}");
        }
        let numeric = json!({"type": 7, "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]});
        assert!(shape_reason(validate_polygon(numeric)).contains("must be a string"));
    }

    #[test]
    fn test_missing_outer_ring_list() {
        let value = json!({"type": "Polygon", "coordinates": [[1208064, 624154], [1208064, 601260], [1231345, 601260], [1208064, 624154]]});
        let reason = shape_reason(validate_polygon(value));
        assert!(reason.contains("position"), "{reason}");
    }

    #[test]
    fn test_ring_too_short() {
        let value = json!({"type": "Polygon", "coordinates": [[[12, 62], [12, 60]]]});
        assert!(shape_reason(validate_polygon(value)).contains("at least 4 positions"));
    }

    #[test]
    fn test_ring_not_closed() {
        let value = json!({"type": "Polygon", "coordinates": [[[12, 62], [12, 60], [12, 62], [12, 60]]]});
        assert!(shape_reason(validate_polygon(value)).contains("not closed"));
    }

    #[test]
    fn test_ring_without_three_distinct_positions() {
        let value = json!({"type": "Polygon", "coordinates": [[[12, 62], [12, 60], [12, 62], [12, 60], [12, 62]]]});
        assert!(shape_reason(validate_polygon(value)).contains("3 distinct"));
    }

    #[test]
    fn test_empty_exterior_ring_is_a_shape_error() {
        let value = json!({"type": "Polygon", "coordinates": [[]]});
        assert!(shape_reason(validate_polygon(value)).contains("ring 0"));
    }

    #[test]
    fn test_bad_position_values() {
        let value = json!({"type": "Polygon", "coordinates": [[[0, "a"], [1, 0], [1, 1], [0, "a"]]]});
        assert!(shape_reason(validate_polygon(value)).contains("finite numbers"));
        let four = json!({"type": "Polygon", "coordinates": [[[0, 0, 0, 0], [1, 0], [1, 1], [0, 0, 0, 0]]]});
        assert!(shape_reason(validate_polygon(four)).contains("2 or 3 values"));
    }

    #[test]
    fn test_valid_point() {
        let point = validate_point(r#"{ "type": "Point", "coordinates": [-104.94189, 39.743764] }"#).unwrap();
        assert_eq!(point.coordinates, [-104.94189, 39.743764]);
    }

    #[test]
    fn test_invalid_points() {
        assert!(matches!(
            validate_point(json!({"type": "Point"})),
            Err(GeoJsonError::MissingCoordinates {
                kind: GeometryKind::Point
            })
        ));
        assert!(matches!(
            validate_point(json!({"type": "Point", "coordinates": [1]})),
            Err(GeoJsonError::Shape { .. })
        ));
        assert!(matches!(
            validate_point(json!({"type": "Point", "coordinates": [[1, 2]]})),
            Err(GeoJsonError::Shape { .. })
        ));
        assert!(matches!(
            validate_point(json!({"type": "Polygon", "coordinates": [1, 2]})),
            Err(GeoJsonError::Shape { .. })
        ));
    }
}
