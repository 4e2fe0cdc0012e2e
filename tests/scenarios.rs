//! End-to-end query scenarios over raw GeoJSON text and values.

use approx::assert_relative_eq;
use geoquery::error::{GeoJsonError, GeometryKind};
use geoquery::query::{
    check_point_in_polygon, check_polygon_intersection, get_overlap_area,
    get_polygon_union_overlap,
};
use geoquery::{QueryError, UnionOverlap};
use serde_json::{json, Value};

const POLY_GOOD: &str = r#"{"type": "Polygon", "coordinates": [[[ 100.0, 0.0 ], [ 101.0, 0.0 ], [ 101.0, 1.0 ], [ 100.0, 1.0 ], [ 100.0, 0.0 ]]]}"#;

const PROJECTED_A: &str = r#"{ "type": "Polygon", "coordinates": [ [ [ 1208064.271243039052933, 624154.678377891657874 ], [ 1208064.271243039052933, 601260.978566187433898 ], [ 1231345.999865111429244, 601260.978566187433898 ], [ 1231345.999865111429244, 624154.678377891657874 ], [ 1208064.271243039052933, 624154.678377891657874 ] ] ] }"#;

const PROJECTED_B: &str = r#"{ "type": "Polygon", "coordinates": [ [ [ 1199915.66622531437315, 633079.341016352758743 ], [ 1199915.66622531437315, 614453.958118694950826 ], [ 1219317.106743707787246, 614453.958118694950826 ], [ 1219317.106743707787246, 633079.341016352758743 ], [ 1199915.66622531437315, 633079.341016352758743 ] ] ] }"#;

fn square(x: f64, y: f64, size: f64) -> Value {
    json!({
        "type": "Polygon",
        "coordinates": [[[x, y], [x + size, y], [x + size, y + size], [x, y + size], [x, y]]]
    })
}

#[test]
fn separated_unit_squares_do_not_intersect() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(2.5, 0.0, 1.0);
    assert!(!check_polygon_intersection(&a, &b).unwrap().intersects);
    assert_eq!(get_overlap_area(&a, &b).unwrap().overlap_area, 0.0);
}

#[test]
fn identical_unit_squares() {
    let a = r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
    assert!(check_polygon_intersection(a, a).unwrap().intersects);
    assert_relative_eq!(get_overlap_area(a, a).unwrap().overlap_area, 1.0);
}

#[test]
fn half_offset_squares_overlap_a_quarter() {
    let a = square(0.0, 0.0, 1.0);
    let b = square(0.5, 0.5, 1.0);
    assert_relative_eq!(get_overlap_area(&a, &b).unwrap().overlap_area, 0.25);
}

#[test]
fn point_at_centroid_and_far_away() {
    let polygon = square(0.0, 0.0, 2.0);
    let centre = json!({"type": "Point", "coordinates": [1.0, 1.0]});
    let far = json!({"type": "Point", "coordinates": [1001.0, 1.0]});
    assert!(check_point_in_polygon(&centre, &polygon).unwrap().is_within);
    assert!(!check_point_in_polygon(&far, &polygon).unwrap().is_within);
}

#[test]
fn point_in_hole_is_not_within() {
    let frame = json!({
        "type": "Polygon",
        "coordinates": [
            [[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
            [[3, 3], [7, 3], [7, 7], [3, 7], [3, 3]]
        ]
    });
    let in_hole = json!({"type": "Point", "coordinates": [5, 5]});
    let in_ring = json!({"type": "Point", "coordinates": [1, 5]});
    assert!(!check_point_in_polygon(&in_hole, &frame).unwrap().is_within);
    assert!(check_point_in_polygon(&in_ring, &frame).unwrap().is_within);
}

#[test]
fn union_of_disjoint_squares_is_zero_sentinel() {
    let response = get_polygon_union_overlap([square(0.0, 0.0, 1.0), square(5.0, 0.0, 1.0)]).unwrap();
    assert_eq!(response.overlap, UnionOverlap::NoOverlap);
    assert_eq!(serde_json::to_value(&response).unwrap(), json!({"overlap": 0}));
}

#[test]
fn union_of_overlapping_squares_is_one_polygon() {
    let response = get_polygon_union_overlap([square(0.0, 0.0, 1.0), square(0.5, 0.5, 1.0)]).unwrap();
    let merged = response.overlap.polygon().unwrap();
    assert_relative_eq!(merged.area(), 1.75);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["overlap"]["type"], "Polygon");
    let ring = value["overlap"]["coordinates"][0].as_array().unwrap();
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn union_with_one_polygon_is_rejected() {
    let err = get_polygon_union_overlap([square(0.0, 0.0, 1.0)]).unwrap_err();
    assert!(matches!(err, QueryError::MethodInput { .. }));
    assert!(!err.is_internal());
}

#[test]
fn union_order_does_not_matter() {
    let a = square(0.0, 0.0, 2.0);
    let b = square(1.0, 1.0, 2.0);
    let ab = get_polygon_union_overlap([&a, &b]).unwrap();
    let ba = get_polygon_union_overlap([&b, &a]).unwrap();
    assert_relative_eq!(
        ab.overlap.polygon().unwrap().area(),
        ba.overlap.polygon().unwrap().area()
    );
}

#[test]
fn projected_coordinates() {
    let disjoint = check_polygon_intersection(POLY_GOOD, PROJECTED_A).unwrap();
    assert!(!disjoint.intersects);
    assert_eq!(get_overlap_area(POLY_GOOD, PROJECTED_A).unwrap().overlap_area, 0.0);

    assert!(check_polygon_intersection(PROJECTED_A, PROJECTED_B).unwrap().intersects);
    let width = 1219317.106743707787246 - 1208064.271243039052933;
    let height = 624154.678377891657874 - 614453.958118694950826;
    assert_relative_eq!(
        get_overlap_area(PROJECTED_A, PROJECTED_B).unwrap().overlap_area,
        width * height,
        max_relative = 1e-9
    );
}

#[test]
fn malformed_second_operand_is_rejected() {
    let bad: Vec<Value> = vec![
        json!(""),
        json!("*"),
        json!("bogus-str"),
        json!([]),
        json!({}),
        json!(r#"{ "type": "Polygon", "coord": [ [ [ 1208064, 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] ] }"#),
        json!(r#"{ "tipe": "Polygon", "coordinates": [ [ [ 1208064, 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] ] }"#),
        json!(r#"{ "type": "Polygon", "coordinates": [ [ [ 1208064 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] ] }"#),
        json!(r#"{ "type": "Polygon", "coordinates": [ [ 1208064, 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] }"#),
        json!(r#"{ "type": "Polygon", "coordinates": [ [ [ 12, 62 ], [ 12, 60 ] ] ] }"#),
        json!(r#"{ "type": "Polygon", "coordinates": [ [ [ 12, 62 ], [ 12, 60 ], [ 12, 62 ], [ 12, 60 ] ] ] }"#),
        json!(r#"{ "type": "Poli", "coordinates": [ [ [ 1208064, 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] ] }"#),
        json!(r#"{ "type": "LineString", "coordinates": [ [ [ 1208064, 624154 ], [ 1208064, 601260 ], [ 1231345, 601260 ], [ 1231345, 624154 ], [ 1208064, 624154 ] ] ] }"#),
    ];

    for input in bad {
        let err = get_overlap_area(POLY_GOOD, &input).unwrap_err();
        match err {
            QueryError::InvalidGeoJson { role, .. } => assert_eq!(role, "polygon_2", "{input}"),
            other => panic!("unexpected error for {input}: {other}"),
        }
    }
}

#[test]
fn missing_coordinates_differs_from_wrong_type() {
    let misspelled = r#"{"type": "Polygon", "coord": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
    let wrong_type = r#"{"type": "Poli", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;

    let missing = check_polygon_intersection(misspelled, POLY_GOOD).unwrap_err();
    let typed = check_polygon_intersection(wrong_type, POLY_GOOD).unwrap_err();

    assert!(matches!(
        missing,
        QueryError::InvalidGeoJson {
            source: GeoJsonError::MissingCoordinates {
                kind: GeometryKind::Polygon
            },
            ..
        }
    ));
    assert!(matches!(
        typed,
        QueryError::InvalidGeoJson {
            source: GeoJsonError::Shape { .. },
            ..
        }
    ));
}

#[test]
fn both_operands_invalid_reports_the_first() {
    let err = check_polygon_intersection("*", "{}").unwrap_err();
    assert!(matches!(
        err,
        QueryError::InvalidGeoJson {
            ref role,
            source: GeoJsonError::NotJson(_),
        } if role == "polygon_1"
    ));
}
