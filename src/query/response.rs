//! Plain-data query responses.
//!
//! Booleans go out as `0`/`1` and a union without overlap as the literal `0`,
//! which is what existing JSON consumers of these responses expect.

use crate::engine::UnionOverlap;
use crate::geojson::PolygonGeometry;
use serde::{Serialize, Serializer};

/// Response of `check_polygon_intersection`: `{"intersects": 0|1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntersectsResponse {
    #[serde(serialize_with = "as_flag")]
    pub intersects: bool,
}

/// Response of `get_overlap_area`: `{"overlap_area": <float>}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlapAreaResponse {
    pub overlap_area: f64,
}

/// Response of `check_point_in_polygon`: `{"is_within": 0|1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WithinResponse {
    #[serde(serialize_with = "as_flag")]
    pub is_within: bool,
}

/// Response of `get_polygon_union_overlap`: `{"overlap": 0 | <Polygon>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionOverlapResponse {
    #[serde(serialize_with = "as_overlap")]
    pub overlap: UnionOverlap,
}

fn as_flag<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

fn as_overlap<S: Serializer>(value: &UnionOverlap, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        UnionOverlap::NoOverlap => serializer.serialize_u8(0),
        UnionOverlap::Overlap(polygon) => PolygonGeometry::from(polygon).serialize(serializer),
    }
}
