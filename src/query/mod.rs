//! Query dispatch: raw GeoJSON in, plain-data responses out.
//!
//! Operands may be JSON text or already-parsed [`serde_json::Value`]s. The
//! free functions here run with [`QueryConfig::default`]; build a
//! [`Dispatcher`] to change the boundary rule or the vertex limit.
//!
//! # Example
//!
//! ```
//! use geoquery::query::get_polygon_union_overlap;
//! use serde_json::json;
//!
//! let a = json!({"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]});
//! let b = json!({"type": "Polygon", "coordinates": [[[5,5],[6,5],[6,6],[5,6],[5,5]]]});
//!
//! let response = get_polygon_union_overlap([a, b]).unwrap();
//! assert_eq!(serde_json::to_value(&response).unwrap(), json!({"overlap": 0}));
//! ```

mod config;
mod dispatch;
mod response;

pub use config::{QueryConfig, DEFAULT_MAX_VERTICES};
pub use dispatch::Dispatcher;
pub use response::{IntersectsResponse, OverlapAreaResponse, UnionOverlapResponse, WithinResponse};

use crate::error::QueryError;
use crate::geojson::GeometryInput;

/// Tests two GeoJSON polygons for intersection with default settings.
pub fn check_polygon_intersection(
    polygon_1: impl Into<GeometryInput>,
    polygon_2: impl Into<GeometryInput>,
) -> Result<IntersectsResponse, QueryError> {
    Dispatcher::default().check_polygon_intersection(polygon_1, polygon_2)
}

/// Computes the overlap area of two GeoJSON polygons with default settings.
pub fn get_overlap_area(
    polygon_1: impl Into<GeometryInput>,
    polygon_2: impl Into<GeometryInput>,
) -> Result<OverlapAreaResponse, QueryError> {
    Dispatcher::default().get_overlap_area(polygon_1, polygon_2)
}

/// Tests a GeoJSON point against a GeoJSON polygon with default settings.
pub fn check_point_in_polygon(
    point: impl Into<GeometryInput>,
    polygon: impl Into<GeometryInput>,
) -> Result<WithinResponse, QueryError> {
    Dispatcher::default().check_point_in_polygon(point, polygon)
}

/// Unions two or more GeoJSON polygons with default settings.
pub fn get_polygon_union_overlap<I>(polygons: I) -> Result<UnionOverlapResponse, QueryError>
where
    I: IntoIterator,
    I::Item: Into<GeometryInput>,
{
    Dispatcher::default().get_polygon_union_overlap(polygons)
}
