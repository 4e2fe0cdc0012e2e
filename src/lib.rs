//! geoquery - Planar polygon queries over GeoJSON input
//!
//! Validates loosely structured GeoJSON Points and Polygons, then answers four
//! questions about them: do two polygons intersect, how large is their
//! overlap, is a point within a polygon, and do several polygons union into
//! one connected shape. Boundary decisions use exact orientation predicates.

pub mod bounds;
pub mod engine;
pub mod error;
pub mod geojson;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod query;

pub use engine::{BoundaryRule, UnionOverlap};
pub use error::{GeoJsonError, GeometryKind, QueryError, TopologyError};
pub use geojson::{GeometryInput, PointGeometry, PolygonGeometry};
pub use polygon::{Location, Polygon, Ring};
pub use primitives::{Point2, Segment2, Vec2};
pub use query::{
    check_point_in_polygon, check_polygon_intersection, get_overlap_area,
    get_polygon_union_overlap, Dispatcher, QueryConfig,
};
