//! GeoJSON validation for Point and Polygon geometries.
//!
//! Raw inputs arrive either as JSON text or as an already-deserialized
//! [`serde_json::Value`]. Both are normalized into one parsed value and then
//! checked against an explicit schema; nothing is silently defaulted.
//!
//! # Example
//!
//! ```
//! use geoquery::geojson::validate_polygon;
//!
//! let square = r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
//! let polygon = validate_polygon(square).unwrap();
//! assert_eq!(polygon.exterior().len(), 5);
//!
//! let misspelled = r#"{"type": "Polygon", "coord": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
//! assert!(validate_polygon(misspelled).is_err());
//! ```

mod geometry;
mod input;
mod validate;

pub use geometry::{PointGeometry, PolygonGeometry, Position};
pub use input::GeometryInput;
pub use validate::{validate_point, validate_polygon};
