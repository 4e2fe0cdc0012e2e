//! Planar polygons and boolean overlay.
//!
//! Validated GeoJSON polygons are converted into [`Polygon`] values whose
//! rings are stored open and consistently oriented (exterior CCW, holes CW).
//! Point location, intersection and union all run on this representation
//! with exact orientation predicates.
//!
//! # Example
//!
//! ```
//! use geoquery::polygon::{Location, Polygon};
//! use geoquery::primitives::Point2;
//!
//! let triangle = Polygon::from_vertices(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! assert_eq!(triangle.locate(Point2::new(1.0, 1.0)), Location::Inside);
//! assert_eq!(triangle.locate(Point2::new(2.0, 2.0)), Location::Boundary);
//! assert_eq!(triangle.locate(Point2::new(3.0, 3.0)), Location::Outside);
//! ```

mod assemble;
mod boolean;
mod core;
mod overlay;
mod shape;

pub use boolean::{polygon_intersection, polygon_union};
pub use core::{signed_area, Location, Ring};
pub use overlay::{overlay, Overlay, OverlayOp};
pub use shape::Polygon;
