//! Polygon boolean operations.
//!
//! Thin wrappers over [`overlay`] that assemble the result into polygons.

use super::overlay::{overlay, OverlayOp};
use super::shape::Polygon;
use crate::error::TopologyError;

/// Computes the intersection of two polygons.
///
/// Holes in either operand are respected. The result may be empty or consist
/// of several disjoint polygons.
///
/// # Example
///
/// ```
/// use geoquery::polygon::{polygon_intersection, Polygon};
/// use geoquery::primitives::Point2;
///
/// let square1 = Polygon::from_vertices(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// let square2 = Polygon::from_vertices(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(1.0, 3.0),
/// ]);
///
/// let result = polygon_intersection(&square1, &square2).unwrap();
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].area(), 1.0);
/// ```
pub fn polygon_intersection(a: &Polygon, b: &Polygon) -> Result<Vec<Polygon>, TopologyError> {
    if let (Some(bb_a), Some(bb_b)) = (a.bounding_box(), b.bounding_box()) {
        if !bb_a.intersects(bb_b) {
            return Ok(Vec::new());
        }
    }
    overlay(&[a, b], OverlayOp::Intersection).into_polygons()
}

/// Computes the union of any number of polygons.
///
/// Inputs sharing only boundary segments are merged; inputs touching at a
/// single vertex stay separate polygons. A hole survives unless another input
/// covers it.
pub fn polygon_union(polygons: &[Polygon]) -> Result<Vec<Polygon>, TopologyError> {
    let refs: Vec<&Polygon> = polygons.iter().collect();
    overlay(&refs, OverlayOp::Union).into_polygons()
}
