//! The four geometric queries.
//!
//! Every query is a pure function of already-validated [`Polygon`] values.
//! Boundary relations are decided with exact orientation predicates, so
//! touching inputs give a stable answer regardless of rounding.
//!
//! # Example
//!
//! ```
//! use geoquery::engine::{intersects, overlap_area, point_in_polygon};
//! use geoquery::polygon::Polygon;
//! use geoquery::primitives::Point2;
//!
//! let unit = |x: f64, y: f64| {
//!     Polygon::from_vertices(vec![
//!         Point2::new(x, y),
//!         Point2::new(x + 1.0, y),
//!         Point2::new(x + 1.0, y + 1.0),
//!         Point2::new(x, y + 1.0),
//!     ])
//! };
//!
//! let a = unit(0.0, 0.0);
//! let b = unit(0.5, 0.5);
//! assert!(intersects(&a, &b));
//! assert_eq!(overlap_area(&a, &b), 0.25);
//! assert!(point_in_polygon(Point2::new(0.5, 0.5), &a));
//! ```

use crate::bounds::Aabb2;
use crate::error::QueryError;
use crate::polygon::{overlay, polygon_union, Location, OverlayOp, Polygon};
use crate::predicates::segments_touch;
use crate::primitives::{Point2, Segment2};
use serde::Deserialize;

/// Whether a point exactly on a polygon boundary counts as within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryRule {
    /// Boundary points are within (closed polygon).
    #[default]
    Closed,
    /// Boundary points are not within (open polygon).
    Open,
}

impl BoundaryRule {
    /// Applies the rule to a located point.
    pub fn admits(self, location: Location) -> bool {
        match (self, location) {
            (_, Location::Inside) => true,
            (BoundaryRule::Closed, Location::Boundary) => true,
            _ => false,
        }
    }
}

/// Outcome of [`union_overlap`].
#[derive(Debug, Clone, PartialEq)]
pub enum UnionOverlap {
    /// The union has several disconnected components.
    NoOverlap,
    /// The inputs merge into this single polygon.
    Overlap(Polygon),
}

impl UnionOverlap {
    /// Returns the merged polygon, if any.
    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            UnionOverlap::NoOverlap => None,
            UnionOverlap::Overlap(polygon) => Some(polygon),
        }
    }
}

/// Tests whether two polygons share at least one point.
///
/// Touching at a single vertex or along an edge counts.
pub fn intersects(a: &Polygon, b: &Polygon) -> bool {
    let (Some(bb_a), Some(bb_b)) = (a.bounding_box(), b.bounding_box()) else {
        return false;
    };
    if !bb_a.intersects(bb_b) {
        return false;
    }

    if boundaries_touch(a, b) {
        return true;
    }

    // No boundary contact: either disjoint or one lies wholly inside the other.
    let first_vertex = |p: &Polygon| p.exterior().vertices().first().copied();
    first_vertex(a).is_some_and(|v| b.contains_point(v))
        || first_vertex(b).is_some_and(|v| a.contains_point(v))
}

/// Tests whether any edge of `a` touches any edge of `b`.
///
/// Edges of both polygons are swept in order of min x; only pairs from
/// different polygons with overlapping boxes reach the exact test.
fn boundaries_touch(a: &Polygon, b: &Polygon) -> bool {
    let mut edges: Vec<(Segment2<f64>, Aabb2<f64>, bool)> = a
        .edges()
        .map(|e| (e, e.bounding_box(), false))
        .chain(b.edges().map(|e| (e, e.bounding_box(), true)))
        .collect();
    edges.sort_by(|p, q| p.1.min.x.total_cmp(&q.1.min.x));

    for (pos, &(ei, bi, from_b)) in edges.iter().enumerate() {
        for &(ej, bj, other_from_b) in &edges[pos + 1..] {
            if bj.min.x > bi.max.x {
                break;
            }
            if from_b != other_from_b && bi.intersects(bj) && segments_touch(ei, ej) {
                return true;
            }
        }
    }
    false
}

/// Tests whether a point lies in the closed polygon.
///
/// Points in a hole are outside; points on any ring are within.
pub fn point_in_polygon(point: Point2<f64>, polygon: &Polygon) -> bool {
    point_in_polygon_with(point, polygon, BoundaryRule::Closed)
}

/// Tests point membership under an explicit boundary rule.
pub fn point_in_polygon_with(point: Point2<f64>, polygon: &Polygon, rule: BoundaryRule) -> bool {
    rule.admits(polygon.locate(point))
}

/// Area of the intersection of two polygons, in squared input units.
///
/// Returns 0.0 for disjoint or boundary-touching polygons.
pub fn overlap_area(a: &Polygon, b: &Polygon) -> f64 {
    let (Some(bb_a), Some(bb_b)) = (a.bounding_box(), b.bounding_box()) else {
        return 0.0;
    };
    if !bb_a.intersects(bb_b) {
        return 0.0;
    }
    overlay(&[a, b], OverlayOp::Intersection).area()
}

/// Unions the polygons and reports whether they form one connected mass.
///
/// # Errors
///
/// * [`QueryError::MethodInput`] when fewer than two polygons are given.
/// * [`QueryError::InvalidUnion`] when the union cannot be assembled or has
///   no polygonal component.
pub fn union_overlap(polygons: &[Polygon]) -> Result<UnionOverlap, QueryError> {
    if polygons.len() < 2 {
        return Err(QueryError::MethodInput {
            operation: "union_overlap",
            required: 2,
            supplied: polygons.len(),
        });
    }

    let mut merged = polygon_union(polygons)?;
    tracing::trace!(components = merged.len(), "union assembled");

    if merged.len() > 1 {
        return Ok(UnionOverlap::NoOverlap);
    }
    match merged.pop() {
        Some(polygon) => Ok(UnionOverlap::Overlap(polygon)),
        None => Err(QueryError::InvalidUnion(
            "union has no polygonal component".to_string(),
        )),
    }
}
