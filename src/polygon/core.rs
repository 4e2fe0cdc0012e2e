//! Linear rings and point location.

use crate::bounds::Aabb2;
use crate::geojson::Position;
use crate::predicates::{orient2d, point_on_segment, Orientation};
use crate::primitives::{Point2, Segment2};

/// Where a point lies relative to a ring or polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Strictly inside the interior.
    Inside,
    /// Exactly on an edge or vertex.
    Boundary,
    /// Strictly outside (including inside a hole).
    Outside,
}

/// A closed ring of vertices.
///
/// Vertices are stored open: the closing vertex is implicit (the last vertex
/// connects to the first) and consecutive duplicates are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<Point2<f64>>,
}

impl Ring {
    /// Creates a ring from vertices, dropping a repeated closing vertex and
    /// consecutive duplicates.
    pub fn new(vertices: Vec<Point2<f64>>) -> Self {
        let mut cleaned: Vec<Point2<f64>> = Vec::with_capacity(vertices.len());
        for v in vertices {
            if cleaned.last() != Some(&v) {
                cleaned.push(v);
            }
        }
        while cleaned.len() > 1 && cleaned.first() == cleaned.last() {
            cleaned.pop();
        }
        Self { vertices: cleaned }
    }

    /// Creates a ring from GeoJSON positions (closed or open).
    pub fn from_positions(positions: &[Position]) -> Self {
        Self::new(positions.iter().copied().map(Point2::from).collect())
    }

    /// Returns the ring as closed GeoJSON positions.
    pub fn to_positions(&self) -> Vec<Position> {
        let mut positions: Vec<Position> = self.vertices.iter().copied().map(Into::into).collect();
        if let Some(&first) = positions.first() {
            positions.push(first);
        }
        positions
    }

    /// The open vertex list.
    #[inline]
    pub fn vertices(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    /// Returns the number of distinct consecutive vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the ring has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates the edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<f64>> + '_ {
        let n = self.vertices.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| Segment2::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Returns the absolute area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Returns the bounding box, or `None` for an empty ring.
    pub fn bounding_box(&self) -> Option<Aabb2<f64>> {
        Aabb2::from_points(self.vertices.iter().copied())
    }

    /// Ensures the ring has CCW winding order.
    pub fn ensure_ccw(&mut self) {
        if self.signed_area() < 0.0 {
            self.vertices.reverse();
        }
    }

    /// Ensures the ring has CW winding order.
    pub fn ensure_cw(&mut self) {
        if self.signed_area() > 0.0 {
            self.vertices.reverse();
        }
    }

    /// Winding number of the ring around `point`.
    ///
    /// Only meaningful when `point` is not on the ring.
    pub fn winding_number(&self, point: Point2<f64>) -> i32 {
        self.edges().map(|edge| winding_crossing(edge, point)).sum()
    }

    /// Locates a point against this ring alone.
    pub fn locate(&self, point: Point2<f64>) -> Location {
        if self.edges().any(|edge| point_on_segment(point, edge)) {
            Location::Boundary
        } else if self.winding_number(point) != 0 {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}

/// Computes the signed area of an open vertex list.
///
/// Coordinates are taken relative to the first vertex, which keeps the
/// products small for inputs far from the origin (projected metres, say).
pub fn signed_area(vertices: &[Point2<f64>]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let origin = vertices[0];
    let n = vertices.len();
    let mut area = 0.0;

    for i in 0..n {
        let a = vertices[i] - origin;
        let b = vertices[(i + 1) % n] - origin;
        area += a.cross(b);
    }

    area / 2.0
}

/// Contribution of one directed edge to the winding number around `point`,
/// counted along a ray towards +x.
///
/// Upward edges include their start and exclude their end, downward edges the
/// reverse, so a ray through a vertex is counted exactly once. The side test
/// is exact.
#[inline]
pub(crate) fn winding_crossing(edge: Segment2<f64>, point: Point2<f64>) -> i32 {
    if edge.start.y <= point.y {
        if edge.end.y > point.y
            && orient2d(edge.start, edge.end, point) == Orientation::CounterClockwise
        {
            return 1;
        }
    } else if edge.end.y <= point.y
        && orient2d(edge.start, edge.end, point) == Orientation::Clockwise
    {
        return -1;
    }
    0
}
