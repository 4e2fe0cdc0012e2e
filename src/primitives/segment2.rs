//! 2D line segment type.

use super::{Point2, Vec2};
use crate::bounds::Aabb2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Polygon rings are walked as sequences of these; a ring edge runs from
/// `start` to `end` with the ring interior on its left after orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the direction vector from start to end.
    #[inline]
    pub fn direction(self) -> Vec2<F> {
        self.end - self.start
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Returns the axis-aligned box spanned by the endpoints.
    #[inline]
    pub fn bounding_box(self) -> Aabb2<F> {
        Aabb2::from_corners(self.start, self.end)
    }

    /// Returns the segment rotated a quarter turn about the origin.
    #[inline]
    pub fn rotated_quarter(self) -> Self {
        Self {
            start: self.start.rotated_quarter(),
            end: self.end.rotated_quarter(),
        }
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}
