//! Axis-aligned bounding box.

use crate::primitives::Point2;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. All comparisons are inclusive so
/// that boxes sharing only an edge or corner still count as overlapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point2<F>) -> Self {
        Self { min: p, max: p }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if this AABB contains the given point (boundary included).
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Returns `true` if this AABB intersects another AABB (touching included).
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
