//! 2D point type.

use super::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A 2D point with x (longitude) and y (latitude) coordinates.
///
/// Generic over floating-point types (`f32` or `f64`). No coordinate
/// reference system is attached; the plane is whatever the input used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Returns the point rotated a quarter turn counter-clockwise about the origin.
    ///
    /// Exact in floating point: only a swap and a negation.
    #[inline]
    pub fn rotated_quarter(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self { x, y }
    }
}

impl<F: Float> From<Point2<F>> for [F; 2] {
    fn from(p: Point2<F>) -> Self {
        [p.x, p.y]
    }
}
