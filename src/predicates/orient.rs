//! Adaptive exact orientation test.

use crate::primitives::Point2;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are exactly collinear.
    Collinear,
}

impl Orientation {
    /// Returns the orientation as `1`, `-1` or `0`.
    #[inline]
    pub fn signum(self) -> i32 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }

    #[inline]
    fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Orientation::CounterClockwise
        } else if value < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Relative error bound of the fast determinant (Shewchuk's `ccwerrboundA`,
/// taken with the full machine epsilon so it errs on the safe side).
const CCW_ERRBOUND: f64 = (3.0 + 16.0 * f64::EPSILON) * f64::EPSILON;

/// Computes the exact orientation of three points.
///
/// Returns the orientation of the triangle `a`, `b`, `c`:
/// - `CounterClockwise` if `c` is to the left of the line from `a` to `b`
/// - `Clockwise` if `c` is to the right of the line from `a` to `b`
/// - `Collinear` if the three points lie exactly on one line
///
/// The floating-point determinant is used when its magnitude clears the
/// rounding error bound; otherwise the determinant is re-evaluated as an
/// exact sum of error-free products.
#[inline]
pub fn orient2d(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Orientation {
    let det_left = (a.x - c.x) * (b.y - c.y);
    let det_right = (a.y - c.y) * (b.x - c.x);
    let det = det_left - det_right;
    let det_sum = det_left.abs() + det_right.abs();

    if det.abs() > CCW_ERRBOUND * det_sum {
        return Orientation::from_value(det);
    }

    Orientation::from_value(orient2d_exact(a, b, c))
}

/// Exact sign-carrying value of the orientation determinant.
///
/// Expands `(ax - cx)(by - cy) - (ay - cy)(bx - cx)` into six products, turns
/// each into an error-free `(hi, lo)` pair and accumulates all twelve terms
/// into a non-overlapping expansion. The most significant non-zero component
/// carries the sign of the exact sum.
fn orient2d_exact(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    let products = [
        two_product(a.x, b.y),
        two_product(-a.x, c.y),
        two_product(-c.x, b.y),
        two_product(-a.y, b.x),
        two_product(a.y, c.x),
        two_product(b.x, c.y),
    ];

    let mut expansion: Vec<f64> = Vec::with_capacity(2 * products.len());
    for (hi, lo) in products {
        grow_expansion(&mut expansion, lo);
        grow_expansion(&mut expansion, hi);
    }

    expansion
        .iter()
        .rev()
        .copied()
        .find(|component| *component != 0.0)
        .unwrap_or(0.0)
}

/// Error-free sum: `a + b == s + err` exactly.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let b_virtual = s - a;
    let a_virtual = s - b_virtual;
    let err = (a - a_virtual) + (b - b_virtual);
    (s, err)
}

/// Error-free product: `a * b == hi + lo` exactly (barring overflow).
#[inline]
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let hi = a * b;
    let lo = a.mul_add(b, -hi);
    (hi, lo)
}

/// Adds `b` to a non-overlapping expansion ordered by increasing magnitude.
fn grow_expansion(expansion: &mut Vec<f64>, b: f64) {
    let mut q = b;
    for component in expansion.iter_mut() {
        let (sum, err) = two_sum(q, *component);
        *component = err;
        q = sum;
    }
    expansion.push(q);
}
