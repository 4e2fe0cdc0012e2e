//! Exact point/segment and segment/segment relations.

use super::orient::{orient2d, Orientation};
use crate::primitives::{Point2, Segment2};
use std::cmp::Ordering;

/// Checks if a point lies on a closed line segment.
///
/// Exact: the point must be collinear with the segment (by [`orient2d`]) and
/// inside its bounding box. Endpoints count as on the segment.
#[inline]
pub fn point_on_segment(p: Point2<f64>, segment: Segment2<f64>) -> bool {
    segment.bounding_box().contains_point(p)
        && orient2d(segment.start, segment.end, p) == Orientation::Collinear
}

/// Tests if two closed segments share at least one point.
///
/// Crossings, T-junctions, shared endpoints and collinear overlaps all count.
pub fn segments_touch(s1: Segment2<f64>, s2: Segment2<f64>) -> bool {
    if !s1.bounding_box().intersects(s2.bounding_box()) {
        return false;
    }

    let o1 = orient2d(s1.start, s1.end, s2.start);
    let o2 = orient2d(s1.start, s1.end, s2.end);
    let o3 = orient2d(s2.start, s2.end, s1.start);
    let o4 = orient2d(s2.start, s2.end, s1.end);

    if o1.signum() * o2.signum() < 0 && o3.signum() * o4.signum() < 0 {
        return true;
    }

    (o1 == Orientation::Collinear && s1.bounding_box().contains_point(s2.start))
        || (o2 == Orientation::Collinear && s1.bounding_box().contains_point(s2.end))
        || (o3 == Orientation::Collinear && s2.bounding_box().contains_point(s1.start))
        || (o4 == Orientation::Collinear && s2.bounding_box().contains_point(s1.end))
}

/// Computes the crossing point of two segments that properly cross.
///
/// Returns `Some` only when each segment strictly separates the endpoints of
/// the other, i.e. the segments cross at a single point interior to both.
/// Touching and collinear configurations return `None`; callers detect those
/// with [`point_on_segment`] on the endpoints, which is exact.
///
/// The decision is exact; the returned point is rounded and then clamped into
/// the region shared by both segments' bounding boxes. The rounding does not
/// depend on argument order or segment direction.
pub fn crossing_point(s1: Segment2<f64>, s2: Segment2<f64>) -> Option<Point2<f64>> {
    let (s1, s2) = (canonical(s1), canonical(s2));
    let swap = lexicographic(s2.start, s1.start)
        .then(lexicographic(s2.end, s1.end))
        .is_lt();
    let (s1, s2) = if swap { (s2, s1) } else { (s1, s2) };

    let bb1 = s1.bounding_box();
    let bb2 = s2.bounding_box();
    if !bb1.intersects(bb2) {
        return None;
    }

    let o1 = orient2d(s1.start, s1.end, s2.start).signum();
    let o2 = orient2d(s1.start, s1.end, s2.end).signum();
    let o3 = orient2d(s2.start, s2.end, s1.start).signum();
    let o4 = orient2d(s2.start, s2.end, s1.end).signum();

    if o1 * o2 >= 0 || o3 * o4 >= 0 {
        return None;
    }

    let d1 = s1.direction();
    let d2 = s2.direction();
    let denom = d1.cross(d2);
    let t = (s2.start - s1.start).cross(d2) / denom;
    let raw = s1.start + d1 * t;

    let min_x = bb1.min.x.max(bb2.min.x);
    let max_x = bb1.max.x.min(bb2.max.x);
    let min_y = bb1.min.y.max(bb2.min.y);
    let max_y = bb1.max.y.min(bb2.max.y);

    Some(Point2::new(
        raw.x.max(min_x).min(max_x),
        raw.y.max(min_y).min(max_y),
    ))
}

fn lexicographic(p: Point2<f64>, q: Point2<f64>) -> Ordering {
    p.x.total_cmp(&q.x).then(p.y.total_cmp(&q.y))
}

/// The segment directed from its lexicographically smaller endpoint.
fn canonical(s: Segment2<f64>) -> Segment2<f64> {
    if lexicographic(s.end, s.start).is_lt() {
        Segment2::new(s.end, s.start)
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // point_on_segment tests

    #[test]
    fn test_point_on_segment_endpoints() {
        let seg = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(point_on_segment(Point2::new(0.0, 0.0), seg));
        assert!(point_on_segment(Point2::new(10.0, 0.0), seg));
    }

    #[test]
    fn test_point_on_segment_middle() {
        let seg = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
        assert!(point_on_segment(Point2::new(2.5, 2.5), seg));
    }

    #[test]
    fn test_point_on_segment_near_but_off() {
        let seg = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(!point_on_segment(Point2::new(5.0, 1e-15), seg));
    }

    #[test]
    fn test_point_on_segment_beyond_end() {
        let seg = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(!point_on_segment(Point2::new(15.0, 0.0), seg));
    }

    // segments_touch tests

    #[test]
    fn test_segments_touch_crossing() {
        let s1 = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
        let s2 = Segment2::from_coords(0.0, 10.0, 10.0, 0.0);
        assert!(segments_touch(s1, s2));
    }

    #[test]
    fn test_segments_touch_t_junction() {
        let s1 = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(5.0, 0.0, 5.0, 5.0);
        assert!(segments_touch(s1, s2));
        assert!(segments_touch(s2, s1));
    }

    #[test]
    fn test_segments_touch_shared_endpoint() {
        let s1 = Segment2::from_coords(0.0, 0.0, 5.0, 5.0);
        let s2 = Segment2::from_coords(5.0, 5.0, 10.0, 0.0);
        assert!(segments_touch(s1, s2));
    }

    #[test]
    fn test_segments_touch_collinear_overlap_and_gap() {
        let s1 = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(segments_touch(s1, Segment2::from_coords(5.0, 0.0, 15.0, 0.0)));
        assert!(!segments_touch(s1, Segment2::from_coords(10.5, 0.0, 15.0, 0.0)));
    }

    #[test]
    fn test_segments_parallel_apart() {
        let s1 = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let s2 = Segment2::from_coords(0.0, 1.0, 10.0, 1.0);
        assert!(!segments_touch(s1, s2));
    }

    #[test]
    fn test_segments_almost_touching() {
        let s1 = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let s2 = Segment2::from_coords(6.0, 4.0, 10.0, 0.0);
        assert!(!segments_touch(s1, s2));
    }

    // crossing_point tests

    #[test]
    fn test_crossing_point_x() {
        let s1 = Segment2::from_coords(0.0, 0.0, 10.0, 10.0);
        let s2 = Segment2::from_coords(0.0, 10.0, 10.0, 0.0);
        let p = crossing_point(s1, s2).unwrap();
        assert_relative_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_crossing_point_ignores_touching() {
        let s1 = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let t_junction = Segment2::from_coords(5.0, 0.0, 5.0, 5.0);
        let collinear = Segment2::from_coords(5.0, 0.0, 15.0, 0.0);
        assert!(crossing_point(s1, t_junction).is_none());
        assert!(crossing_point(s1, collinear).is_none());
    }

    #[test]
    fn test_crossing_point_stays_inside_both_boxes() {
        let s1 = Segment2::from_coords(0.0, 0.0, 1.0, 1e-9);
        let s2 = Segment2::from_coords(0.5, -1.0, 0.5, 1.0);
        let p = crossing_point(s1, s2).unwrap();
        assert!(s1.bounding_box().contains_point(p));
        assert!(s2.bounding_box().contains_point(p));
    }

    #[test]
    fn test_crossing_point_independent_of_order() {
        let s1 = Segment2::from_coords(0.1, 0.7, 9.3, 3.3);
        let s2 = Segment2::from_coords(2.9, -1.3, 4.1, 8.7);
        let reversed = |s: Segment2<f64>| Segment2::new(s.end, s.start);

        let p = crossing_point(s1, s2).unwrap();
        assert_eq!(crossing_point(s2, s1), Some(p));
        assert_eq!(crossing_point(reversed(s1), s2), Some(p));
        assert_eq!(crossing_point(s2, reversed(s1)), Some(p));
        assert_eq!(crossing_point(reversed(s2), reversed(s1)), Some(p));
    }
}
