//! Boolean overlay of polygons.
//!
//! All input edges are noded against each other, merged into unique
//! undirected edges, and classified by the winding number of every input
//! polygon on both sides. An edge belongs to the result boundary when the
//! operation's verdict differs between its two sides.

use super::assemble::assemble;
use super::core::winding_crossing;
use super::shape::Polygon;
use crate::bounds::{Aabb2, IntervalTree};
use crate::error::TopologyError;
use crate::predicates::{crossing_point, point_on_segment};
use crate::primitives::{Point2, Segment2, Vec2};
use std::collections::HashMap;

/// The set operation an overlay evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayOp {
    /// Points inside at least one input.
    Union,
    /// Points inside every input.
    Intersection,
}

impl OverlayOp {
    fn select(self, mut inside: impl Iterator<Item = bool>) -> bool {
        match self {
            OverlayOp::Union => inside.any(|b| b),
            OverlayOp::Intersection => inside.all(|b| b),
        }
    }
}

/// Bit-exact identity of a vertex; `-0.0` and `0.0` are the same vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct VertexKey(u64, u64);

impl VertexKey {
    pub(crate) fn of(p: Point2<f64>) -> Self {
        VertexKey(normalize_zero(p.x).to_bits(), normalize_zero(p.y).to_bits())
    }
}

#[inline]
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// A noded undirected edge with the net number of times each input polygon
/// traverses it from `a` to `b`.
#[derive(Debug, Clone)]
struct SharedEdge {
    a: Point2<f64>,
    b: Point2<f64>,
    counts: Vec<i32>,
}

/// The boundary of an overlay result.
///
/// Edges are directed with the result interior on their left.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    edges: Vec<Segment2<f64>>,
}

impl Overlay {
    /// Directed boundary edges of the result.
    pub fn edges(&self) -> &[Segment2<f64>] {
        &self.edges
    }

    /// Returns true if the result has no area.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Area of the result region.
    ///
    /// Computed directly from the boundary edges; no ring assembly needed.
    pub fn area(&self) -> f64 {
        let Some(origin) = self.edges.first().map(|e| e.start) else {
            return 0.0;
        };
        let twice: f64 = self
            .edges
            .iter()
            .map(|e| (e.start - origin).cross(e.end - origin))
            .sum();
        (twice / 2.0).max(0.0)
    }

    /// Assembles the boundary into polygons with holes.
    pub fn into_polygons(self) -> Result<Vec<Polygon>, TopologyError> {
        assemble(self.edges)
    }
}

/// Evaluates `op` over the given polygons.
///
/// # Example
///
/// ```
/// use geoquery::polygon::{overlay, OverlayOp, Polygon};
/// use geoquery::primitives::Point2;
///
/// let a = Polygon::from_vertices(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
/// let b = Polygon::from_vertices(vec![
///     Point2::new(1.0, 1.0),
///     Point2::new(3.0, 1.0),
///     Point2::new(3.0, 3.0),
///     Point2::new(1.0, 3.0),
/// ]);
///
/// assert_eq!(overlay(&[&a, &b], OverlayOp::Intersection).area(), 1.0);
/// assert_eq!(overlay(&[&a, &b], OverlayOp::Union).area(), 7.0);
/// ```
pub fn overlay(polygons: &[&Polygon], op: OverlayOp) -> Overlay {
    if polygons.is_empty() {
        return Overlay::default();
    }

    let input: Vec<(Segment2<f64>, usize)> = polygons
        .iter()
        .enumerate()
        .flat_map(|(index, polygon)| polygon.edges().map(move |edge| (edge, index)))
        .filter(|(edge, _)| edge.start != edge.end)
        .collect();

    let shared = merge(&input, node(&input), polygons.len());
    let rays = RayIndex::new(&shared);

    let mut result = Vec::new();
    for (index, edge) in shared.iter().enumerate() {
        let (left, right) = side_windings(&shared, &rays, index);
        let keep_left = op.select(left.iter().map(|&w| w != 0));
        let keep_right = op.select(right.iter().map(|&w| w != 0));
        if keep_left == keep_right {
            continue;
        }
        result.push(if keep_left {
            Segment2::new(edge.a, edge.b)
        } else {
            Segment2::new(edge.b, edge.a)
        });
    }

    tracing::trace!(
        ?op,
        inputs = polygons.len(),
        noded = shared.len(),
        kept = result.len(),
        "overlay evaluated"
    );

    Overlay { edges: result }
}

/// Collects, for every input edge, the points where it must be split.
///
/// Candidate pairs come from a sweep over bounding boxes sorted by min x.
/// Crossing points are computed once per pair and given to both edges.
fn node(input: &[(Segment2<f64>, usize)]) -> Vec<Vec<Point2<f64>>> {
    let boxes: Vec<Aabb2<f64>> = input.iter().map(|(e, _)| e.bounding_box()).collect();
    let mut order: Vec<usize> = (0..input.len()).collect();
    order.sort_by(|&i, &j| boxes[i].min.x.total_cmp(&boxes[j].min.x));

    let mut splits: Vec<Vec<Point2<f64>>> = vec![Vec::new(); input.len()];

    for (pos, &i) in order.iter().enumerate() {
        for &j in &order[pos + 1..] {
            if boxes[j].min.x > boxes[i].max.x {
                break;
            }
            if !boxes[i].intersects(boxes[j]) {
                continue;
            }

            let si = input[i].0;
            let sj = input[j].0;

            for p in [sj.start, sj.end] {
                if point_on_segment(p, si) {
                    splits[i].push(p);
                }
            }
            for p in [si.start, si.end] {
                if point_on_segment(p, sj) {
                    splits[j].push(p);
                }
            }
            if let Some(p) = crossing_point(si, sj) {
                splits[i].push(p);
                splits[j].push(p);
            }
        }
    }

    splits
}

/// Splits input edges at their split points and merges coincident pieces.
fn merge(
    input: &[(Segment2<f64>, usize)],
    splits: Vec<Vec<Point2<f64>>>,
    polygon_count: usize,
) -> Vec<SharedEdge> {
    let mut index: HashMap<(VertexKey, VertexKey), usize> = HashMap::new();
    let mut shared: Vec<SharedEdge> = Vec::new();

    for (&(edge, polygon), mut points) in input.iter().zip(splits) {
        let dir = edge.direction();
        points.push(edge.start);
        points.push(edge.end);
        points.sort_by(|p, q| {
            (*p - edge.start)
                .dot(dir)
                .total_cmp(&(*q - edge.start).dot(dir))
        });
        points.dedup();

        for pair in points.windows(2) {
            let (p, q) = (pair[0], pair[1]);
            let (kp, kq) = (VertexKey::of(p), VertexKey::of(q));
            if kp == kq {
                continue;
            }
            let (key, a, b, sign) = if kp < kq {
                ((kp, kq), p, q, 1)
            } else {
                ((kq, kp), q, p, -1)
            };
            let slot = *index.entry(key).or_insert_with(|| {
                shared.push(SharedEdge {
                    a,
                    b,
                    counts: vec![0; polygon_count],
                });
                shared.len() - 1
            });
            shared[slot].counts[polygon] += sign;
        }
    }

    shared.retain(|edge| edge.counts.iter().any(|&c| c != 0));
    shared
}

/// Shared edges indexed by the span a midpoint ray must cross.
///
/// Rays along +x only meet edges whose y-range holds the ray; rays in the
/// quarter-turned frame only meet edges whose x-range holds it.
struct RayIndex {
    rows: IntervalTree<f64>,
    columns: IntervalTree<f64>,
}

impl RayIndex {
    fn new(shared: &[SharedEdge]) -> Self {
        let rows: Vec<(f64, f64)> = shared.iter().map(|e| (e.a.y, e.b.y)).collect();
        let columns: Vec<(f64, f64)> = shared.iter().map(|e| (e.a.x, e.b.x)).collect();
        Self {
            rows: IntervalTree::build(&rows),
            columns: IntervalTree::build(&columns),
        }
    }
}

/// Winding number of every input polygon just left and just right of the
/// edge at `index`.
///
/// The other edges are summed along a ray from the edge midpoint, which gives
/// the winding on the side the ray leaves from. Horizontal edges are handled
/// in a frame turned a quarter, where the ray runs along -y.
fn side_windings(shared: &[SharedEdge], rays: &RayIndex, index: usize) -> (Vec<i32>, Vec<i32>) {
    let edge = &shared[index];
    let dir = edge.b - edge.a;
    let horizontal = dir.y == 0.0;

    let frame = |s: Segment2<f64>| if horizontal { s.rotated_quarter() } else { s };
    let probe = if horizontal {
        Vec2::new(0.0, -1.0)
    } else {
        Vec2::new(1.0, 0.0)
    };

    let mid = frame(Segment2::new(edge.a, edge.b)).midpoint();
    let candidates = if horizontal { &rays.columns } else { &rays.rows };
    let mut probed = vec![0i32; edge.counts.len()];
    candidates.stab(mid.y, |k| {
        if k == index {
            return;
        }
        let other = &shared[k];
        let crossing = winding_crossing(frame(Segment2::new(other.a, other.b)), mid);
        if crossing != 0 {
            for (w, c) in probed.iter_mut().zip(&other.counts) {
                *w += crossing * c;
            }
        }
    });

    let probe_left = dir.cross(probe) > 0.0;
    let other: Vec<i32> = probed
        .iter()
        .zip(&edge.counts)
        .map(|(&w, &c)| if probe_left { w - c } else { w + c })
        .collect();

    if probe_left {
        (probed, other)
    } else {
        (other, probed)
    }
}
