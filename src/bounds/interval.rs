//! Centered interval tree for one-dimensional stabbing queries.
//!
//! Each node owns the intervals that contain its center, kept twice: sorted
//! by low end ascending and by high end descending. Intervals entirely below
//! the center go to the left subtree, entirely above to the right.

use num_traits::Float;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct IntervalNode<F> {
    center: F,
    by_low: Vec<(F, usize)>,
    by_high: Vec<(F, usize)>,
    left: Option<usize>,
    right: Option<usize>,
}

/// Closed intervals indexed for "which intervals contain this value" queries.
///
/// Queries cost `O(log n + k)` for `k` reported intervals.
///
/// # Example
///
/// ```
/// use geoquery::bounds::IntervalTree;
///
/// let tree = IntervalTree::build(&[(0.0, 2.0), (1.0, 3.0), (5.0, 6.0)]);
///
/// let mut hits = Vec::new();
/// tree.stab(1.5, |i| hits.push(i));
/// hits.sort();
/// assert_eq!(hits, vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct IntervalTree<F> {
    nodes: Vec<IntervalNode<F>>,
    root: Option<usize>,
    len: usize,
}

impl<F: Float> IntervalTree<F> {
    /// Builds the tree; interval `i` is reported as index `i`.
    ///
    /// Reversed intervals are normalized so that `lo <= hi`.
    pub fn build(intervals: &[(F, F)]) -> Self {
        let normalized: Vec<(F, F)> = intervals
            .iter()
            .map(|&(a, b)| if b < a { (b, a) } else { (a, b) })
            .collect();

        let mut nodes = Vec::new();
        let root = build_recursive(&normalized, (0..normalized.len()).collect(), &mut nodes);

        Self {
            nodes,
            root,
            len: normalized.len(),
        }
    }

    /// Number of indexed intervals.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no intervals are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Calls `visit` with the index of every interval containing `value`.
    pub fn stab(&self, value: F, mut visit: impl FnMut(usize)) {
        let mut next = self.root;
        while let Some(i) = next {
            let node = &self.nodes[i];
            if value < node.center {
                for &(low, k) in &node.by_low {
                    if low > value {
                        break;
                    }
                    visit(k);
                }
                next = node.left;
            } else if value > node.center {
                for &(high, k) in &node.by_high {
                    if high < value {
                        break;
                    }
                    visit(k);
                }
                next = node.right;
            } else {
                for &(_, k) in &node.by_low {
                    visit(k);
                }
                next = None;
            }
        }
    }
}

fn cmp<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Splits around the median endpoint. That endpoint's interval always stays
/// at the node, and each side gets at most half the intervals.
fn build_recursive<F: Float>(
    intervals: &[(F, F)],
    members: Vec<usize>,
    nodes: &mut Vec<IntervalNode<F>>,
) -> Option<usize> {
    if members.is_empty() {
        return None;
    }

    let mut endpoints: Vec<F> = members
        .iter()
        .flat_map(|&i| [intervals[i].0, intervals[i].1])
        .collect();
    let mid = endpoints.len() / 2;
    let (_, &mut center, _) = endpoints.select_nth_unstable_by(mid, |a, b| cmp(*a, *b));

    let mut below = Vec::new();
    let mut above = Vec::new();
    let mut here = Vec::new();
    for i in members {
        let (low, high) = intervals[i];
        if high < center {
            below.push(i);
        } else if low > center {
            above.push(i);
        } else {
            here.push(i);
        }
    }

    let mut by_low: Vec<(F, usize)> = here.iter().map(|&i| (intervals[i].0, i)).collect();
    by_low.sort_by(|a, b| cmp(a.0, b.0));
    let mut by_high: Vec<(F, usize)> = here.iter().map(|&i| (intervals[i].1, i)).collect();
    by_high.sort_by(|a, b| cmp(b.0, a.0));

    let left = build_recursive(intervals, below, nodes);
    let right = build_recursive(intervals, above, nodes);

    nodes.push(IntervalNode {
        center,
        by_low,
        by_high,
        left,
        right,
    });
    Some(nodes.len() - 1)
}
