//! Exact geometric predicates.
//!
//! Boolean answers (does a point lie on an edge, do two edges touch) never
//! depend on a hidden epsilon: orientation signs are computed exactly, falling
//! back to expansion arithmetic when the fast floating-point estimate cannot
//! be trusted. Constructed points (edge crossings) are still rounded.

mod orient;
mod segment;

pub use orient::{orient2d, Orientation};
pub use segment::{crossing_point, point_on_segment, segments_touch};
