//! Bounding volumes and interval indexes used to reject far-apart geometry early.

mod aabb;
mod interval;

pub use aabb::Aabb2;
pub use interval::IntervalTree;
