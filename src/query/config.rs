//! Dispatcher configuration.

use crate::engine::BoundaryRule;
use serde::Deserialize;

/// Default per-operand vertex limit.
pub const DEFAULT_MAX_VERTICES: usize = 100_000;

/// Settings applied by a [`Dispatcher`](super::Dispatcher).
///
/// Missing fields take their defaults; unknown fields are rejected.
///
/// # Example
///
/// ```
/// use geoquery::engine::BoundaryRule;
/// use geoquery::query::QueryConfig;
///
/// let config = QueryConfig::from_json_str(r#"{"boundary": "open"}"#).unwrap();
/// assert_eq!(config.boundary, BoundaryRule::Open);
/// assert_eq!(config.max_vertices, 100_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryConfig {
    /// Whether boundary points count as within a polygon.
    pub boundary: BoundaryRule,
    /// Maximum vertices accepted per operand, closing positions included.
    pub max_vertices: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryRule::Closed,
            max_vertices: DEFAULT_MAX_VERTICES,
        }
    }
}

impl QueryConfig {
    /// Parses a configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Sets the boundary rule.
    pub fn with_boundary(mut self, boundary: BoundaryRule) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the per-operand vertex limit.
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }
}
