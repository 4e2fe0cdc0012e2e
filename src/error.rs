//! Error types for geoquery operations.

use std::fmt;
use thiserror::Error;

/// The GeoJSON geometry type a validator was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    Polygon,
}

impl GeometryKind {
    /// The GeoJSON `type` member value for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a raw input is rejected by the GeoJSON validator.
///
/// Variants are listed in the order the checks run; the first failing check
/// decides the error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoJsonError {
    /// Input is empty or falsy (`""`, `null`, `{}`, `[]`, ...).
    #[error("Invalid GeoJSON format: empty object")]
    Empty,

    /// Input text is not syntactically valid JSON.
    #[error("Invalid GeoJSON format: {0}")]
    NotJson(String),

    /// Parsed JSON does not have the GeoJSON shape of the requested kind.
    #[error("Invalid GeoJSON {kind}: {reason}")]
    Shape {
        /// Geometry kind being validated.
        kind: GeometryKind,
        /// Human-readable structural reason.
        reason: String,
    },

    /// `coordinates` is absent, misspelled, `null` or an empty array.
    #[error("Invalid GeoJSON {kind}: Missing required parameter: [coordinates]")]
    MissingCoordinates {
        /// Geometry kind being validated.
        kind: GeometryKind,
    },
}

impl GeoJsonError {
    pub(crate) fn shape(kind: GeometryKind, reason: impl Into<String>) -> Self {
        GeoJsonError::Shape {
            kind,
            reason: reason.into(),
        }
    }
}

/// Failures while assembling overlay edges into polygons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopologyError {
    /// A traced boundary did not return to its start vertex.
    #[error("open boundary at ({x}, {y})")]
    OpenBoundary {
        /// X coordinate where tracing stopped.
        x: f64,
        /// Y coordinate where tracing stopped.
        y: f64,
    },

    /// A hole ring is not contained in any shell.
    #[error("hole with area {area} has no enclosing shell")]
    OrphanHole {
        /// Absolute area of the orphaned hole.
        area: f64,
    },
}

/// Errors raised by engine queries and the dispatch surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// An operand failed GeoJSON validation.
    #[error("{role}: {source}")]
    InvalidGeoJson {
        /// Role of the failing operand (`polygon_1`, `point`, ...).
        role: String,
        /// The validation failure.
        #[source]
        source: GeoJsonError,
    },

    /// An N-ary operation was called with too few geometries.
    #[error("{operation} requires at least {required} polygons, got {supplied}")]
    MethodInput {
        /// Name of the operation.
        operation: &'static str,
        /// Minimum number of operands.
        required: usize,
        /// Number of operands supplied.
        supplied: usize,
    },

    /// An operand exceeds the configured vertex limit.
    #[error("{role}: {vertices} vertices exceeds the limit of {limit}")]
    TooManyVertices {
        /// Role of the oversized operand.
        role: String,
        /// Vertex count of the operand.
        vertices: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The union result violated an internal invariant.
    #[error("invalid union result: {0}")]
    InvalidUnion(String),
}

impl QueryError {
    /// Returns `true` for engine faults, `false` for rejected client input.
    pub fn is_internal(&self) -> bool {
        matches!(self, QueryError::InvalidUnion(_))
    }

    pub(crate) fn invalid_geojson(role: impl Into<String>, source: GeoJsonError) -> Self {
        QueryError::InvalidGeoJson {
            role: role.into(),
            source,
        }
    }
}

impl From<TopologyError> for QueryError {
    fn from(err: TopologyError) -> Self {
        QueryError::InvalidUnion(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_messages() {
        assert_eq!(
            GeoJsonError::Empty.to_string(),
            "Invalid GeoJSON format: empty object"
        );
        assert_eq!(
            GeoJsonError::MissingCoordinates {
                kind: GeometryKind::Polygon
            }
            .to_string(),
            "Invalid GeoJSON Polygon: Missing required parameter: [coordinates]"
        );
        assert_eq!(
            GeoJsonError::shape(GeometryKind::Point, "bad").to_string(),
            "Invalid GeoJSON Point: bad"
        );
    }

    #[test]
    fn test_query_error_names_role() {
        let err = QueryError::invalid_geojson("polygon_2", GeoJsonError::Empty);
        assert_eq!(
            err.to_string(),
            "polygon_2: Invalid GeoJSON format: empty object"
        );
        assert!(!err.is_internal());
    }

    #[test]
    fn test_internal_classification() {
        assert!(QueryError::InvalidUnion("no shells".into()).is_internal());
        let too_few = QueryError::MethodInput {
            operation: "union_overlap",
            required: 2,
            supplied: 1,
        };
        assert!(!too_few.is_internal());
        assert_eq!(
            too_few.to_string(),
            "union_overlap requires at least 2 polygons, got 1"
        );
    }

    #[test]
    fn test_topology_error_becomes_invalid_union() {
        let err: QueryError = TopologyError::OrphanHole { area: 1.5 }.into();
        assert!(err.is_internal());
        assert_eq!(
            err.to_string(),
            "invalid union result: hole with area 1.5 has no enclosing shell"
        );
    }
}
