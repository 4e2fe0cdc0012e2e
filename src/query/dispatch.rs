//! Validating entry points over the engine.

use super::config::QueryConfig;
use super::response::{
    IntersectsResponse, OverlapAreaResponse, UnionOverlapResponse, WithinResponse,
};
use crate::engine;
use crate::error::QueryError;
use crate::geojson::{validate_point, validate_polygon, GeometryInput};
use crate::polygon::Polygon;
use crate::primitives::Point2;
use tracing::{debug, error, instrument, trace};

/// Runs queries on raw GeoJSON operands under a [`QueryConfig`].
///
/// Every operand is validated before any geometry work starts; when several
/// fail, the error names the first failing role.
///
/// # Example
///
/// ```
/// use geoquery::query::Dispatcher;
///
/// let a = r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#;
/// let b = r#"{"type": "Polygon", "coordinates": [[[5,5],[6,5],[6,6],[5,6],[5,5]]]}"#;
///
/// let response = Dispatcher::default().check_polygon_intersection(a, b).unwrap();
/// assert!(!response.intersects);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: QueryConfig,
}

impl Dispatcher {
    /// Creates a dispatcher with the given configuration.
    pub fn new(config: QueryConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// `{"intersects": 0|1}` for two polygons.
    #[instrument(level = "debug", skip_all)]
    pub fn check_polygon_intersection(
        &self,
        polygon_1: impl Into<GeometryInput>,
        polygon_2: impl Into<GeometryInput>,
    ) -> Result<IntersectsResponse, QueryError> {
        let first = self.polygon("polygon_1", polygon_1);
        let second = self.polygon("polygon_2", polygon_2);
        let (a, b) = (first?, second?);

        let intersects = engine::intersects(&a, &b);
        trace!(intersects, "intersection checked");
        Ok(IntersectsResponse { intersects })
    }

    /// `{"overlap_area": <float>}` for two polygons.
    #[instrument(level = "debug", skip_all)]
    pub fn get_overlap_area(
        &self,
        polygon_1: impl Into<GeometryInput>,
        polygon_2: impl Into<GeometryInput>,
    ) -> Result<OverlapAreaResponse, QueryError> {
        let first = self.polygon("polygon_1", polygon_1);
        let second = self.polygon("polygon_2", polygon_2);
        let (a, b) = (first?, second?);

        let overlap_area = engine::overlap_area(&a, &b);
        trace!(overlap_area, "overlap area computed");
        Ok(OverlapAreaResponse { overlap_area })
    }

    /// `{"is_within": 0|1}` for a point and a polygon.
    #[instrument(level = "debug", skip_all)]
    pub fn check_point_in_polygon(
        &self,
        point: impl Into<GeometryInput>,
        polygon: impl Into<GeometryInput>,
    ) -> Result<WithinResponse, QueryError> {
        let point = validate_point(point).map_err(|source| {
            debug!(role = "point", error = %source, "operand rejected");
            QueryError::invalid_geojson("point", source)
        });
        let polygon = self.polygon("polygon", polygon);
        let (point, polygon) = (point?, polygon?);

        let is_within = engine::point_in_polygon_with(
            Point2::from(point.coordinates),
            &polygon,
            self.config.boundary,
        );
        trace!(is_within, "point located");
        Ok(WithinResponse { is_within })
    }

    /// `{"overlap": 0 | <Polygon>}` for two or more polygons.
    ///
    /// The operand count is checked before validation.
    #[instrument(level = "debug", skip_all, fields(operands = tracing::field::Empty))]
    pub fn get_polygon_union_overlap<I>(&self, polygons: I) -> Result<UnionOverlapResponse, QueryError>
    where
        I: IntoIterator,
        I::Item: Into<GeometryInput>,
    {
        let inputs: Vec<GeometryInput> = polygons.into_iter().map(Into::into).collect();
        tracing::Span::current().record("operands", inputs.len());

        if inputs.len() < 2 {
            return Err(QueryError::MethodInput {
                operation: "union_overlap",
                required: 2,
                supplied: inputs.len(),
            });
        }

        let validated: Vec<Result<Polygon, QueryError>> = inputs
            .into_iter()
            .enumerate()
            .map(|(i, input)| self.polygon(&format!("polygon_{}", i + 1), input))
            .collect();
        let polygons = validated.into_iter().collect::<Result<Vec<_>, _>>()?;

        let overlap = engine::union_overlap(&polygons).map_err(|err| {
            if err.is_internal() {
                error!(error = %err, "union produced an invalid result");
            }
            err
        })?;
        trace!(
            overlap = matches!(overlap, engine::UnionOverlap::Overlap(_)),
            "union classified"
        );
        Ok(UnionOverlapResponse { overlap })
    }

    /// Validates one polygon operand and enforces the vertex limit.
    fn polygon(&self, role: &str, input: impl Into<GeometryInput>) -> Result<Polygon, QueryError> {
        let geometry = validate_polygon(input).map_err(|source| {
            debug!(role, error = %source, "operand rejected");
            QueryError::invalid_geojson(role, source)
        })?;

        let vertices = geometry.vertex_count();
        if vertices > self.config.max_vertices {
            debug!(role, vertices, limit = self.config.max_vertices, "operand too large");
            return Err(QueryError::TooManyVertices {
                role: role.to_string(),
                vertices,
                limit: self.config.max_vertices,
            });
        }

        Ok(Polygon::from(&geometry))
    }
}
