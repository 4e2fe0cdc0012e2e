//! Polygons with holes.

use super::core::{Location, Ring};
use crate::bounds::Aabb2;
use crate::geojson::PolygonGeometry;
use crate::predicates::point_on_segment;
use crate::primitives::{Point2, Segment2};

/// A planar polygon: one exterior ring and zero or more holes.
///
/// The exterior is kept CCW and every hole CW, so the interior is always on
/// the left of each directed edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    exterior: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon, normalizing ring orientation.
    pub fn new(mut exterior: Ring, holes: Vec<Ring>) -> Self {
        exterior.ensure_ccw();
        let holes = holes
            .into_iter()
            .map(|mut hole| {
                hole.ensure_cw();
                hole
            })
            .collect();
        Self { exterior, holes }
    }

    /// Creates a hole-free polygon from vertices.
    ///
    /// # Example
    ///
    /// ```
    /// use geoquery::polygon::Polygon;
    /// use geoquery::primitives::Point2;
    ///
    /// let square = Polygon::from_vertices(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(2.0, 0.0),
    ///     Point2::new(2.0, 2.0),
    ///     Point2::new(0.0, 2.0),
    /// ]);
    /// assert_eq!(square.area(), 4.0);
    /// ```
    pub fn from_vertices(vertices: Vec<Point2<f64>>) -> Self {
        Self::new(Ring::new(vertices), Vec::new())
    }

    /// The exterior ring (CCW).
    #[inline]
    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    /// The hole rings (CW).
    #[inline]
    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Iterates exterior then holes.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> + '_ {
        std::iter::once(&self.exterior).chain(self.holes.iter())
    }

    /// Iterates every directed edge of every ring.
    pub fn edges(&self) -> impl Iterator<Item = Segment2<f64>> + '_ {
        self.rings().flat_map(Ring::edges)
    }

    /// Total number of stored vertices across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings().map(Ring::len).sum()
    }

    /// Exterior area minus hole areas.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(Ring::area).sum();
        (self.exterior.area() - holes).max(0.0)
    }

    /// Bounding box of the exterior ring.
    pub fn bounding_box(&self) -> Option<Aabb2<f64>> {
        self.exterior.bounding_box()
    }

    /// Locates a point against the polygon, holes included.
    ///
    /// Uses the nonzero rule over all rings; holes wind opposite to the
    /// exterior and cancel it.
    pub fn locate(&self, point: Point2<f64>) -> Location {
        if let Some(bb) = self.bounding_box() {
            if !bb.contains_point(point) {
                return Location::Outside;
            }
        }

        if self.edges().any(|edge| point_on_segment(point, edge)) {
            return Location::Boundary;
        }

        let winding: i32 = self.rings().map(|ring| ring.winding_number(point)).sum();
        if winding != 0 {
            Location::Inside
        } else {
            Location::Outside
        }
    }

    /// Tests membership, counting the boundary as inside.
    pub fn contains_point(&self, point: Point2<f64>) -> bool {
        self.locate(point) != Location::Outside
    }

    /// Tests membership, counting the boundary as outside.
    pub fn contains_point_strict(&self, point: Point2<f64>) -> bool {
        self.locate(point) == Location::Inside
    }

    /// Converts back to a GeoJSON polygon with closed rings.
    pub fn to_geometry(&self) -> PolygonGeometry {
        PolygonGeometry {
            coordinates: self.rings().map(Ring::to_positions).collect(),
        }
    }
}

impl From<&PolygonGeometry> for Polygon {
    fn from(geometry: &PolygonGeometry) -> Self {
        let exterior = Ring::from_positions(geometry.exterior());
        let holes = geometry
            .holes()
            .iter()
            .map(|ring| Ring::from_positions(ring))
            .collect();
        Polygon::new(exterior, holes)
    }
}

impl From<PolygonGeometry> for Polygon {
    fn from(geometry: PolygonGeometry) -> Self {
        Polygon::from(&geometry)
    }
}

impl From<&Polygon> for PolygonGeometry {
    fn from(polygon: &Polygon) -> Self {
        polygon.to_geometry()
    }
}
