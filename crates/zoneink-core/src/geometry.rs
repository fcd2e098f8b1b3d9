//! Geometry primitives: distance, midpoint and polygon containment.

use kurbo::{Point, Vec2};
use thiserror::Error;

/// Errors produced when building geometry from configuration data.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    DegeneratePolygon(usize),
}

/// Euclidean distance between two points in the same coordinate space.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Arithmetic midpoint of two points.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// A closed polygon with at least three vertices.
///
/// Construction is validated, so degenerate polygons are rejected at load
/// time and can never reach the containment test. Vertices are immutable
/// once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Build a polygon, rejecting fewer than three vertices.
    pub fn new(vertices: Vec<Point>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::DegeneratePolygon(vertices.len()));
        }
        Ok(Self { vertices })
    }

    /// The polygon's vertices, in declaration order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Map every vertex by `v * scale + translation`.
    ///
    /// Used to re-express a content-space polygon in screen space so a
    /// screen-space pointer can be hit-tested without transforming it first.
    #[must_use]
    pub fn transformed(&self, scale: f64, translation: Vec2) -> Self {
        Self {
            vertices: self
                .vertices
                .iter()
                .map(|v| Point::new(v.x * scale + translation.x, v.y * scale + translation.y))
                .collect(),
        }
    }

    /// Even-odd containment test for `point`.
    pub fn contains(&self, point: Point) -> bool {
        point_in_polygon(point, self)
    }
}

/// Even-odd (ray-casting) point-in-polygon test.
///
/// Casts a horizontal ray from `point` and counts edge crossings. Handles
/// non-convex polygons; membership of a point exactly on an edge is
/// unspecified, as usual for the even-odd rule.
pub fn point_in_polygon(point: Point, polygon: &Polygon) -> bool {
    let verts = polygon.vertices();
    let mut inside = false;
    let mut j = verts.len() - 1;
    for i in 0..verts.len() {
        let (pi, pj) = (verts[i], verts[j]);
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}
