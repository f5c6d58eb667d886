use super::{ClipWindow, Point};
use crate::math::EPSILON;

/// An ordered vertex sequence. When `closed`, an edge runs from the last
/// vertex back to the first.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
    closed: bool,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    pub fn closed(vertices: Vec<Point>) -> Self {
        Self::new(vertices, true)
    }

    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        Self::closed(coords.iter().copied().map(Point::from).collect())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates edges as `(start, end)` pairs, including the closing edge
    /// when the polygon is closed.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        let count = match (self.closed, n) {
            (_, 0) | (_, 1) => 0,
            (true, 2) => 1,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns true when the cross product of consecutive edge vectors never
    /// changes sign around the vertex ring.
    ///
    /// Collinear edges (cross product within [`EPSILON`] of zero) are skipped.
    /// Fewer than three vertices is trivially convex.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }

        let mut sign = 0.0_f64;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let c = self.vertices[(i + 2) % n];
            let cross = (b - a).cross(c - b);
            if cross.abs() <= EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        true
    }

    /// Shoelace area of the vertex ring. Positive for counter-clockwise
    /// winding in a y-up frame.
    pub fn signed_area(&self) -> f64 {
        ring_pairs(&self.vertices)
            .map(|(a, b)| a.cross(b))
            .sum::<f64>()
            / 2.0
    }

    pub fn bounding_box(&self) -> Option<ClipWindow> {
        ClipWindow::bounding(&self.vertices)
    }
}

/// Walks a vertex ring as `(previous, current)` pairs, starting with
/// `(last, first)`. Yields nothing for an empty slice.
pub(crate) fn ring_pairs(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[(i + n - 1) % n], points[i]))
}
