use crate::geometry::{ring_pairs, Point, Polygon};
use crate::math::EPSILON;

/// Clip a polygon against a convex polygon (Cyrus-Beck style half-plane passes).
///
/// Each edge of `clip` defines a half-plane through its start vertex with
/// normal `(-dy, dx)`, flipped for clockwise clip polygons so it always
/// points into the region. A vertex `v` is inside when
/// `(v - start) . normal >= 0`. Passes run over the clip edges in vertex
/// order, each consuming the previous pass's output.
///
/// `clip` must be convex ([`Polygon::is_convex`]); this is not checked, and
/// a non-convex clip polygon produces an unspecified (but finite) result.
/// The clip polygon is always treated as a closed ring.
pub fn cyrus_beck(subject: &Polygon, clip: &Polygon) -> Option<Polygon> {
    let clip_vertices = clip.vertices();
    let n = clip_vertices.len();
    let winding = if clip.signed_area() < 0.0 { -1.0 } else { 1.0 };

    let mut vertices = subject.vertices().to_vec();

    for i in 0..n {
        if vertices.is_empty() {
            return None;
        }
        let start = clip_vertices[i];
        let end = clip_vertices[(i + 1) % n];
        let normal = (end - start).perp() * winding;
        vertices = clip_against_edge(&vertices, start, end, normal);
    }

    if vertices.is_empty() {
        None
    } else {
        Some(Polygon::closed(vertices))
    }
}

fn clip_against_edge(vertices: &[Point], start: Point, end: Point, normal: Point) -> Vec<Point> {
    let mut output = Vec::with_capacity(vertices.len() + 1);

    for (prev, current) in ring_pairs(vertices) {
        let prev_inside = (prev - start).dot(normal) >= 0.0;
        let current_inside = (current - start).dot(normal) >= 0.0;

        match (prev_inside, current_inside) {
            (true, true) => output.push(current),
            (true, false) => output.extend(line_intersection(prev, current, start, end)),
            (false, true) => {
                output.extend(line_intersection(prev, current, start, end));
                output.push(current);
            }
            (false, false) => {}
        }
    }

    output
}

/// Intersect segment `p1 -> p2` with the infinite line through `a` and `b`.
///
/// Solves `p1 + t * (p2 - p1) = a + s * (b - a)`. Returns `None` when the
/// lines are parallel (|det| < [`EPSILON`]) or when t falls outside [0, 1].
/// `s` is unconstrained, so crossings beyond the ends of `a -> b` count.
pub fn line_intersection(p1: Point, p2: Point, a: Point, b: Point) -> Option<Point> {
    let r = p2 - p1;
    let e = b - a;
    let det = r.cross(e);
    if det.abs() < EPSILON {
        return None;
    }

    let t = (a - p1).cross(e) / det;
    if !(-EPSILON..=1.0 + EPSILON).contains(&t) {
        return None;
    }
    Some(p1 + r * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ClipWindow;
    use approx::assert_relative_eq;

    fn assert_vertices_eq(actual: &Polygon, expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, &e) in actual.vertices().iter().zip(expected) {
            assert_relative_eq!(*a, Point::from(e), epsilon = 1e-9);
        }
    }

    fn square(half: f64) -> Polygon {
        ClipWindow::new(-half, -half, half, half).to_polygon()
    }

    #[test]
    fn square_against_counter_clockwise_window() {
        let subject = Polygon::from_coords(&[(-6.0, -4.0), (-6.0, 6.0), (6.0, 6.0), (6.0, -4.0)]);
        let clip = Polygon::from_coords(&[(0.0, 0.0), (20.0, 0.0), (20.0, 20.0), (0.0, 20.0)]);
        let clipped = cyrus_beck(&subject, &clip).unwrap();
        assert_vertices_eq(&clipped, &[(0.0, 0.0), (0.0, 6.0), (6.0, 6.0), (6.0, 0.0)]);
    }

    #[test]
    fn clockwise_clip_polygon_gives_same_region() {
        let subject = Polygon::from_coords(&[(-6.0, -4.0), (-6.0, 6.0), (6.0, 6.0), (6.0, -4.0)]);
        let clip = Polygon::from_coords(&[(0.0, 0.0), (0.0, 20.0), (20.0, 20.0), (20.0, 0.0)]);
        let clipped = cyrus_beck(&subject, &clip).unwrap();
        assert_vertices_eq(&clipped, &[(0.0, 0.0), (0.0, 6.0), (6.0, 6.0), (6.0, 0.0)]);
    }

    #[test]
    fn subject_covering_clip_region_yields_clip_region() {
        let triangle = Polygon::from_coords(&[(-5.0, -5.0), (0.0, 8.0), (5.0, -5.0)]);
        let clipped = cyrus_beck(&triangle, &square(2.0)).unwrap();
        assert_eq!(clipped.len(), 4);
        assert_relative_eq!(clipped.signed_area().abs(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn square_against_diamond_is_octagon() {
        let subject = square(4.0);
        let diamond = Polygon::from_coords(&[(0.0, -6.0), (6.0, 0.0), (0.0, 6.0), (-6.0, 0.0)]);
        let clipped = cyrus_beck(&subject, &diamond).unwrap();
        assert_eq!(clipped.len(), 8);
        assert!(clipped.is_convex());
        // 8x8 square minus four corner triangles with legs of 2
        assert_relative_eq!(clipped.signed_area().abs(), 64.0 - 8.0, epsilon = 1e-9);
    }

    #[test]
    fn subject_inside_is_unchanged() {
        let tiny = Polygon::from_coords(&[(1.0, 1.0), (2.0, 1.0), (1.0, 2.0)]);
        let clip = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        assert_eq!(cyrus_beck(&tiny, &clip), Some(tiny));
    }

    #[test]
    fn disjoint_subject_is_rejected() {
        let far = Polygon::from_coords(&[(20.0, 20.0), (30.0, 20.0), (25.0, 30.0)]);
        let clip = Polygon::from_coords(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        assert_eq!(cyrus_beck(&far, &clip), None);
    }

    #[test]
    fn line_intersection_rejects_parallel_and_out_of_range() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(line_intersection(Point::new(0.0, 1.0), Point::new(5.0, 1.0), a, b), None);
        assert_eq!(line_intersection(Point::new(0.0, 1.0), Point::new(0.0, 3.0), a, b), None);

        let hit = line_intersection(Point::new(2.0, -1.0), Point::new(4.0, 1.0), a, b).unwrap();
        assert_relative_eq!(hit, Point::new(3.0, 0.0));
        // Beyond the end of a -> b still counts
        let beyond = line_intersection(Point::new(20.0, -1.0), Point::new(20.0, 1.0), a, b).unwrap();
        assert_relative_eq!(beyond, Point::new(20.0, 0.0));
    }
}
