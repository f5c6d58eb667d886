use crate::geometry::{ring_pairs, Boundary, ClipWindow, Point, Polygon};

/// Clip a polygon against a window with the Sutherland-Hodgman algorithm.
///
/// The vertex ring is clipped by four half-planes in the order left, right,
/// bottom, top. Returns `None` if the polygon is clipped away completely.
/// The result is always closed; the input's `closed` flag is ignored and
/// the subject is treated as a ring.
pub fn sutherland_hodgman(subject: &Polygon, window: &ClipWindow) -> Option<Polygon> {
    let mut vertices = subject.vertices().to_vec();

    for boundary in Boundary::ALL {
        if vertices.is_empty() {
            return None;
        }
        vertices = clip_against_boundary(&vertices, boundary, window);
    }

    if vertices.is_empty() {
        None
    } else {
        Some(Polygon::closed(vertices))
    }
}

/// One Sutherland-Hodgman pass: clip a vertex ring against a single side.
///
/// Each edge `prev -> current` contributes:
/// - both inside: `current`
/// - leaving (inside -> outside): the intersection
/// - entering (outside -> inside): the intersection, then `current`
/// - both outside: nothing
///
/// Walking `(prev, current)` rather than `(current, next)` emits the same
/// sequence, but starts at the first vertex so untouched rings keep their
/// original order.
pub fn clip_against_boundary(
    vertices: &[Point],
    boundary: Boundary,
    window: &ClipWindow,
) -> Vec<Point> {
    let mut output = Vec::with_capacity(vertices.len() + 1);

    for (prev, current) in ring_pairs(vertices) {
        let prev_inside = boundary.inside(prev, window);
        let current_inside = boundary.inside(current, window);

        match (prev_inside, current_inside) {
            (true, true) => output.push(current),
            (true, false) => output.push(boundary.intersect(prev, current, window)),
            (false, true) => {
                output.push(boundary.intersect(prev, current, window));
                output.push(current);
            }
            (false, false) => {}
        }
    }

    output
}
