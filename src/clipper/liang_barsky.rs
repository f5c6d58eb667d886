use crate::geometry::{Boundary, ClipWindow, Segment};
use crate::math::EPSILON;

/// Clip a segment against a window using the Liang-Barsky algorithm.
///
/// The segment is parametrized as `p1 + t * (p2 - p1)` and the visible
/// interval `[u1, u2]` is narrowed from `[0, 1]` by one constraint per window
/// side. Returns `None` when no part of the segment is visible.
///
/// An endpoint produced by a window side lies exactly on that side's
/// coordinate. A segment that needs no clipping is returned unchanged.
pub fn liang_barsky(segment: &Segment, window: &ClipWindow) -> Option<Segment> {
    let p1 = segment.p1;
    let d = segment.direction();

    // (p, q) per side: p is the direction component against the side's
    // inward normal, q the signed distance from p1 to the side.
    let constraints = [
        (Boundary::Left, -d.x, p1.x - window.xmin),
        (Boundary::Right, d.x, window.xmax - p1.x),
        (Boundary::Bottom, -d.y, p1.y - window.ymin),
        (Boundary::Top, d.y, window.ymax - p1.y),
    ];

    let mut u1 = 0.0;
    let mut u2 = 1.0;
    let mut entering: Option<Boundary> = None;
    let mut exiting: Option<Boundary> = None;

    for (boundary, p, q) in constraints {
        if p.abs() < EPSILON {
            // Parallel to this side: either fully outside or unconstrained.
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            if r > u2 {
                return None;
            }
            if r > u1 {
                u1 = r;
                entering = Some(boundary);
            }
        } else {
            if r < u1 {
                return None;
            }
            if r < u2 {
                u2 = r;
                exiting = Some(boundary);
            }
        }
    }

    if entering.is_none() && exiting.is_none() {
        return Some(*segment);
    }

    let start = match entering {
        Some(boundary) => boundary.snap(segment.point_at(u1), window),
        None => segment.p1,
    };
    let end = match exiting {
        Some(boundary) => boundary.snap(segment.point_at(u2), window),
        None => segment.p2,
    };
    Some(Segment::new(start, end))
}

/// Clip every segment against the same window. Results keep input order.
pub fn clip_segments(segments: &[Segment], window: &ClipWindow) -> Vec<Option<Segment>> {
    segments.iter().map(|s| liang_barsky(s, window)).collect()
}
