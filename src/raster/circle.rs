use std::collections::HashSet;

use crate::geometry::Pixel;

/// Bresenham (midpoint) circle rasterization.
///
/// Walks one octant from (0, r) with the decision variable d = 3 - 2r and
/// mirrors every octant point eight ways. Points where the mirrors coincide
/// (on the axes and diagonals) are kept once, in first-seen order. A zero
/// radius yields only the center.
pub fn bresenham_circle(cx: i32, cy: i32, radius: u32) -> Vec<Pixel> {
    if radius == 0 {
        return vec![Pixel::new(cx, cy)];
    }

    let r = i64::from(radius);
    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;

    let mut points = Vec::with_capacity(8 * (radius as usize + 1));
    push_octants(&mut points, cx, cy, x, y);

    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        push_octants(&mut points, cx, cy, x, y);
    }

    let mut seen = HashSet::with_capacity(points.len());
    points.retain(|p| seen.insert(*p));
    points
}

/// Mirrors `(x, y)` into all octants around the center. Mirrors that fall
/// outside the i32 range are dropped.
fn push_octants(points: &mut Vec<Pixel>, cx: i32, cy: i32, x: i64, y: i64) {
    let (cx, cy) = (i64::from(cx), i64::from(cy));
    let mirrors = [
        (cx + x, cy + y),
        (cx - x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
    ];
    points.extend(mirrors.into_iter().filter_map(|(px, py)| {
        Some(Pixel::new(i32::try_from(px).ok()?, i32::try_from(py).ok()?))
    }));
}
