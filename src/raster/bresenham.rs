use crate::geometry::Pixel;

/// Bresenham line rasterization using integer arithmetic only.
///
/// The line is normalized to a shallow, left-to-right octant: x and y are
/// swapped when |dy| > |dx|, then the endpoints are swapped so that x1 <= x2.
/// Emission therefore starts at the endpoint with the smaller coordinate on
/// the driving axis. Always emits `max(|dx|, |dy|) + 1` points.
pub fn bresenham_line(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let mut start = Pixel::new(x1, y1);
    let mut end = Pixel::new(x2, y2);

    let steep = (y2 as i64 - y1 as i64).abs() > (x2 as i64 - x1 as i64).abs();
    if steep {
        start = start.transposed();
        end = end.transposed();
    }

    if start.x > end.x {
        std::mem::swap(&mut start, &mut end);
    }

    // i64 so spans across the whole i32 range cannot overflow.
    let dx = end.x as i64 - start.x as i64;
    let dy = (end.y as i64 - start.y as i64).abs();
    let y_step = if start.y < end.y { 1 } else { -1 };

    // The error term starts halfway so the first step rounds to nearest.
    let mut error = dx / 2;
    let mut y = start.y as i64;

    let mut points = Vec::with_capacity(dx as usize + 1);
    for x in start.x..=end.x {
        // y only leaves the i32 range after the final push.
        let p = Pixel::new(x, y as i32);
        points.push(if steep { p.transposed() } else { p });

        error -= dy;
        if error < 0 {
            y += y_step;
            error += dx;
        }
    }
    points
}
