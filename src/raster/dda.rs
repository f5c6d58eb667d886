use crate::geometry::Pixel;

/// Digital differential analyzer.
///
/// Emits `max(|dx|, |dy|) + 1` points from `(x1, y1)` to `(x2, y2)` in input
/// order. The accumulator stays in floating point; only emitted coordinates
/// are rounded (half-to-even), so error does not build up between steps.
pub fn dda(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let dx = x2 as i64 - x1 as i64;
    let dy = y2 as i64 - y1 as i64;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![Pixel::new(x1, y1)];
    }

    let x_increment = dx as f64 / steps as f64;
    let y_increment = dy as f64 / steps as f64;
    let mut current_x = x1 as f64;
    let mut current_y = y1 as f64;

    let mut points = Vec::with_capacity(steps as usize + 1);
    for _ in 0..=steps {
        points.push(Pixel::new(
            current_x.round_ties_even() as i32,
            current_y.round_ties_even() as i32,
        ));
        current_x += x_increment;
        current_y += y_increment;
    }
    points
}
