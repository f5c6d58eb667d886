use crate::geometry::Pixel;

/// Returns the slope `k` and intercept `b` of the line through both points,
/// or `None` for a vertical line.
pub fn slope_intercept(x1: i32, y1: i32, x2: i32, y2: i32) -> Option<(f64, f64)> {
    if x1 == x2 {
        return None;
    }
    let k = (y2 as f64 - y1 as f64) / (x2 as f64 - x1 as f64);
    let b = y1 as f64 - k * x1 as f64;
    Some((k, b))
}

/// Step-by-step line rasterization from the slope-intercept form.
///
/// The driving axis is x when |k| <= 1 and y otherwise; it is walked in
/// ascending order whatever the endpoint order. The dependent coordinate is
/// rounded half-to-even.
pub fn step_by_step(x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
    let Some((k, b)) = slope_intercept(x1, y1, x2, y2) else {
        return (y1.min(y2)..=y1.max(y2))
            .map(|y| Pixel::new(x1, y))
            .collect();
    };

    if k.abs() <= 1.0 {
        (x1.min(x2)..=x1.max(x2))
            .map(|x| Pixel::new(x, (k * x as f64 + b).round_ties_even() as i32))
            .collect()
    } else {
        (y1.min(y2)..=y1.max(y2))
            .map(|y| {
                // Unreachable with |k| > 1; kept so the division never sees zero.
                let x = if k != 0.0 {
                    ((y as f64 - b) / k).round_ties_even() as i32
                } else {
                    x1
                };
                Pixel::new(x, y)
            })
            .collect()
    }
}
