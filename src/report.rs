//! Plain-text reports printed by the command line front end.

use std::fmt::Write as _;
use std::time::Duration;

use crate::geometry::{Pixel, Point, Polygon, Segment};

const RULE_WIDTH: usize = 60;
const POINTS_PER_ROW: usize = 5;

fn rule(c: char) -> String {
    std::iter::repeat(c).take(RULE_WIDTH).collect()
}

/// A titled table of pixels, five per row.
pub fn points_table(title: &str, points: &[Pixel]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "Algorithm: {title}");
    let _ = writeln!(out, "Points: {}", points.len());
    let _ = writeln!(out, "{}", rule('='));
    for row in points.chunks(POINTS_PER_ROW) {
        let cells: Vec<String> = row.iter().map(Pixel::to_string).collect();
        let _ = writeln!(out, "{}", cells.join("  "));
    }
    let _ = writeln!(out, "{}", rule('='));
    out
}

/// `y = kx + b` with two decimals.
pub fn line_equation(k: f64, b: f64) -> String {
    format!("y = {k:.2}x + {b:.2}")
}

/// Rows of `(name, elapsed)` with speed relative to the first row.
pub fn timing_table(rows: &[(String, Duration)]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<35} {:<15} {:<15}", "Algorithm", "Time (ms)", "Relative");
    let _ = writeln!(out, "{}", rule('-'));
    let base = rows.first().map(|(_, d)| d.as_secs_f64()).unwrap_or(0.0);
    for (name, elapsed) in rows {
        let secs = elapsed.as_secs_f64();
        let relative = if secs > 0.0 { base / secs } else { 0.0 };
        let _ = writeln!(out, "{:<35} {:<15.4} {:<15.2}", name, secs * 1e3, relative);
    }
    out
}

fn point(p: Point) -> String {
    format!("({:.3}, {:.3})", p.x, p.y)
}

/// One line per input segment: its visible part or `rejected`.
pub fn clip_line(index: usize, original: &Segment, clipped: Option<&Segment>) -> String {
    let source = format!("{} -> {}", point(original.p1), point(original.p2));
    match clipped {
        Some(s) => format!(
            "#{:<3} {source}  visible {} -> {}",
            index + 1,
            point(s.p1),
            point(s.p2)
        ),
        None => format!("#{:<3} {source}  rejected", index + 1),
    }
}

pub fn polygon_line(polygon: &Polygon) -> String {
    let vertices: Vec<String> = polygon.vertices().iter().copied().map(point).collect();
    format!("{} vertices: {}", polygon.len(), vertices.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_wraps_every_five_points() {
        let points: Vec<Pixel> = (0..7).map(|i| Pixel::new(i, -i)).collect();
        let table = points_table("DDA", &points);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[1], "Algorithm: DDA");
        assert_eq!(lines[2], "Points: 7");
        assert_eq!(lines[4], "(  0,  0)  (  1, -1)  (  2, -2)  (  3, -3)  (  4, -4)");
        assert_eq!(lines[5], "(  5, -5)  (  6, -6)");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn equation_has_two_decimals() {
        assert_eq!(line_equation(13.0 / 15.0, -2.0 / 3.0), "y = 0.87x + -0.67");
    }

    #[test]
    fn timing_is_relative_to_first_row() {
        let rows = vec![
            ("a".to_string(), Duration::from_millis(4)),
            ("b".to_string(), Duration::from_millis(2)),
        ];
        let table = timing_table(&rows);
        let last = table.lines().last().unwrap();
        assert!(last.starts_with("b "));
        assert!(last.trim_end().ends_with("2.00"));
    }

    #[test]
    fn clip_line_reports_rejection() {
        let s = Segment::from_coords(9.0, 9.0, 12.0, 12.0);
        assert!(clip_line(0, &s, None).ends_with("rejected"));
        assert!(clip_line(1, &s, Some(&s)).starts_with("#2 "));
    }
}
