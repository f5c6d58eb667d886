use super::Point;

/// A directed line segment. The parameter t runs from 0 at `p1` to 1 at `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Returns `p2 - p1`.
    pub fn direction(&self) -> Point {
        self.p2 - self.p1
    }

    /// Returns the point at parameter `t` along the segment.
    pub fn point_at(&self, t: f64) -> Point {
        self.p1.lerp(self.p2, t)
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_at_follows_direction() {
        let s = Segment::from_coords(-15.0, -5.0, 15.0, 10.0);
        assert_eq!(s.direction(), Point::new(30.0, 15.0));
        assert_eq!(s.point_at(0.0), s.p1);
        assert_relative_eq!(s.point_at(0.5), Point::new(0.0, 2.5));
    }

    #[test]
    fn zero_length_segment_is_degenerate() {
        let s = Segment::from_coords(1.0, 1.0, 1.0, 1.0);
        assert!(s.is_degenerate());
        assert_eq!(s.direction().magnitude(), 0.0);
    }
}
