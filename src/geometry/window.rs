use thiserror::Error;

use super::{Point, Polygon};

/// An axis-aligned clip rectangle.
///
/// Invariant: `xmin <= xmax` and `ymin <= ymax`. [`ClipWindow::new`] only
/// checks it in debug builds; use [`ClipWindow::try_new`] for untrusted input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("clip window is inverted: [{xmin}, {xmax}] x [{ymin}, {ymax}]")]
pub struct InvalidWindow {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl ClipWindow {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        debug_assert!(
            xmin <= xmax && ymin <= ymax,
            "clip window bounds are inverted"
        );
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, InvalidWindow> {
        // Negated so that NaN bounds are rejected too.
        if !(xmin <= xmax && ymin <= ymax) {
            return Err(InvalidWindow {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Smallest window containing every point, or `None` for an empty slice.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(first.x, first.y, first.x, first.y);
        Some(points[1..].iter().fold(init, |w, p| Self {
            xmin: w.xmin.min(p.x),
            ymin: w.ymin.min(p.y),
            xmax: w.xmax.max(p.x),
            ymax: w.ymax.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        Boundary::ALL.iter().all(|b| b.inside(p, self))
    }

    /// The window as a closed counter-clockwise rectangle.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::closed(vec![
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ])
    }
}

impl Default for ClipWindow {
    fn default() -> Self {
        Self::new(-10.0, -10.0, 10.0, 10.0)
    }
}

/// One side of a [`ClipWindow`], viewed as a half-plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Inside when x >= xmin
    Left,
    /// Inside when x <= xmax
    Right,
    /// Inside when y >= ymin
    Bottom,
    /// Inside when y <= ymax
    Top,
}

impl Boundary {
    /// The fixed pass order used by polygon clipping.
    pub const ALL: [Boundary; 4] = [
        Boundary::Left,
        Boundary::Right,
        Boundary::Bottom,
        Boundary::Top,
    ];

    /// The value of the clipped coordinate along this boundary.
    pub fn coordinate(&self, window: &ClipWindow) -> f64 {
        match self {
            Self::Left => window.xmin,
            Self::Right => window.xmax,
            Self::Bottom => window.ymin,
            Self::Top => window.ymax,
        }
    }

    /// Inclusive half-plane test. Points on the boundary count as inside.
    pub fn inside(&self, p: Point, window: &ClipWindow) -> bool {
        match self {
            Self::Left => p.x >= window.xmin,
            Self::Right => p.x <= window.xmax,
            Self::Bottom => p.y >= window.ymin,
            Self::Top => p.y <= window.ymax,
        }
    }

    /// Intersection of the edge `a -> b` with this boundary's line.
    ///
    /// The other coordinate is linearly interpolated along the edge. Only
    /// meaningful when the edge crosses the boundary, which guarantees a
    /// non-zero denominator.
    pub fn intersect(&self, a: Point, b: Point, window: &ClipWindow) -> Point {
        let c = self.coordinate(window);
        match self {
            Self::Left | Self::Right => {
                let t = (c - a.x) / (b.x - a.x);
                Point::new(c, a.y + (b.y - a.y) * t)
            }
            Self::Bottom | Self::Top => {
                let t = (c - a.y) / (b.y - a.y);
                Point::new(a.x + (b.x - a.x) * t, c)
            }
        }
    }

    /// Returns `p` with its clipped coordinate set exactly onto the boundary.
    pub fn snap(&self, p: Point, window: &ClipWindow) -> Point {
        let c = self.coordinate(window);
        match self {
            Self::Left | Self::Right => Point::new(c, p.y),
            Self::Bottom | Self::Top => Point::new(p.x, c),
        }
    }
}
