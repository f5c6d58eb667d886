//! 2D clipping implementations.
//!
//! - [`liang_barsky`]: parametric segment clipping against a [`ClipWindow`].
//! - [`sutherland_hodgman`]: polygon clipping against a [`ClipWindow`], one
//!   half-plane pass per window side.
//! - [`cyrus_beck`]: polygon clipping against an arbitrary convex polygon,
//!   one half-plane pass per clip edge.
//!
//! A `None` result means the input lies entirely outside the clip region.

mod cyrus_beck;
mod liang_barsky;
mod sutherland_hodgman;

pub use cyrus_beck::{cyrus_beck, line_intersection};
pub use liang_barsky::{clip_segments, liang_barsky};
pub use sutherland_hodgman::{clip_against_boundary, sutherland_hodgman};

use crate::geometry::{ClipWindow, Polygon};

/// The region a polygon is clipped against.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipRegion {
    /// Axis-aligned window, clipped with Sutherland-Hodgman.
    Window(ClipWindow),
    /// Convex polygon, clipped with Cyrus-Beck. Convexity is the caller's
    /// responsibility; see [`Polygon::is_convex`].
    Convex(Polygon),
}

impl ClipRegion {
    /// Clip `subject` against this region with the matching algorithm.
    pub fn clip(&self, subject: &Polygon) -> Option<Polygon> {
        match self {
            ClipRegion::Window(window) => sutherland_hodgman(subject, window),
            ClipRegion::Convex(clip) => cyrus_beck(subject, clip),
        }
    }
}

impl Default for ClipRegion {
    fn default() -> Self {
        ClipRegion::Window(ClipWindow::default())
    }
}

impl std::fmt::Display for ClipRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipRegion::Window(w) => write!(
                f,
                "window [{}, {}] x [{}, {}]",
                w.xmin, w.xmax, w.ymin, w.ymax
            ),
            ClipRegion::Convex(p) => write!(f, "convex polygon with {} vertices", p.len()),
        }
    }
}

/// Clip `subject` against `region`, choosing the algorithm from the region kind.
pub fn clip_polygon(subject: &Polygon, region: &ClipRegion) -> Option<Polygon> {
    region.clip(subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use approx::assert_relative_eq;

    #[test]
    fn window_and_equivalent_convex_region_agree() {
        let subject = Polygon::from_coords(&[(-6.0, -4.0), (-6.0, 6.0), (6.0, 6.0), (6.0, -4.0)]);
        let window = ClipWindow::new(0.0, 0.0, 20.0, 20.0);

        let by_window = clip_polygon(&subject, &ClipRegion::Window(window)).unwrap();
        let by_convex = clip_polygon(&subject, &ClipRegion::Convex(window.to_polygon())).unwrap();

        assert_eq!(by_window.len(), by_convex.len());
        for (a, b) in by_window.vertices().iter().zip(by_convex.vertices()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn default_region_is_default_window() {
        let inside = Polygon::from_coords(&[(-5.0, -5.0), (0.0, 8.0), (5.0, -5.0)]);
        let clipped = ClipRegion::default().clip(&inside).unwrap();
        assert_eq!(clipped.vertices(), inside.vertices());
        assert_eq!(clipped.vertices()[1], Point::new(0.0, 8.0));
    }
}
