//! 2D rasterization and clipping.
//!
//! Line rasterizers (step-by-step, DDA, Bresenham), a Bresenham circle, and
//! three clippers: Liang-Barsky for segments against an axis-aligned window,
//! Sutherland-Hodgman for polygons against a window, and Cyrus-Beck style
//! clipping of polygons against a convex polygon. Results can be reported as
//! text or drawn onto a pixel grid and saved as PNG.
//!
//! # Quick Start
//!
//! ```
//! use rastclip::prelude::*;
//!
//! let pixels = LineAlgorithm::BresenhamLine.rasterize(-5, -5, 10, 8);
//! assert_eq!(pixels.len(), 16);
//!
//! let segment = Segment::from_coords(-15.0, 0.0, 15.0, 0.0);
//! let visible = liang_barsky(&segment, &ClipWindow::default()).unwrap();
//! assert_eq!(visible.p1, Point::new(-10.0, 0.0));
//! ```

pub mod algorithm;
pub mod app;
pub mod cli;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod math;
pub mod raster;
pub mod render;
pub mod report;

pub use algorithm::{Algorithm, Family, UnknownAlgorithm};
pub use clipper::ClipRegion;
pub use config::RenderConfig;
pub use geometry::{Boundary, ClipWindow, Pixel, Point, Polygon, Segment};
pub use raster::LineAlgorithm;

/// Prelude module for convenient imports.
pub mod prelude {
    // Geometry
    pub use crate::geometry::{Boundary, ClipWindow, Pixel, Point, Polygon, Segment};
    pub use crate::math::Vec2;

    // Rasterization
    pub use crate::raster::{bresenham_circle, bresenham_line, dda, step_by_step, LineAlgorithm};

    // Clipping
    pub use crate::clipper::{clip_polygon, cyrus_beck, liang_barsky, sutherland_hodgman, ClipRegion};

    // Selection
    pub use crate::algorithm::{Algorithm, Family};

    // Rendering
    pub use crate::config::RenderConfig;
    pub use crate::render::Canvas;
}
