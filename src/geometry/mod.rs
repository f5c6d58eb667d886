//! Immutable geometry values consumed by the rasterizers and clippers.
//!
//! Rasterization works on integer [`Pixel`]s. Clipping works on
//! floating-point [`Point`]s, since clipped endpoints are edge intersections.

mod pixel;
mod polygon;
mod segment;
mod window;

pub use pixel::Pixel;
pub use polygon::Polygon;
pub use segment::Segment;
pub use window::{Boundary, ClipWindow, InvalidWindow};

pub(crate) use polygon::ring_pairs;

use crate::math::Vec2;

/// A point in continuous 2D space.
pub type Point = Vec2;
