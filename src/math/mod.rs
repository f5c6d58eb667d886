//! Vector math shared by the geometry and clipping code.

pub mod vec2;

pub use vec2::Vec2;

/// Tolerance under which a denominator, determinant or cross product is
/// treated as zero.
pub const EPSILON: f64 = 1e-10;
