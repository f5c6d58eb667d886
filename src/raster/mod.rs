//! Line and circle rasterization algorithms.
//!
//! Every algorithm is a pure function from integer endpoints to the ordered
//! list of pixels it selects. Line algorithms share one signature so they
//! can be swapped through [`LineAlgorithm`].
//!
//! Available algorithms:
//! - [`step_by_step`]: Slope-intercept evaluation along the driving axis
//! - [`dda`]: Floating-point incremental stepping
//! - [`bresenham_line`]: Integer error accumulator with octant normalization
//! - [`bresenham_circle`]: Midpoint circle with 8-way symmetry

mod bresenham;
mod circle;
mod dda;
mod step;

pub use bresenham::bresenham_line;
pub use circle::bresenham_circle;
pub use dda::dda;
pub use step::{slope_intercept, step_by_step};

use crate::geometry::Pixel;

/// Signature shared by every line rasterizer: `(x1, y1, x2, y2) -> pixels`.
pub type LineFn = fn(i32, i32, i32, i32) -> Vec<Pixel>;

/// Available line rasterization algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineAlgorithm {
    /// Evaluates y = kx + b (or its inverse) at every step of the driving axis.
    StepByStep,
    /// Accumulates fractional increments and rounds each emitted point.
    #[default]
    Dda,
    /// Integer-only error accumulator. Same point count as DDA.
    BresenhamLine,
}

impl LineAlgorithm {
    pub const ALL: [LineAlgorithm; 3] = [
        LineAlgorithm::StepByStep,
        LineAlgorithm::Dda,
        LineAlgorithm::BresenhamLine,
    ];

    /// The implementation behind this tag.
    pub fn function(self) -> LineFn {
        match self {
            LineAlgorithm::StepByStep => step_by_step,
            LineAlgorithm::Dda => dda,
            LineAlgorithm::BresenhamLine => bresenham_line,
        }
    }

    #[inline]
    pub fn rasterize(self, x1: i32, y1: i32, x2: i32, y2: i32) -> Vec<Pixel> {
        (self.function())(x1, y1, x2, y2)
    }

    /// Convenience wrapper over [`LineAlgorithm::rasterize`] taking pixels.
    pub fn rasterize_between(self, from: Pixel, to: Pixel) -> Vec<Pixel> {
        self.rasterize(from.x, from.y, to.x, to.y)
    }
}

impl std::fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineAlgorithm::StepByStep => write!(f, "Step-by-step"),
            LineAlgorithm::Dda => write!(f, "DDA"),
            LineAlgorithm::BresenhamLine => write!(f, "Bresenham line"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_dispatches_to_matching_function() {
        for algorithm in LineAlgorithm::ALL {
            assert_eq!(
                algorithm.rasterize(0, 0, 7, 3),
                (algorithm.function())(0, 0, 7, 3),
            );
        }
        assert_eq!(
            LineAlgorithm::BresenhamLine.rasterize(2, 1, 9, -4),
            bresenham_line(2, 1, 9, -4)
        );
    }

    #[test]
    fn every_line_algorithm_emits_single_point_for_degenerate_line() {
        for algorithm in LineAlgorithm::ALL {
            assert_eq!(
                algorithm.rasterize_between(Pixel::new(3, -2), Pixel::new(3, -2)),
                vec![Pixel::new(3, -2)],
                "{algorithm}"
            );
        }
    }
}
