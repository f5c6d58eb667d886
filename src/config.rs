//! Rendering configuration.
//!
//! Defaults reproduce a 41 x 41 cell plot covering [-20, 20] on both axes.

pub const DEFAULT_EXTENT: i32 = 20;
pub const DEFAULT_CELL_SIZE: u32 = 16;

/// Largest accepted extent. Keeps the canvas allocation bounded.
pub const MAX_EXTENT: i32 = 500;
pub const MAX_CELL_SIZE: u32 = 64;

/// Largest coordinate or radius accepted from the command line. Bounds the
/// number of pixels a single rasterization can emit.
pub const MAX_COORDINATE: i32 = 1_000_000;

/// Controls how results are drawn onto a [`Canvas`](crate::render::Canvas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// World cells are drawn for coordinates in `[-extent, extent]`.
    pub extent: i32,
    /// Side length of one world cell, in image pixels.
    pub cell_size: u32,
    pub draw_grid: bool,
}

impl RenderConfig {
    /// Number of cells along each axis.
    pub fn cells(&self) -> u32 {
        (2 * self.extent + 1) as u32
    }

    /// Image side length in pixels.
    pub fn image_size(&self) -> u32 {
        self.cells() * self.cell_size
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            extent: DEFAULT_EXTENT,
            cell_size: DEFAULT_CELL_SIZE,
            draw_grid: true,
        }
    }
}
