//! Pixel-grid canvas for visualizing rasterization and clipping results.
//!
//! World coordinates are y-up with one integer cell per rasterized pixel;
//! the image is y-down. Cell `(0, 0)` sits at the center of the image.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::colors;
use crate::config::RenderConfig;
use crate::geometry::{ClipWindow, Pixel, Point, Polygon, Segment};
use crate::clipper::liang_barsky;
use crate::raster::bresenham_line;

pub struct Canvas {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    extent: i32,
    cell_size: u32,
}

impl Canvas {
    pub fn new(config: &RenderConfig) -> Self {
        let size = config.image_size();
        let mut canvas = Self {
            color_buffer: vec![colors::BACKGROUND; (size * size) as usize],
            width: size,
            height: size,
            extent: config.extent,
            cell_size: config.cell_size,
        };
        if config.draw_grid {
            canvas.draw_grid(colors::GRID, colors::AXIS);
        }
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            let index = (y as u32 * self.width + x as u32) as usize;
            self.color_buffer[index] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(self.color_buffer[(y as u32 * self.width + x as u32) as usize])
        } else {
            None
        }
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: u32) {
        for dy in 0..height {
            for dx in 0..width {
                self.set_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Cell borders in `grid`, the rows and columns through the origin in `axis`.
    pub fn draw_grid(&mut self, grid: u32, axis: u32) {
        let cell = self.cell_size as i32;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if x % cell == 0 || y % cell == 0 {
                    self.set_pixel(x, y, grid);
                }
            }
        }

        let (cx, cy) = self.world_to_screen(Point::ZERO);
        for i in 0..self.width as i32 {
            self.set_pixel(i, cy, axis);
        }
        for i in 0..self.height as i32 {
            self.set_pixel(cx, i, axis);
        }
    }

    /// Maps a world point to image coordinates. Integer points land on cell centers.
    pub fn world_to_screen(&self, p: Point) -> (i32, i32) {
        let cell = self.cell_size as f64;
        let extent = self.extent as f64;
        let sx = (p.x + extent + 0.5) * cell;
        let sy = (extent - p.y + 0.5) * cell;
        (sx.floor() as i32, sy.floor() as i32)
    }

    /// The world-space area covered by the image, cell borders included.
    pub fn world_window(&self) -> ClipWindow {
        let edge = self.extent as f64 + 0.5;
        ClipWindow::new(-edge, -edge, edge, edge)
    }

    /// Fills the cell of one rasterized pixel, leaving the grid line visible.
    /// Pixels outside `[-extent, extent]` are skipped.
    pub fn fill_cell(&mut self, pixel: Pixel, color: u32) {
        let cells = -self.extent..=self.extent;
        if !cells.contains(&pixel.x) || !cells.contains(&pixel.y) {
            return;
        }
        let cell = self.cell_size as i32;
        let x = (pixel.x + self.extent) * cell;
        let y = (self.extent - pixel.y) * cell;
        self.draw_rect(x + 1, y + 1, cell - 1, cell - 1, color);
    }

    pub fn plot(&mut self, pixels: &[Pixel], color: u32) {
        for &pixel in pixels {
            self.fill_cell(pixel, color);
        }
    }

    /// Draws a thin segment at image resolution, clipped to the image first.
    pub fn draw_segment(&mut self, segment: &Segment, color: u32) {
        let Some(visible) = liang_barsky(segment, &self.world_window()) else {
            return;
        };
        let (x0, y0) = self.world_to_screen(visible.p1);
        let (x1, y1) = self.world_to_screen(visible.p2);
        for p in bresenham_line(x0, y0, x1, y1) {
            self.set_pixel(p.x, p.y, color);
        }
    }

    pub fn draw_polygon(&mut self, polygon: &Polygon, color: u32) {
        for (start, end) in polygon.edges() {
            self.draw_segment(&Segment::new(start, end), color);
        }
    }

    pub fn draw_window(&mut self, window: &ClipWindow, color: u32) {
        self.draw_polygon(&window.to_polygon(), color);
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            Rgba(colors::to_rgba(
                self.color_buffer[(y * self.width + x) as usize],
            ))
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save_with_format(path, ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Canvas {
        Canvas::new(&RenderConfig {
            extent: 2,
            cell_size: 4,
            draw_grid: false,
        })
    }

    #[test]
    fn dimensions_follow_config() {
        let canvas = small();
        assert_eq!((canvas.width(), canvas.height()), (20, 20));
    }

    #[test]
    fn origin_maps_to_center_cell() {
        let canvas = small();
        assert_eq!(canvas.world_to_screen(Point::ZERO), (10, 10));
        assert_eq!(canvas.world_to_screen(Point::new(-2.0, 2.0)), (2, 2));
        assert_eq!(canvas.world_to_screen(Point::new(2.0, -2.0)), (18, 18));
    }

    #[test]
    fn fill_cell_paints_inside_cell_only() {
        let mut canvas = small();
        canvas.fill_cell(Pixel::new(0, 0), colors::LINE_PIXEL);
        assert_eq!(canvas.get_pixel(10, 10), Some(colors::LINE_PIXEL));
        assert_eq!(canvas.get_pixel(8, 8), Some(colors::BACKGROUND));
        assert_eq!(canvas.get_pixel(12, 10), Some(colors::BACKGROUND));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut canvas = small();
        canvas.set_pixel(-1, 0, colors::AXIS);
        canvas.set_pixel(0, 20, colors::AXIS);
        canvas.fill_cell(Pixel::new(50, 50), colors::AXIS);
        assert!(canvas.to_image().pixels().all(|p| p.0 == colors::to_rgba(colors::BACKGROUND)));
        assert_eq!(canvas.get_pixel(20, 0), None);
    }

    #[test]
    fn segment_endpoints_are_drawn() {
        let mut canvas = small();
        canvas.draw_segment(&Segment::from_coords(-2.0, 0.0, 2.0, 0.0), colors::WINDOW);
        assert_eq!(canvas.get_pixel(2, 10), Some(colors::WINDOW));
        assert_eq!(canvas.get_pixel(18, 10), Some(colors::WINDOW));
        assert_eq!(canvas.get_pixel(10, 2), Some(colors::BACKGROUND));
    }

    #[test]
    fn far_segments_are_clipped_to_the_image() {
        let mut canvas = small();
        canvas.draw_segment(&Segment::from_coords(-1e12, 0.0, 1e12, 0.0), colors::WINDOW);
        assert_eq!(canvas.get_pixel(0, 10), Some(colors::WINDOW));
        assert_eq!(canvas.get_pixel(19, 10), Some(colors::WINDOW));
        assert_eq!(canvas.get_pixel(10, 9), Some(colors::BACKGROUND));

        canvas.draw_segment(&Segment::from_coords(1e12, 1e12, 2e12, -1e12), colors::AXIS);
        assert!(canvas.to_image().pixels().all(|p| p.0 != colors::to_rgba(colors::AXIS)));
    }

    #[test]
    fn cells_beyond_the_extent_are_skipped() {
        let mut canvas = small();
        for pixel in [
            Pixel::new(i32::MAX, 0),
            Pixel::new(0, i32::MIN),
            Pixel::new(3, 0),
            Pixel::new(-3, -3),
        ] {
            canvas.fill_cell(pixel, colors::AXIS);
        }
        assert!(canvas.to_image().pixels().all(|p| p.0 == colors::to_rgba(colors::BACKGROUND)));

        canvas.fill_cell(Pixel::new(2, -2), colors::AXIS);
        assert_eq!(canvas.get_pixel(18, 18), Some(colors::AXIS));
    }

    #[test]
    fn image_uses_rgba_byte_order() {
        let mut canvas = small();
        canvas.draw_rect(0, 0, 20, 20, 0xFF112233);
        let image = canvas.to_image();
        assert_eq!(image.get_pixel(5, 5).0, [0x11, 0x22, 0x33, 0xFF]);
    }

    #[test]
    fn grid_draws_axes_through_origin() {
        let canvas = Canvas::new(&RenderConfig {
            extent: 2,
            cell_size: 4,
            draw_grid: true,
        });
        assert_eq!(canvas.get_pixel(10, 3), Some(colors::AXIS));
        assert_eq!(canvas.get_pixel(3, 10), Some(colors::AXIS));
        assert_eq!(canvas.get_pixel(4, 1), Some(colors::GRID));
    }
}
