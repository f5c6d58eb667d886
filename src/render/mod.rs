//! Visualization of algorithm output.

mod canvas;

pub use canvas::Canvas;
