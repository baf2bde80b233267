//! Drawing-surface abstraction.
//!
//! The renderer draws through this trait so the same routine backs the
//! live view and the exporters.

use kurbo::{BezPath, Rect};
use pagemark_core::{Raster, TextMeasure};
use peniko::Color;

/// Stroke parameters for `Surface::stroke_path`.
#[derive(Debug, Clone, Copy)]
pub struct StrokeOptions {
    pub color: Color,
    pub width: f64,
    /// Round caps and joins; false means butt caps and miter joins.
    pub round: bool,
    /// Dash pattern as (on, off) lengths.
    pub dash: Option<(f64, f64)>,
}

impl StrokeOptions {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            round: false,
            dash: None,
        }
    }

    pub fn round(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            round: true,
            dash: None,
        }
    }

    pub fn dashed(color: Color, width: f64, on: f64, off: f64) -> Self {
        Self {
            color,
            width,
            round: false,
            dash: Some((on, off)),
        }
    }
}

/// A 2D drawing target with a transform stack.
///
/// Coordinates are page pixels, y down. Transforms compose in local
/// space: `translate` then `rotate` spins subsequent drawing about the
/// translated origin.
pub trait Surface: TextMeasure {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fill the whole target, ignoring the current transform.
    fn clear(&mut self, color: Color);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop back to the last saved transform. Unbalanced restores are
    /// no-ops.
    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64);

    fn rotate(&mut self, radians: f64);

    fn stroke_path(&mut self, path: &BezPath, options: &StrokeOptions);

    /// Scale `raster` into `dest`.
    fn draw_raster(&mut self, raster: &Raster, dest: Rect);

    /// Draw one line of text with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, line: &str, x: f64, y: f64, font_size: f64, color: Color);
}
