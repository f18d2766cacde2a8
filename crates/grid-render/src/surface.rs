//! Abstract 2D drawing surface.
//!
//! The renderer only talks to this trait. The browser bridge implements it
//! over `CanvasRenderingContext2d`; [`DisplayList`](crate::DisplayList)
//! records calls in memory.

use grid_core::Viewport;
use kurbo::{Line, Rect};

/// Minimal immediate-mode drawing surface, modeled on Canvas2D.
///
/// Rectangles are passed unnormalized (`x1 < x0` is allowed) and must be
/// drawn the way Canvas2D draws a negative-size `fillRect`.
pub trait Surface {
    /// Current pixel size of the surface.
    fn size(&self) -> Viewport;

    /// Erase the whole surface to transparent.
    fn clear(&mut self);

    fn set_fill_color(&mut self, color: &str);
    fn set_stroke_color(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    /// Global alpha applied to subsequent fills and strokes, 0.0 ..= 1.0.
    fn set_alpha(&mut self, alpha: f64);

    fn stroke_line(&mut self, line: Line);
    fn fill_rect(&mut self, rect: Rect);
    fn stroke_rect(&mut self, rect: Rect);
}
