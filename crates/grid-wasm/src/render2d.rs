//! Canvas2D surface.
//!
//! Adapts `CanvasRenderingContext2d` to the renderer's [`Surface`] trait.

use grid_core::Viewport;
use grid_render::Surface;
use kurbo::{Line, Rect};
use web_sys::CanvasRenderingContext2d;

pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    size: Viewport,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(ctx: &'a CanvasRenderingContext2d, size: Viewport) -> Self {
        Self { ctx, size }
    }
}

impl Surface for CanvasSurface<'_> {
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.width as f64, self.size.height as f64);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ctx.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn stroke_line(&mut self, line: Line) {
        self.ctx.begin_path();
        self.ctx.move_to(line.p0.x, line.p0.y);
        self.ctx.line_to(line.p1.x, line.p1.y);
        self.ctx.stroke();
    }

    // Canvas2D accepts negative sizes, so unnormalized rects draw as-is.
    fn fill_rect(&mut self, rect: Rect) {
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.x1 - rect.x0, rect.y1 - rect.y0);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.x1 - rect.x0, rect.y1 - rect.y0);
    }
}
