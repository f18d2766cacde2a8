//! In-memory surface that records draw calls.
//!
//! Useful for headless rendering, snapshotting a frame, and tests.

use crate::surface::Surface;
use grid_core::Viewport;
use kurbo::{Line, Rect};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    SetFillColor(String),
    SetStrokeColor(String),
    SetLineWidth(f64),
    SetAlpha(f64),
    StrokeLine(Line),
    FillRect(Rect),
    StrokeRect(Rect),
}

/// A [`Surface`] that appends every call to a list.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    size: Viewport,
    /// Calls since the last `clear`; older frames are dropped.
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    /// Calls recorded since the last `clear`, starting with the `Clear`
    /// itself once a frame has begun.
    pub fn frame(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Rectangles filled in the current frame.
    pub fn filled_rects(&self) -> Vec<Rect> {
        self.frame()
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn set_fill_color(&mut self, color: &str) {
        self.ops.push(DrawOp::SetFillColor(color.to_string()));
    }

    fn set_stroke_color(&mut self, color: &str) {
        self.ops.push(DrawOp::SetStrokeColor(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.ops.push(DrawOp::SetLineWidth(width));
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::SetAlpha(alpha));
    }

    fn stroke_line(&mut self, line: Line) {
        self.ops.push(DrawOp::StrokeLine(line));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect(rect));
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::StrokeRect(rect));
    }
}
