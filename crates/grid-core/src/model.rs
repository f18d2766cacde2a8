//! Core data model for grid layouts.
//!
//! A layout is a flat, ordered list of named, colored rectangles placed on
//! a pixel grid. Two rectangle types share the same shape:
//!
//! - [`Preview`] — the live rectangle of an in-progress drag. Its origin is
//!   the drag anchor and its size may be negative.
//! - [`PlacedObject`] — a committed rectangle. Always normalized: the origin
//!   is the top-left corner and `w`, `h` are at least 1.

use crate::units::{format_mm, px_to_mm};
use serde::{Deserialize, Serialize};

// ─── Geometry ────────────────────────────────────────────────────────────

/// A normalized integer rectangle: top-left origin, positive size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }
}

/// Flip a signed span so it starts at its lowest coordinate, then clamp the
/// length to at least one pixel.
fn normalize_span(origin: i32, len: i32) -> (i32, u32) {
    let (start, len) = if len < 0 {
        (origin.saturating_add(len), len.unsigned_abs())
    } else {
        (origin, len as u32)
    };
    (start, len.max(1))
}

// ─── Preview ─────────────────────────────────────────────────────────────

/// The uncommitted rectangle shown while a drag is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    /// Drag anchor.
    pub x: i32,
    pub y: i32,
    /// `current - anchor`; negative when dragging left or up.
    pub w: i32,
    pub h: i32,
    pub color: String,
}

impl Preview {
    /// Build a preview from the drag anchor and the current pointer position.
    pub fn between(anchor: (i32, i32), current: (i32, i32), color: impl Into<String>) -> Self {
        Self {
            x: anchor.0,
            y: anchor.1,
            w: current.0.saturating_sub(anchor.0),
            h: current.1.saturating_sub(anchor.1),
            color: color.into(),
        }
    }

    /// Normalize to a top-left origin with a size of at least 1×1.
    pub fn normalized(&self) -> PixelRect {
        let (x, w) = normalize_span(self.x, self.w);
        let (y, h) = normalize_span(self.y, self.h);
        PixelRect { x, y, w, h }
    }

    /// Commit this preview as a placed object.
    pub fn commit(&self, name: impl Into<String>, color: impl Into<String>) -> PlacedObject {
        PlacedObject::new(name, self.normalized(), color)
    }
}

// ─── Placed objects ──────────────────────────────────────────────────────

/// A committed rectangle in the layout.
///
/// Field order matches the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
    /// CSS color string, e.g. `#ff0000`.
    pub color: String,
}

impl PlacedObject {
    pub fn new(name: impl Into<String>, rect: PixelRect, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: rect.x,
            y: rect.y,
            w: rect.w,
            h: rect.h,
            color: color.into(),
        }
    }

    pub fn rect(&self) -> PixelRect {
        PixelRect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    /// One line of the object list: `name: W×H mm`.
    pub fn list_label(&self) -> String {
        format!(
            "{}: {}×{} mm",
            self.name,
            format_mm(px_to_mm(self.w)),
            format_mm(px_to_mm(self.h))
        )
    }
}

// ─── Viewport ────────────────────────────────────────────────────────────

/// Size of the drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The canvas fills the window next to a fixed-width controls sidebar.
    pub fn beside_sidebar(window_width: u32, window_height: u32, sidebar_width: u32) -> Self {
        Self {
            width: window_width.saturating_sub(sidebar_width),
            height: window_height,
        }
    }
}
