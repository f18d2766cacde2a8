//! Layout → surface drawing commands.
//!
//! Paints, in order: the background grid, every placed object in store
//! order, then the drag preview on top. Each call starts from a cleared
//! surface, so repeated calls with the same inputs draw the same frame.

use crate::surface::Surface;
use crate::theme::GridTheme;
use grid_core::{PlacedObject, Preview};
use kurbo::{Line, Rect};

/// Draw a full frame: grid, placed objects, and the optional preview.
pub fn render_layout<S: Surface + ?Sized>(
    surface: &mut S,
    objects: &[PlacedObject],
    preview: Option<&Preview>,
    theme: &GridTheme,
) {
    surface.clear();
    draw_grid(surface, theme);

    for object in objects {
        draw_object(surface, object, theme);
    }

    if let Some(preview) = preview {
        draw_preview(surface, preview, theme);
    }
}

// ─── Drawing primitives ─────────────────────────────────────────────────

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, theme: &GridTheme) {
    let size = surface.size();
    let (width, height) = (size.width as f64, size.height as f64);
    let step = theme.grid_step.max(1) as usize;

    surface.set_stroke_color(&theme.grid_color);
    surface.set_line_width(theme.line_width);

    // Lines on both edges are included: `0..=width`.
    for x in (0..=size.width).step_by(step) {
        let x = x as f64;
        surface.stroke_line(Line::new((x, 0.0), (x, height)));
    }
    for y in (0..=size.height).step_by(step) {
        let y = y as f64;
        surface.stroke_line(Line::new((0.0, y), (width, y)));
    }

    log::trace!(
        "PAINT grid {}x{} step {}",
        size.width,
        size.height,
        step
    );
}

fn draw_object<S: Surface + ?Sized>(surface: &mut S, object: &PlacedObject, theme: &GridTheme) {
    let r = object.rect();
    let rect = Rect::new(
        r.x as f64,
        r.y as f64,
        r.right() as f64,
        r.bottom() as f64,
    );

    surface.set_fill_color(&object.color);
    surface.fill_rect(rect);
    surface.set_stroke_color(&theme.object_outline);
    surface.set_line_width(theme.line_width);
    surface.stroke_rect(rect);

    log::trace!(
        "PAINT object {:?} at ({}, {}) {}x{}",
        object.name,
        r.x,
        r.y,
        r.w,
        r.h
    );
}

fn draw_preview<S: Surface + ?Sized>(surface: &mut S, preview: &Preview, theme: &GridTheme) {
    // Unnormalized: the rectangle grows from the anchor in the drag direction.
    let (x, y) = (preview.x as f64, preview.y as f64);
    let rect = Rect::new(x, y, x + preview.w as f64, y + preview.h as f64);

    surface.set_alpha(theme.preview_alpha);
    surface.set_fill_color(&preview.color);
    surface.fill_rect(rect);
    surface.set_alpha(1.0);

    surface.set_stroke_color(&theme.preview_outline);
    surface.set_line_width(theme.line_width);
    surface.stroke_rect(rect);

    log::trace!(
        "PAINT preview from ({}, {}) {}x{}",
        preview.x,
        preview.y,
        preview.w,
        preview.h
    );
}
