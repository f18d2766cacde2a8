//! Pixel ↔ millimeter conversion.
//!
//! The canvas uses a fixed ratio: one 10 px grid step is 10 mm.

/// Millimeters per canvas pixel.
pub const MM_PER_PX: f64 = 1.0;

pub fn px_to_mm(px: u32) -> f64 {
    px as f64 * MM_PER_PX
}

/// Format a millimeter value, dropping the fractional part when integral.
pub fn format_mm(mm: f64) -> String {
    if mm.fract() == 0.0 {
        format!("{}", mm as i64)
    } else {
        format!("{mm:.1}")
    }
}
