//! Input abstraction layer.
//!
//! Normalizes host pointer events (mouse, touch, pen) into integer
//! surface-relative pixel positions consumed by the draw tool.

/// A normalized pointer event in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer pressed.
    PointerDown { x: i32, y: i32 },

    /// Pointer moved, pressed or not.
    PointerMove { x: i32, y: i32 },

    /// Pointer released.
    PointerUp { x: i32, y: i32 },
}

/// Floor a fractional host coordinate to a pixel, saturating at the `i32` range.
fn to_pixel(v: f64) -> i32 {
    // `as` saturates and maps NaN to 0.
    v.floor() as i32
}

impl InputEvent {
    /// Create a PointerDown from surface-relative host coordinates.
    pub fn pointer_down(x: f64, y: f64) -> Self {
        Self::PointerDown {
            x: to_pixel(x),
            y: to_pixel(y),
        }
    }

    pub fn pointer_move(x: f64, y: f64) -> Self {
        Self::PointerMove {
            x: to_pixel(x),
            y: to_pixel(y),
        }
    }

    pub fn pointer_up(x: f64, y: f64) -> Self {
        Self::PointerUp {
            x: to_pixel(x),
            y: to_pixel(y),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        match *self {
            Self::PointerDown { x, y } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                (x, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_floored() {
        assert_eq!(InputEvent::pointer_down(10.9, 3.2).position(), (10, 3));
        assert_eq!(InputEvent::pointer_move(-0.5, 7.0).position(), (-1, 7));
    }

    #[test]
    fn non_finite_coordinates_saturate() {
        assert_eq!(InputEvent::pointer_up(f64::NAN, f64::INFINITY).position(), (0, i32::MAX));
    }
}
