pub mod display_list;
pub mod paint;
pub mod surface;
pub mod theme;

pub use display_list::{DisplayList, DrawOp};
pub use paint::render_layout;
pub use surface::Surface;
pub use theme::GridTheme;
