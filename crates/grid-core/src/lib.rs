pub mod document;
pub mod error;
pub mod model;
pub mod store;
pub mod units;

pub use document::{LayoutDocument, export_layout, import_layout};
pub use error::LayoutError;
pub use model::*;
pub use store::LayoutStore;
