pub mod config;
pub mod input;
pub mod io;
pub mod session;
pub mod tools;

pub use config::EditorConfig;
pub use input::InputEvent;
pub use io::{FileRead, ImportError, ImportOutcome, LayoutSink, SavedFile};
pub use session::EditorSession;
pub use tools::{DragState, DrawTool, ToolInputs, ToolOutcome};
