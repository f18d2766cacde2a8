//! File interchange with the host.
//!
//! The editor never opens files or triggers downloads itself. The host
//! reads a picked file and reports the result as a [`FileRead`], and
//! receives exported text through a [`LayoutSink`].

use grid_core::LayoutError;
use thiserror::Error;

/// Completion of the host's "pick a file and read it as text" flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileRead {
    /// The picker closed without a file.
    NoSelection,
    Loaded(String),
    /// The file was picked but could not be read.
    Failed(String),
}

/// Receives exported layouts, e.g. by offering them as a download.
pub trait LayoutSink {
    fn save_text(&mut self, file_name: &str, mime: &str, contents: &str);
}

/// A file handed to a [`LayoutSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub mime: String,
    pub contents: String,
}

impl LayoutSink for Vec<SavedFile> {
    fn save_text(&mut self, file_name: &str, mime: &str, contents: &str) {
        self.push(SavedFile {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            contents: contents.to_string(),
        });
    }
}

/// Result of a completed import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// No file was selected; nothing changed.
    Ignored,
    /// The store now holds `count` imported objects.
    Replaced { count: usize },
}

/// Why an import left the store unchanged.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("could not read file: {0}")]
    Read(String),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
