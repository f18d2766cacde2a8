//! Error types for layout documents.

use thiserror::Error;

/// Errors raised while reading or writing a layout document.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The text is not JSON at all.
    #[error("invalid JSON: {0}")]
    InvalidFormat(#[source] serde_json::Error),

    /// The document is the JSON literal `null`.
    #[error("invalid JSON: document is null")]
    NullDocument,

    /// `objects` is present but is not an array.
    #[error("`objects` must be an array")]
    ObjectsNotArray,

    /// One entry of `objects` is missing a field, has a field of the wrong
    /// type, or has a non-positive size.
    #[error("object #{index}: {reason}")]
    InvalidObject { index: usize, reason: String },

    /// The store could not be encoded as JSON.
    #[error("could not encode layout: {0}")]
    Encode(#[source] serde_json::Error),
}

impl LayoutError {
    /// Short machine-readable kind, used by host bridges.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) | Self::NullDocument => "invalid_format",
            Self::ObjectsNotArray => "objects_not_array",
            Self::InvalidObject { .. } => "invalid_object",
            Self::Encode(_) => "encode",
        }
    }
}

pub type Result<T> = std::result::Result<T, LayoutError>;
