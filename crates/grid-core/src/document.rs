//! JSON layout documents.
//!
//! The persisted form is `{ "objects": [ ... ] }`, conventionally saved as
//! `layout.json`. Export writes 2-space indented JSON in store order.
//!
//! Import is lenient at the top level and strict per object:
//!
//! - a `null` document is rejected like malformed JSON;
//! - a missing or `null` `objects` key reads as an empty layout, as does a
//!   root that is an array, number, string or boolean;
//! - every object must carry `name`, `x`, `y`, `w`, `h`, `color` with the
//!   right JSON types, and `w`/`h` must be at least 1. Extra keys are ignored.

use crate::error::{LayoutError, Result};
use crate::model::PlacedObject;
use crate::store::LayoutStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Conventional file name for exported layouts.
pub const LAYOUT_FILE_NAME: &str = "layout.json";

/// MIME type of exported layouts.
pub const LAYOUT_MIME: &str = "application/json";

/// Serialization form of a whole layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub objects: Vec<PlacedObject>,
}

#[derive(Serialize)]
struct DocumentRef<'a> {
    objects: &'a [PlacedObject],
}

impl LayoutDocument {
    pub fn from_store(store: &LayoutStore) -> Self {
        Self {
            objects: store.snapshot().to_vec(),
        }
    }

    /// Parse and validate a document. See [`import_layout`].
    pub fn parse(text: &str) -> Result<Self> {
        import_layout(text).map(|objects| Self { objects })
    }

    pub fn to_json(&self) -> Result<String> {
        encode(&self.objects)
    }
}

/// Serialize the store as an indented JSON layout document.
pub fn export_layout(store: &LayoutStore) -> Result<String> {
    let text = encode(store.snapshot())?;
    log::debug!(
        "export: {} object(s), {} bytes",
        store.len(),
        text.len()
    );
    Ok(text)
}

fn encode(objects: &[PlacedObject]) -> Result<String> {
    serde_json::to_string_pretty(&DocumentRef { objects }).map_err(LayoutError::Encode)
}

/// Parse a JSON layout document into its objects.
///
/// Never touches a store: callers replace their store only on `Ok`.
pub fn import_layout(text: &str) -> Result<Vec<PlacedObject>> {
    let root: Value = serde_json::from_str(text).map_err(LayoutError::InvalidFormat)?;
    if root.is_null() {
        return Err(LayoutError::NullDocument);
    }

    let items = match root.get("objects") {
        None | Some(Value::Null) => {
            log::debug!("import: no `objects` key, reading as empty layout");
            return Ok(Vec::new());
        }
        Some(Value::Array(items)) => items,
        Some(_) => return Err(LayoutError::ObjectsNotArray),
    };

    let objects = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_object(index, item))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("import: {} object(s)", objects.len());
    Ok(objects)
}

fn parse_object(index: usize, item: &Value) -> Result<PlacedObject> {
    let object = PlacedObject::deserialize(item).map_err(|e| LayoutError::InvalidObject {
        index,
        reason: e.to_string(),
    })?;

    if object.w == 0 || object.h == 0 {
        return Err(LayoutError::InvalidObject {
            index,
            reason: format!("size {}x{} must be at least 1x1", object.w, object.h),
        });
    }
    Ok(object)
}
