//! Draw tool: drag on the canvas to place one rectangle.
//!
//! ```text
//!  Idle ──pointer-down──▶ Dragging ──pointer-up──▶ Idle
//!                          │    ▲
//!                          └────┘ pointer-move (update preview)
//! ```
//!
//! Pointer-up commits the last preview shown, if any. Pointer-move and
//! pointer-up while `Idle` are ignored, as is a second pointer-down while
//! `Dragging`.

use crate::input::InputEvent;
use grid_core::{PlacedObject, Preview};

/// Name given to objects drawn while the name field is empty.
pub const PLACEHOLDER_NAME: &str = "Object";

// ─── Live inputs ─────────────────────────────────────────────────────────

/// Current values of the editor's input fields, read at event time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInputs {
    pub name: String,
    pub color: String,
    /// Width field. Captured for the host but not used when drawing:
    /// object size comes from the drag distance only.
    pub width_field: Option<u32>,
    /// Height field. Same status as `width_field`.
    pub height_field: Option<u32>,
}

impl Default for ToolInputs {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: "#000000".to_string(),
            width_field: None,
            height_field: None,
        }
    }
}

impl ToolInputs {
    /// The name to commit, falling back to `placeholder` when empty.
    pub fn object_name<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.name.is_empty() {
            placeholder
        } else {
            &self.name
        }
    }
}

// ─── Outcome ─────────────────────────────────────────────────────────────

/// What a handled event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Nothing visible changed.
    Unchanged,
    /// The preview changed; redraw.
    Redraw,
    /// A drag finished and produced this object; append, refresh the
    /// list, and redraw.
    Committed(PlacedObject),
}

impl ToolOutcome {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

// ─── Draw tool ───────────────────────────────────────────────────────────

/// Drag state of the draw tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        anchor: (i32, i32),
        /// `None` until the first pointer-move.
        preview: Option<Preview>,
    },
}

#[derive(Debug)]
pub struct DrawTool {
    state: DragState,
    placeholder_name: String,
}

impl Default for DrawTool {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawTool {
    pub fn new() -> Self {
        Self::with_placeholder(PLACEHOLDER_NAME)
    }

    pub fn with_placeholder(placeholder_name: impl Into<String>) -> Self {
        Self {
            state: DragState::Idle,
            placeholder_name: placeholder_name.into(),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The live preview, if a drag has moved at least once.
    pub fn preview(&self) -> Option<&Preview> {
        match &self.state {
            DragState::Dragging { preview, .. } => preview.as_ref(),
            DragState::Idle => None,
        }
    }

    /// Handle one pointer event against the current input values.
    pub fn handle(&mut self, event: &InputEvent, inputs: &ToolInputs) -> ToolOutcome {
        match (*event, &mut self.state) {
            (InputEvent::PointerDown { x, y }, DragState::Idle) => {
                self.state = DragState::Dragging {
                    anchor: (x, y),
                    preview: None,
                };
                ToolOutcome::Unchanged
            }
            (InputEvent::PointerMove { x, y }, DragState::Dragging { anchor, preview }) => {
                *preview = Some(Preview::between(*anchor, (x, y), inputs.color.as_str()));
                ToolOutcome::Redraw
            }
            (InputEvent::PointerUp { .. }, DragState::Dragging { .. }) => {
                let DragState::Dragging { preview, .. } = std::mem::take(&mut self.state) else {
                    return ToolOutcome::Unchanged;
                };

                // A press and release with no move in between never showed a
                // preview, so nothing is placed.
                let Some(preview) = preview else {
                    log::trace!("draw: released without a preview");
                    return ToolOutcome::Unchanged;
                };

                let name = inputs.object_name(&self.placeholder_name);
                let object = preview.commit(name, inputs.color.as_str());
                log::debug!(
                    "draw: commit {:?} at ({}, {}) {}x{}",
                    object.name,
                    object.x,
                    object.y,
                    object.w,
                    object.h
                );
                ToolOutcome::Committed(object)
            }
            _ => ToolOutcome::Unchanged,
        }
    }
}
