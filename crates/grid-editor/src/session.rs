//! Editor session: the single owner of all editing state.
//!
//! Holds the layout store, the draw tool, the live input values, and the
//! viewport. Hosts forward pointer and input events here, then render and
//! refresh the object list when an outcome asks for it.

use crate::config::EditorConfig;
use crate::input::InputEvent;
use crate::io::{FileRead, ImportError, ImportOutcome, LayoutSink};
use crate::tools::{DrawTool, ToolInputs, ToolOutcome};
use grid_core::document::{LAYOUT_MIME, export_layout, import_layout};
use grid_core::{LayoutError, LayoutStore, PlacedObject, Preview, Viewport};
use grid_render::{Surface, render_layout};

pub struct EditorSession {
    store: LayoutStore,
    tool: DrawTool,
    inputs: ToolInputs,
    viewport: Viewport,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, EditorConfig::default())
    }

    pub fn with_config(viewport: Viewport, config: EditorConfig) -> Self {
        let inputs = ToolInputs {
            color: config.default_color.clone(),
            ..ToolInputs::default()
        };
        Self {
            store: LayoutStore::new(),
            tool: DrawTool::with_placeholder(config.placeholder_name.clone()),
            inputs,
            viewport,
            config,
        }
    }

    // ─── Pointer input ───────────────────────────────────────────────────

    /// Feed one pointer event through the draw tool. A committed object is
    /// appended to the store before returning.
    pub fn handle(&mut self, event: InputEvent) -> ToolOutcome {
        let outcome = self.tool.handle(&event, &self.inputs);
        if let ToolOutcome::Committed(object) = &outcome {
            self.store.append(object.clone());
        }
        outcome
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> ToolOutcome {
        self.handle(InputEvent::pointer_down(x, y))
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> ToolOutcome {
        self.handle(InputEvent::pointer_move(x, y))
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> ToolOutcome {
        self.handle(InputEvent::pointer_up(x, y))
    }

    pub fn is_dragging(&self) -> bool {
        self.tool.is_dragging()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.tool.preview()
    }

    // ─── Live inputs ─────────────────────────────────────────────────────

    pub fn inputs(&self) -> &ToolInputs {
        &self.inputs
    }

    pub fn set_name(&mut self, name: &str) {
        self.inputs.name = name.to_string();
    }

    pub fn set_color(&mut self, color: &str) {
        self.inputs.color = color.to_string();
    }

    /// Record the width field. Not used when drawing.
    pub fn set_width_field(&mut self, width: Option<u32>) {
        self.inputs.width_field = width;
    }

    /// Record the height field. Not used when drawing.
    pub fn set_height_field(&mut self, height: Option<u32>) {
        self.inputs.height_field = height;
    }

    // ─── Viewport & rendering ────────────────────────────────────────────

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Record a new surface size. The host re-renders afterwards.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!(
                "resize: {}x{} -> {}x{}",
                self.viewport.width,
                self.viewport.height,
                viewport.width,
                viewport.height
            );
        }
        self.viewport = viewport;
    }

    /// Draw the grid, the stored objects, and the live preview.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_layout(
            surface,
            self.store.snapshot(),
            self.tool.preview(),
            &self.config.theme,
        );
    }

    // ─── Layout ──────────────────────────────────────────────────────────

    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    pub fn objects(&self) -> &[PlacedObject] {
        self.store.snapshot()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Lines for the object list, one per object in store order.
    pub fn object_list(&self) -> Vec<String> {
        self.store.iter().map(PlacedObject::list_label).collect()
    }

    pub fn export_text(&self) -> Result<String, LayoutError> {
        export_layout(&self.store)
    }

    /// Export the layout and hand it to `sink` under the configured name.
    pub fn export<K: LayoutSink + ?Sized>(&self, sink: &mut K) -> Result<(), LayoutError> {
        let text = self.export_text()?;
        sink.save_text(&self.config.export_file_name, LAYOUT_MIME, &text);
        log::info!(
            "export: offered {} ({} object(s))",
            self.config.export_file_name,
            self.store.len()
        );
        Ok(())
    }

    /// Replace the layout with the objects in `text`.
    ///
    /// On error the store is left exactly as it was.
    pub fn import_text(&mut self, text: &str) -> Result<usize, LayoutError> {
        let objects = import_layout(text).inspect_err(|e| {
            log::warn!("import rejected: {e}");
        })?;
        let count = objects.len();
        self.store.replace_all(objects);
        Ok(count)
    }

    /// Complete the host's file-read flow.
    pub fn finish_import(&mut self, read: FileRead) -> Result<ImportOutcome, ImportError> {
        match read {
            FileRead::NoSelection => {
                log::debug!("import: no file selected");
                Ok(ImportOutcome::Ignored)
            }
            FileRead::Failed(reason) => {
                log::warn!("import: read failed: {reason}");
                Err(ImportError::Read(reason))
            }
            FileRead::Loaded(text) => {
                let count = self.import_text(&text)?;
                Ok(ImportOutcome::Replaced { count })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn session_uses_config_defaults() {
        let config = EditorConfig {
            placeholder_name: "Item".into(),
            default_color: "#abcdef".into(),
            ..EditorConfig::default()
        };
        let mut session = EditorSession::with_config(Viewport::new(100, 100), config);
        assert_eq!(session.inputs().color, "#abcdef");

        session.pointer_down(0.0, 0.0);
        session.pointer_move(5.0, 5.0);
        session.pointer_up(5.0, 5.0);
        assert_eq!(session.objects()[0].name, "Item");
        assert_eq!(session.objects()[0].color, "#abcdef");
    }

    #[test]
    fn width_and_height_fields_do_not_affect_drawing() {
        let mut session = EditorSession::new(Viewport::new(100, 100));
        session.set_width_field(Some(500));
        session.set_height_field(Some(400));
        session.pointer_down(10.0, 10.0);
        session.pointer_move(30.0, 25.0);
        session.pointer_up(30.0, 25.0);

        let obj = &session.objects()[0];
        assert_eq!((obj.w, obj.h), (20, 15));
        assert_eq!(session.inputs().width_field, Some(500));
    }

    #[test]
    fn resize_updates_viewport() {
        let mut session = EditorSession::new(Viewport::new(100, 100));
        session.resize(Viewport::beside_sidebar(1200, 800, 200));
        assert_eq!(session.viewport(), Viewport::new(1000, 800));
    }
}
