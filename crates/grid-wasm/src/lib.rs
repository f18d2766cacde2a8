//! WASM bridge for the grid layout editor — exposes the Rust editor
//! session to the page's JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page owns the DOM: it
//! forwards pointer and input events, calls `render` when told something
//! changed, rebuilds the object list from `object_list_json`, and performs
//! the actual file picking and downloading.

mod console;
mod render2d;

use grid_core::Viewport;
use grid_editor::{
    EditorConfig, EditorSession, FileRead, ImportError, ImportOutcome, LayoutSink, ToolOutcome,
};
use render2d::CanvasSurface;
use serde_json::json;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The main WASM-facing canvas controller.
///
/// Holds the editor session. All interaction from the page goes through
/// this struct.
#[wasm_bindgen]
pub struct GridCanvas {
    session: EditorSession,
}

#[wasm_bindgen]
impl GridCanvas {
    /// Create a controller for a surface of the given size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(width, height, EditorConfig::default())
    }

    /// Create a controller with a JSON [`EditorConfig`]; missing keys keep
    /// their defaults.
    pub fn with_config(width: u32, height: u32, config_json: &str) -> Result<GridCanvas, JsValue> {
        let config = EditorConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("invalid editor config: {e}")))?;
        Ok(Self::from_config(width, height, config))
    }

    // ─── Surface size ────────────────────────────────────────────────────

    /// Set the surface size. Call `render` afterwards.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.session.resize(Viewport::new(width, height));
    }

    /// Size the surface to the window minus the controls sidebar and
    /// return the resulting width. Call `render` afterwards.
    pub fn resize_beside_sidebar(
        &mut self,
        window_width: u32,
        window_height: u32,
        sidebar_width: u32,
    ) -> u32 {
        let viewport = Viewport::beside_sidebar(window_width, window_height, sidebar_width);
        self.session.resize(viewport);
        viewport.width
    }

    pub fn width(&self) -> u32 {
        self.session.viewport().width
    }

    pub fn height(&self) -> u32 {
        self.session.viewport().height
    }

    // ─── Pointer events ──────────────────────────────────────────────────

    /// Handle pointer down at surface-relative coordinates.
    /// Returns `true` if the canvas needs re-rendering.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_down(x, y).needs_redraw()
    }

    /// Handle pointer move. Returns `true` if the canvas needs re-rendering.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.session.pointer_move(x, y).needs_redraw()
    }

    /// Handle pointer up. Returns a JSON string:
    /// `{"changed":bool, "listChanged":bool}`
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> String {
        let outcome = self.session.pointer_up(x, y);
        pointer_up_response(&outcome)
    }

    // ─── Inputs ──────────────────────────────────────────────────────────

    pub fn set_name(&mut self, name: &str) {
        self.session.set_name(name);
    }

    pub fn set_color(&mut self, color: &str) {
        self.session.set_color(color);
    }

    /// Record the width field (`NaN` or negative for empty). Not used when
    /// drawing.
    pub fn set_width_field(&mut self, value: f64) {
        self.session.set_width_field(field_value(value));
    }

    /// Record the height field (`NaN` or negative for empty). Not used when
    /// drawing.
    pub fn set_height_field(&mut self, value: f64) {
        self.session.set_height_field(field_value(value));
    }

    /// Initial value for the page's color input.
    pub fn default_color(&self) -> String {
        self.session.config().default_color.clone()
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Render the grid, objects, and drag preview to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let mut surface = CanvasSurface::new(ctx, self.session.viewport());
        self.session.render(&mut surface);
    }

    // ─── Object list ─────────────────────────────────────────────────────

    /// Object list lines as a JSON array of strings, in store order.
    pub fn object_list_json(&self) -> String {
        json!(self.session.object_list()).to_string()
    }

    pub fn object_count(&self) -> usize {
        self.session.objects().len()
    }

    // ─── Export / import ─────────────────────────────────────────────────

    /// The layout as indented JSON.
    pub fn export_layout(&self) -> Result<String, JsValue> {
        self.session
            .export_text()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Export through a JS callback `save(fileName, mime, contents)`,
    /// which is expected to offer the text as a download.
    pub fn export_with(&self, save: &js_sys::Function) -> Result<(), JsValue> {
        let mut sink = FunctionSink {
            save,
            error: None,
        };
        self.session
            .export(&mut sink)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        match sink.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Import file text read by the page. Returns JSON:
    /// `{"ok":true,"count":N}` or `{"ok":false,"kind":"...","error":"..."}`.
    /// On failure the layout is unchanged.
    pub fn import_layout(&mut self, text: &str) -> String {
        let result = self.session.finish_import(FileRead::Loaded(text.to_string()));
        import_response(&result)
    }

    /// The file picker closed without a selection.
    pub fn import_cancelled(&mut self) -> String {
        let result = self.session.finish_import(FileRead::NoSelection);
        import_response(&result)
    }

    /// The picked file could not be read.
    pub fn import_failed(&mut self, reason: &str) -> String {
        let result = self.session.finish_import(FileRead::Failed(reason.to_string()));
        import_response(&result)
    }
}

impl GridCanvas {
    fn from_config(width: u32, height: u32, config: EditorConfig) -> Self {
        console::panic_hook_setup();
        console::init_logger(log::Level::Info);

        Self {
            session: EditorSession::with_config(Viewport::new(width, height), config),
        }
    }
}

/// Adapts a JS `save(fileName, mime, contents)` function to [`LayoutSink`].
struct FunctionSink<'a> {
    save: &'a js_sys::Function,
    error: Option<JsValue>,
}

impl LayoutSink for FunctionSink<'_> {
    fn save_text(&mut self, file_name: &str, mime: &str, contents: &str) {
        let result = self.save.call3(
            &JsValue::NULL,
            &JsValue::from_str(file_name),
            &JsValue::from_str(mime),
            &JsValue::from_str(contents),
        );
        if let Err(err) = result {
            log::error!("export: save callback threw");
            self.error = Some(err);
        }
    }
}

fn field_value(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0).then(|| value.round().min(u32::MAX as f64) as u32)
}

fn pointer_up_response(outcome: &ToolOutcome) -> String {
    json!({
        "changed": outcome.needs_redraw(),
        "listChanged": matches!(outcome, ToolOutcome::Committed(_)),
    })
    .to_string()
}

fn import_response(result: &Result<ImportOutcome, ImportError>) -> String {
    match result {
        Ok(ImportOutcome::Ignored) => json!({ "ok": true, "ignored": true }),
        Ok(ImportOutcome::Replaced { count }) => json!({ "ok": true, "count": count }),
        Err(err) => {
            let kind = match err {
                ImportError::Read(_) => "read",
                ImportError::Layout(e) => e.kind(),
            };
            json!({ "ok": false, "kind": kind, "error": err.to_string() })
        }
    }
    .to_string()
}

// ─── Standalone validation (no canvas needed) ────────────────────────────

/// Validate layout JSON. Returns JSON: `{"ok":true,"count":N}` or
/// `{"ok":false,"kind":"...","error":"..."}`.
#[wasm_bindgen]
pub fn validate_layout(text: &str) -> String {
    let result = grid_core::import_layout(text)
        .map(|objects| ImportOutcome::Replaced {
            count: objects.len(),
        })
        .map_err(ImportError::from);
    import_response(&result)
}
