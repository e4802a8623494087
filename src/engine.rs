use egui::{Color32, Pos2};
use log::{info, trace, warn};

use crate::export::{self, Artifact, SnapshotError};
use crate::gesture::{Gesture, GestureRecognizer};
use crate::scene::Scene;
use crate::tool::{ToolMode, ToolState};

/// Construction parameters for the sketch engine.
#[derive(Debug, Clone)]
pub struct SketchConfig {
    /// Color selected when the engine opens.
    pub default_color: Color32,
    /// Fixed thickness applied to every stroke.
    pub stroke_width: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            default_color: Color32::BLACK,
            stroke_width: 4.0,
        }
    }
}

pub type SaveCallback = Box<dyn FnMut(Artifact)>;
pub type CloseCallback = Box<dyn FnMut()>;

/// The canvas annotation engine.
///
/// Owns the scene, the tool/color selection, and the gesture
/// recognizer; host screens feed it pointer events and a viewport size,
/// and receive the exported artifact through the save callback.
pub struct SketchEngine {
    config: SketchConfig,
    scene: Scene,
    tools: ToolState,
    recognizer: GestureRecognizer,
    viewport: Option<(u32, u32)>,
    saving: bool,
    on_save: SaveCallback,
    on_close: CloseCallback,
}

impl std::fmt::Debug for SketchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SketchEngine")
            .field("config", &self.config)
            .field("scene", &self.scene)
            .field("tools", &self.tools)
            .field("viewport", &self.viewport)
            .field("saving", &self.saving)
            .finish()
    }
}

impl SketchEngine {
    pub fn new(config: SketchConfig, on_save: SaveCallback, on_close: CloseCallback) -> Self {
        let tools = ToolState::new(config.default_color);
        Self {
            config,
            scene: Scene::new(),
            tools,
            recognizer: GestureRecognizer::new(),
            viewport: None,
            saving: false,
            on_save,
            on_close,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolState {
        &mut self.tools
    }

    /// Whether a save is currently in flight; the save control is
    /// disabled while this holds.
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Record the renderable surface size. The canvas panel calls this
    /// every frame before painting; exports rasterize at this size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Some((width, height));
    }

    pub fn pointer_pressed(&mut self, position: Pos2) {
        self.recognizer.pointer_pressed(position);
    }

    pub fn pointer_moved(&mut self, position: Pos2) {
        for gesture in self.recognizer.pointer_moved(position) {
            self.apply(gesture);
        }
    }

    pub fn pointer_released(&mut self, position: Pos2) {
        if let Some(gesture) = self.recognizer.pointer_released(position) {
            self.apply(gesture);
        }
    }

    /// Route one classified gesture into a scene mutation, according to
    /// the active tool. Gestures the tool does not understand are
    /// dropped silently.
    fn apply(&mut self, gesture: Gesture) {
        match (self.tools.mode(), gesture) {
            (ToolMode::Pencil, Gesture::PanStart { position }) => {
                self.scene
                    .begin_stroke(position, self.tools.active_color(), self.config.stroke_width);
            }
            (ToolMode::Pencil, Gesture::PanUpdate { position }) => {
                match self.scene.active_stroke() {
                    Some(id) => self.scene.append_to_stroke(id, position),
                    // Scene was cleared mid-gesture; drop the point.
                    None => trace!("pan update with no stroke in progress"),
                }
            }
            (ToolMode::Pencil, Gesture::PanEnd { .. }) => self.scene.finish_stroke(),
            (ToolMode::Stamp, Gesture::Tap { position }) => {
                self.scene.add_stamp(position, self.tools.active_color());
            }
            (mode, gesture) => trace!("ignoring {gesture:?} under {mode:?}"),
        }
    }

    /// Snapshot the canvas and hand the artifact to the host.
    ///
    /// On success `on_save` fires exactly once, then `on_close`. On
    /// failure the condition is logged and neither callback fires, so
    /// the host UI stays open for a retry. The scene is never mutated.
    pub fn save(&mut self) {
        if self.saving {
            trace!("save already in flight; ignoring");
            return;
        }
        self.saving = true;

        match self.capture() {
            Ok(artifact) => {
                info!(
                    "exported canvas snapshot: {} bytes ({} elements)",
                    artifact.bytes.len(),
                    self.scene.elements().len()
                );
                (self.on_save)(artifact);
                (self.on_close)();
            }
            Err(err) => warn!("canvas snapshot failed: {err}"),
        }

        self.saving = false;
    }

    fn capture(&self) -> Result<Artifact, SnapshotError> {
        let (width, height) = self.viewport.ok_or(SnapshotError::SurfaceUnavailable)?;
        export::snapshot(&self.scene, width, height)
    }

    /// Empty the canvas. Tool mode and active color keep their values,
    /// and nothing is saved.
    pub fn clear(&mut self) {
        self.scene.clear();
    }

    /// Dismiss the session without saving.
    pub fn request_close(&mut self) {
        (self.on_close)();
    }
}
