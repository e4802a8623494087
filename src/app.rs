use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::engine::{SketchConfig, SketchEngine};
use crate::export::Artifact;
use crate::panels::{canvas_panel, palette_panel};
use crate::renderer::Renderer;

/// One open drawing session: the engine plus the cells its callbacks
/// write into. Everything runs on the UI thread, so shared cells are
/// plain `Rc<RefCell<..>>`.
struct SketchSession {
    engine: SketchEngine,
    renderer: Renderer,
    saved: Rc<RefCell<Option<Artifact>>>,
    close_requested: Rc<RefCell<bool>>,
}

impl SketchSession {
    fn open(config: SketchConfig) -> Self {
        let saved = Rc::new(RefCell::new(None));
        let close_requested = Rc::new(RefCell::new(false));

        let saved_slot = Rc::clone(&saved);
        let close_flag = Rc::clone(&close_requested);
        let engine = SketchEngine::new(
            config,
            Box::new(move |artifact| {
                *saved_slot.borrow_mut() = Some(artifact);
            }),
            Box::new(move || {
                *close_flag.borrow_mut() = true;
            }),
        );

        Self {
            engine,
            renderer: Renderer::new(),
            saved,
            close_requested,
        }
    }
}

/// Demo host application: opens the sketch engine in a modal window and
/// previews the artifact it hands back, the way an editor screen would
/// before uploading it.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ScribbleApp {
    /// Whether the artifact details line is shown under the preview.
    show_artifact_info: bool,

    #[serde(skip)]
    session: Option<SketchSession>,
    #[serde(skip)]
    last_artifact: Option<Artifact>,
    #[serde(skip)]
    preview: Option<egui::TextureHandle>,
}

impl Default for ScribbleApp {
    fn default() -> Self {
        Self {
            show_artifact_info: true,
            session: None,
            last_artifact: None,
            preview: None,
        }
    }
}

impl ScribbleApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    fn take_session_results(&mut self, ctx: &egui::Context) {
        let (artifact, close) = match &self.session {
            Some(session) => (
                session.saved.borrow_mut().take(),
                *session.close_requested.borrow(),
            ),
            None => return,
        };

        if let Some(artifact) = artifact {
            self.preview = decode_preview(ctx, &artifact);
            self.last_artifact = Some(artifact);
        }

        if close {
            info!("drawing session closed");
            self.session = None;
        }
    }
}

/// Decode the PNG artifact back into a texture for on-screen preview.
fn decode_preview(ctx: &egui::Context, artifact: &Artifact) -> Option<egui::TextureHandle> {
    let decoded = match image::load_from_memory(&artifact.bytes) {
        Ok(img) => img.to_rgba8(),
        Err(err) => {
            warn!("could not decode artifact for preview: {err}");
            return None;
        }
    };

    let size = [decoded.width() as usize, decoded.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());
    Some(ctx.load_texture("artifact_preview", color_image, egui::TextureOptions::default()))
}

impl eframe::App for ScribbleApp {
    /// Called by the framework to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Scribble");

            if ui.button("New drawing").clicked() && self.session.is_none() {
                self.session = Some(SketchSession::open(SketchConfig::default()));
            }

            if let Some(artifact) = &self.last_artifact {
                ui.separator();
                if let Some(texture) = &self.preview {
                    ui.image((texture.id(), texture.size_vec2()));
                }
                ui.checkbox(&mut self.show_artifact_info, "Show artifact details");
                if self.show_artifact_info {
                    ui.label(format!(
                        "{} PNG bytes, {} base64 chars",
                        artifact.bytes.len(),
                        artifact.base64.len()
                    ));
                }
            }
        });

        if let Some(session) = &mut self.session {
            egui::Window::new("Drawing")
                .collapsible(false)
                .resizable(true)
                .default_size(egui::vec2(480.0, 420.0))
                .show(ctx, |ui| {
                    palette_panel(&mut session.engine, ui);
                    ui.separator();
                    canvas_panel(&mut session.engine, &session.renderer, ui);
                });
        }

        self.take_session_results(ctx);
    }
}
