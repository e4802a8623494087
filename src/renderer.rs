use egui::{Color32, Painter, Rect};

use crate::element::Element;
use crate::scene::Scene;

/// Live-view renderer for the canvas.
///
/// Stateless: every frame repaints the whole scene from scratch in
/// creation order, so redrawing the same scene twice produces identical
/// output and strokes and stamps interleave exactly as they were made.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, painter: &Painter, canvas_rect: Rect, scene: &Scene) {
        painter.rect_filled(canvas_rect, 0.0, Color32::WHITE);

        let origin = canvas_rect.min.to_vec2();
        for element in scene.elements() {
            element.draw(painter, origin);
        }
    }
}
