use egui::{Sense, Ui};

use crate::engine::SketchEngine;
use crate::renderer::Renderer;

/// The drawing area: allocates the painter, feeds pointer input to the
/// engine in canvas-local coordinates, and repaints the scene.
pub fn canvas_panel(engine: &mut SketchEngine, renderer: &Renderer, ui: &mut Ui) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
    let canvas_rect = response.rect;

    // Record the surface size so saves can rasterize at it.
    engine.set_viewport(
        canvas_rect.width().max(0.0) as u32,
        canvas_rect.height().max(0.0) as u32,
    );

    // Scene coordinates are relative to the canvas top-left, so the
    // live view and the exported raster agree.
    let local_pos = response
        .interact_pointer_pos()
        .map(|pos| pos - canvas_rect.min.to_vec2());

    if let Some(pos) = local_pos {
        ui.input(|input| {
            if input.pointer.primary_pressed() {
                engine.pointer_pressed(pos);
            } else if input.pointer.primary_released() {
                engine.pointer_released(pos);
            } else if input.pointer.primary_down() {
                engine.pointer_moved(pos);
            }
        });
    }

    renderer.render(&painter, canvas_rect, engine.scene());
}
