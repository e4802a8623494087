use egui::{vec2, Button, Color32, Ui};
use log::info;

use crate::engine::SketchEngine;
use crate::tool::{ToolMode, PALETTE};

const SWATCH_SIZE: f32 = 24.0;

/// Tool toggle, color palette, and the Save / Clear / Close controls.
pub fn palette_panel(engine: &mut SketchEngine, ui: &mut Ui) {
    ui.horizontal(|ui| {
        let mode = engine.tools().mode();
        if ui
            .selectable_label(mode == ToolMode::Pencil, "✏ Pencil")
            .clicked()
        {
            engine.tools_mut().set_mode(ToolMode::Pencil);
        }
        if ui
            .selectable_label(mode == ToolMode::Stamp, "✿ Stamp")
            .clicked()
        {
            engine.tools_mut().set_mode(ToolMode::Stamp);
        }

        ui.separator();

        let active = engine.tools().active_color();
        if color_swatch(ui, active, true).clicked() {
            engine.tools_mut().toggle_palette();
        }

        if engine.tools().palette_open() {
            for color in PALETTE {
                if color_swatch(ui, color, color == active).clicked() {
                    info!("color selected from palette: {color:?}");
                    engine.tools_mut().pick_color(color);
                }
            }
        }

        ui.separator();

        let save_enabled = !engine.is_saving();
        if ui.add_enabled(save_enabled, Button::new("Save")).clicked() {
            engine.save();
        }
        if ui.button("Clear").clicked() {
            engine.clear();
        }
        if ui.button("Close").clicked() {
            engine.request_close();
        }
    });
}

fn color_swatch(ui: &mut Ui, color: Color32, selected: bool) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(
        vec2(SWATCH_SIZE, SWATCH_SIZE),
        egui::Sense::click(),
    );
    ui.painter().rect_filled(rect, 4.0, color);
    if selected {
        ui.painter()
            .rect_stroke(rect, 4.0, egui::Stroke::new(2.0, ui.visuals().strong_text_color()));
    }
    response
}
