use egui::Color32;

/// Exclusive selector over how pointer gestures are interpreted.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ToolMode {
    /// Drags draw freehand strokes.
    Pencil,
    /// Taps place stamps.
    Stamp,
}

/// The fixed palette offered by the color picker, in display order.
pub const PALETTE: [Color32; 5] = [
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::YELLOW,
    Color32::BLACK,
];

/// Tool and color selection for the canvas.
///
/// Setters only affect elements created afterwards; nothing here ever
/// reaches back into the scene.
#[derive(Debug, Clone)]
pub struct ToolState {
    mode: ToolMode,
    active_color: Color32,
    palette_open: bool,
}

impl ToolState {
    pub fn new(default_color: Color32) -> Self {
        Self {
            mode: ToolMode::Pencil,
            active_color: default_color,
            palette_open: false,
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn set_active_color(&mut self, color: Color32) {
        self.active_color = color;
    }

    pub fn palette_open(&self) -> bool {
        self.palette_open
    }

    pub fn toggle_palette(&mut self) {
        self.palette_open = !self.palette_open;
    }

    /// Select a palette color; picking one closes the palette.
    pub fn pick_color(&mut self, color: Color32) {
        self.active_color = color;
        self.palette_open = false;
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Color32::BLACK)
    }
}
