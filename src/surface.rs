use egui::{Color32, Pos2};

/// A CPU-side RGBA8 raster target.
///
/// The export path redraws the whole scene into one of these at snapshot
/// time, so the artifact never depends on GPU state. Strokes are laid
/// down by stamping discs along each segment, which matches how the live
/// view reads at the fixed widths we use.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Create a surface cleared to opaque white.
    pub fn new(width: u32, height: u32) -> Self {
        let mut surface = Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        };
        surface.clear(Color32::WHITE);
        surface
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major from the top-left.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color32) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&color.to_array());
        }
    }

    /// Read one pixel; out-of-bounds coordinates return None.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let p = &self.pixels[i..i + 4];
        Some(Color32::from_rgba_premultiplied(p[0], p[1], p[2], p[3]))
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color32) {
        // Off-canvas geometry is accepted; pixels outside are dropped.
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&color.to_array());
    }

    /// Fill a solid disc centered at `center`.
    pub fn fill_disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let radius = radius.max(0.5);
        let r2 = radius * radius;
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draw a thick line segment by stamping discs along its length.
    pub fn draw_segment(&mut self, from: Pos2, to: Pos2, width: f32, color: Color32) {
        let radius = (width / 2.0).max(0.5);
        let delta = to - from;
        let length = delta.length();
        if length < f32::EPSILON {
            self.fill_disc(from, radius, color);
            return;
        }

        // Half-radius spacing keeps the stroke solid without gaps.
        let steps = (length / (radius * 0.5)).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.fill_disc(from + delta * t, radius, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn new_surface_is_white() {
        let surface = Surface::new(4, 4);
        assert_eq!(surface.pixel(0, 0), Some(Color32::WHITE));
        assert_eq!(surface.pixel(3, 3), Some(Color32::WHITE));
    }

    #[test]
    fn disc_paints_center_and_skips_far_corner() {
        let mut surface = Surface::new(20, 20);
        surface.fill_disc(pos2(10.0, 10.0), 3.0, Color32::RED);
        assert_eq!(surface.pixel(10, 10), Some(Color32::RED));
        assert_eq!(surface.pixel(0, 0), Some(Color32::WHITE));
    }

    #[test]
    fn off_canvas_geometry_is_accepted() {
        let mut surface = Surface::new(8, 8);
        // Must not panic; clipped silently.
        surface.draw_segment(pos2(-10.0, -10.0), pos2(30.0, 30.0), 2.0, Color32::BLUE);
        assert_eq!(surface.pixel(4, 4), Some(Color32::BLUE));
    }
}
