use egui::{Color32, Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};
use uuid::Uuid;

use crate::surface::Surface;

/// Stroke element representing one continuous freehand line.
///
/// Points are only ever appended while the stroke is in progress; the
/// color and width are fixed at creation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: Uuid,
    points: Vec<Pos2>,
    color: Color32,
    width: f32,
}

impl Stroke {
    /// Create a new stroke starting at `start`.
    pub fn new(start: Pos2, color: Color32, width: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![start],
            color,
            width,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the points that make up this stroke, in drawing order.
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Append one point. Only the scene calls this, and only while the
    /// stroke is the in-progress one.
    pub(crate) fn push_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    /// Bounding box of the stroke, padded by half the stroke width.
    pub fn rect(&self) -> Rect {
        let mut rect = Rect::NOTHING;
        for point in &self.points {
            rect.extend_with(*point);
        }
        rect.expand(self.width / 2.0)
    }

    /// Draw into the live view; `origin` maps canvas-local coordinates
    /// to the painter's screen space.
    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        if self.points.len() < 2 {
            // A single-point stroke still shows up as a dot.
            if let Some(point) = self.points.first() {
                painter.circle_filled(*point + origin, self.width / 2.0, self.color);
            }
            return;
        }

        painter.add(egui::Shape::line(
            self.points.iter().map(|p| *p + origin).collect(),
            EguiStroke::new(self.width, self.color),
        ));
    }

    pub fn rasterize(&self, surface: &mut Surface) {
        match self.points.as_slice() {
            [] => {}
            [point] => surface.fill_disc(*point, self.width / 2.0, self.color),
            points => {
                for window in points.windows(2) {
                    surface.draw_segment(window[0], window[1], self.width, self.color);
                }
            }
        }
    }
}
