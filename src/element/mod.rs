use egui::{Color32, Painter, Rect, Vec2};
use uuid::Uuid;

mod stamp;
mod stroke;

pub use stamp::{Stamp, STAMP_HALF_EXTENT};
pub use stroke::Stroke;

use crate::surface::Surface;

/// Common trait that all scene elements implement.
pub trait Element {
    /// Unique identifier for this element.
    fn id(&self) -> Uuid;

    /// Color the element was created with.
    fn color(&self) -> Color32;

    /// Bounding rectangle of the element.
    fn rect(&self) -> Rect;

    /// Draw the element into the live-view painter; `origin` is the
    /// canvas top-left in the painter's screen space.
    fn draw(&self, painter: &Painter, origin: Vec2);

    /// Draw the element into a CPU raster surface (export path).
    fn rasterize(&self, surface: &mut Surface);
}

/// Tagged union over all element kinds in the scene.
///
/// The scene stores these in creation order and the renderer consumes
/// them uniformly, so a stamp placed between two strokes paints between
/// them rather than before or after as a group.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl ElementKind {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            ElementKind::Stroke(s) => Some(s),
            ElementKind::Stamp(_) => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            ElementKind::Stroke(_) => None,
            ElementKind::Stamp(s) => Some(s),
        }
    }
}

impl Element for ElementKind {
    fn id(&self) -> Uuid {
        match self {
            ElementKind::Stroke(s) => s.id(),
            ElementKind::Stamp(s) => s.id(),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            ElementKind::Stroke(s) => s.color(),
            ElementKind::Stamp(s) => s.color(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            ElementKind::Stroke(s) => s.rect(),
            ElementKind::Stamp(s) => s.rect(),
        }
    }

    fn draw(&self, painter: &Painter, origin: Vec2) {
        match self {
            ElementKind::Stroke(s) => s.draw(painter, origin),
            ElementKind::Stamp(s) => s.draw(painter, origin),
        }
    }

    fn rasterize(&self, surface: &mut Surface) {
        match self {
            ElementKind::Stroke(s) => s.rasterize(surface),
            ElementKind::Stamp(s) => s.rasterize(surface),
        }
    }
}
