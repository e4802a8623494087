use egui::{Color32, Pos2};
use log::trace;
use uuid::Uuid;

use crate::element::{ElementKind, Stamp, Stroke};

/// The ordered aggregate of all strokes and stamps on the canvas.
///
/// Elements live in creation order and are never reordered or
/// deduplicated; the renderer paints them back-to-front in that order.
/// The scene also tracks which stroke (if any) is still being drawn so
/// gesture updates know where to append.
#[derive(Debug, Default)]
pub struct Scene {
    elements: Vec<ElementKind>,
    active_stroke: Option<Uuid>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new stroke with a single point and make it the active one.
    /// Returns the handle subsequent appends target.
    pub fn begin_stroke(&mut self, start: Pos2, color: Color32, width: f32) -> Uuid {
        let stroke = Stroke::new(start, color, width);
        let id = stroke.id();
        self.elements.push(ElementKind::Stroke(stroke));
        self.active_stroke = Some(id);
        id
    }

    /// Append one point to the identified stroke.
    ///
    /// A miss (the scene was cleared while the gesture was still in
    /// flight) is a deliberate no-op, not an error.
    pub fn append_to_stroke(&mut self, id: Uuid, point: Pos2) {
        let stroke = self.elements.iter_mut().rev().find_map(|el| match el {
            ElementKind::Stroke(s) if s.id() == id => Some(s),
            _ => None,
        });

        match stroke {
            Some(s) => s.push_point(point),
            None => trace!("dropping point for missing stroke {id}"),
        }
    }

    /// Finish the in-progress stroke. The next `begin_stroke` always
    /// starts a fresh element regardless, so this only drops the handle.
    pub fn finish_stroke(&mut self) {
        self.active_stroke = None;
    }

    /// The stroke currently being drawn, if any.
    pub fn active_stroke(&self) -> Option<Uuid> {
        self.active_stroke
    }

    /// Place a stamp centered on the tap point, appended last.
    pub fn add_stamp(&mut self, tap: Pos2, color: Color32) -> Uuid {
        let stamp = Stamp::at_tap(tap, color);
        let id = stamp.id();
        self.elements.push(ElementKind::Stamp(stamp));
        id
    }

    /// Remove every element and forget any in-progress stroke.
    /// Tool state is not the scene's concern and is untouched.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.active_stroke = None;
    }

    /// All elements in creation order.
    pub fn elements(&self) -> &[ElementKind] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn stroke_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|el| matches!(el, ElementKind::Stroke(_)))
            .count()
    }

    pub fn stamp_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|el| matches!(el, ElementKind::Stamp(_)))
            .count()
    }
}
