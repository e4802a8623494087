use egui::{Color32, Painter, Pos2, Rect, Vec2};
use uuid::Uuid;

use crate::surface::Surface;

/// Half the stamp's extent in logical units; stamps are nominally 50x50.
pub const STAMP_HALF_EXTENT: f32 = 25.0;

/// Stamp element: one fixed-size decorative mark placed at a point.
///
/// The stored position is the top-left corner of the mark's box; the tap
/// point the user hit sits at its center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamp {
    id: Uuid,
    position: Pos2,
    color: Color32,
}

impl Stamp {
    /// Place a stamp so that `tap` is the center of the mark.
    pub fn at_tap(tap: Pos2, color: Color32) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: tap - Vec2::splat(STAMP_HALF_EXTENT),
            color,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Top-left corner of the stamp's 50x50 box.
    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn center(&self) -> Pos2 {
        self.position + Vec2::splat(STAMP_HALF_EXTENT)
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, Vec2::splat(STAMP_HALF_EXTENT * 2.0))
    }

    /// The glyph is a five-dot flower: a center disc with four petals.
    /// Live painting and raster export use the same geometry.
    fn discs(&self) -> [(Pos2, f32); 5] {
        let center = self.center();
        let petal_offset = STAMP_HALF_EXTENT * 0.56;
        let petal_radius = STAMP_HALF_EXTENT * 0.40;
        [
            (center, STAMP_HALF_EXTENT * 0.44),
            (center + Vec2::new(0.0, -petal_offset), petal_radius),
            (center + Vec2::new(petal_offset, 0.0), petal_radius),
            (center + Vec2::new(0.0, petal_offset), petal_radius),
            (center + Vec2::new(-petal_offset, 0.0), petal_radius),
        ]
    }

    pub fn draw(&self, painter: &Painter, origin: Vec2) {
        for (center, radius) in self.discs() {
            painter.circle_filled(center + origin, radius, self.color);
        }
    }

    pub fn rasterize(&self, surface: &mut Surface) {
        for (center, radius) in self.discs() {
            surface.fill_disc(center, radius, self.color);
        }
    }
}
