use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::element::Element;
use crate::scene::Scene;
use crate::surface::Surface;

/// Errors that can occur while capturing a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// `save` was invoked before the canvas was ever rendered, so there
    /// is no surface size to rasterize at.
    #[error("no render surface available yet")]
    SurfaceUnavailable,
    /// The recorded viewport has a zero dimension.
    #[error("render surface is empty ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },
    /// PNG encoding failed.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),
}

/// The exported image: PNG bytes plus their base64 form.
///
/// Ownership transfers to the save callback; the engine keeps nothing.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub base64: String,
}

/// Rasterize the scene at the given size and encode it as a PNG artifact.
///
/// Every call re-renders from the scene model, so repeated saves each
/// capture the state at call time and the scene is never mutated.
pub fn snapshot(scene: &Scene, width: u32, height: u32) -> Result<Artifact, SnapshotError> {
    if width == 0 || height == 0 {
        return Err(SnapshotError::EmptySurface { width, height });
    }

    let mut surface = Surface::new(width, height);
    for element in scene.elements() {
        element.rasterize(&mut surface);
    }

    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        surface.pixels(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgba8,
    )?;

    let base64 = STANDARD.encode(&bytes);
    Ok(Artifact { bytes, base64 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Color32};

    #[test]
    fn zero_sized_surface_is_rejected() {
        let scene = Scene::new();
        assert!(matches!(
            snapshot(&scene, 0, 10),
            Err(SnapshotError::EmptySurface { .. })
        ));
    }

    #[test]
    fn empty_scene_still_exports_the_blank_canvas() {
        let scene = Scene::new();
        let artifact = snapshot(&scene, 16, 16).unwrap();
        assert!(!artifact.bytes.is_empty());
        assert!(!artifact.base64.is_empty());
    }

    #[test]
    fn base64_matches_bytes() {
        let mut scene = Scene::new();
        scene.add_stamp(pos2(8.0, 8.0), Color32::RED);
        let artifact = snapshot(&scene, 16, 16).unwrap();

        let decoded = STANDARD.decode(&artifact.base64).unwrap();
        assert_eq!(decoded, artifact.bytes);
    }
}
