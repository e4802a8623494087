#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod engine;
pub mod export;
pub mod gesture;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod surface;
pub mod tool;

pub use app::ScribbleApp;
pub use element::{Element, ElementKind, Stamp, Stroke, STAMP_HALF_EXTENT};
pub use engine::{SketchConfig, SketchEngine};
pub use export::{Artifact, SnapshotError};
pub use gesture::{Gesture, GestureConfig, GestureRecognizer};
pub use renderer::Renderer;
pub use scene::Scene;
pub use surface::Surface;
pub use tool::{ToolMode, ToolState, PALETTE};
