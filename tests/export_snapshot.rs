use std::cell::RefCell;
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use egui::{pos2, Color32};
use scribble::{export, Scene, SketchConfig, SketchEngine};

fn counting_engine() -> (SketchEngine, Rc<RefCell<usize>>, Rc<RefCell<usize>>) {
    let saves = Rc::new(RefCell::new(0));
    let closes = Rc::new(RefCell::new(0));
    let save_count = Rc::clone(&saves);
    let close_count = Rc::clone(&closes);

    let engine = SketchEngine::new(
        SketchConfig::default(),
        Box::new(move |_| *save_count.borrow_mut() += 1),
        Box::new(move || *close_count.borrow_mut() += 1),
    );
    (engine, saves, closes)
}

#[test]
fn save_before_first_render_invokes_no_callbacks() {
    let (mut engine, saves, closes) = counting_engine();

    // No viewport was ever recorded; must log and return quietly.
    engine.save();

    assert_eq!(*saves.borrow(), 0);
    assert_eq!(*closes.borrow(), 0);
}

#[test]
fn snapshot_round_trips_through_base64_with_surface_dimensions() {
    let mut scene = Scene::new();
    let id = scene.begin_stroke(pos2(10.0, 10.0), Color32::BLUE, 4.0);
    scene.append_to_stroke(id, pos2(90.0, 40.0));
    scene.finish_stroke();

    let artifact = export::snapshot(&scene, 120, 80).unwrap();

    let bytes = STANDARD.decode(&artifact.base64).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), 120);
    assert_eq!(decoded.height(), 80);
}

#[test]
fn exported_pixels_reflect_the_scene() {
    let mut scene = Scene::new();
    scene.add_stamp(pos2(50.0, 50.0), Color32::RED);

    let artifact = export::snapshot(&scene, 100, 100).unwrap();
    let decoded = image::load_from_memory(&artifact.bytes).unwrap().to_rgba8();

    // Stamp center is solid red; far corner stays the white background.
    assert_eq!(decoded.get_pixel(50, 50).0, [255, 0, 0, 255]);
    assert_eq!(decoded.get_pixel(2, 2).0, [255, 255, 255, 255]);
}

#[test]
fn save_fires_callbacks_once_and_leaves_the_scene_alone() {
    let (mut engine, saves, closes) = counting_engine();
    engine.set_viewport(64, 64);

    engine.pointer_pressed(pos2(5.0, 5.0));
    engine.pointer_moved(pos2(25.0, 25.0));
    engine.pointer_released(pos2(25.0, 25.0));

    engine.save();

    assert_eq!(*saves.borrow(), 1);
    assert_eq!(*closes.borrow(), 1);
    assert_eq!(engine.scene().stroke_count(), 1);
}

#[test]
fn repeated_saves_each_snapshot_current_state() {
    let artifacts: Rc<RefCell<Vec<scribble::Artifact>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&artifacts);

    let mut engine = SketchEngine::new(
        SketchConfig::default(),
        Box::new(move |artifact| sink.borrow_mut().push(artifact)),
        Box::new(|| {}),
    );
    engine.set_viewport(32, 32);

    engine.save();
    engine.tools_mut().set_active_color(Color32::GREEN);
    engine.pointer_pressed(pos2(2.0, 2.0));
    engine.pointer_moved(pos2(20.0, 20.0));
    engine.pointer_released(pos2(20.0, 20.0));
    engine.save();

    let artifacts = artifacts.borrow();
    assert_eq!(artifacts.len(), 2);
    // The second capture includes the stroke, so the PNGs differ.
    assert_ne!(artifacts[0].bytes, artifacts[1].bytes);
}
