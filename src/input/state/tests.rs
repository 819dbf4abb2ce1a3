use super::*;
use crate::config::Config;
use crate::draw::{Endpoint, FloorPlan, Point, SnapSettings, Wall};
use crate::input::PointerEvent;

fn create_test_editor() -> WallEditor {
    WallEditor::new()
}

fn editor_with_walls(walls: Vec<Wall>) -> WallEditor {
    let mut editor = create_test_editor();
    editor.set_plan(FloorPlan::from_walls(walls));
    editor
}

fn draw(editor: &mut WallEditor, from: (f64, f64), to: (f64, f64)) {
    editor.on_press_start(from.0, from.1);
    editor.on_pointer_move(to.0, to.1);
    editor.on_press_end();
}

fn has_wall(editor: &WallEditor, x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    editor.walls().iter().any(|wall| *wall == Wall::new(x1, y1, x2, y2))
}

#[test]
fn new_editor_is_idle_and_empty() {
    let editor = create_test_editor();
    assert!(editor.is_idle());
    assert!(editor.walls().is_empty());
    assert!(editor.preview().is_none());
    assert!(editor.dragged_key().is_none());
}

#[test]
fn press_starts_zero_length_preview() {
    let mut editor = create_test_editor();
    editor.needs_redraw = false;

    editor.on_press_start(12.0, 34.0);

    let preview = editor.preview().expect("preview present");
    assert_eq!(preview.start(), Point::new(12.0, 34.0));
    assert_eq!(preview.end(), Point::new(12.0, 34.0));
    assert_eq!(preview.length(), 0);
    assert!(editor.needs_redraw);
}

#[test]
fn press_snaps_preview_start_to_nearby_key() {
    let mut editor = editor_with_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    editor.on_press_start(103.0, 4.0);

    let preview = editor.preview().expect("preview present");
    assert_eq!(preview.start(), Point::new(100.0, 0.0));
}

#[test]
fn preview_locks_to_horizontal_axis() {
    let mut editor = create_test_editor();
    editor.on_press_start(0.0, 0.0);
    editor.on_pointer_move(80.0, 25.0);

    let preview = editor.preview().unwrap();
    assert_eq!(preview.end(), Point::new(80.0, 0.0));
    assert_eq!(preview.length(), 80);
}

#[test]
fn preview_locks_to_vertical_axis() {
    let mut editor = create_test_editor();
    editor.on_press_start(10.0, 10.0);
    editor.on_pointer_move(-20.0, -90.0);

    let preview = editor.preview().unwrap();
    assert_eq!(preview.end(), Point::new(10.0, -90.0));
    assert_eq!(preview.length(), 100);
}

#[test]
fn diagonal_tie_locks_vertically() {
    let mut editor = create_test_editor();
    editor.on_press_start(0.0, 0.0);
    editor.on_pointer_move(40.0, 40.0);

    assert_eq!(editor.preview().unwrap().end(), Point::new(0.0, 40.0));
}

#[test]
fn preview_axis_lock_uses_snapped_point() {
    // Raw (80, 90) would lock vertically; it snaps onto the wall at (100, 90).
    let mut editor = editor_with_walls(vec![Wall::new(100.0, -100.0, 100.0, 100.0)]);
    editor.on_press_start(0.0, 0.0);
    editor.on_pointer_move(80.0, 90.0);

    let preview = editor.preview().unwrap();
    assert_eq!(preview.end(), Point::new(100.0, 0.0));
}

#[test]
fn release_commits_preview() {
    let mut editor = create_test_editor();
    draw(&mut editor, (0.0, 0.0), (100.0, 0.0));

    assert!(editor.is_idle());
    assert!(editor.preview().is_none());
    assert_eq!(editor.walls(), &[Wall::new(0.0, 0.0, 100.0, 0.0)]);
    assert_eq!(editor.walls()[0].length(), 100);
}

#[test]
fn crossing_walls_are_split_into_four() {
    let mut editor = create_test_editor();
    draw(&mut editor, (0.0, 0.0), (100.0, 0.0));
    draw(&mut editor, (50.0, -50.0), (50.0, 50.0));

    assert_eq!(editor.walls().len(), 4);
    assert!(has_wall(&editor, 0.0, 0.0, 50.0, 0.0));
    assert!(has_wall(&editor, 50.0, 0.0, 100.0, 0.0));
    assert!(has_wall(&editor, 50.0, -50.0, 50.0, 0.0));
    assert!(has_wall(&editor, 50.0, 0.0, 50.0, 50.0));
    assert!(editor.walls().iter().all(|wall| wall.length() > 0));
}

#[test]
fn dragging_start_key_moves_endpoint() {
    let mut editor = editor_with_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    editor.on_key_drag_start(0, Endpoint::Start);
    assert_eq!(
        editor.dragged_key(),
        Some(DraggedKey {
            wall: 0,
            endpoint: Endpoint::Start
        })
    );

    editor.on_pointer_move(200.0, 0.0);
    editor.on_press_end();

    assert!(editor.is_idle());
    assert_eq!(editor.walls(), &[Wall::new(200.0, 0.0, 100.0, 0.0)]);
    assert_eq!(editor.walls()[0].length(), 100);
}

#[test]
fn dragging_end_key_snaps_to_other_wall() {
    let mut editor = editor_with_walls(vec![
        Wall::new(0.0, 0.0, 100.0, 0.0),
        Wall::new(0.0, 200.0, 100.0, 200.0),
    ]);
    editor.on_key_drag_start(0, Endpoint::End);
    editor.on_pointer_move(60.0, 190.0);

    let wall = &editor.walls()[0];
    assert_eq!(wall.end(), Point::new(60.0, 200.0));
    assert_eq!(wall.length(), 209);
}

#[test]
fn drag_release_does_not_split() {
    let mut editor = editor_with_walls(vec![
        Wall::new(0.0, 0.0, 100.0, 0.0),
        Wall::new(50.0, 50.0, 50.0, 150.0),
    ]);
    editor.on_key_drag_start(1, Endpoint::Start);
    editor.on_pointer_move(50.0, -50.0);
    editor.on_press_end();

    assert_eq!(editor.walls().len(), 2);
    assert_eq!(editor.walls()[1].start(), Point::new(50.0, -50.0));
}

#[test]
fn drag_start_with_unknown_wall_is_ignored() {
    let mut editor = editor_with_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    editor.on_key_drag_start(3, Endpoint::End);
    assert!(editor.is_idle());
}

#[test]
fn press_during_drag_is_ignored() {
    let mut editor = editor_with_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    editor.on_key_drag_start(0, Endpoint::End);
    editor.on_press_start(500.0, 500.0);

    assert!(editor.dragged_key().is_some());
    assert!(editor.preview().is_none());
}

#[test]
fn move_and_release_while_idle_do_nothing() {
    let mut editor = editor_with_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    editor.needs_redraw = false;

    editor.on_pointer_move(10.0, 10.0);
    editor.on_press_end();

    assert!(editor.is_idle());
    assert_eq!(editor.walls().len(), 1);
    assert!(!editor.needs_redraw);
}

#[test]
fn cancel_discards_preview() {
    let mut editor = create_test_editor();
    editor.on_press_start(0.0, 0.0);
    editor.on_pointer_move(100.0, 0.0);
    editor.cancel();

    assert!(editor.is_idle());
    assert!(editor.walls().is_empty());
}

#[test]
fn cancel_ends_drag_in_place() {
    let mut editor = editor_with_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]);
    editor.on_key_drag_start(0, Endpoint::End);
    editor.on_pointer_move(100.0, 300.0);
    editor.cancel();

    assert!(editor.is_idle());
    assert_eq!(editor.walls()[0].end(), Point::new(100.0, 300.0));
}

#[test]
fn disabled_snapping_uses_raw_positions() {
    let mut config = Config::default();
    config.snap.enabled = false;
    let mut editor = WallEditor::from_config(&config);
    editor.set_plan(FloorPlan::from_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]));

    editor.on_press_start(98.0, 5.0);
    assert_eq!(editor.preview().unwrap().start(), Point::new(98.0, 5.0));
}

#[test]
fn custom_snap_radius_from_settings() {
    let snap = SnapSettings {
        radius: 60.0,
        ..SnapSettings::default()
    };
    let mut editor = WallEditor::with_settings(snap, 6);
    editor.set_plan(FloorPlan::from_walls(vec![Wall::new(0.0, 0.0, 100.0, 0.0)]));

    editor.on_press_start(50.0, 45.0);
    assert_eq!(editor.preview().unwrap().start(), Point::new(50.0, 0.0));
}

#[test]
fn set_plan_resets_active_gesture() {
    let mut editor = create_test_editor();
    editor.on_press_start(0.0, 0.0);
    editor.set_plan(FloorPlan::from_walls(vec![Wall::new(0.0, 0.0, 1.0, 0.0)]));

    assert!(editor.is_idle());
    assert_eq!(editor.walls().len(), 1);
}

#[test]
fn apply_event_drives_full_gesture() {
    let mut editor = create_test_editor();
    for event in [
        PointerEvent::Press(Point::new(0.0, 0.0)),
        PointerEvent::Move(Point::new(100.0, 3.0)),
        PointerEvent::Release,
        PointerEvent::DragStart {
            wall: 0,
            endpoint: Endpoint::End,
        },
        PointerEvent::Move(Point::new(150.0, 0.0)),
        PointerEvent::Release,
    ] {
        editor.apply_event(event);
    }

    assert_eq!(editor.walls(), &[Wall::new(0.0, 0.0, 150.0, 0.0)]);
}
