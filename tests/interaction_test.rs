// Interaction controller state machine: drag, hover debounce, wheel zoom

use std::thread::sleep;
use std::time::Duration;

use vibemap::config::{HOVER_DELAY_MS, ZOOM_MIN};
use vibemap::core::{Bounds, Category, Embedding, LabeledBehavior, Point2D, ReferenceDataset};
use vibemap::map::{Cursor, InteractionController, PickKind};

const CANVAS: (f32, f32) = (100.0, 100.0);

/// Two reference points rendering at screen (50, 50) and (10, 10)
fn dataset() -> ReferenceDataset {
    let coordinates = vec![Point2D::new(0.5, 0.5), Point2D::new(0.1, 0.1)];
    let behaviors = vec![
        LabeledBehavior::new(
            "center point",
            Category::new("safe").unwrap(),
            Embedding::new(vec![1.0, 0.0]),
        ),
        LabeledBehavior::new(
            "corner point",
            Category::new("warning").unwrap(),
            Embedding::new(vec![-1.0, 0.0]),
        ),
    ];
    let bounds = Bounds::from_points(&coordinates).unwrap();

    ReferenceDataset {
        behaviors,
        coordinates,
        bounds,
    }
}

fn past_debounce() -> Duration {
    Duration::from_millis(HOVER_DELAY_MS + 30)
}

#[test]
fn drag_pans_the_view() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_down((10.0, 10.0));
    assert_eq!(controller.cursor(), Cursor::Grabbing);

    let redraw = controller.mouse_move((15.0, 12.0), &ds, None);
    assert!(redraw);
    assert_eq!(controller.view().offset, (5.0, 2.0));

    controller.mouse_up();
    assert_ne!(controller.cursor(), Cursor::Grabbing);
}

#[test]
fn hover_popup_waits_for_the_debounce() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    assert!(controller.popup().is_none(), "popup must not show immediately");
    assert_eq!(controller.cursor(), Cursor::Pointer);

    // Too early to fire
    assert!(!controller.tick(&ds, None));
    assert!(controller.popup().is_none());

    sleep(past_debounce());
    assert!(controller.tick(&ds, None));

    let shown = controller.popup().expect("popup after the debounce");
    assert_eq!(shown.kind, PickKind::Reference(0));
}

#[test]
fn retargeting_cancels_the_pending_popup() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());

    // Move to the other point before the tick fires
    controller.mouse_move((10.0, 10.0), &ds, None);
    assert!(!controller.tick(&ds, None), "fresh pending must not fire yet");
    assert!(controller.popup().is_none());

    sleep(past_debounce());
    controller.tick(&ds, None);
    assert_eq!(controller.popup().unwrap().kind, PickKind::Reference(1));
}

#[test]
fn stale_hover_is_revalidated_at_fire_time() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());

    // Zooming shifts every screen position; the pending point is no longer
    // under the cursor when the deadline fires
    controller.wheel((0.0, 0.0), true);
    controller.tick(&ds, None);
    assert!(controller.popup().is_none());
}

#[test]
fn drag_hides_a_shown_popup() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());
    controller.tick(&ds, None);
    assert!(controller.popup().is_some());

    let redraw = controller.mouse_down((50.0, 50.0));
    assert!(redraw, "hiding the popup needs a redraw");
    assert!(controller.popup().is_none());
}

#[test]
fn empty_space_and_mouse_leave_reset_to_idle() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());
    controller.tick(&ds, None);
    assert!(controller.popup().is_some());

    controller.mouse_move((80.0, 80.0), &ds, None);
    assert!(controller.popup().is_none());
    assert_eq!(controller.cursor(), Cursor::Grab);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());
    controller.tick(&ds, None);
    assert!(controller.popup().is_some());

    controller.mouse_leave();
    assert!(controller.popup().is_none());
    assert_eq!(controller.cursor(), Cursor::Grab);
}

#[test]
fn hovering_the_same_point_keeps_the_popup() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());
    controller.tick(&ds, None);

    // Wiggle within the same point's hit radius
    controller.mouse_move((51.0, 50.0), &ds, None);
    assert!(controller.popup().is_some());
}

#[test]
fn wheel_zoom_does_not_touch_hover_state() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);

    controller.mouse_move((50.0, 50.0), &ds, None);
    sleep(past_debounce());
    controller.tick(&ds, None);
    assert!(controller.popup().is_some());

    controller.wheel((50.0, 50.0), true);
    assert!(controller.popup().is_some(), "zoom alone must not hide the popup");
}

#[test]
fn wheel_out_clamps_at_the_zoom_floor() {
    let mut controller = InteractionController::new(CANVAS);

    let mut changed = true;
    while changed {
        changed = controller.wheel((50.0, 50.0), false);
    }

    assert_eq!(controller.view().zoom, ZOOM_MIN);
    assert!(!controller.wheel((50.0, 50.0), false), "no redraw at the floor");
}

#[test]
fn user_point_is_pickable_through_the_controller() {
    let ds = dataset();
    let mut controller = InteractionController::new(CANVAS);
    let user = Some(Point2D::new(0.9, 0.9));

    controller.mouse_move((90.0, 90.0), &ds, user);
    sleep(past_debounce());
    controller.tick(&ds, user);

    assert_eq!(controller.popup().unwrap().kind, PickKind::User);
}
