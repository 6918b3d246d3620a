// Coordinate normalization, view transform, and hit-testing properties

use vibemap::config::{HIT_RADIUS, ZOOM_MAX, ZOOM_MIN};
use vibemap::core::{normalize, Bounds, Category, Embedding, LabeledBehavior, Point2D, ReferenceDataset};
use vibemap::map::{pick, PickKind, ViewTransform};

fn points(raw: &[(f32, f32)]) -> Vec<Point2D> {
    raw.iter().map(|(x, y)| Point2D::new(*x, *y)).collect()
}

/// Dataset with pre-normalized coordinates for picker tests
fn dataset_at(coords: &[(f32, f32)]) -> ReferenceDataset {
    let coordinates = points(coords);
    let behaviors = coords
        .iter()
        .enumerate()
        .map(|(i, _)| {
            LabeledBehavior::new(
                format!("behavior {}", i),
                Category::new("normal").unwrap(),
                Embedding::new(vec![i as f32, 1.0]),
            )
        })
        .collect();
    let bounds = Bounds::from_points(&coordinates).unwrap_or(Bounds {
        min: (0.0, 0.0),
        max: (1.0, 1.0),
    });

    ReferenceDataset {
        behaviors,
        coordinates,
        bounds,
    }
}

#[test]
fn normalize_outputs_unit_range_with_extremes() {
    let input = points(&[(2.0, 40.0), (4.0, 10.0), (6.0, 20.0)]);
    let output = normalize(&input);

    for p in &output {
        assert!(p.x >= 0.0 && p.x <= 1.0, "x out of range: {}", p.x);
        assert!(p.y >= 0.0 && p.y <= 1.0, "y out of range: {}", p.y);
    }

    assert!(output.iter().any(|p| p.x == 0.0));
    assert!(output.iter().any(|p| p.x == 1.0));
    assert!(output.iter().any(|p| p.y == 0.0));
    assert!(output.iter().any(|p| p.y == 1.0));
}

#[test]
fn normalize_degenerate_axis_maps_to_half() {
    let input = points(&[(3.0, 1.0), (3.0, 2.0), (3.0, 5.0)]);
    let output = normalize(&input);

    for p in &output {
        assert_eq!(p.x, 0.5, "degenerate axis should map to 0.5");
    }
    assert_eq!(output[0].y, 0.0);
    assert_eq!(output[2].y, 1.0);
}

#[test]
fn normalize_empty_is_noop() {
    let output = normalize(&[]);
    assert!(output.is_empty());
}

#[test]
fn normalize_is_idempotent_on_normalized_input() {
    let input = points(&[(2.0, 40.0), (4.0, 10.0), (6.0, 20.0)]);
    let once = normalize(&input);
    let twice = normalize(&once);

    for (a, b) in once.iter().zip(twice.iter()) {
        assert!((a.x - b.x).abs() < 1e-6);
        assert!((a.y - b.y).abs() < 1e-6);
    }
}

#[test]
fn frozen_bounds_allow_points_outside_unit_square() {
    let layout = points(&[(0.0, 0.0), (10.0, 10.0)]);
    let bounds = Bounds::from_points(&layout).unwrap();

    let inside = bounds.apply(Point2D::new(5.0, 5.0));
    assert!((inside.x - 0.5).abs() < 1e-6);

    // A later point outside the captured range maps outside [0, 1]
    let outside = bounds.apply(Point2D::new(15.0, -5.0));
    assert!((outside.x - 1.5).abs() < 1e-6);
    assert!((outside.y + 0.5).abs() < 1e-6);
}

#[test]
fn view_round_trips_screen_coordinates() {
    let view = ViewTransform {
        offset: (37.5, -12.25),
        zoom: 1.7,
    };

    for &(sx, sy) in &[(0.0, 0.0), (40.0, 25.0), (-13.0, 99.5)] {
        let (dx, dy) = view.screen_to_data(sx, sy);
        let (rx, ry) = view.data_to_screen(dx, dy);
        assert!((rx - sx).abs() < 1e-3, "x round trip: {} -> {}", sx, rx);
        assert!((ry - sy).abs() < 1e-3, "y round trip: {} -> {}", sy, ry);
    }
}

#[test]
fn zoom_is_anchored_at_the_cursor() {
    let mut view = ViewTransform::new();
    view.pan(5.0, -3.0);

    let (sx, sy) = (40.0, 25.0);
    let anchor = view.screen_to_data(sx, sy);

    assert!(view.zoom_at(sx, sy, 1.1));

    let (rx, ry) = view.data_to_screen(anchor.0, anchor.1);
    assert!((rx - sx).abs() < 1e-3);
    assert!((ry - sy).abs() < 1e-3);
}

#[test]
fn zoom_clamps_at_both_bounds() {
    let mut view = ViewTransform::new();
    for _ in 0..50 {
        view.zoom_at(10.0, 10.0, 1.1);
    }
    assert_eq!(view.zoom, ZOOM_MAX);

    let mut view = ViewTransform::new();
    for _ in 0..50 {
        view.zoom_at(10.0, 10.0, 0.9);
    }
    assert_eq!(view.zoom, ZOOM_MIN);
}

#[test]
fn wheel_out_converges_to_floor_and_stops() {
    let mut view = ViewTransform::new();
    let mut last = view.zoom;

    for _ in 0..3 {
        assert!(view.zoom_at(50.0, 50.0, 0.9));
        assert!(view.zoom < last);
        last = view.zoom;
    }

    while view.zoom_at(50.0, 50.0, 0.9) {}
    assert_eq!(view.zoom, ZOOM_MIN);

    // At the floor no state changes
    let offset = view.offset;
    assert!(!view.zoom_at(50.0, 50.0, 0.9));
    assert_eq!(view.offset, offset);
}

#[test]
fn picker_hits_a_point_at_its_screen_position() {
    let dataset = dataset_at(&[(0.5, 0.5)]);
    let view = ViewTransform::new();

    let hit = pick((50.0, 50.0), &dataset, None, &view, (100.0, 100.0));
    match hit {
        Some(h) => assert_eq!(h.kind, PickKind::Reference(0)),
        None => panic!("expected a hit at the point's screen position"),
    }
}

#[test]
fn picker_misses_beyond_the_hit_radius() {
    let dataset = dataset_at(&[(0.5, 0.5)]);
    let view = ViewTransform::new();

    let miss = pick(
        (50.0 + HIT_RADIUS + 0.5, 50.0),
        &dataset,
        None,
        &view,
        (100.0, 100.0),
    );
    assert!(miss.is_none());
}

#[test]
fn picker_radius_shrinks_with_zoom() {
    let dataset = dataset_at(&[(0.5, 0.5)]);
    let view = ViewTransform {
        offset: (0.0, 0.0),
        zoom: 2.0,
    };

    // Point displays at screen (100, 100); 2 cells off in data space is
    // 1 cell, within 2.5 / 2
    let hit = pick((102.0, 100.0), &dataset, None, &view, (100.0, 100.0));
    assert!(hit.is_some());

    // 4 screen cells is 2 data cells, outside 2.5 / 2
    let miss = pick((104.0, 100.0), &dataset, None, &view, (100.0, 100.0));
    assert!(miss.is_none());
}

#[test]
fn picker_prefers_first_inserted_on_overlap() {
    let dataset = dataset_at(&[(0.5, 0.5), (0.5, 0.5)]);
    let view = ViewTransform::new();

    let hit = pick((50.0, 50.0), &dataset, None, &view, (100.0, 100.0)).unwrap();
    assert_eq!(hit.kind, PickKind::Reference(0));
}

#[test]
fn picker_user_point_has_larger_radius() {
    let dataset = dataset_at(&[(0.5, 0.5)]);
    let view = ViewTransform::new();
    let user = Some(Point2D::new(0.5, 0.5));

    // 3 cells out: misses the reference radius (2.5), hits the user (3.5)
    let hit = pick((53.0, 50.0), &dataset, user, &view, (100.0, 100.0)).unwrap();
    assert_eq!(hit.kind, PickKind::User);
}

#[test]
fn picker_returns_none_without_a_dataset() {
    let dataset = dataset_at(&[]);
    let view = ViewTransform::new();

    let hit = pick((50.0, 50.0), &dataset, None, &view, (100.0, 100.0));
    assert!(hit.is_none());
}
