//! Draw-list construction for the map renderer

use crate::config::{GRID_SPACING, LABEL_MAX_CHARS};
use crate::core::{CategoryRegistry, Point2D, ReferenceDataset};

use super::view::ViewTransform;

pub struct GridLine {
	pub from: (f32, f32),
	pub to: (f32, f32),
}

pub struct ScenePoint {
	pub screen: (f32, f32),
	pub color: (u8, u8, u8),
	pub label: String,
}

pub struct SceneUser {
	pub screen: (f32, f32),
}

/// Ordered draw primitives for one frame: background grid first, then
/// reference points with truncated labels, then the user marker on top.
pub struct Scene {
	pub grid: Vec<GridLine>,
	pub points: Vec<ScenePoint>,
	pub user: Option<SceneUser>,
}

pub fn build(
	dataset: &ReferenceDataset,
	registry: &CategoryRegistry,
	user_point: Option<Point2D>,
	view: &ViewTransform,
	canvas: (f32, f32),
) -> Scene {
	let grid = grid_lines(view, canvas);

	let points = dataset
		.coordinates
		.iter()
		.zip(dataset.behaviors.iter())
		.map(|(coords, behavior)| {
			let display = (coords.x * canvas.0, coords.y * canvas.1);
			let screen = view.data_to_screen(display.0, display.1);
			ScenePoint {
				screen,
				color: registry.color(&behavior.label),
				label: truncate_label(&behavior.text),
			}
		})
		.collect();

	let user = user_point.map(|coords| {
		let display = (coords.x * canvas.0, coords.y * canvas.1);
		SceneUser {
			screen: view.data_to_screen(display.0, display.1),
		}
	});

	Scene { grid, points, user }
}

/// Grid lines at fixed data-space spacing covering the visible region
fn grid_lines(view: &ViewTransform, canvas: (f32, f32)) -> Vec<GridLine> {
	let (min_x, min_y) = view.screen_to_data(0.0, 0.0);
	let (max_x, max_y) = view.screen_to_data(canvas.0, canvas.1);

	let mut lines = Vec::new();

	let mut x = (min_x / GRID_SPACING).floor() * GRID_SPACING;
	while x <= max_x {
		lines.push(GridLine {
			from: view.data_to_screen(x, min_y),
			to: view.data_to_screen(x, max_y),
		});
		x += GRID_SPACING;
	}

	let mut y = (min_y / GRID_SPACING).floor() * GRID_SPACING;
	while y <= max_y {
		lines.push(GridLine {
			from: view.data_to_screen(min_x, y),
			to: view.data_to_screen(max_x, y),
		});
		y += GRID_SPACING;
	}

	lines
}

fn truncate_label(text: &str) -> String {
	if text.chars().count() > LABEL_MAX_CHARS {
		let truncated: String = text.chars().take(LABEL_MAX_CHARS).collect();
		format!("{}...", truncated)
	} else {
		text.to_string()
	}
}
