//! Hit-testing screen positions against rendered points

use crate::config::{HIT_RADIUS, HIT_RADIUS_USER};
use crate::core::{Point2D, ReferenceDataset};

use super::view::ViewTransform;

/// Identity of a pickable point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickKind {
	Reference(usize),
	User,
}

/// The point currently under the cursor. Transient: recomputed on every
/// mouse move, cleared on drag start or mouse leave.
#[derive(Debug, Clone, Copy)]
pub struct HoveredPoint {
	pub kind: PickKind,
	pub coords: Point2D,
}

/// Find the point under a screen position.
///
/// Reference points are tested in insertion order before the user point and
/// the first hit wins, so with overlapping radii the match is the earliest
/// point, not necessarily the closest. The hit radius shrinks in data space
/// as zoom grows, keeping the apparent screen radius constant; the user
/// point carries a larger base radius.
pub fn pick(
	screen: (f32, f32),
	dataset: &ReferenceDataset,
	user_point: Option<Point2D>,
	view: &ViewTransform,
	canvas: (f32, f32),
) -> Option<HoveredPoint> {
	let (mx, my) = view.screen_to_data(screen.0, screen.1);
	let mouse = Point2D::new(mx, my);

	for (index, coords) in dataset.coordinates.iter().enumerate() {
		let display = Point2D::new(coords.x * canvas.0, coords.y * canvas.1);
		if mouse.distance(&display) <= HIT_RADIUS / view.zoom {
			return Some(HoveredPoint {
				kind: PickKind::Reference(index),
				coords: *coords,
			});
		}
	}

	if let Some(coords) = user_point {
		let display = Point2D::new(coords.x * canvas.0, coords.y * canvas.1);
		if mouse.distance(&display) <= HIT_RADIUS_USER / view.zoom {
			return Some(HoveredPoint {
				kind: PickKind::User,
				coords,
			});
		}
	}

	None
}
