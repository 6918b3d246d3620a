//! 2D points and unit-square normalization

use serde::{Deserialize, Serialize};

/// A 2D point, either in raw model-output space (pre-normalization) or in
/// unit-square display space (post-normalization). `Bounds::apply` is the
/// only bridge between the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
	pub x: f32,
	pub y: f32,
}

impl Point2D {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}

	pub fn distance(&self, other: &Self) -> f32 {
		let dx = self.x - other.x;
		let dy = self.y - other.y;
		(dx * dx + dy * dy).sqrt()
	}
}

/// Per-axis min/max captured from a fitted layout.
///
/// Frozen at fit time and reapplied verbatim to later transformed points, so
/// the reference layout never shifts under the user. A point outside the
/// captured range maps outside [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
	pub min: (f32, f32),
	pub max: (f32, f32),
}

impl Bounds {
	/// Returns `None` for an empty point set
	pub fn from_points(points: &[Point2D]) -> Option<Self> {
		let first = points.first()?;
		let mut bounds = Self {
			min: (first.x, first.y),
			max: (first.x, first.y),
		};

		for p in &points[1..] {
			bounds.min.0 = bounds.min.0.min(p.x);
			bounds.min.1 = bounds.min.1.min(p.y);
			bounds.max.0 = bounds.max.0.max(p.x);
			bounds.max.1 = bounds.max.1.max(p.y);
		}

		Some(bounds)
	}

	/// Rescale one point into the unit square defined by these bounds.
	/// A degenerate axis (max == min) maps to 0.5.
	pub fn apply(&self, p: Point2D) -> Point2D {
		Point2D::new(
			rescale(p.x, self.min.0, self.max.0),
			rescale(p.y, self.min.1, self.max.1),
		)
	}
}

fn rescale(v: f32, min: f32, max: f32) -> f32 {
	let range = max - min;
	if range == 0.0 {
		0.5
	} else {
		(v - min) / range
	}
}

/// Rescale a point set to [0, 1] per axis. Empty input is returned unchanged.
pub fn normalize(points: &[Point2D]) -> Vec<Point2D> {
	match Bounds::from_points(points) {
		Some(bounds) => points.iter().map(|p| bounds.apply(*p)).collect(),
		None => Vec::new(),
	}
}
