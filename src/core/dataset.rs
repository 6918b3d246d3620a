//! Reference dataset: behaviors, fitted coordinates, frozen bounds

use serde::{Deserialize, Serialize};

use crate::error::VibemapError;
use crate::processing::projection::ProjectionModel;

use super::{Bounds, CategoryRegistry, LabeledBehavior, Point2D};

/// The labeled reference set with its fitted, normalized 2D layout.
///
/// `coordinates[i]` corresponds to `behaviors[i]`; all coordinates lie in
/// the unit square. Built once per generate action and replaced wholesale on
/// regeneration. The `ProjectionModel` that fitted it must be kept alongside
/// for later transforms, and `bounds` are the frozen normalization
/// parameters captured from that fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceDataset {
	pub behaviors: Vec<LabeledBehavior>,
	pub coordinates: Vec<Point2D>,
	pub bounds: Bounds,
}

impl ReferenceDataset {
	/// Fit the projection on the behaviors' embeddings and normalize the
	/// resulting layout into the unit square.
	pub fn build(
		behaviors: Vec<LabeledBehavior>,
		model: &mut ProjectionModel,
	) -> Result<Self, VibemapError> {
		let embeddings: Vec<_> = behaviors.iter().map(|b| b.embedding.clone()).collect();
		let layout = model.fit(&embeddings)?;

		// from_points only fails on an empty layout, which fit rejects
		let bounds = Bounds::from_points(&layout).ok_or(VibemapError::InsufficientData {
			required: 2,
			actual: 0,
		})?;
		let coordinates = layout.iter().map(|p| bounds.apply(*p)).collect();

		Ok(Self {
			behaviors,
			coordinates,
			bounds,
		})
	}

	pub fn len(&self) -> usize {
		self.behaviors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.behaviors.is_empty()
	}

	/// Labels present in this dataset, in first-encounter order
	pub fn categories(&self) -> CategoryRegistry {
		CategoryRegistry::discover(self.behaviors.iter().map(|b| &b.label))
	}

	/// Normalize a raw transformed point with the bounds frozen at fit time.
	/// May land outside [0, 1] when the point falls outside the reference
	/// bounding box.
	pub fn normalize_transformed(&self, raw: Point2D) -> Point2D {
		self.bounds.apply(raw)
	}
}
