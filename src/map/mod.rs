//! Interactive map: view transform, hit testing, interaction state

pub mod controller;
pub mod picker;
pub mod scene;
pub mod view;

pub use controller::{Cursor, InteractionController};
pub use picker::{pick, HoveredPoint, PickKind};
pub use scene::Scene;
pub use view::ViewTransform;

use crate::core::{CategoryRegistry, ReferenceDataset, UserAnalysis};
use crate::processing::ProjectionModel;

/// Everything one map session owns: the baseline, the projection that
/// fitted it, the discovered categories, and the optional analyzed user
/// point. Passed explicitly into handlers; there is no ambient state.
pub struct SessionState {
	pub dataset: ReferenceDataset,
	pub projection: ProjectionModel,
	pub registry: CategoryRegistry,
	pub user: Option<UserAnalysis>,
}

impl SessionState {
	pub fn new(
		dataset: ReferenceDataset,
		projection: ProjectionModel,
		user: Option<UserAnalysis>,
	) -> Self {
		let registry = dataset.categories();
		Self {
			dataset,
			projection,
			registry,
			user,
		}
	}

	pub fn user_point(&self) -> Option<crate::core::Point2D> {
		self.user.as_ref().map(|u| u.point)
	}
}
