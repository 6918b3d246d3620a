//! Runtime-discovered behavior categories

use serde::{Deserialize, Serialize};

use crate::error::VibemapError;

/// Validated category label. Labels are open-ended: whatever tags appear in
/// the loaded reference set define the working category set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
	/// Creates a category, rejecting empty or whitespace-only labels
	pub fn new(label: impl Into<String>) -> Result<Self, VibemapError> {
		let label = label.into();
		if label.trim().is_empty() {
			return Err(VibemapError::InvalidCategory(label));
		}
		Ok(Self(label))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Human-facing form ("socially_anxious" -> "socially anxious")
	pub fn display_name(&self) -> String {
		self.0.replace('_', " ")
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Fallback colors for labels the built-in palette does not know, assigned
/// by registry position so reruns stay stable.
const FALLBACK_COLORS: &[(u8, u8, u8)] = &[
	(0, 188, 212),
	(205, 220, 57),
	(233, 30, 99),
	(96, 125, 139),
	(255, 235, 59),
	(103, 58, 183),
];

/// The distinct labels of a reference set, in first-encounter order.
///
/// That order is the tie-break order for classification and the iteration
/// order for every per-category report, so it must be stable: it derives
/// from the behavior list, which preserves corpus declaration order.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
	order: Vec<Category>,
}

impl CategoryRegistry {
	pub fn discover<'a, I>(labels: I) -> Self
	where
		I: IntoIterator<Item = &'a Category>,
	{
		let mut order: Vec<Category> = Vec::new();
		for label in labels {
			if !order.contains(label) {
				order.push(label.clone());
			}
		}
		Self { order }
	}

	pub fn iter(&self) -> impl Iterator<Item = &Category> {
		self.order.iter()
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn contains(&self, category: &Category) -> bool {
		self.order.contains(category)
	}

	/// RGB color for a category: the corpus palette when the label is known,
	/// otherwise a position-stable fallback.
	pub fn color(&self, category: &Category) -> (u8, u8, u8) {
		if let Some(color) = crate::corpus::palette_color(category.as_str()) {
			return color;
		}
		let index = self
			.order
			.iter()
			.position(|c| c == category)
			.unwrap_or(0);
		FALLBACK_COLORS[index % FALLBACK_COLORS.len()]
	}
}
