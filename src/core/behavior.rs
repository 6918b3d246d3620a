//! Labeled reference behaviors and the analyzed user input

use serde::{Deserialize, Serialize};

use super::{Category, Embedding, Point2D};

/// One labeled reference behavior with its source embedding.
/// Immutable once created; built in bulk when the baseline is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledBehavior {
	pub text: String,
	pub label: Category,
	pub embedding: Embedding,
}

impl LabeledBehavior {
	pub fn new(text: impl Into<String>, label: Category, embedding: Embedding) -> Self {
		Self {
			text: text.into(),
			label,
			embedding,
		}
	}
}

/// An analyzed user input, placed into the reference layout.
///
/// Persisted so the map can show the point in later sessions; deliberately
/// excludes the classification result, which is recomputed per analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAnalysis {
	pub text: String,
	pub embedding: Embedding,
	pub point: Point2D,
	pub timestamp: String,
}
