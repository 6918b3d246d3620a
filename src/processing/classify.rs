//! Nearest-neighbor cosine classification against the reference set

use crate::core::{Category, Embedding, Point2D, ReferenceDataset};

/// Outcome of scoring one user embedding against the reference set.
/// Ephemeral: recomputed per analysis request, never persisted.
#[derive(Debug, Clone)]
pub struct ClassificationResult {
	pub category: Category,
	/// Mean cosine similarity of the winning category, roughly [-1, 1].
	/// Not a probability.
	pub confidence: f32,
	/// Mean distance to all reference points in display space
	pub mean_isolation: f32,
	pub nearest_distance: f32,
	/// Per-label mean similarity, in registry (first-encounter) order
	pub per_category: Vec<(Category, f32)>,
}

/// Score a user embedding and its projected display-space point.
///
/// Callers must reject an empty dataset before invoking (`NoBaseline`); the
/// scorer itself is pure. Ties on the max score keep the first-encountered
/// label.
pub fn score(
	user_embedding: &Embedding,
	user_point: Point2D,
	dataset: &ReferenceDataset,
) -> ClassificationResult {
	debug_assert!(!dataset.is_empty(), "caller must reject an empty dataset");

	let registry = dataset.categories();

	let per_category: Vec<(Category, f32)> = registry
		.iter()
		.map(|category| {
			let similarities: Vec<f32> = dataset
				.behaviors
				.iter()
				.filter(|b| &b.label == category)
				.map(|b| user_embedding.similarity(&b.embedding))
				.collect();

			let mean = if similarities.is_empty() {
				0.0
			} else {
				similarities.iter().sum::<f32>() / similarities.len() as f32
			};

			(category.clone(), mean)
		})
		.collect();

	// Strictly-greater comparison keeps the earliest label on exact ties
	let (category, confidence) = per_category
		.iter()
		.fold(None::<(&Category, f32)>, |best, (cat, mean)| match best {
			Some((_, top)) if *mean <= top => best,
			_ => Some((cat, *mean)),
		})
		.map(|(cat, mean)| (cat.clone(), mean))
		.expect("dataset has at least one label");

	let distances: Vec<f32> = dataset
		.coordinates
		.iter()
		.map(|coords| user_point.distance(coords))
		.collect();

	let mean_isolation = distances.iter().sum::<f32>() / distances.len() as f32;
	let nearest_distance = distances.iter().cloned().fold(f32::INFINITY, f32::min);

	ClassificationResult {
		category,
		confidence,
		mean_isolation,
		nearest_distance,
		per_category,
	}
}
