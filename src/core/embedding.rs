//! Embedding vectors for semantic similarity

use serde::{Deserialize, Serialize};

/// High-dimensional text embedding as returned by the provider.
///
/// Stored raw; the provider does not guarantee unit-norm output, so
/// similarity computes a full cosine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding(pub Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	/// Cosine similarity [-1.0, 1.0]; zero for a zero-magnitude operand
	pub fn similarity(&self, other: &Self) -> f32 {
		cosine_similarity(&self.0, &other.0)
	}

	/// Euclidean distance
	pub fn distance(&self, other: &Self) -> f32 {
		self.0
			.iter()
			.zip(other.0.iter())
			.map(|(a, b)| (a - b) * (a - b))
			.sum::<f32>()
			.sqrt()
	}
}

pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
	let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
	let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
	let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

	if mag_a == 0.0 || mag_b == 0.0 {
		return 0.0;
	}

	dot / (mag_a * mag_b)
}
