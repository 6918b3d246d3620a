//! Seeded UMAP projection with out-of-sample transform

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::core::{Embedding, Point2D};
use crate::error::VibemapError;
use crate::ui;

/// Projection hyperparameters. The seed drives the layout initialization:
/// the same seed, input set, and config produce the same layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectionConfig {
	pub n_neighbors: usize,
	pub min_dist: f32,
	pub spread: f32,
	pub seed: u64,
}

impl Default for ProjectionConfig {
	fn default() -> Self {
		Self {
			n_neighbors: config::UMAP_NEIGHBORS,
			min_dist: config::UMAP_MIN_DIST,
			spread: config::UMAP_SPREAD,
			seed: config::UMAP_SEED,
		}
	}
}

/// State captured by `fit`: the source embeddings and their raw 2D layout.
/// Persisted with the baseline so later sessions can keep transforming into
/// the same space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FittedProjection {
	pub sources: Vec<Embedding>,
	pub layout: Vec<Point2D>,
}

/// Wraps the UMAP reduction capability behind a fit/transform contract.
pub struct ProjectionModel {
	config: ProjectionConfig,
	fitted: Option<FittedProjection>,
}

impl ProjectionModel {
	pub fn new(config: ProjectionConfig) -> Self {
		Self {
			config,
			fitted: None,
		}
	}

	/// Rebuild a model from persisted fit state
	pub fn from_fitted(config: ProjectionConfig, fitted: FittedProjection) -> Self {
		Self {
			config,
			fitted: Some(fitted),
		}
	}

	pub fn config(&self) -> ProjectionConfig {
		self.config
	}

	pub fn fitted(&self) -> Option<&FittedProjection> {
		self.fitted.as_ref()
	}

	/// Compute the 2D layout for a batch of embeddings.
	///
	/// Replaces any previous fit. Coordinates are in raw model-output space;
	/// callers normalize them separately.
	pub fn fit(&mut self, embeddings: &[Embedding]) -> Result<Vec<Point2D>, VibemapError> {
		let n_samples = embeddings.len();
		if n_samples < 2 {
			return Err(VibemapError::InsufficientData {
				required: 2,
				actual: n_samples,
			});
		}

		let n_features = embeddings[0].len();
		let k = self.config.n_neighbors.min(n_samples - 1);

		ui::debug(&format!(
			"Reducing {}D to 2D using UMAP (neighbors: {})",
			n_features, k
		));

		let mut data = Array2::<f32>::zeros((n_samples, n_features));
		for (i, emb) in embeddings.iter().enumerate() {
			for (j, &val) in emb.as_slice().iter().enumerate() {
				data[[i, j]] = val;
			}
		}

		let (knn_indices, knn_distances) = compute_knn(embeddings, k);

		let mut knn_indices_array = Array2::<u32>::zeros((n_samples, k));
		let mut knn_dists_array = Array2::<f32>::zeros((n_samples, k));

		for i in 0..n_samples {
			for j in 0..k {
				knn_indices_array[[i, j]] = knn_indices[i][j] as u32;
				knn_dists_array[[i, j]] = knn_distances[i][j];
			}
		}

		let init = initialize_layout(n_samples, self.config.seed);

		ui::debug("Running UMAP optimization...");

		let umap_config = umap_rs::UmapConfig {
			n_components: 2,
			graph: umap_rs::GraphParams {
				n_neighbors: k,
				..Default::default()
			},
			..Default::default()
		};

		let umap = umap_rs::Umap::new(umap_config);

		let fitted_model = umap.fit(
			data.view(),
			knn_indices_array.view(),
			knn_dists_array.view(),
			init.view(),
		);

		let embedding = fitted_model.embedding();

		let layout: Vec<Point2D> = (0..n_samples)
			.map(|i| Point2D::new(embedding[[i, 0]], embedding[[i, 1]]))
			.collect();

		self.fitted = Some(FittedProjection {
			sources: embeddings.to_vec(),
			layout: layout.clone(),
		});

		Ok(layout)
	}

	/// Embed one new vector into the space established by the most recent
	/// `fit`, without mutating the fitted layout.
	///
	/// Out-of-sample placement: inverse-distance-weighted average of the
	/// layout positions of the k nearest source embeddings. An exact match
	/// lands on that source's layout point.
	pub fn transform(&self, vector: &Embedding) -> Result<Point2D, VibemapError> {
		let fitted = self.fitted.as_ref().ok_or(VibemapError::NotFitted)?;

		let k = self.config.n_neighbors.min(fitted.sources.len());
		let mut distances: Vec<(usize, f32)> = fitted
			.sources
			.iter()
			.enumerate()
			.map(|(i, source)| (i, vector.distance(source)))
			.collect();
		distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
		distances.truncate(k);

		if let Some(&(nearest, d)) = distances.first() {
			if d <= f32::EPSILON {
				return Ok(fitted.layout[nearest]);
			}
		}

		let mut x = 0.0f32;
		let mut y = 0.0f32;
		let mut total = 0.0f32;
		for (i, d) in distances {
			let weight = 1.0 / d;
			x += fitted.layout[i].x * weight;
			y += fitted.layout[i].y * weight;
			total += weight;
		}

		Ok(Point2D::new(x / total, y / total))
	}
}

type KnnResult = (Vec<Vec<usize>>, Vec<Vec<f32>>);

/// K-nearest neighbors by brute force (accurate for high dimensions)
fn compute_knn(embeddings: &[Embedding], k: usize) -> KnnResult {
	let n_samples = embeddings.len();

	let results: Vec<(Vec<usize>, Vec<f32>)> = (0..n_samples)
		.into_par_iter()
		.map(|i| {
			let mut distances: Vec<(usize, f32)> = (0..n_samples)
				.filter(|&j| i != j)
				.map(|j| (j, embeddings[i].distance(&embeddings[j])))
				.collect();

			distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
			distances.truncate(k);

			let indices: Vec<usize> = distances.iter().map(|(idx, _)| *idx).collect();
			let dists: Vec<f32> = distances.iter().map(|(_, d)| *d).collect();

			(indices, dists)
		})
		.collect();

	let knn_indices = results.iter().map(|(idx, _)| idx.clone()).collect();
	let knn_distances = results.iter().map(|(_, dist)| dist.clone()).collect();

	(knn_indices, knn_distances)
}

/// Seeded initial layout in [-10, 10]
fn initialize_layout(n_samples: usize, seed: u64) -> Array2<f32> {
	let mut rng = StdRng::seed_from_u64(seed);

	let mut init = Array2::<f32>::zeros((n_samples, 2));
	for i in 0..n_samples {
		for j in 0..2 {
			init[[i, j]] = rng.random_range(-10.0f32..10.0f32);
		}
	}

	init
}
