//! Baseline and analysis file formats and I/O

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ANALYSIS_FILE, BASELINE_FILE, DATA_DIR};
use crate::core::{ReferenceDataset, UserAnalysis};
use crate::processing::{FittedProjection, ProjectionConfig, ProjectionModel};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The persisted baseline: the reference dataset plus the fitted projection
/// state, so later sessions transform into the same space with the same
/// frozen normalization bounds.
#[derive(Debug, Serialize, Deserialize)]
pub struct BaselineFile {
	pub version: String,
	pub timestamp: String,
	pub config: ProjectionConfig,
	pub dataset: ReferenceDataset,
	pub projection: FittedProjection,
}

impl BaselineFile {
	pub fn new(dataset: ReferenceDataset, model: &ProjectionModel) -> Option<Self> {
		let fitted = model.fitted()?.clone();
		Some(Self {
			version: VERSION.to_string(),
			timestamp: chrono::Utc::now().to_rfc3339(),
			config: model.config(),
			dataset,
			projection: fitted,
		})
	}

	/// Rebuild the projection model from the persisted fit state
	pub fn model(&self) -> ProjectionModel {
		ProjectionModel::from_fitted(self.config, self.projection.clone())
	}
}

pub fn baseline_path(dir: &Path) -> PathBuf {
	dir.join(DATA_DIR).join(BASELINE_FILE)
}

pub fn analysis_path(dir: &Path) -> PathBuf {
	dir.join(DATA_DIR).join(ANALYSIS_FILE)
}

/// Save the baseline, creating the data directory if needed
pub fn save_baseline(dir: &Path, baseline: &BaselineFile) -> Result<PathBuf> {
	let path = baseline_path(dir);

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).context("Failed to create .vibemap directory")?;
	}

	let bytes = rmp_serde::to_vec(baseline).context("Failed to serialize baseline")?;
	fs::write(&path, bytes).context("Failed to write baseline")?;

	Ok(path)
}

/// Load the baseline; `Ok(None)` when none has been generated yet
pub fn load_baseline(dir: &Path) -> Result<Option<BaselineFile>> {
	let path = baseline_path(dir);
	if !path.exists() {
		return Ok(None);
	}

	let bytes = fs::read(&path).context("Failed to read baseline")?;
	let baseline = rmp_serde::from_slice(&bytes).context("Failed to deserialize baseline")?;
	Ok(Some(baseline))
}

pub fn save_analysis(dir: &Path, analysis: &UserAnalysis) -> Result<PathBuf> {
	let path = analysis_path(dir);

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).context("Failed to create .vibemap directory")?;
	}

	let bytes = rmp_serde::to_vec(analysis).context("Failed to serialize analysis")?;
	fs::write(&path, bytes).context("Failed to write analysis")?;

	Ok(path)
}

/// Load the last saved user analysis, if any. A stale or unreadable file is
/// treated as absent rather than an error.
pub fn load_analysis(dir: &Path) -> Option<UserAnalysis> {
	let path = analysis_path(dir);
	let bytes = fs::read(path).ok()?;
	rmp_serde::from_slice(&bytes).ok()
}

/// Remove a saved analysis (on regeneration the old point is meaningless)
pub fn clear_analysis(dir: &Path) {
	let _ = fs::remove_file(analysis_path(dir));
}
