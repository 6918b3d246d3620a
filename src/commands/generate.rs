//! Generate command - build the reference baseline

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;

use crate::core::{Category, LabeledBehavior, ReferenceDataset};
use crate::corpus;
use crate::embedder::EmbeddingClient;
use crate::processing::{ProjectionConfig, ProjectionModel};
use crate::storage;
use crate::ui;

pub fn run(dir: &Path, force: bool, token: Option<&str>) -> Result<()> {
	let start = Instant::now();

	// Check for an existing baseline
	if !force {
		if let Some(existing) = storage::load_baseline(dir)? {
			ui::success(&format!(
				"Baseline already exists: {} behaviors, {} categories",
				existing.dataset.len(),
				existing.dataset.categories().len()
			));
			ui::debug(&format!("Generated at: {}", existing.timestamp));
			ui::info(&"Run with --force to regenerate".dimmed().to_string());
			return Ok(());
		}
	} else {
		ui::debug("Force flag set, skipping baseline check");
	}

	let client = EmbeddingClient::from_env(token)?;

	// Flatten the corpus in declaration order; this order feeds label
	// discovery and every downstream tie-break
	let mut texts: Vec<&str> = Vec::new();
	let mut labels: Vec<Category> = Vec::new();
	for (label, behaviors) in corpus::BASELINE_BEHAVIORS {
		for behavior in *behaviors {
			texts.push(*behavior);
			labels.push(Category::new(*label)?);
		}
	}

	ui::info(&format!(
		"Requesting embeddings for {} behaviors across {} categories...",
		texts.len(),
		corpus::BASELINE_BEHAVIORS.len()
	));

	// A failure here leaves any previous baseline untouched
	let embeddings = client.embed_batch(&texts)?;

	let behaviors: Vec<LabeledBehavior> = texts
		.iter()
		.zip(labels)
		.zip(embeddings)
		.map(|((text, label), embedding)| LabeledBehavior::new(*text, label, embedding))
		.collect();

	ui::info("Fitting projection...");
	let mut model = ProjectionModel::new(ProjectionConfig::default());
	let dataset = ReferenceDataset::build(behaviors, &mut model)?;

	let mut counts: HashMap<&str, usize> = HashMap::new();
	for behavior in &dataset.behaviors {
		*counts.entry(behavior.label.as_str()).or_insert(0) += 1;
	}
	for category in dataset.categories().iter() {
		ui::debug(&format!(
			"  {}: {} behaviors",
			category,
			counts.get(category.as_str()).unwrap_or(&0)
		));
	}

	let baseline = storage::BaselineFile::new(dataset, &model)
		.context("Projection state missing after fit")?;
	let path = storage::save_baseline(dir, &baseline)?;

	// Any previously analyzed point belongs to the old layout
	storage::clear_analysis(dir);

	ui::success(&format!(
		"Baseline ready: {} behaviors, {} categories -> {}",
		baseline.dataset.len(),
		baseline.dataset.categories().len(),
		ui::path_link(&path, 40)
	));
	eprintln!(
		"{}",
		format!("Completed in {:.1}s", start.elapsed().as_secs_f32()).dimmed()
	);

	Ok(())
}
