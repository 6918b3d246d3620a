//! Analyze command - classify a behavior description

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::core::UserAnalysis;
use crate::corpus;
use crate::embedder::EmbeddingClient;
use crate::error::VibemapError;
use crate::processing::{self, ClassificationResult};
use crate::storage;
use crate::ui;

pub fn run(text: &str, dir: &Path, token: Option<&str>) -> Result<()> {
	// Reject blank input before touching the network
	let text = text.trim();
	if text.is_empty() {
		return Err(VibemapError::EmptyInput.into());
	}

	let baseline = storage::load_baseline(dir)?.ok_or(VibemapError::NoBaseline)?;
	if baseline.dataset.is_empty() {
		return Err(VibemapError::NoBaseline.into());
	}

	let client = EmbeddingClient::from_env(token)?;

	ui::info(&format!("Analyzing: {}", text.bright_blue()));

	let embedding = client.embed(text)?;

	let model = baseline.model();
	let raw = model.transform(&embedding)?;
	let point = baseline.dataset.normalize_transformed(raw);

	let result = processing::score(&embedding, point, &baseline.dataset);
	print_result(&result);

	// Persist the placed point (not the result) so the map can show it
	let analysis = UserAnalysis {
		text: text.to_string(),
		embedding,
		point,
		timestamp: chrono::Utc::now().to_rfc3339(),
	};
	let path = storage::save_analysis(dir, &analysis)?;
	ui::debug(&format!("Saved analysis point to {}", path.display()));
	ui::info(&"Run 'vibemap map' to see where you landed".dimmed().to_string());

	Ok(())
}

fn print_result(result: &ClassificationResult) {
	let label = result.category.display_name().to_uppercase();
	let rating = corpus::sociality_rating(result.category.as_str());

	// Severity presentation derives from the rating score, so labels
	// outside the built-in corpus still render
	let headline = match rating.map(|r| r.score) {
		Some(score) if score >= 7 => format!("✅ {}", label).bright_green().bold(),
		Some(score) if score >= 4 => format!("⚠ {}", label).bright_yellow().bold(),
		Some(_) => format!("🚨 {}", label).bright_red().bold(),
		None => label.normal().bold(),
	};

	println!();
	println!("  {} {}", headline, format!("(confidence: {:.1}%)", result.confidence * 100.0).dimmed());

	let explanation = corpus::explanation(result.category.as_str())
		.map(str::to_string)
		.unwrap_or_else(|| {
			format!(
				"Your behavior patterns sit closest to the {} cluster.",
				result.category.display_name()
			)
		});
	println!("  {}", explanation.bright_white());

	if let Some(rating) = rating {
		println!(
			"  {} {}",
			format!("Sociality {}/9:", rating.score).bright_cyan(),
			rating.description.dimmed()
		);
	}

	println!();
	println!("{}", "─── Category Scores ───".bright_blue().bold());
	for (category, score) in &result.per_category {
		let pct = format!("{:>6.1}%", score * 100.0);
		let styled = if *category == result.category {
			pct.bright_green().bold()
		} else {
			pct.dimmed()
		};
		println!("  {} {}", styled, category.display_name());
	}

	println!();
	println!(
		"{}",
		format!(
			"Isolation: mean {:.3}, nearest {:.3} (unit-square distance)",
			result.mean_isolation, result.nearest_distance
		)
		.dimmed()
	);
}
