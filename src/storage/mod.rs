//! Baseline persistence

pub mod baseline;

pub use baseline::{
	analysis_path, baseline_path, clear_analysis, load_analysis, load_baseline, save_analysis,
	save_baseline, BaselineFile,
};
