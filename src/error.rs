//! Domain error taxonomy

use thiserror::Error;

/// Errors surfaced by the mapping and classification pipeline.
#[derive(Debug, Error)]
pub enum VibemapError {
	/// Embedding request failed, returned a non-success status, or replied
	/// with a payload that does not line up with the request.
	#[error("embedding request failed: {message}")]
	Network {
		status: Option<u16>,
		message: String,
	},

	/// User submitted blank text; rejected before any network call.
	#[error("input text is empty")]
	EmptyInput,

	/// Analysis or map requested before a baseline exists.
	#[error("no baseline data - run 'vibemap generate' first")]
	NoBaseline,

	/// Transform requested before fit.
	#[error("projection model has not been fitted")]
	NotFitted,

	/// Fewer reference vectors than the projection needs.
	#[error("insufficient reference data: required {required}, actual {actual}")]
	InsufficientData { required: usize, actual: usize },

	/// Label failed validation (empty or whitespace-only).
	#[error("invalid category label: {0:?}")]
	InvalidCategory(String),
}

impl VibemapError {
	pub fn network(message: impl Into<String>) -> Self {
		Self::Network {
			status: None,
			message: message.into(),
		}
	}

	pub fn network_status(status: u16, message: impl Into<String>) -> Self {
		Self::Network {
			status: Some(status),
			message: format!("{} (status {})", message.into(), status),
		}
	}
}
