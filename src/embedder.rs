//! Remote embedding provider client

use serde::Deserialize;

use crate::config;
use crate::core::Embedding;
use crate::error::VibemapError;
use crate::ui;

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
	output: Vec<Vec<f32>>,
}

/// HTTP client for the text-embedding provider.
///
/// One POST per request, bearer auth, no retries: a failure surfaces
/// immediately and the caller decides what to do with prior state.
pub struct EmbeddingClient {
	endpoint: String,
	token: String,
	model_version: String,
}

impl EmbeddingClient {
	pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			token: token.into(),
			model_version: config::MODEL_VERSION.to_string(),
		}
	}

	/// Build a client from the environment, with an optional explicit token
	/// taking precedence over `VIBEMAP_API_TOKEN`.
	pub fn from_env(token_override: Option<&str>) -> Result<Self, VibemapError> {
		let token = match token_override {
			Some(t) => t.to_string(),
			None => std::env::var(config::TOKEN_ENV).map_err(|_| {
				VibemapError::network(format!(
					"no API token - set {} or pass --token",
					config::TOKEN_ENV
				))
			})?,
		};

		let endpoint = std::env::var(config::ENDPOINT_ENV)
			.unwrap_or_else(|_| config::DEFAULT_ENDPOINT.to_string());

		Ok(Self::new(endpoint, token))
	}

	pub fn embed(&self, text: &str) -> Result<Embedding, VibemapError> {
		let mut batch = self.embed_batch(&[text])?;
		Ok(batch.remove(0))
	}

	/// Fetch embeddings for a batch of texts, index-aligned with the input.
	/// Non-2xx status, transport failure, or a misaligned reply all produce
	/// a `Network` error with no partial result.
	pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, VibemapError> {
		ui::debug(&format!(
			"Requesting {} embeddings from {}",
			texts.len(),
			self.endpoint
		));

		let payload = serde_json::json!({
			"version": self.model_version,
			"input": {
				"texts": serde_json::to_string(texts)
					.map_err(|e| VibemapError::network(format!("failed to encode request: {}", e)))?,
			},
		});

		let response = ureq::post(&self.endpoint)
			.set("Content-Type", "application/json")
			.set("Authorization", &format!("Bearer {}", self.token))
			.send_json(payload)
			.map_err(|e| match e {
				ureq::Error::Status(code, _) => {
					VibemapError::network_status(code, "provider returned an error status")
				}
				other => VibemapError::network(other.to_string()),
			})?;

		let parsed: EmbeddingResponse = response
			.into_json()
			.map_err(|e| VibemapError::network(format!("invalid response body: {}", e)))?;

		if parsed.output.len() != texts.len() {
			return Err(VibemapError::network(format!(
				"response misaligned: {} texts in, {} vectors out",
				texts.len(),
				parsed.output.len()
			)));
		}

		let dim = parsed.output.first().map(|v| v.len()).unwrap_or(0);
		if parsed.output.iter().any(|v| v.len() != dim || v.is_empty()) {
			return Err(VibemapError::network("response vectors have inconsistent dimensions"));
		}

		ui::debug(&format!("Received {} vectors ({}D)", parsed.output.len(), dim));

		Ok(parsed.output.into_iter().map(Embedding::new).collect())
	}
}
