//! Application configuration and constants

// === Embedding Provider ===
pub const DEFAULT_ENDPOINT: &str = "https://itp-ima-replicate-proxy.web.app/api/create_n_get";
pub const MODEL_VERSION: &str =
	"beautyyuyanli/multilingual-e5-large:a06276a89f1a902d5fc225a9ca32b6e8e6292b7f3b136518878da97c458e2bad";
pub const TOKEN_ENV: &str = "VIBEMAP_API_TOKEN";
pub const ENDPOINT_ENV: &str = "VIBEMAP_ENDPOINT";

// === Projection ===
pub const UMAP_NEIGHBORS: usize = 6;
pub const UMAP_MIN_DIST: f32 = 0.1;
pub const UMAP_SPREAD: f32 = 0.99;
pub const UMAP_SEED: u64 = 0xC0FFEE;

// === Storage ===
pub const DATA_DIR: &str = ".vibemap";
pub const BASELINE_FILE: &str = "baseline.msgpack";
pub const ANALYSIS_FILE: &str = "analysis.msgpack";

// === Map View ===
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 3.0;
pub const ZOOM_STEP_IN: f32 = 1.1;
pub const ZOOM_STEP_OUT: f32 = 0.9;

/// Base hit radius for reference points, in canvas cells at zoom 1.
pub const HIT_RADIUS: f32 = 2.5;
/// The user point is larger on screen and easier to hit.
pub const HIT_RADIUS_USER: f32 = 3.5;

pub const HOVER_DELAY_MS: u64 = 150;
pub const GRID_SPACING: f32 = 10.0;
pub const LABEL_MAX_CHARS: usize = 30;
