//! Projection and classification algorithms

pub mod classify;
pub mod projection;

pub use classify::{score, ClassificationResult};
pub use projection::{FittedProjection, ProjectionConfig, ProjectionModel};
