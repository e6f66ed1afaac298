//! hepa-scorer
//!
//! The trained model behind a [`Scorer`] trait, the JSON decision-forest
//! artifact that implements it, and the prediction service both entry
//! points call.

pub mod adapter;
pub mod error;
pub mod forest;
pub mod loader;
pub mod service;

use hepa_features::assemble::FeatureVector;

use error::ScoringError;

/// An opaque trained model.
///
/// Implementations receive a vector in the trained column order and return
/// the raw class label. They are shared across request handlers, so
/// inference must be safe for concurrent reads.
pub trait Scorer: Send + Sync {
    fn predict_label(&self, features: &FeatureVector) -> Result<String, ScoringError>;
}
