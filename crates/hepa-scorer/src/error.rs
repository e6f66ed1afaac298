use std::path::PathBuf;

use thiserror::Error;

use hepa_core::error::SchemaMismatchError;
use hepa_features::error::PipelineError;

/// Failure loading a scorer artifact.
#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("no model artifact found (searched: {})", display_paths(.searched))]
    NoArtifact { searched: Vec<PathBuf> },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("artifact was trained on a different feature schema: {0}")]
    SchemaMismatch(#[from] SchemaMismatchError),
}

/// Failure inside the scorer while predicting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("malformed tree {tree}: {reason}")]
    MalformedTree { tree: usize, reason: String },

    #[error("scorer backend failed: {0}")]
    Backend(String),
}

/// Any failure between a raw record and a prediction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}

impl PredictError {
    /// Whether the caller's input caused the failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictError::Pipeline(_))
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
