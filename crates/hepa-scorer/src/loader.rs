//! Locating the model artifact at startup.

use std::path::{Path, PathBuf};

use crate::error::ScorerError;
use crate::forest::DecisionForest;

pub const DEFAULT_MODEL_DIR: &str = "model";

/// Artifact file names, in search order.
pub const ARTIFACT_CANDIDATES: [&str; 2] = ["model.json", "final_model.json"];

pub fn candidate_paths(model_dir: &Path) -> Vec<PathBuf> {
    ARTIFACT_CANDIDATES
        .iter()
        .map(|name| model_dir.join(name))
        .collect()
}

/// The first candidate that exists on disk.
pub fn locate_artifact(candidates: &[PathBuf]) -> Result<PathBuf, ScorerError> {
    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| ScorerError::NoArtifact {
            searched: candidates.to_vec(),
        })
}

/// Load the forest from the first artifact found in `model_dir`.
pub fn load_forest(model_dir: &Path) -> Result<(PathBuf, DecisionForest), ScorerError> {
    let path = locate_artifact(&candidate_paths(model_dir))?;
    let forest = DecisionForest::load_json(&path)?;

    tracing::info!(
        path = %path.display(),
        trees = forest.trees.len(),
        classes = ?forest.classes,
        "loaded model"
    );

    Ok((path, forest))
}
