//! Decision-forest classifier loaded from a JSON artifact.
//!
//! Each tree votes for one class; the class with the most votes wins, ties
//! going to the class listed first. Splits send a sample left when
//! `feature <= threshold`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hepa_core::error::SchemaMismatchError;
use hepa_core::schema::{FEATURE_COLUMNS, FEATURE_COUNT};
use hepa_features::assemble::FeatureVector;

use crate::error::{ScorerError, ScoringError};
use crate::Scorer;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature_idx: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class_idx: usize,
    },
}

impl Node {
    pub fn split(feature_idx: usize, threshold: f64, left: usize, right: usize) -> Self {
        Node::Split {
            feature_idx,
            threshold,
            left,
            right,
        }
    }

    pub fn leaf(class_idx: usize) -> Self {
        Node::Leaf { class_idx }
    }
}

/// A single tree. Node 0 is the root; children always follow their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Walk from the root to a leaf and return its class index.
    pub fn evaluate(&self, tree_idx: usize, features: &[f64]) -> Result<usize, ScoringError> {
        let malformed = |reason: String| ScoringError::MalformedTree {
            tree: tree_idx,
            reason,
        };

        let mut idx = 0usize;
        // A well-formed path visits each node at most once.
        for _ in 0..=self.nodes.len() {
            let node = self
                .nodes
                .get(idx)
                .ok_or_else(|| malformed(format!("node {idx} does not exist")))?;

            match *node {
                Node::Leaf { class_idx } => return Ok(class_idx),
                Node::Split {
                    feature_idx,
                    threshold,
                    left,
                    right,
                } => {
                    let value = features
                        .get(feature_idx)
                        .ok_or_else(|| malformed(format!("feature {feature_idx} out of range")))?;
                    idx = if *value <= threshold { left } else { right };
                }
            }
        }

        Err(malformed("traversal did not reach a leaf".to_string()))
    }

    fn validate(&self, tree_idx: usize, class_count: usize) -> Result<(), ScorerError> {
        let invalid =
            |reason: String| ScorerError::InvalidArtifact(format!("tree {tree_idx}: {reason}"));

        if self.nodes.is_empty() {
            return Err(invalid("no nodes".to_string()));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                Node::Leaf { class_idx } => {
                    if class_idx >= class_count {
                        return Err(invalid(format!(
                            "node {i} votes for unknown class {class_idx}"
                        )));
                    }
                }
                Node::Split {
                    feature_idx,
                    threshold,
                    left,
                    right,
                } => {
                    if feature_idx >= FEATURE_COUNT {
                        return Err(invalid(format!(
                            "node {i} splits on unknown feature {feature_idx}"
                        )));
                    }
                    if threshold.is_nan() {
                        return Err(invalid(format!("node {i} has a NaN threshold")));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(invalid(format!("node {i} has invalid child {child}")));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// The serialized model artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionForest {
    pub version: u32,
    /// Training column order. Must equal [`FEATURE_COLUMNS`].
    pub feature_names: Vec<String>,
    /// Class labels, indexed by leaf `class_idx`.
    pub classes: Vec<String>,
    pub trees: Vec<Tree>,
}

impl DecisionForest {
    /// Build a forest over the current feature schema.
    pub fn new(classes: Vec<String>, trees: Vec<Tree>) -> Self {
        Self {
            version: FORMAT_VERSION,
            feature_names: FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            classes,
            trees,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ScorerError> {
        let forest: DecisionForest = serde_json::from_str(json)?;
        forest.validate()?;
        Ok(forest)
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ScorerError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ScorerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check structure and that the forest was trained on this schema.
    pub fn validate(&self) -> Result<(), ScorerError> {
        if self.version != FORMAT_VERSION {
            return Err(ScorerError::InvalidArtifact(format!(
                "unsupported format version {}",
                self.version
            )));
        }

        let mismatch = schema_mismatch(&self.feature_names);
        if !mismatch.is_empty() {
            return Err(mismatch.into());
        }

        if self.classes.is_empty() {
            return Err(ScorerError::InvalidArtifact("no classes".to_string()));
        }
        if self.trees.is_empty() {
            return Err(ScorerError::InvalidArtifact("no trees".to_string()));
        }

        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.classes.len())?;
        }
        Ok(())
    }

    /// Vote counts per class, in `classes` order.
    pub fn votes(&self, features: &FeatureVector) -> Result<Vec<usize>, ScoringError> {
        let mut votes = vec![0usize; self.classes.len()];
        for (i, tree) in self.trees.iter().enumerate() {
            let class_idx = tree.evaluate(i, features.values())?;
            let slot = votes.get_mut(class_idx).ok_or_else(|| ScoringError::MalformedTree {
                tree: i,
                reason: format!("leaf votes for unknown class {class_idx}"),
            })?;
            *slot += 1;
        }
        Ok(votes)
    }
}

impl Scorer for DecisionForest {
    fn predict_label(&self, features: &FeatureVector) -> Result<String, ScoringError> {
        let votes = self.votes(features)?;

        let mut best = 0;
        for (i, count) in votes.iter().enumerate() {
            if *count > votes[best] {
                best = i;
            }
        }

        self.classes
            .get(best)
            .cloned()
            .ok_or_else(|| ScoringError::Backend("forest has no classes".to_string()))
    }
}

/// Compare artifact column names with [`FEATURE_COLUMNS`], position by
/// position. A reordering shows up as both missing and unexpected names.
fn schema_mismatch(names: &[String]) -> SchemaMismatchError {
    let mut mismatch = SchemaMismatchError::default();

    for (i, expected) in FEATURE_COLUMNS.iter().enumerate() {
        if names.get(i).map(String::as_str) != Some(*expected) {
            mismatch.missing.push(expected.to_string());
        }
    }
    for (i, name) in names.iter().enumerate() {
        if FEATURE_COLUMNS.get(i) != Some(&name.as_str()) {
            mismatch.unexpected.push(name.clone());
        }
    }
    mismatch
}
