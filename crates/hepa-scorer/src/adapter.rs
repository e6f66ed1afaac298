use std::sync::Arc;

use hepa_core::models::outcome::PredictionResult;
use hepa_features::assemble::FeatureVector;

use crate::error::ScoringError;
use crate::Scorer;

/// Calls the opaque scorer and maps its label to an outcome.
#[derive(Clone)]
pub struct ScorerAdapter {
    scorer: Arc<dyn Scorer>,
}

impl ScorerAdapter {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self { scorer }
    }

    pub fn predict(&self, vector: &FeatureVector) -> Result<PredictionResult, ScoringError> {
        let label = self.scorer.predict_label(vector)?;
        Ok(PredictionResult::from_label(label))
    }
}

impl std::fmt::Debug for ScorerAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScorerAdapter").finish_non_exhaustive()
    }
}
