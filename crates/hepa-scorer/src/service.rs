use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use hepa_core::models::outcome::PredictionResult;
use hepa_core::models::patient::RawPatientRecord;
use hepa_features::assemble::FeatureVector;
use hepa_features::derive::LogPolicy;
use hepa_features::error::PipelineError;
use hepa_features::pipeline::Pipeline;

use crate::adapter::ScorerAdapter;
use crate::error::{PredictError, ScorerError};
use crate::loader;

/// Raw record in, outcome out. The one prediction path every entry point
/// shares; constructed once at startup and read concurrently afterwards.
#[derive(Debug, Clone)]
pub struct PredictionService {
    pipeline: Pipeline,
    adapter: ScorerAdapter,
}

impl PredictionService {
    pub fn new(pipeline: Pipeline, adapter: ScorerAdapter) -> Self {
        Self { pipeline, adapter }
    }

    /// Load the artifact from `model_dir` and wire it to a pipeline using
    /// `log_policy`.
    pub fn from_model_dir(model_dir: &Path, log_policy: LogPolicy) -> Result<Self, ScorerError> {
        let (_, forest) = loader::load_forest(model_dir)?;
        Ok(Self::new(
            Pipeline::new(log_policy),
            ScorerAdapter::new(Arc::new(forest)),
        ))
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn features(&self, raw: &RawPatientRecord) -> Result<FeatureVector, PipelineError> {
        self.pipeline.build_vector(raw)
    }

    pub fn predict(&self, raw: &RawPatientRecord) -> Result<PredictionResult, PredictError> {
        let prediction_id = Uuid::new_v4();

        let result = self.score(raw);

        match &result {
            Ok(prediction) => info!(
                prediction_id = %prediction_id,
                patient_id = raw.id,
                label = %prediction.label,
                outcome = %prediction.outcome,
                "prediction complete"
            ),
            Err(e) => warn!(
                prediction_id = %prediction_id,
                patient_id = raw.id,
                error = %e,
                "prediction failed"
            ),
        }

        result
    }

    fn score(&self, raw: &RawPatientRecord) -> Result<PredictionResult, PredictError> {
        let vector = self.features(raw)?;
        Ok(self.adapter.predict(&vector)?)
    }
}
