use serde::Serialize;

use hepa_core::models::patient::RawPatientRecord;

use crate::assemble::{assemble, EncodedCategoricals, FeatureVector};
use crate::derive::{derive, LogPolicy};
use crate::error::PipelineError;

/// The single raw-record-to-feature-vector transformation shared by all
/// entry points. Only the log policy varies between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pipeline {
    log_policy: LogPolicy,
}

impl Pipeline {
    pub fn new(log_policy: LogPolicy) -> Self {
        Self { log_policy }
    }

    pub fn log_policy(&self) -> LogPolicy {
        self.log_policy
    }

    /// Derive, encode, and assemble the feature vector for `raw`.
    pub fn build_vector(&self, raw: &RawPatientRecord) -> Result<FeatureVector, PipelineError> {
        let derived = derive(raw, self.log_policy)?;
        let encoded = EncodedCategoricals::encode(raw, &derived)?;
        let vector = assemble(raw, &encoded, &derived)?;

        tracing::debug!(
            id = raw.id,
            log_policy = %self.log_policy,
            age_bin = derived.age_bin,
            stage_grouped = derived.stage_grouped,
            "feature vector assembled"
        );

        Ok(vector)
    }
}
