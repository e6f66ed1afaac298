use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The only scorer label that maps to [`Outcome::Lived`].
pub const LIVED_LABEL: &str = "L";

/// Predicted clinical outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Outcome {
    Lived,
    Died,
}

impl Outcome {
    /// `"L"` is lived; every other label is died.
    pub fn from_label(label: &str) -> Self {
        if label == LIVED_LABEL {
            Outcome::Lived
        } else {
            Outcome::Died
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Lived => "Lived",
            Outcome::Died => "Died",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scorer label together with the outcome it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: String,
    pub outcome: Outcome,
}

impl PredictionResult {
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let outcome = Outcome::from_label(&label);
        Self { label, outcome }
    }
}
