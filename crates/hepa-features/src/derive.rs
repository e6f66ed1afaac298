//! Engineered features computed from a raw patient record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use hepa_core::models::patient::RawPatientRecord;
use hepa_core::schema::column;
use hepa_core::vocab;

use crate::error::DerivationError;

/// Upper bound (exclusive) of the first bilirubin bin.
pub const BILIRUBIN_BIN_1_UPPER: f64 = 1.2;
/// Upper bound (exclusive) of the second bilirubin bin.
pub const BILIRUBIN_BIN_2_UPPER: f64 = 2.0;

/// How the log features treat non-positive inputs.
///
/// The form and the HTTP service historically disagreed here, so the
/// behaviour is chosen per entry point rather than fixed in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogPolicy {
    /// Take the log unconditionally; a non-positive input is an error.
    Strict,
    /// Non-positive inputs produce `0`.
    ZeroOnNonPositive,
}

impl LogPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogPolicy::Strict => "strict",
            LogPolicy::ZeroOnNonPositive => "zero-on-non-positive",
        }
    }

    fn ln(self, field: &'static str, value: f64) -> Result<f64, DerivationError> {
        if value > 0.0 {
            return Ok(value.ln());
        }
        match self {
            LogPolicy::Strict => Err(DerivationError::NonPositiveLog { field, value }),
            LogPolicy::ZeroOnNonPositive => Ok(0.0),
        }
    }
}

impl fmt::Display for LogPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "strict" => Ok(LogPolicy::Strict),
            "zero-on-non-positive" => Ok(LogPolicy::ZeroOnNonPositive),
            other => Err(format!(
                "unknown log policy '{other}' (expected 'strict' or 'zero-on-non-positive')"
            )),
        }
    }
}

/// Features derived from one raw record. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFeatureSet {
    pub bili_alb: f64,
    pub age_stage: i64,
    pub prothrombin_platelets_ratio: f64,
    pub bilirubin_log: f64,
    pub cholesterol_log: f64,
    pub sgot_log: f64,
    pub bilirubin_bin_1: u8,
    pub bilirubin_bin_2: u8,
    /// Uncoded age bin label; encoded by the assembler.
    pub age_bin: &'static str,
    /// Uncoded stage group label; encoded by the assembler.
    pub stage_grouped: &'static str,
}

/// Compute the engineered features for `raw`.
///
/// Zero denominators yield `0`, not an error. Non-finite lab values are
/// rejected before anything is computed, and so is a ratio that overflows.
pub fn derive(
    raw: &RawPatientRecord,
    policy: LogPolicy,
) -> Result<DerivedFeatureSet, DerivationError> {
    for (field, value) in raw.lab_values() {
        if !value.is_finite() {
            return Err(DerivationError::NonFinite { field });
        }
    }

    let (bilirubin_bin_1, bilirubin_bin_2) = bilirubin_bins(raw.bilirubin);

    Ok(DerivedFeatureSet {
        bili_alb: finite_ratio(column::BILI_ALB, raw.bilirubin, raw.albumin)?,
        age_stage: raw.age.saturating_mul(raw.stage),
        prothrombin_platelets_ratio: finite_ratio(
            column::PROTHROMBIN_PLATELETS_RATIO,
            raw.prothrombin,
            raw.platelets,
        )?,
        bilirubin_log: policy.ln(column::BILIRUBIN, raw.bilirubin)?,
        cholesterol_log: policy.ln(column::CHOLESTEROL, raw.cholesterol)?,
        sgot_log: policy.ln(column::SGOT, raw.sgot)?,
        bilirubin_bin_1,
        bilirubin_bin_2,
        age_bin: age_bin(raw.age),
        stage_grouped: stage_grouped(raw.stage),
    })
}

fn finite_ratio(
    field: &'static str,
    numerator: f64,
    denominator: f64,
) -> Result<f64, DerivationError> {
    let ratio = ratio_or_zero(numerator, denominator);
    if ratio.is_finite() {
        Ok(ratio)
    } else {
        Err(DerivationError::NonFinite { field })
    }
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Age in years to its bin label. 50 belongs to `35-50`.
pub fn age_bin(age: i64) -> &'static str {
    if age < 35 {
        vocab::age_bin::UNDER_35
    } else if age <= 50 {
        vocab::age_bin::FROM_35_TO_50
    } else {
        vocab::age_bin::OVER_50
    }
}

/// Disease stage to its group label. Anything other than 1 or 2 is `high`.
pub fn stage_grouped(stage: i64) -> &'static str {
    match stage {
        1 => vocab::stage_group::LOW,
        2 => vocab::stage_group::MID,
        _ => vocab::stage_group::HIGH,
    }
}

/// The two bilirubin indicator columns.
///
/// Both are zero at or above 2.0: the high range has no column of its own.
pub fn bilirubin_bins(bilirubin: f64) -> (u8, u8) {
    let bin_1 = (bilirubin < BILIRUBIN_BIN_1_UPPER) as u8;
    let bin_2 = (BILIRUBIN_BIN_1_UPPER <= bilirubin && bilirubin < BILIRUBIN_BIN_2_UPPER) as u8;
    (bin_1, bin_2)
}
