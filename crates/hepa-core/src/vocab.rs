//! Fixed categorical vocabularies and the codec over them.
//!
//! A value's integer code is its position in the declared vocabulary. The
//! declared orders are the ones the scorer was trained with: the training
//! encoders assigned codes in sorted order of the class strings, so every
//! vocabulary here is listed sorted, not in the order the values are
//! usually presented to a user.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::UnknownCategoryError;

/// Drug arm labels.
pub mod drug {
    pub const D_PENICILLAMINE: &str = "D-penicillamine";
    pub const PLACEBO: &str = "Placebo";
}

/// Sex labels.
pub mod sex {
    pub const FEMALE: &str = "Female";
    pub const MALE: &str = "Male";
}

/// Age bin labels produced by the feature deriver.
pub mod age_bin {
    pub const FROM_35_TO_50: &str = "35-50";
    pub const UNDER_35: &str = "<35";
    pub const OVER_50: &str = ">50";
}

/// Stage group labels produced by the feature deriver.
pub mod stage_group {
    pub const HIGH: &str = "high";
    pub const LOW: &str = "low";
    pub const MID: &str = "mid";
}

pub const DRUG: &[&str] = &[drug::D_PENICILLAMINE, drug::PLACEBO];

pub const SEX: &[&str] = &[sex::FEMALE, sex::MALE];

pub const AGE_BIN: &[&str] = &[age_bin::FROM_35_TO_50, age_bin::UNDER_35, age_bin::OVER_50];

pub const STAGE_GROUP: &[&str] = &[stage_group::HIGH, stage_group::LOW, stage_group::MID];

/// A categorical input field with a closed vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CategoricalField {
    Drug,
    Sex,
    AgeBin,
    StageGroup,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 4] = [
        CategoricalField::Drug,
        CategoricalField::Sex,
        CategoricalField::AgeBin,
        CategoricalField::StageGroup,
    ];

    /// The column this field's code is written to in the feature vector.
    pub fn column(self) -> &'static str {
        match self {
            CategoricalField::Drug => crate::schema::column::DRUG,
            CategoricalField::Sex => crate::schema::column::SEX,
            CategoricalField::AgeBin => crate::schema::column::AGE_BIN,
            CategoricalField::StageGroup => crate::schema::column::STAGE_GROUPED,
        }
    }

    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            CategoricalField::Drug => DRUG,
            CategoricalField::Sex => SEX,
            CategoricalField::AgeBin => AGE_BIN,
            CategoricalField::StageGroup => STAGE_GROUP,
        }
    }

    /// Map a value to its code. Values outside the vocabulary are an error,
    /// never a default.
    pub fn encode(self, value: &str) -> Result<u32, UnknownCategoryError> {
        self.vocabulary()
            .iter()
            .position(|v| *v == value)
            .map(|pos| pos as u32)
            .ok_or_else(|| UnknownCategoryError {
                field: self,
                value: value.to_string(),
            })
    }

    pub fn decode(self, code: u32) -> Option<&'static str> {
        self.vocabulary().get(code as usize).copied()
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CategoricalField::Drug => "drug",
            CategoricalField::Sex => "sex",
            CategoricalField::AgeBin => "age bin",
            CategoricalField::StageGroup => "stage group",
        };
        f.write_str(name)
    }
}

/// Encode `value` against the vocabulary of `field`.
pub fn encode(field: CategoricalField, value: &str) -> Result<u32, UnknownCategoryError> {
    field.encode(value)
}
