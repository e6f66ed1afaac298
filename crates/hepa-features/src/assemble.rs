//! Assembly of the ordered feature vector handed to the scorer.

use serde::ser::{Serialize, SerializeMap, Serializer};

use hepa_core::error::{SchemaMismatchError, UnknownCategoryError};
use hepa_core::models::patient::RawPatientRecord;
use hepa_core::schema::{column, column_index, FEATURE_COLUMNS, FEATURE_COUNT};
use hepa_core::vocab::CategoricalField;

use crate::derive::DerivedFeatureSet;

/// Codes for the four categorical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCategoricals {
    pub drug: u32,
    pub sex: u32,
    pub age_bin: u32,
    pub stage_grouped: u32,
}

impl EncodedCategoricals {
    pub fn encode(
        raw: &RawPatientRecord,
        derived: &DerivedFeatureSet,
    ) -> Result<Self, UnknownCategoryError> {
        Ok(Self {
            drug: CategoricalField::Drug.encode(&raw.drug)?,
            sex: CategoricalField::Sex.encode(&raw.sex)?,
            age_bin: CategoricalField::AgeBin.encode(derived.age_bin)?,
            stage_grouped: CategoricalField::StageGroup.encode(derived.stage_grouped)?,
        })
    }
}

/// One patient's features, in [`FEATURE_COLUMNS`] order.
///
/// Built fresh per prediction and immutable afterwards. Serializes as a JSON
/// object whose keys appear in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    /// Rebuild a vector from name/value pairs, e.g. a stored column map.
    pub fn from_columns<I, S>(columns: I) -> Result<Self, SchemaMismatchError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut builder = FeatureVectorBuilder::new();
        for (name, value) in columns {
            builder.set(name.as_ref(), value);
        }
        builder.build()
    }

    pub fn columns(&self) -> &'static [&'static str; FEATURE_COUNT] {
        &FEATURE_COLUMNS
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        column_index(name).map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.values.iter().copied())
    }

    /// Bit patterns of the values, for exact cross-entry-point comparison.
    pub fn to_bits(&self) -> [u64; FEATURE_COUNT] {
        self.values.map(f64::to_bits)
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Collects column values by name and checks them against the schema.
#[derive(Debug, Clone)]
pub struct FeatureVectorBuilder {
    values: [Option<f64>; FEATURE_COUNT],
    unexpected: Vec<String>,
}

impl Default for FeatureVectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureVectorBuilder {
    pub fn new() -> Self {
        Self {
            values: [None; FEATURE_COUNT],
            unexpected: Vec::new(),
        }
    }

    /// Set a column. Names outside the schema are recorded and reported by
    /// [`build`](Self::build).
    pub fn set(&mut self, name: &str, value: f64) -> &mut Self {
        match column_index(name) {
            Some(i) => self.values[i] = Some(value),
            None => self.unexpected.push(name.to_string()),
        }
        self
    }

    pub fn build(&self) -> Result<FeatureVector, SchemaMismatchError> {
        let missing: Vec<String> = FEATURE_COLUMNS
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| v.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        if !missing.is_empty() || !self.unexpected.is_empty() {
            return Err(SchemaMismatchError {
                missing,
                unexpected: self.unexpected.clone(),
            });
        }

        Ok(FeatureVector {
            values: self.values.map(|v| v.unwrap_or_default()),
        })
    }
}

/// Combine raw fields, categorical codes, and derived features into the
/// scorer's feature vector.
pub fn assemble(
    raw: &RawPatientRecord,
    encoded: &EncodedCategoricals,
    derived: &DerivedFeatureSet,
) -> Result<FeatureVector, SchemaMismatchError> {
    let mut builder = FeatureVectorBuilder::new();
    builder
        .set(column::ID, raw.id as f64)
        .set(column::N_DAYS, raw.n_days as f64)
        .set(column::DRUG, f64::from(encoded.drug))
        .set(column::AGE, raw.age as f64)
        .set(column::SEX, f64::from(encoded.sex))
        .set(column::ASCITES, f64::from(raw.ascites))
        .set(column::HEPATOMEGALY, f64::from(raw.hepatomegaly))
        .set(column::SPIDERS, f64::from(raw.spiders))
        .set(column::EDEMA, f64::from(raw.edema));

    for (name, value) in raw.lab_values() {
        builder.set(name, value);
    }

    builder
        .set(column::STAGE, raw.stage as f64)
        .set(column::BILI_ALB, derived.bili_alb)
        .set(column::AGE_STAGE, derived.age_stage as f64)
        .set(
            column::PROTHROMBIN_PLATELETS_RATIO,
            derived.prothrombin_platelets_ratio,
        )
        .set(column::AGE_BIN, f64::from(encoded.age_bin))
        .set(column::STAGE_GROUPED, f64::from(encoded.stage_grouped))
        .set(column::BILIRUBIN_LOG, derived.bilirubin_log)
        .set(column::CHOLESTEROL_LOG, derived.cholesterol_log)
        .set(column::SGOT_LOG, derived.sgot_log)
        .set(column::BILIRUBIN_BIN_1, f64::from(derived.bilirubin_bin_1))
        .set(column::BILIRUBIN_BIN_2, f64::from(derived.bilirubin_bin_2));

    builder.build()
}
