use serde::Serialize;
use thiserror::Error;

use crate::vocab::CategoricalField;

/// A categorical value outside its field's declared vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("unknown {field} category: '{value}'")]
pub struct UnknownCategoryError {
    pub field: CategoricalField,
    pub value: String,
}

/// A feature record whose columns do not match the trained schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error(
    "feature schema mismatch (missing: [{}], unexpected: [{}])",
    .missing.join(", "),
    .unexpected.join(", ")
)]
pub struct SchemaMismatchError {
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
}

impl SchemaMismatchError {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}
