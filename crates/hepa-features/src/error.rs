use thiserror::Error;

use hepa_core::error::{SchemaMismatchError, UnknownCategoryError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivationError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("cannot take the log of non-positive {field} ({value})")]
    NonPositiveLog { field: &'static str, value: f64 },
}

/// Any failure turning a raw record into a feature vector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategoryError),

    #[error(transparent)]
    SchemaMismatch(#[from] SchemaMismatchError),

    #[error(transparent)]
    Derivation(#[from] DerivationError),
}
