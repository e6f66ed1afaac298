//! hepa-core
//!
//! Pure domain types, categorical vocabularies, and the feature column schema.
//! Shared vocabulary of the Hepa prediction pipeline. No I/O.

pub mod error;
pub mod models;
pub mod schema;
pub mod vocab;
