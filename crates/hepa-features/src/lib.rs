//! hepa-features
//!
//! Feature derivation and assembly. Pure functions with no I/O.
//! Every entry point builds its feature vectors through [`pipeline::Pipeline`].

pub mod assemble;
pub mod derive;
pub mod error;
pub mod pipeline;
