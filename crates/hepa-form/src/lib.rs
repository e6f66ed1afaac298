//! hepa-form library root.
//!
//! The terminal form and session loop live here so integration tests can
//! drive them with in-memory input instead of a terminal.

pub mod cli;
pub mod form;
pub mod session;
pub mod widgets;
