pub mod outcome;
pub mod patient;
