//! Domain models for the patient registry.

mod patient;
mod validation;

pub use patient::*;
pub use validation::*;
