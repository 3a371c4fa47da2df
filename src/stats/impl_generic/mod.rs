//! Shared implementations behind the statistics traits.
//!
//! Each function takes the engine configuration explicitly (where it needs
//! one) and borrowed samples, and returns a fresh result record. Nothing
//! here keeps state between calls.

mod correlation;
mod descriptive;
mod hypothesis;
mod linalg;
mod nonparametric;
mod regression;
mod timeseries;

pub use correlation::*;
pub use descriptive::*;
pub use hypothesis::*;
pub use nonparametric::*;
pub use regression::*;
pub use timeseries::*;
