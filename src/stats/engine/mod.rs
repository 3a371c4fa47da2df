//! In-memory statistics engine.
//!
//! [`StatsEngine`] implements every statistics trait by delegating to the
//! generic implementations, passing along its read-only configuration.

mod correlation;
mod descriptive;
mod hypothesis;
mod nonparametric;
mod regression;
mod timeseries;

#[cfg(test)]
mod tests;

use crate::stats::config::StatsConfig;
use crate::stats::error::StatsResult;

/// Stateless statistics client holding a validated configuration.
///
/// # Example
/// ```
/// use statr::stats::{CorrelationAlgorithms, StatsEngine};
///
/// let engine = StatsEngine::default();
/// let r = engine
///     .pearson(&[1.0, 2.0, 3.0, 4.0], &[2.0, 4.1, 5.9, 8.0])
///     .unwrap();
/// assert!(r.coefficient > 0.99);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatsEngine {
    config: StatsConfig,
}

impl StatsEngine {
    /// Create an engine after validating `config`.
    pub fn new(config: StatsConfig) -> StatsResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration every call is evaluated against.
    pub fn config(&self) -> &StatsConfig {
        &self.config
    }
}
