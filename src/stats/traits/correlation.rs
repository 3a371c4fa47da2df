//! Correlation algorithms.

use super::CorrelationResult;
use crate::stats::error::StatsResult;

/// Correlation coefficients with significance tests.
pub trait CorrelationAlgorithms {
    /// Pearson product-moment correlation.
    ///
    /// Requires equal lengths, n >= 3, and non-zero variance in both inputs.
    /// The p-value comes from t = r√((n-2)/(1-r²)) with n - 2 degrees of freedom.
    fn pearson(&self, x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult>;

    /// Spearman rank correlation using mid-ranks.
    ///
    /// The p-value uses the normal approximation z = ρ√((n-2)/(1-ρ²)).
    fn spearman(&self, x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult>;

    /// Pearson correlation matrix of several equal-length columns.
    fn correlation_matrix(&self, columns: &[&[f64]]) -> StatsResult<Vec<Vec<f64>>>;
}
