//! Regression analysis algorithms.

use super::{MultipleRegressionResult, SimpleRegressionResult};
use crate::stats::error::StatsResult;

/// Least-squares regression.
pub trait RegressionAlgorithms {
    /// Simple linear regression of `y` on `x`.
    ///
    /// Fails with `DegenerateInput` when `x` (or `y`) has zero variance.
    fn simple_linear(&self, x: &[f64], y: &[f64]) -> StatsResult<SimpleRegressionResult>;

    /// Multiple linear regression of `y` on the rows of a design matrix.
    ///
    /// No intercept column is added; use
    /// [`with_intercept`](crate::stats::with_intercept) to prepend one.
    /// Fails with `SingularMatrix` when XᵀX cannot be inverted.
    fn multiple_linear(&self, x: &[Vec<f64>], y: &[f64])
    -> StatsResult<MultipleRegressionResult>;
}
