//! Engine implementation of regression algorithms.

use super::StatsEngine;
use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{multiple_linear_impl, simple_linear_impl};
use crate::stats::traits::{
    MultipleRegressionResult, RegressionAlgorithms, SimpleRegressionResult,
};

impl RegressionAlgorithms for StatsEngine {
    fn simple_linear(&self, x: &[f64], y: &[f64]) -> StatsResult<SimpleRegressionResult> {
        simple_linear_impl(self.config(), x, y)
    }

    fn multiple_linear(
        &self,
        x: &[Vec<f64>],
        y: &[f64],
    ) -> StatsResult<MultipleRegressionResult> {
        multiple_linear_impl(self.config(), x, y)
    }
}
