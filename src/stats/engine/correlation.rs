//! Engine implementation of correlation algorithms.

use super::StatsEngine;
use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{correlation_matrix_impl, pearson_impl, spearman_impl};
use crate::stats::traits::{CorrelationAlgorithms, CorrelationResult};

impl CorrelationAlgorithms for StatsEngine {
    fn pearson(&self, x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
        pearson_impl(self.config(), x, y)
    }

    fn spearman(&self, x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
        spearman_impl(self.config(), x, y)
    }

    fn correlation_matrix(&self, columns: &[&[f64]]) -> StatsResult<Vec<Vec<f64>>> {
        correlation_matrix_impl(columns)
    }
}
