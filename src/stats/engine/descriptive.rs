//! Engine implementation of descriptive statistics algorithms.

use super::StatsEngine;
use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{
    describe_impl, detect_outliers_impl, dispersion_impl, distribution_impl, frequency_impl,
    test_normality_impl,
};
use crate::stats::traits::{
    DescriptiveStatisticsAlgorithms, DescriptiveStats, DispersionSummary, DistributionSummary,
    FrequencyBin, NormalityAssessment, OutlierReport,
};

impl DescriptiveStatisticsAlgorithms for StatsEngine {
    fn describe(&self, x: &[f64]) -> StatsResult<DescriptiveStats> {
        describe_impl(x)
    }

    fn dispersion(&self, x: &[f64]) -> StatsResult<DispersionSummary> {
        dispersion_impl(x)
    }

    fn distribution(&self, x: &[f64]) -> StatsResult<DistributionSummary> {
        distribution_impl(x)
    }

    fn frequency(&self, x: &[f64], bins: Option<usize>) -> StatsResult<Vec<FrequencyBin>> {
        frequency_impl(self.config(), x, bins)
    }

    fn detect_outliers(&self, x: &[f64]) -> StatsResult<OutlierReport> {
        detect_outliers_impl(self.config(), x)
    }

    fn test_normality(&self, x: &[f64]) -> StatsResult<NormalityAssessment> {
        test_normality_impl(x)
    }
}
