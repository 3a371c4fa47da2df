//! Descriptive statistics algorithms.

use super::{
    DescriptiveStats, DispersionSummary, DistributionSummary, FrequencyBin, NormalityAssessment,
    OutlierReport,
};
use crate::stats::error::StatsResult;

/// Descriptive statistics over a sample.
///
/// Every method requires at least two observations, because the summaries
/// all include the sample variance.
pub trait DescriptiveStatisticsAlgorithms {
    /// Full descriptive summary: location, spread, quartiles and shape.
    fn describe(&self, x: &[f64]) -> StatsResult<DescriptiveStats>;

    /// Spread measures with a qualitative reading of the coefficient of variation.
    fn dispersion(&self, x: &[f64]) -> StatsResult<DispersionSummary>;

    /// Skewness and kurtosis with qualitative labels.
    fn distribution(&self, x: &[f64]) -> StatsResult<DistributionSummary>;

    /// Equal-width frequency table over [min, max].
    ///
    /// `bins` defaults to the configured `frequency_bins`. The last bin is
    /// closed on the right so the maximum is counted.
    fn frequency(&self, x: &[f64], bins: Option<usize>) -> StatsResult<Vec<FrequencyBin>>;

    /// Values outside the Tukey fences `q1 - k·iqr` and `q3 + k·iqr`.
    fn detect_outliers(&self, x: &[f64]) -> StatsResult<OutlierReport>;

    /// Shape-based normality heuristic.
    ///
    /// Not a formal test: the verdict comes from |skewness| and |kurtosis|
    /// thresholds. Requires n >= 4 and non-zero variance.
    fn test_normality(&self, x: &[f64]) -> StatsResult<NormalityAssessment>;
}
