//! Hypothesis testing algorithms.

use super::{AnovaResult, ChiSquareResult, Frequencies, TTestResult};
use crate::stats::error::StatsResult;

/// Parametric hypothesis tests.
///
/// Every result carries a significance flag computed against the configured
/// significance level, and an effect size with its label.
pub trait HypothesisTestingAlgorithms {
    /// Independent two-sample t-test (Welch's t-test).
    ///
    /// Uses Welch's correction for unequal variances; the effect size is
    /// Cohen's d with the pooled standard deviation.
    fn independent_ttest(&self, a: &[f64], b: &[f64]) -> StatsResult<TTestResult>;

    /// Paired t-test on `after - before`.
    fn paired_ttest(&self, before: &[f64], after: &[f64]) -> StatsResult<TTestResult>;

    /// One-way ANOVA (F-test) across two or more groups.
    fn one_way_anova(&self, groups: &[&[f64]]) -> StatsResult<AnovaResult>;

    /// Chi-square goodness-of-fit (flat counts) or independence (table) test.
    ///
    /// Without `expected`, counts are tested against a uniform distribution
    /// and tables against the independence model from their margins.
    fn chi_square_test(
        &self,
        observed: &Frequencies,
        expected: Option<&Frequencies>,
    ) -> StatsResult<ChiSquareResult>;
}
