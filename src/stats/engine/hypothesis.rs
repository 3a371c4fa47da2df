//! Engine implementation of hypothesis testing algorithms.

use super::StatsEngine;
use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{
    chi_square_test_impl, independent_ttest_impl, one_way_anova_impl, paired_ttest_impl,
};
use crate::stats::traits::{
    AnovaResult, ChiSquareResult, Frequencies, HypothesisTestingAlgorithms, TTestResult,
};

impl HypothesisTestingAlgorithms for StatsEngine {
    fn independent_ttest(&self, a: &[f64], b: &[f64]) -> StatsResult<TTestResult> {
        independent_ttest_impl(self.config(), a, b)
    }

    fn paired_ttest(&self, before: &[f64], after: &[f64]) -> StatsResult<TTestResult> {
        paired_ttest_impl(self.config(), before, after)
    }

    fn one_way_anova(&self, groups: &[&[f64]]) -> StatsResult<AnovaResult> {
        one_way_anova_impl(self.config(), groups)
    }

    fn chi_square_test(
        &self,
        observed: &Frequencies,
        expected: Option<&Frequencies>,
    ) -> StatsResult<ChiSquareResult> {
        chi_square_test_impl(self.config(), observed, expected)
    }
}
