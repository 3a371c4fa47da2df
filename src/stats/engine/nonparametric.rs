//! Engine implementation of non-parametric tests.

use super::StatsEngine;
use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{mann_whitney_impl, wilcoxon_signed_rank_impl};
use crate::stats::traits::{MannWhitneyResult, NonParametricAlgorithms, WilcoxonResult};

impl NonParametricAlgorithms for StatsEngine {
    fn mann_whitney(&self, a: &[f64], b: &[f64]) -> StatsResult<MannWhitneyResult> {
        mann_whitney_impl(self.config(), a, b)
    }

    fn wilcoxon_signed_rank(
        &self,
        before: &[f64],
        after: &[f64],
    ) -> StatsResult<WilcoxonResult> {
        wilcoxon_signed_rank_impl(self.config(), before, after)
    }
}
