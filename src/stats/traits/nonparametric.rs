//! Non-parametric test algorithms.

use super::{MannWhitneyResult, WilcoxonResult};
use crate::stats::error::StatsResult;

/// Rank-based tests using the large-sample normal approximation.
///
/// Neither test applies a continuity or exact small-sample correction.
pub trait NonParametricAlgorithms {
    /// Mann-Whitney U test for two independent samples.
    fn mann_whitney(&self, a: &[f64], b: &[f64]) -> StatsResult<MannWhitneyResult>;

    /// Wilcoxon signed-rank test for paired samples.
    ///
    /// Zero differences are dropped before ranking; if none remain the test
    /// fails with `InsufficientData`.
    fn wilcoxon_signed_rank(&self, before: &[f64], after: &[f64])
    -> StatsResult<WilcoxonResult>;
}
