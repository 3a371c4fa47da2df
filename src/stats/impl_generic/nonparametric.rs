//! Generic non-parametric test implementations.
//!
//! Both tests rank with mid-ranks (see [`math::rank`]) and use the
//! large-sample normal approximation without continuity correction, so
//! p-values for very small samples are approximate.
//!
//! - **Mann-Whitney U** (`mann_whitney_impl`): rank the pooled sample, then
//!
//!   ```text
//!   U₁ = R₁ - n₁(n₁+1)/2,  U₂ = n₁n₂ - U₁,  U = min(U₁, U₂)
//!   z  = (U - n₁n₂/2) / √(n₁n₂(n₁+n₂+1)/12)
//!   r  = |z| / √(n₁+n₂)
//!   ```
//!
//! - **Wilcoxon signed-rank** (`wilcoxon_signed_rank_impl`): drop zero
//!   differences `after - before`, rank |d| over the remaining n pairs, then
//!
//!   ```text
//!   W = min(W⁺, W⁻)
//!   z = (W - n(n+1)/4) / √(n(n+1)(2n+1)/24)
//!   r = |z| / √n
//!   ```

use crate::stats::config::StatsConfig;
use crate::stats::continuous::z_two_tailed;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_non_empty, ensure_same_len};
use crate::stats::interpretation::EffectSize;
use crate::stats::math;
use crate::stats::traits::{MannWhitneyResult, WilcoxonResult};

/// Generic implementation of the Mann-Whitney U test.
pub fn mann_whitney_impl(
    config: &StatsConfig,
    a: &[f64],
    b: &[f64],
) -> StatsResult<MannWhitneyResult> {
    ensure_non_empty(a, "Mann-Whitney group 1")?;
    ensure_non_empty(b, "Mann-Whitney group 2")?;
    tracing::debug!(n1 = a.len(), n2 = b.len(), "mann_whitney");

    let pooled: Vec<f64> = a.iter().chain(b).copied().collect();
    let ranks = math::rank(&pooled);
    let (ranks1, ranks2) = ranks.split_at(a.len());
    let rank_sum1: f64 = ranks1.iter().sum();
    let rank_sum2: f64 = ranks2.iter().sum();

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let u1 = rank_sum1 - n1 * (n1 + 1.0) / 2.0;
    let u2 = n1 * n2 - u1;
    let u = u1.min(u2);

    let mean_u = n1 * n2 / 2.0;
    let sd_u = (n1 * n2 * (n1 + n2 + 1.0) / 12.0).sqrt();
    let z = (u - mean_u) / sd_u;
    let p_value = z_two_tailed(z);
    let effect_size_r = z.abs() / (n1 + n2).sqrt();

    Ok(MannWhitneyResult {
        u_statistic: u,
        u1,
        u2,
        z_score: z,
        p_value,
        significant: config.is_significant(p_value),
        effect_size_r,
        effect_size: EffectSize::from_r(effect_size_r),
        rank_sum1,
        rank_sum2,
        mean_rank1: rank_sum1 / n1,
        mean_rank2: rank_sum2 / n2,
        n1: a.len(),
        n2: b.len(),
    })
}

/// Generic implementation of the Wilcoxon signed-rank test.
pub fn wilcoxon_signed_rank_impl(
    config: &StatsConfig,
    before: &[f64],
    after: &[f64],
) -> StatsResult<WilcoxonResult> {
    ensure_same_len(before, after, "Wilcoxon signed-rank")?;
    ensure_non_empty(before, "Wilcoxon signed-rank")?;

    let differences: Vec<f64> = before
        .iter()
        .zip(after)
        .map(|(b, a)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    let zero_differences = before.len() - differences.len();
    if differences.is_empty() {
        return Err(StatsError::insufficient(
            1,
            0,
            "Wilcoxon signed-rank (non-zero differences)",
        ));
    }
    tracing::debug!(n = differences.len(), zero_differences, "wilcoxon_signed_rank");

    let magnitudes: Vec<f64> = differences.iter().map(|d| d.abs()).collect();
    let ranks = math::rank(&magnitudes);
    let (mut positive_rank_sum, mut negative_rank_sum) = (0.0, 0.0);
    for (d, r) in differences.iter().zip(&ranks) {
        if *d > 0.0 {
            positive_rank_sum += r;
        } else {
            negative_rank_sum += r;
        }
    }

    let n = differences.len() as f64;
    let w = positive_rank_sum.min(negative_rank_sum);
    let mean_w = n * (n + 1.0) / 4.0;
    let sd_w = (n * (n + 1.0) * (2.0 * n + 1.0) / 24.0).sqrt();
    let z = (w - mean_w) / sd_w;
    let p_value = z_two_tailed(z);
    let effect_size_r = z.abs() / n.sqrt();

    Ok(WilcoxonResult {
        w_statistic: w,
        positive_rank_sum,
        negative_rank_sum,
        z_score: z,
        p_value,
        significant: config.is_significant(p_value),
        effect_size_r,
        effect_size: EffectSize::from_r(effect_size_r),
        n: differences.len(),
        zero_differences,
    })
}
