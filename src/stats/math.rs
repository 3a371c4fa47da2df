//! Core numeric primitives over samples.
//!
//! Every function borrows its input and never reorders it; functions that
//! need sorted data sort a private copy.
//!
//! # Conventions
//!
//! - `variance` / `standard_deviation` are **sample** statistics (divide by n - 1).
//! - `quantile` interpolates linearly between order statistics at index p·(n - 1).
//! - `skewness` is the bias-adjusted sample skewness G₁; `kurtosis` is the
//!   bias-adjusted **excess** kurtosis G₂ (0 for a normal population).
//! - `mode` returns the smallest of the most frequent values.
//! - `rank` assigns mid-ranks to ties, so ranks always sum to n(n + 1)/2.

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_min_len, ensure_non_empty, sorted_copy};

/// Sum of all values (0 for an empty slice).
pub fn sum(xs: &[f64]) -> f64 {
    xs.iter().sum()
}

/// Arithmetic mean.
pub fn mean(xs: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(xs, "mean")?;
    Ok(sum(xs) / xs.len() as f64)
}

/// Sample variance with Bessel's correction.
pub fn variance(xs: &[f64]) -> StatsResult<f64> {
    ensure_min_len(xs, 2, "variance")?;
    let m = mean(xs)?;
    let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(ss / (xs.len() - 1) as f64)
}

/// Sample standard deviation.
pub fn standard_deviation(xs: &[f64]) -> StatsResult<f64> {
    variance(xs).map(f64::sqrt)
}

/// Smallest value.
pub fn min(xs: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(xs, "min")?;
    Ok(xs.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest value.
pub fn max(xs: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(xs, "max")?;
    Ok(xs.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Median; the mean of the two central values when n is even.
pub fn median(xs: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(xs, "median")?;
    let sorted = sorted_copy(xs);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Most frequent value. Ties resolve to the smallest candidate.
pub fn mode(xs: &[f64]) -> StatsResult<f64> {
    ensure_non_empty(xs, "mode")?;
    let sorted = sorted_copy(xs);

    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut j = i;
        while j < sorted.len() && sorted[j] == value {
            j += 1;
        }
        // Strict comparison keeps the earliest (smallest) value on ties.
        if j - i > best_count {
            best = value;
            best_count = j - i;
        }
        i = j;
    }
    Ok(best)
}

/// Linear-interpolation quantile for `p` in [0, 1].
pub fn quantile(xs: &[f64], p: f64) -> StatsResult<f64> {
    ensure_non_empty(xs, "quantile")?;
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidProbability { value: p });
    }
    let sorted = sorted_copy(xs);
    Ok(quantile_sorted(&sorted, p))
}

/// Quantile of an already sorted, non-empty slice.
pub(crate) fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

/// Sum of (x - mean)^power together with the sample standard deviation.
fn standardized_moment_sum(xs: &[f64], power: i32, context: &str) -> StatsResult<f64> {
    let m = mean(xs)?;
    let sd = standard_deviation(xs)?;
    if sd == 0.0 {
        return Err(StatsError::degenerate(context, "sample has zero variance"));
    }
    if !sd.is_finite() {
        return Err(StatsError::degenerate(context, "sample variance overflows f64"));
    }
    Ok(xs.iter().map(|x| ((x - m) / sd).powi(power)).sum())
}

/// Bias-adjusted sample skewness:
///
/// ```text
/// G₁ = n / ((n-1)(n-2)) · Σ((xᵢ - x̄)/s)³
/// ```
pub fn skewness(xs: &[f64]) -> StatsResult<f64> {
    ensure_min_len(xs, 3, "skewness")?;
    let n = xs.len() as f64;
    let s3 = standardized_moment_sum(xs, 3, "skewness")?;
    Ok(n / ((n - 1.0) * (n - 2.0)) * s3)
}

/// Bias-adjusted sample excess kurtosis:
///
/// ```text
/// G₂ = n(n+1) / ((n-1)(n-2)(n-3)) · Σ((xᵢ - x̄)/s)⁴ - 3(n-1)² / ((n-2)(n-3))
/// ```
pub fn kurtosis(xs: &[f64]) -> StatsResult<f64> {
    ensure_min_len(xs, 4, "kurtosis")?;
    let n = xs.len() as f64;
    let s4 = standardized_moment_sum(xs, 4, "kurtosis")?;
    let lead = n * (n + 1.0) / ((n - 1.0) * (n - 2.0) * (n - 3.0));
    let correction = 3.0 * (n - 1.0) * (n - 1.0) / ((n - 2.0) * (n - 3.0));
    Ok(lead * s4 - correction)
}

/// Mid-ranks (1-based) aligned with the input order.
///
/// Tied values share the average of the positions they occupy after an
/// ascending sort: `[10, 20, 20, 30]` ranks as `[1, 2.5, 2.5, 4]`.
pub fn rank(xs: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && xs[order[j + 1]] == xs[order[i]] {
            j += 1;
        }
        // Positions i..=j (0-based) hold ranks i+1..=j+1.
        let mid = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = mid;
        }
        i = j + 1;
    }
    ranks
}
