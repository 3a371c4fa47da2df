//! Generic correlation implementations.
//!
//! - **Pearson** (`pearson_impl`):
//!
//!   ```text
//!   r = Σ(xᵢ - x̄)(yᵢ - ȳ) / √[Σ(xᵢ - x̄)² · Σ(yᵢ - ȳ)²]
//!   t = r √((n-2) / (1-r²)),  df = n - 2
//!   ```
//!
//! - **Spearman** (`spearman_impl`): rank both samples with mid-ranks, then
//!
//!   ```text
//!   ρ = 1 - 6 Σdᵢ² / (n(n² - 1))
//!   z = ρ √((n-2) / (1-ρ²))
//!   ```
//!
//!   with a two-sided p-value from the standard normal.
//!
//! A perfect correlation (|r| = 1) has an infinite statistic and p = 0.

use crate::stats::config::StatsConfig;
use crate::stats::continuous::{t_two_tailed, z_two_tailed};
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_min_len, ensure_same_len};
use crate::stats::interpretation::CorrelationStrength;
use crate::stats::math;
use crate::stats::traits::{CorrelationMethod, CorrelationResult};

/// Pearson r of two validated, equal-length samples.
pub(crate) fn pearson_coefficient(x: &[f64], y: &[f64], context: &str) -> StatsResult<f64> {
    let mx = math::mean(x)?;
    let my = math::mean(y)?;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::degenerate(context, "a sample has zero variance"));
    }
    Ok((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// r√((n-2)/(1-r²)), infinite for a perfect correlation.
fn correlation_statistic(r: f64, df: f64) -> f64 {
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        f64::INFINITY.copysign(r)
    } else {
        r * (df / denom).sqrt()
    }
}

/// Generic implementation of the Pearson correlation test.
pub fn pearson_impl(config: &StatsConfig, x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
    ensure_same_len(x, y, "pearson")?;
    ensure_min_len(x, 3, "pearson")?;
    tracing::debug!(n = x.len(), "pearson");

    let r = pearson_coefficient(x, y, "pearson")?;
    let df = (x.len() - 2) as f64;
    let t = correlation_statistic(r, df);
    let p_value = if t.is_infinite() {
        0.0
    } else {
        t_two_tailed(t, df)?
    };

    Ok(CorrelationResult {
        method: CorrelationMethod::Pearson,
        coefficient: r,
        statistic: t,
        df: Some(df),
        p_value,
        significant: config.is_significant(p_value),
        strength: CorrelationStrength::from_coefficient(r),
        n: x.len(),
    })
}

/// Generic implementation of the Spearman rank correlation test.
pub fn spearman_impl(
    config: &StatsConfig,
    x: &[f64],
    y: &[f64],
) -> StatsResult<CorrelationResult> {
    ensure_same_len(x, y, "spearman")?;
    ensure_min_len(x, 3, "spearman")?;
    tracing::debug!(n = x.len(), "spearman");

    let rx = math::rank(x);
    let ry = math::rank(y);
    let constant = |r: &[f64]| r.iter().all(|&v| v == r[0]);
    if constant(&rx) || constant(&ry) {
        return Err(StatsError::degenerate("spearman", "a sample has all values tied"));
    }

    let n = x.len() as f64;
    let d2: f64 = rx.iter().zip(&ry).map(|(a, b)| (a - b) * (a - b)).sum();
    let rho = (1.0 - 6.0 * d2 / (n * (n * n - 1.0))).clamp(-1.0, 1.0);
    let z = correlation_statistic(rho, n - 2.0);
    let p_value = z_two_tailed(z);

    Ok(CorrelationResult {
        method: CorrelationMethod::Spearman,
        coefficient: rho,
        statistic: z,
        df: None,
        p_value,
        significant: config.is_significant(p_value),
        strength: CorrelationStrength::from_coefficient(rho),
        n: x.len(),
    })
}

/// Generic implementation of a Pearson correlation matrix.
pub fn correlation_matrix_impl(columns: &[&[f64]]) -> StatsResult<Vec<Vec<f64>>> {
    let Some(first) = columns.first() else {
        return Err(StatsError::empty("correlation_matrix"));
    };
    for col in columns {
        ensure_same_len(first, col, "correlation_matrix")?;
    }
    ensure_min_len(first, 2, "correlation_matrix")?;
    tracing::debug!(columns = columns.len(), n = first.len(), "correlation_matrix");

    let k = columns.len();
    let mut matrix = vec![vec![1.0; k]; k];
    for i in 0..k {
        for j in (i + 1)..k {
            let r = pearson_coefficient(columns[i], columns[j], "correlation_matrix")?;
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    Ok(matrix)
}
