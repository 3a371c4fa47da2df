//! Generic time series implementations.
//!
//! - **Trend** (`trend_impl`): least-squares line of the series over its
//!   index positions 0, 1, ..., n-1, plus a centred moving average of the
//!   configured window.
//!
//! - **Seasonality** (`seasonality_impl`): positions are folded modulo the
//!   period p and averaged per season. The strength is the RMS deviation of
//!   the seasonal means from the grand mean, relative to the grand mean:
//!
//!   ```text
//!   strength = √(Σₛ(x̄ₛ - x̄)² / p) / |x̄|
//!   ```
//!
//!   At least two full periods are required; shorter series report
//!   [`Seasonality::InsufficientData`] instead of failing. A series with a
//!   zero grand mean reports [`Seasonality::Undefined`] so the trend still
//!   comes back.

use super::correlation::pearson_coefficient;
use super::regression::least_squares_line;
use crate::stats::config::StatsConfig;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_min_len, ensure_same_len};
use crate::stats::interpretation::{SeasonalityStrength, TrendDirection};
use crate::stats::math;
use crate::stats::traits::{Seasonality, TimeSeriesResult, Trend};

/// Generic implementation of trend estimation.
pub fn trend_impl(config: &StatsConfig, series: &[f64]) -> StatsResult<Trend> {
    ensure_min_len(series, 2, "trend")?;
    tracing::debug!(n = series.len(), window = config.moving_average_window, "trend");

    let index: Vec<f64> = (0..series.len()).map(|i| i as f64).collect();
    let (slope, intercept) = least_squares_line(&index, series, "trend")?;

    let window = config.moving_average_window.max(1);
    let moving_average = series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect();

    Ok(Trend {
        slope,
        intercept,
        moving_average,
        direction: TrendDirection::from_slope(slope),
    })
}

/// Generic implementation of seasonality estimation.
pub fn seasonality_impl(config: &StatsConfig, series: &[f64]) -> StatsResult<Seasonality> {
    let period = config.seasonal_period;
    let required = period * 2;
    if series.len() < required {
        return Ok(Seasonality::InsufficientData {
            required,
            got: series.len(),
        });
    }
    tracing::debug!(n = series.len(), period, "seasonality");

    let mut sums = vec![0.0; period];
    let mut counts = vec![0usize; period];
    for (i, v) in series.iter().enumerate() {
        sums[i % period] += v;
        counts[i % period] += 1;
    }
    let seasonal_means: Vec<f64> = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| s / c as f64)
        .collect();

    let grand_mean = math::mean(series)?;
    if grand_mean == 0.0 {
        tracing::warn!(period, "seasonality undefined for a zero-mean series");
        return Ok(Seasonality::Undefined {
            period,
            reason: "series has zero mean, so relative strength is undefined".to_string(),
        });
    }
    let spread: f64 = seasonal_means
        .iter()
        .map(|m| (m - grand_mean).powi(2))
        .sum::<f64>()
        / period as f64;
    let strength = spread.sqrt() / grand_mean.abs();

    Ok(Seasonality::Estimated {
        period,
        strength,
        seasonal: strength > 0.1,
        seasonal_means,
        interpretation: SeasonalityStrength::from_strength(strength),
    })
}

/// Generic implementation of the combined time series analysis.
pub fn analyze_time_series_impl(
    config: &StatsConfig,
    x: &[f64],
    y: &[f64],
) -> StatsResult<TimeSeriesResult> {
    ensure_same_len(x, y, "time series")?;
    tracing::debug!(n = x.len(), "analyze_time_series");

    let trend = trend_impl(config, x)?;
    let seasonality = seasonality_impl(config, y)?;
    let correlation = match pearson_coefficient(x, y, "time series") {
        Ok(r) => Some(r),
        Err(StatsError::DegenerateInput { .. }) => None,
        Err(e) => return Err(e),
    };

    Ok(TimeSeriesResult {
        trend,
        seasonality,
        correlation,
    })
}
