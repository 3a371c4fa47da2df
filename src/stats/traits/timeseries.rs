//! Time series algorithms.

use super::{Seasonality, TimeSeriesResult, Trend};
use crate::stats::error::StatsResult;

/// Trend and seasonality of ordered series.
pub trait TimeSeriesAlgorithms {
    /// Trend of `x`, seasonality of `y`, and the correlation between them.
    fn analyze_time_series(&self, x: &[f64], y: &[f64]) -> StatsResult<TimeSeriesResult>;

    /// Least-squares line over index positions plus a centred moving average.
    fn trend(&self, series: &[f64]) -> StatsResult<Trend>;

    /// Seasonal strength over the configured period.
    ///
    /// Returns [`Seasonality::InsufficientData`] rather than failing when
    /// fewer than two full periods are available, and
    /// [`Seasonality::Undefined`] when the series mean is zero.
    fn seasonality(&self, series: &[f64]) -> StatsResult<Seasonality>;
}
