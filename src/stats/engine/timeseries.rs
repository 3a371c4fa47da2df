//! Engine implementation of time series algorithms.

use super::StatsEngine;
use crate::stats::error::StatsResult;
use crate::stats::impl_generic::{analyze_time_series_impl, seasonality_impl, trend_impl};
use crate::stats::traits::{Seasonality, TimeSeriesAlgorithms, TimeSeriesResult, Trend};

impl TimeSeriesAlgorithms for StatsEngine {
    fn analyze_time_series(&self, x: &[f64], y: &[f64]) -> StatsResult<TimeSeriesResult> {
        analyze_time_series_impl(self.config(), x, y)
    }

    fn trend(&self, series: &[f64]) -> StatsResult<Trend> {
        trend_impl(self.config(), series)
    }

    fn seasonality(&self, series: &[f64]) -> StatsResult<Seasonality> {
        seasonality_impl(self.config(), series)
    }
}
