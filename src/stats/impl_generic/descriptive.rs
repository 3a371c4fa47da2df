//! Generic descriptive statistics implementations.
//!
//! # Summaries
//!
//! - `describe_impl` collects location, spread, quartiles and shape in one
//!   pass over a sorted copy. Quartiles use linear interpolation at p·(n-1).
//!   Skewness and kurtosis are bias-adjusted (G₁, G₂) and reported as `None`
//!   when the sample is too small or constant.
//!
//!   ```text
//!   CV = s / |x̄| · 100
//!   ```
//!
//! - `frequency_impl` bins [min, max] into equal-width intervals. The bin
//!   index is `floor((x - min) / width)`, clamped to the last bin so the
//!   maximum lands inside the table.
//!
//! - `detect_outliers_impl` applies Tukey's fences with the configured
//!   multiplier k:
//!
//!   ```text
//!   lower = q1 - k·IQR,  upper = q3 + k·IQR
//!   ```

use crate::stats::config::StatsConfig;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_min_len, ensure_non_empty, sorted_copy};
use crate::stats::interpretation::{KurtosisShape, Normality, SkewnessShape, Variability};
use crate::stats::math::{self, quantile_sorted};
use crate::stats::traits::{
    DescriptiveStats, DispersionSummary, DistributionSummary, FrequencyBin, NormalityAssessment,
    OutlierReport,
};

/// Generic implementation of `describe`.
pub fn describe_impl(x: &[f64]) -> StatsResult<DescriptiveStats> {
    ensure_min_len(x, 2, "describe")?;
    tracing::debug!(n = x.len(), "describe");

    let n = x.len();
    let sorted = sorted_copy(x);
    let mean = math::mean(x)?;
    let variance = math::variance(x)?;
    let std = variance.sqrt();
    let min = sorted[0];
    let max = sorted[n - 1];
    let q1 = quantile_sorted(&sorted, 0.25);
    let q2 = quantile_sorted(&sorted, 0.5);
    let q3 = quantile_sorted(&sorted, 0.75);

    let finite_spread = std > 0.0 && std.is_finite();
    let skewness = if n >= 3 && finite_spread {
        Some(math::skewness(x)?)
    } else {
        None
    };
    let kurtosis = if n >= 4 && finite_spread {
        Some(math::kurtosis(x)?)
    } else {
        None
    };
    let cv = (mean != 0.0).then(|| std / mean.abs() * 100.0);

    Ok(DescriptiveStats {
        count: n,
        mean,
        median: q2,
        mode: math::mode(x)?,
        std,
        variance,
        min,
        max,
        range: max - min,
        q1,
        q2,
        q3,
        iqr: q3 - q1,
        skewness,
        kurtosis,
        cv,
    })
}

/// Generic implementation of `dispersion`.
pub fn dispersion_impl(x: &[f64]) -> StatsResult<DispersionSummary> {
    let stats = describe_impl(x)?;
    Ok(DispersionSummary {
        range: stats.range,
        variance: stats.variance,
        std: stats.std,
        iqr: stats.iqr,
        cv: stats.cv,
        variability: stats.cv.map(Variability::from_cv_percent),
    })
}

/// Generic implementation of `distribution`.
pub fn distribution_impl(x: &[f64]) -> StatsResult<DistributionSummary> {
    let stats = describe_impl(x)?;
    let shape = stats.skewness.zip(stats.kurtosis);
    Ok(DistributionSummary {
        q1: stats.q1,
        q2: stats.q2,
        q3: stats.q3,
        skewness: stats.skewness,
        kurtosis: stats.kurtosis,
        skewness_shape: stats.skewness.map(SkewnessShape::from_skewness),
        kurtosis_shape: stats.kurtosis.map(KurtosisShape::from_kurtosis),
        normality: shape.map(|(s, k)| Normality::from_shape(s, k)),
        is_normal: shape.map(|(s, k)| s.abs() <= 1.0 && k.abs() <= 1.0),
    })
}

/// Generic implementation of `frequency`.
pub fn frequency_impl(
    config: &StatsConfig,
    x: &[f64],
    bins: Option<usize>,
) -> StatsResult<Vec<FrequencyBin>> {
    ensure_non_empty(x, "frequency")?;
    let bins = bins.unwrap_or(config.frequency_bins);
    if bins == 0 {
        return Err(StatsError::invalid_parameter(
            "bins",
            0.0,
            "frequency table needs at least one bin",
        ));
    }
    tracing::debug!(n = x.len(), bins, "frequency");

    let min = math::min(x)?;
    let max = math::max(x)?;
    let width = (max - min) / bins as f64;
    if !width.is_finite() {
        return Err(StatsError::degenerate(
            "frequency",
            "data range overflows f64, bin width is undefined",
        ));
    }

    let mut counts = vec![0usize; bins];
    for &v in x {
        let idx = if width > 0.0 {
            ((v - min) / width).floor() as usize
        } else {
            0
        };
        counts[idx.min(bins - 1)] += 1;
    }

    let total = x.len() as f64;
    let mut cumulative = 0usize;
    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, frequency)| {
            cumulative += frequency;
            FrequencyBin {
                range_start: min + i as f64 * width,
                range_end: min + (i + 1) as f64 * width,
                frequency,
                relative_frequency: frequency as f64 / total,
                cumulative_frequency: cumulative,
                cumulative_relative_frequency: cumulative as f64 / total,
            }
        })
        .collect())
}

/// Generic implementation of `detect_outliers`.
pub fn detect_outliers_impl(config: &StatsConfig, x: &[f64]) -> StatsResult<OutlierReport> {
    ensure_non_empty(x, "detect_outliers")?;
    tracing::debug!(n = x.len(), k = config.outlier_iqr_multiplier, "detect_outliers");

    let sorted = sorted_copy(x);
    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_bound = q1 - config.outlier_iqr_multiplier * iqr;
    let upper_bound = q3 + config.outlier_iqr_multiplier * iqr;

    let (indices, outliers) = x
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v < lower_bound || v > upper_bound)
        .map(|(i, &v)| (i, v))
        .unzip();

    Ok(OutlierReport {
        q1,
        q3,
        iqr,
        lower_bound,
        upper_bound,
        outliers,
        indices,
    })
}

/// Generic implementation of `test_normality`.
pub fn test_normality_impl(x: &[f64]) -> StatsResult<NormalityAssessment> {
    let skewness = math::skewness(x)?;
    let kurtosis = math::kurtosis(x)?;
    let stats = describe_impl(x)?;

    Ok(NormalityAssessment {
        stats,
        skewness,
        kurtosis,
        normality: Normality::from_shape(skewness, kurtosis),
        is_normal: skewness.abs() <= 1.0 && kurtosis.abs() <= 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_basic() {
        let x = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = describe_impl(&x).unwrap();
        assert_eq!(s.count, 8);
        assert!((s.mean - 5.0).abs() < 1e-12);
        assert!((s.median - 4.5).abs() < 1e-12);
        assert_eq!(s.mode, 4.0);
        assert!((s.range - 7.0).abs() < 1e-12);
        assert!((s.q1 - 4.0).abs() < 1e-12);
        assert!((s.q3 - 5.5).abs() < 1e-12);
        assert!((s.iqr - 1.5).abs() < 1e-12);
        assert!(s.q1 <= s.q2 && s.q2 <= s.q3);
        assert!(s.skewness.is_some() && s.kurtosis.is_some());
        let cv = s.cv.unwrap();
        assert!((cv - s.std / 5.0 * 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_describe_constant_and_zero_mean() {
        let s = describe_impl(&[3.0, 3.0, 3.0, 3.0]).unwrap();
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.skewness, None);
        assert_eq!(s.kurtosis, None);

        let s = describe_impl(&[-1.0, 1.0]).unwrap();
        assert_eq!(s.cv, None);
        assert!(dispersion_impl(&[-1.0, 1.0]).unwrap().variability.is_none());

        assert!(matches!(describe_impl(&[]), Err(StatsError::EmptyData { .. })));
        assert!(matches!(
            describe_impl(&[1.0]),
            Err(StatsError::InsufficientData { required: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_frequency_table_invariants() {
        let config = StatsConfig::default();
        let x: Vec<f64> = (1..=20).map(f64::from).collect();
        let table = frequency_impl(&config, &x, Some(4)).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.iter().map(|b| b.frequency).sum::<usize>(), 20);
        // The maximum falls in the last bin, not past it.
        assert_eq!(table[3].frequency, 5);
        assert_eq!(table[3].cumulative_frequency, 20);
        assert!((table[3].cumulative_relative_frequency - 1.0).abs() < 1e-12);
        for pair in table.windows(2) {
            assert!(pair[0].cumulative_frequency <= pair[1].cumulative_frequency);
        }
    }

    #[test]
    fn test_frequency_edge_cases() {
        let config = StatsConfig::default();
        let table = frequency_impl(&config, &[2.0, 2.0, 2.0], None).unwrap();
        assert_eq!(table.len(), 10);
        assert_eq!(table[0].frequency, 3);
        assert!(matches!(
            frequency_impl(&config, &[1.0, 2.0], Some(0)),
            Err(StatsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_overflowing_spread_is_degenerate() {
        let config = StatsConfig::default();
        assert!(matches!(
            frequency_impl(&config, &[-1e308, 1e308], Some(3)),
            Err(StatsError::DegenerateInput { .. })
        ));

        let huge = [1e200, 2e200, 4e200, 8e200];
        assert!(matches!(
            math::skewness(&huge),
            Err(StatsError::DegenerateInput { .. })
        ));
        assert!(matches!(
            math::kurtosis(&huge),
            Err(StatsError::DegenerateInput { .. })
        ));
        let s = describe_impl(&huge).unwrap();
        assert!(s.std.is_infinite());
        assert_eq!(s.skewness, None);
        assert_eq!(s.kurtosis, None);
    }

    #[test]
    fn test_distribution_quartiles_and_normality() {
        let d = distribution_impl(&[1.0, 2.0, 3.0, 4.0, 9.0]).unwrap();
        assert_eq!((d.q1, d.q2, d.q3), (2.0, 3.0, 4.0));
        assert!(d.skewness.unwrap() > 1.0);
        assert_eq!(d.normality, Some(Normality::Different));
        assert_eq!(d.is_normal, Some(false));
        assert!(d.summary().contains("different from normal"));

        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["q2"], 3.0);
        assert_eq!(json["normality"], "different");
        assert_eq!(json["isNormal"], false);

        let small = distribution_impl(&[1.0, 2.0, 4.0]).unwrap();
        assert_eq!(small.q2, 2.0);
        assert!(small.skewness.is_some());
        assert_eq!(small.normality, None);
        assert_eq!(small.is_normal, None);
    }

    #[test]
    fn test_outliers() {
        let config = StatsConfig::default();
        let x = [10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 100.0];
        let report = detect_outliers_impl(&config, &x).unwrap();
        assert_eq!(report.outliers, vec![100.0]);
        assert_eq!(report.indices, vec![6]);
        assert!(report.lower_bound < 10.0);
    }

    #[test]
    fn test_normality_heuristic() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let result = test_normality_impl(&x).unwrap();
        // Uniform grid: zero skew, excess kurtosis -1.2
        assert!(result.skewness.abs() < 1e-12);
        assert!((result.kurtosis + 1.2).abs() < 1e-12);
        assert_eq!(result.normality, Normality::Different);
        assert!(!result.is_normal);

        assert!(test_normality_impl(&[1.0, 2.0, 3.0]).is_err());
    }
}
