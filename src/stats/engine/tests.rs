//! Tests for the statistics engine.

use super::StatsEngine;
use crate::stats::traits::{
    CorrelationAlgorithms, CorrelationMethod, DescriptiveStatisticsAlgorithms, Frequencies,
    HypothesisTestingAlgorithms, NonParametricAlgorithms, RegressionAlgorithms, Seasonality,
    TTestKind, TimeSeriesAlgorithms,
};
use crate::stats::{StatsConfig, StatsError};

fn setup() -> StatsEngine {
    StatsEngine::default()
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = StatsConfig {
        significance_level: 1.5,
        ..StatsConfig::default()
    };
    assert!(matches!(
        StatsEngine::new(config),
        Err(StatsError::InvalidConfig { .. })
    ));

    let engine = StatsEngine::new(StatsConfig::strict()).unwrap();
    assert_eq!(engine.config().significance_level, 0.01);
}

#[test]
fn test_describe() {
    let engine = setup();
    let stats = engine.describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

    assert_eq!(stats.count, 5);
    assert!((stats.min - 1.0).abs() < 1e-10);
    assert!((stats.max - 5.0).abs() < 1e-10);
    assert!((stats.mean - 3.0).abs() < 1e-10);
    assert!((stats.variance - 2.5).abs() < 1e-10);
    assert!((stats.q1 - 2.0).abs() < 1e-10);
    assert!((stats.q3 - 4.0).abs() < 1e-10);
    assert!(stats.skewness.unwrap().abs() < 1e-10);
}

#[test]
fn test_frequency_uses_configured_bins() {
    let config = StatsConfig {
        frequency_bins: 4,
        ..StatsConfig::default()
    };
    let engine = StatsEngine::new(config).unwrap();
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

    let bins = engine.frequency(&data, None).unwrap();
    assert_eq!(bins.len(), 4);
    assert_eq!(bins.iter().map(|b| b.frequency).sum::<usize>(), 9);
    assert_eq!(bins.last().unwrap().cumulative_frequency, 9);

    let bins = engine.frequency(&data, Some(2)).unwrap();
    assert_eq!(bins.len(), 2);
}

#[test]
fn test_detect_outliers() {
    let engine = setup();
    let report = engine
        .detect_outliers(&[10.0, 12.0, 11.0, 13.0, 12.0, 100.0])
        .unwrap();
    assert_eq!(report.outliers, vec![100.0]);
    assert_eq!(report.indices, vec![5]);
}

#[test]
fn test_pearson_and_spearman() {
    let engine = setup();
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [1.0, 4.0, 9.0, 16.0, 25.0];

    let pearson = engine.pearson(&x, &y).unwrap();
    assert_eq!(pearson.method, CorrelationMethod::Pearson);
    assert!(pearson.coefficient > 0.95 && pearson.coefficient < 1.0);

    let spearman = engine.spearman(&x, &y).unwrap();
    assert_eq!(spearman.method, CorrelationMethod::Spearman);
    assert!((spearman.coefficient - 1.0).abs() < 1e-12);
}

#[test]
fn test_correlation_matrix() {
    let engine = setup();
    let a = [1.0, 2.0, 3.0, 4.0];
    let b = [4.0, 3.0, 2.0, 1.0];
    let m = engine.correlation_matrix(&[&a, &b]).unwrap();
    assert!((m[0][0] - 1.0).abs() < 1e-12);
    assert!((m[0][1] + 1.0).abs() < 1e-12);
    assert!((m[1][0] + 1.0).abs() < 1e-12);
}

#[test]
fn test_simple_linear() {
    let engine = setup();
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [5.0, 7.0, 9.0, 11.0, 13.0];

    let fit = engine.simple_linear(&x, &y).unwrap();
    assert!((fit.slope - 2.0).abs() < 1e-10);
    assert!((fit.intercept - 3.0).abs() < 1e-10);
    assert!((fit.r_squared - 1.0).abs() < 1e-10);
    assert_eq!(fit.equation(), "y = 2.0000x + 3.0000");
}

#[test]
fn test_multiple_linear() {
    let engine = setup();
    // y = 1 + 2·x1 - x2 with no noise
    let rows = vec![
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![1.0, 2.0, 3.0],
        vec![1.0, 3.0, 1.0],
        vec![1.0, 4.0, 2.0],
    ];
    let y: Vec<f64> = rows.iter().map(|r| 1.0 + 2.0 * r[1] - r[2]).collect();

    let fit = engine.multiple_linear(&rows, &y).unwrap();
    assert!((fit.coefficients[0] - 1.0).abs() < 1e-8);
    assert!((fit.coefficients[1] - 2.0).abs() < 1e-8);
    assert!((fit.coefficients[2] + 1.0).abs() < 1e-8);
    assert_eq!(fit.df_regression, 2.0);
    assert_eq!(fit.df_residual, 2.0);
}

#[test]
fn test_ttests() {
    let engine = setup();
    let a = [5.1, 4.9, 5.3, 5.0, 5.2];
    let b = [6.0, 6.2, 5.9, 6.1, 6.3];

    let ind = engine.independent_ttest(&a, &b).unwrap();
    assert_eq!(ind.kind, TTestKind::Independent);
    assert!(ind.t_statistic < 0.0);
    assert!(ind.significant);
    assert!(ind.confidence_interval.upper < 0.0);

    let paired = engine.paired_ttest(&a, &b).unwrap();
    assert_eq!(paired.kind, TTestKind::Paired);
    assert_eq!(paired.df, 4.0);
}

#[test]
fn test_one_way_anova() {
    let engine = setup();
    let g1 = [1.0, 2.0, 3.0];
    let g2 = [4.0, 5.0, 6.0];
    let g3 = [7.0, 8.0, 9.0];

    let result = engine.one_way_anova(&[&g1, &g2, &g3]).unwrap();
    // SSB = 54, SSW = 6
    assert!((result.ss_between - 54.0).abs() < 1e-10);
    assert!((result.ss_within - 6.0).abs() < 1e-10);
    assert!((result.f_statistic - 27.0).abs() < 1e-10);
    assert!(result.significant);
}

#[test]
fn test_chi_square_goodness_of_fit() {
    let engine = setup();
    let observed = Frequencies::Counts(vec![20.0, 30.0, 50.0]);
    let result = engine.chi_square_test(&observed, None).unwrap();
    // Uniform expectation of 100/3 per category
    let e: f64 = 100.0 / 3.0;
    let chi: f64 = [20.0_f64, 30.0, 50.0].iter().map(|o| (o - e).powi(2) / e).sum();
    assert!((result.chi_square - chi).abs() < 1e-10);
    assert_eq!(result.df, 2.0);
    assert!(result.significant);
}

#[test]
fn test_nonparametric() {
    let engine = setup();
    let a = [1.0, 2.0, 3.0, 4.0, 5.0];
    let b = [6.0, 7.0, 8.0, 9.0, 10.0];

    let mw = engine.mann_whitney(&a, &b).unwrap();
    assert_eq!(mw.u_statistic, 0.0);

    let w = engine.wilcoxon_signed_rank(&a, &b).unwrap();
    assert_eq!(w.negative_rank_sum, 0.0);
    assert_eq!(w.w_statistic, 0.0);
}

#[test]
fn test_time_series() {
    let config = StatsConfig {
        seasonal_period: 2,
        moving_average_window: 2,
        ..StatsConfig::default()
    };
    let engine = StatsEngine::new(config).unwrap();
    let x = [1.0, 2.0, 3.0, 4.0];
    let y = [10.0, 20.0, 10.0, 20.0];

    let trend = engine.trend(&x).unwrap();
    assert_eq!(trend.moving_average, vec![1.5, 2.5, 3.5]);

    let result = engine.analyze_time_series(&x, &y).unwrap();
    assert!(matches!(result.seasonality, Seasonality::Estimated { period: 2, .. }));
    assert!(result.correlation.is_some());

    assert!(matches!(
        engine.seasonality(&[1.0, 2.0, 3.0]).unwrap(),
        Seasonality::InsufficientData { required: 4, got: 3 }
    ));
}
