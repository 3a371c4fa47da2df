//! Descriptive statistics, correlation, regression, hypothesis tests and
//! time series summaries over numeric samples.
//!
//! # Algorithm traits
//!
//! Statistics algorithms are organized into focused traits:
//! - [`DescriptiveStatisticsAlgorithms`] - Summaries, frequency tables, outliers, normality
//! - [`CorrelationAlgorithms`] - Pearson, Spearman and correlation matrices
//! - [`RegressionAlgorithms`] - Simple and multiple least-squares regression
//! - [`HypothesisTestingAlgorithms`] - t-tests, one-way ANOVA, chi-square
//! - [`NonParametricAlgorithms`] - Mann-Whitney U and Wilcoxon signed-rank
//! - [`TimeSeriesAlgorithms`] - Trend, moving average and seasonality
//!
//! [`StatsEngine`] implements all of them against a [`StatsConfig`]:
//!
//! ```
//! use statr::stats::{DescriptiveStatisticsAlgorithms, StatsEngine};
//!
//! let engine = StatsEngine::default();
//! let stats = engine.describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! # Distributions
//!
//! The continuous distributions used to compute p-values are public too:
//!
//! ```
//! use statr::stats::{ContinuousDistribution, Normal};
//!
//! let n = Normal::standard();
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-12);
//! ```

// Engine implementation
mod engine;

// Shared generic implementations
mod helpers;
mod impl_generic;

// Traits and types
mod traits;

// Core modules
pub mod config;
mod continuous;
mod distribution;
mod error;
pub mod interpretation;
pub mod math;

// Public API: Engine and configuration
pub use config::StatsConfig;
pub use engine::StatsEngine;
pub use error::{StatsError, StatsResult};

// Public API: Trait exports
pub use traits::{
    CorrelationAlgorithms, DescriptiveStatisticsAlgorithms, HypothesisTestingAlgorithms,
    NonParametricAlgorithms, RegressionAlgorithms, TimeSeriesAlgorithms,
};

// Public API: Result records
pub use traits::{
    AnovaResult, ChiSquareResult, ConfidenceInterval, CorrelationMethod, CorrelationResult,
    DescriptiveStats, DispersionSummary, DistributionSummary, FrequencyBin, Frequencies,
    MannWhitneyResult, MultipleRegressionResult, NormalityAssessment, OutlierReport, Seasonality,
    SimpleRegressionResult, TTestKind, TTestResult, TimeSeriesResult, Trend, WilcoxonResult,
};

// Public API: Qualitative labels
pub use interpretation::{
    CorrelationStrength, EffectSize, KurtosisShape, Normality, SeasonalityStrength,
    SkewnessShape, TrendDirection, Variability,
};

// Public API: Input coercion
pub use helpers::{json_to_numeric, parse_numeric, require_numeric, to_numeric};
pub use impl_generic::with_intercept;

// Public API: Distributions
pub use continuous::special;
pub use continuous::{
    ChiSquared, FDistribution, Gamma, Normal, StudentT, chi_squared_cdf, f_cdf, normal_cdf, t_cdf,
};
pub use distribution::{ContinuousDistribution, Distribution};
