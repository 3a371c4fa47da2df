//! Statistical algorithm traits.
//!
//! This module defines six focused trait groups:
//! - DescriptiveStatisticsAlgorithms - Summaries, frequency tables, outliers, normality
//! - CorrelationAlgorithms - Pearson and Spearman coefficients
//! - RegressionAlgorithms - Simple and multiple linear regression
//! - HypothesisTestingAlgorithms - t tests, ANOVA, chi-square
//! - NonParametricAlgorithms - Rank-based tests
//! - TimeSeriesAlgorithms - Trend and seasonality

mod correlation;
mod descriptive;
mod hypothesis;
mod nonparametric;
mod regression;
mod timeseries;
mod types;

pub use correlation::CorrelationAlgorithms;
pub use descriptive::DescriptiveStatisticsAlgorithms;
pub use hypothesis::HypothesisTestingAlgorithms;
pub use nonparametric::NonParametricAlgorithms;
pub use regression::RegressionAlgorithms;
pub use timeseries::TimeSeriesAlgorithms;
pub use types::*;
