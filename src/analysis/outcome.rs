//! Result shapes produced by the dispatcher.

use crate::stats::{
    AnovaResult, ChiSquareResult, CorrelationResult, DescriptiveStats, DispersionSummary,
    DistributionSummary, FrequencyBin, MannWhitneyResult, Seasonality, SimpleRegressionResult,
    TTestResult, TimeSeriesResult, WilcoxonResult,
};
use serde::{Deserialize, Serialize};

/// Statistics computed by one analysis run.
///
/// The variant is determined by the [`AnalysisMethod`](super::AnalysisMethod):
/// per-column summaries carry one record for each of the two columns, tests
/// carry a single result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    /// `descriptive`, `histogram`
    Descriptive {
        x: DescriptiveStats,
        y: DescriptiveStats,
    },
    /// `dispersion`, `boxplot`
    Dispersion {
        x: DispersionSummary,
        y: DispersionSummary,
    },
    /// `distribution`
    Distribution {
        x: DistributionSummary,
        y: DistributionSummary,
    },
    /// `frequency`
    Frequency {
        x: Vec<FrequencyBin>,
        y: Vec<FrequencyBin>,
    },
    /// `scatter`
    Correlation(CorrelationResult),
    /// `heatmap`
    CorrelationMatrix {
        labels: Vec<String>,
        matrix: Vec<Vec<f64>>,
    },
    /// `timeseries`
    TimeSeries(TimeSeriesResult),
    /// `regression-simple`
    Regression(SimpleRegressionResult),
    /// `ttest-ind`, `ttest-paired`
    TTest(TTestResult),
    /// `anova-one`
    Anova(AnovaResult),
    /// `chi-square`
    ChiSquare(ChiSquareResult),
    /// `mann-whitney`
    MannWhitney(MannWhitneyResult),
    /// `wilcoxon`
    Wilcoxon(WilcoxonResult),
}

impl AnalysisOutcome {
    /// One-line presentation summary.
    pub fn summary(&self) -> String {
        match self {
            Self::Descriptive { x, y } => format!(
                "x: n = {}, mean = {:.3}, sd = {:.3}; y: n = {}, mean = {:.3}, sd = {:.3}",
                x.count, x.mean, x.std, y.count, y.mean, y.std
            ),
            Self::Dispersion { x, y } => format!("x: {} y: {}", x.summary(), y.summary()),
            Self::Distribution { x, y } => format!("x: {} y: {}", x.summary(), y.summary()),
            Self::Frequency { x, y } => {
                format!("x: {} bins; y: {} bins", x.len(), y.len())
            }
            Self::Correlation(r) => r.summary(),
            Self::CorrelationMatrix { labels, matrix } => {
                let r = matrix.first().and_then(|row| row.get(1)).copied();
                match (labels.first(), labels.get(1), r) {
                    (Some(a), Some(b), Some(r)) => format!("r({a}, {b}) = {r:.3}"),
                    _ => format!("{}x{} correlation matrix", matrix.len(), matrix.len()),
                }
            }
            Self::TimeSeries(ts) => {
                let seasonality = match &ts.seasonality {
                    Seasonality::InsufficientData { required, got } => {
                        format!("seasonality needs {required} points, got {got}")
                    }
                    Seasonality::Undefined { reason, .. } => {
                        format!("seasonality undefined: {reason}")
                    }
                    Seasonality::Estimated {
                        strength,
                        interpretation,
                        ..
                    } => format!("seasonality {strength:.3} ({interpretation})"),
                };
                format!(
                    "trend slope = {:.4} ({}), {seasonality}",
                    ts.trend.slope, ts.trend.direction
                )
            }
            Self::Regression(r) => r.summary(),
            Self::TTest(r) => r.summary(),
            Self::Anova(r) => r.summary(),
            Self::ChiSquare(r) => r.summary(),
            Self::MannWhitney(r) => r.summary(),
            Self::Wilcoxon(r) => r.summary(),
        }
    }

    /// p-value of the underlying test, if the outcome is a test.
    pub fn p_value(&self) -> Option<f64> {
        match self {
            Self::Correlation(r) => Some(r.p_value),
            Self::Regression(r) => Some(r.p_value),
            Self::TTest(r) => Some(r.p_value),
            Self::Anova(r) => Some(r.p_value),
            Self::ChiSquare(r) => Some(r.p_value),
            Self::MannWhitney(r) => Some(r.p_value),
            Self::Wilcoxon(r) => Some(r.p_value),
            _ => None,
        }
    }
}
