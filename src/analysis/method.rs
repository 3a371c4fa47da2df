//! Analysis method selectors.

use crate::stats::StatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An analysis the dispatcher knows how to run.
///
/// Serialized as its selector string, e.g. `"ttest-ind"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisMethod {
    #[serde(rename = "descriptive")]
    Descriptive,
    #[serde(rename = "dispersion")]
    Dispersion,
    #[serde(rename = "distribution")]
    Distribution,
    #[serde(rename = "frequency")]
    Frequency,
    #[serde(rename = "histogram")]
    Histogram,
    #[serde(rename = "boxplot")]
    BoxPlot,
    #[serde(rename = "scatter")]
    Scatter,
    #[serde(rename = "heatmap")]
    Heatmap,
    #[serde(rename = "timeseries")]
    TimeSeries,
    #[serde(rename = "regression-simple")]
    SimpleRegression,
    #[serde(rename = "ttest-ind")]
    IndependentTTest,
    #[serde(rename = "ttest-paired")]
    PairedTTest,
    #[serde(rename = "anova-one")]
    OneWayAnova,
    #[serde(rename = "chi-square")]
    ChiSquare,
    #[serde(rename = "mann-whitney")]
    MannWhitney,
    #[serde(rename = "wilcoxon")]
    Wilcoxon,
}

impl AnalysisMethod {
    /// Every supported method, in menu order.
    pub const ALL: [AnalysisMethod; 16] = [
        Self::Descriptive,
        Self::Dispersion,
        Self::Distribution,
        Self::Frequency,
        Self::Histogram,
        Self::BoxPlot,
        Self::Scatter,
        Self::Heatmap,
        Self::TimeSeries,
        Self::SimpleRegression,
        Self::IndependentTTest,
        Self::PairedTTest,
        Self::OneWayAnova,
        Self::ChiSquare,
        Self::MannWhitney,
        Self::Wilcoxon,
    ];

    /// The selector string this method parses from.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Descriptive => "descriptive",
            Self::Dispersion => "dispersion",
            Self::Distribution => "distribution",
            Self::Frequency => "frequency",
            Self::Histogram => "histogram",
            Self::BoxPlot => "boxplot",
            Self::Scatter => "scatter",
            Self::Heatmap => "heatmap",
            Self::TimeSeries => "timeseries",
            Self::SimpleRegression => "regression-simple",
            Self::IndependentTTest => "ttest-ind",
            Self::PairedTTest => "ttest-paired",
            Self::OneWayAnova => "anova-one",
            Self::ChiSquare => "chi-square",
            Self::MannWhitney => "mann-whitney",
            Self::Wilcoxon => "wilcoxon",
        }
    }

    /// Human-readable name shown in the analysis history.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Descriptive => "Descriptive statistics",
            Self::Dispersion => "Dispersion",
            Self::Distribution => "Distribution shape",
            Self::Frequency => "Frequency table",
            Self::Histogram => "Histogram",
            Self::BoxPlot => "Box plot",
            Self::Scatter => "Scatter plot",
            Self::Heatmap => "Correlation heatmap",
            Self::TimeSeries => "Time series",
            Self::SimpleRegression => "Simple linear regression",
            Self::IndependentTTest => "Independent samples t-test",
            Self::PairedTTest => "Paired samples t-test",
            Self::OneWayAnova => "One-way ANOVA",
            Self::ChiSquare => "Chi-square test",
            Self::MannWhitney => "Mann-Whitney U test",
            Self::Wilcoxon => "Wilcoxon signed-rank test",
        }
    }
}

impl fmt::Display for AnalysisMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMethod {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| StatsError::UnsupportedMethod {
                method: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_selector() {
        for method in AnalysisMethod::ALL {
            assert_eq!(method.as_str().parse::<AnalysisMethod>().unwrap(), method);
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }

    #[test]
    fn test_unknown_selector() {
        assert_eq!(
            "regression-multiple".parse::<AnalysisMethod>(),
            Err(StatsError::UnsupportedMethod {
                method: "regression-multiple".to_string()
            })
        );
        assert!("Descriptive".parse::<AnalysisMethod>().is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            AnalysisMethod::SimpleRegression.display_name(),
            "Simple linear regression"
        );
        assert_eq!(AnalysisMethod::ChiSquare.to_string(), "chi-square");
    }
}
