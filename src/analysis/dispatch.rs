//! Runs a selected analysis over two raw columns.

use super::method::AnalysisMethod;
use super::outcome::AnalysisOutcome;
use crate::stats::{
    CorrelationAlgorithms, DescriptiveStatisticsAlgorithms, Frequencies,
    HypothesisTestingAlgorithms, NonParametricAlgorithms, RegressionAlgorithms, StatsEngine,
    StatsError, StatsResult, TimeSeriesAlgorithms, json_to_numeric, require_numeric,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One completed analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// `analysis_<RFC 3339 timestamp>`
    pub id: String,
    pub method: AnalysisMethod,
    pub independent_var: String,
    pub dependent_var: String,
    pub timestamp: DateTime<Utc>,
    /// Numeric values in the independent column after coercion
    pub data_size: usize,
    pub outcome: AnalysisOutcome,
}

impl Analysis {
    pub fn summary(&self) -> String {
        format!(
            "{} of {} and {}: {}",
            self.method.display_name(),
            self.independent_var,
            self.dependent_var,
            self.outcome.summary()
        )
    }
}

/// Cells of the column `name` across JSON row objects.
///
/// Rows that are not objects, or that lack the column, yield `null` and are
/// dropped later by coercion.
pub fn column(rows: &[Value], name: &str) -> Vec<Value> {
    rows.iter()
        .map(|row| row.get(name).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Split `values` into groups keyed by the matching entry of `keys`.
///
/// Groups come out in the order their key first appears.
pub fn group_by_key(keys: &[f64], values: &[f64]) -> StatsResult<Vec<Vec<f64>>> {
    if keys.len() != values.len() {
        return Err(StatsError::LengthMismatch {
            expected: keys.len(),
            got: values.len(),
            context: "group_by_key".to_string(),
        });
    }

    let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
    for (&key, &value) in keys.iter().zip(values) {
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, group)) => group.push(value),
            None => groups.push((key, vec![value])),
        }
    }
    Ok(groups.into_iter().map(|(_, group)| group).collect())
}

/// Coerce two raw columns and run `method` over them.
///
/// Both columns go through [`json_to_numeric`]; a column with no numeric
/// cells fails with `NoNumericData`. For `anova-one` the independent column
/// holds group keys; for `chi-square` it holds observed counts and the
/// dependent column the expected counts.
///
/// The columns are coerced independently, so dropping a non-numeric cell in
/// one column does not drop its partner in the other. Paired methods
/// (`ttest-paired`, `wilcoxon`, `anova-one`, `scatter`, `heatmap`,
/// `timeseries`) then see a length mismatch, or shifted pairs when both
/// columns lose a cell at different rows. Use [`run_analysis_on_rows`] on
/// clean rows when row alignment matters.
#[tracing::instrument(
    skip_all,
    fields(method = %method, independent = independent_var, dependent = dependent_var)
)]
pub fn run_analysis(
    engine: &StatsEngine,
    method: AnalysisMethod,
    independent_var: &str,
    dependent_var: &str,
    x_raw: &[Value],
    y_raw: &[Value],
) -> StatsResult<Analysis> {
    let x = require_numeric(json_to_numeric(x_raw), independent_var)?;
    let y = require_numeric(json_to_numeric(y_raw), dependent_var)?;
    tracing::debug!(nx = x.len(), ny = y.len(), "running analysis");

    let outcome = match method {
        AnalysisMethod::Descriptive | AnalysisMethod::Histogram => AnalysisOutcome::Descriptive {
            x: engine.describe(&x)?,
            y: engine.describe(&y)?,
        },
        AnalysisMethod::Dispersion | AnalysisMethod::BoxPlot => AnalysisOutcome::Dispersion {
            x: engine.dispersion(&x)?,
            y: engine.dispersion(&y)?,
        },
        AnalysisMethod::Distribution => AnalysisOutcome::Distribution {
            x: engine.distribution(&x)?,
            y: engine.distribution(&y)?,
        },
        AnalysisMethod::Frequency => AnalysisOutcome::Frequency {
            x: engine.frequency(&x, None)?,
            y: engine.frequency(&y, None)?,
        },
        AnalysisMethod::Scatter => AnalysisOutcome::Correlation(engine.pearson(&x, &y)?),
        AnalysisMethod::Heatmap => AnalysisOutcome::CorrelationMatrix {
            labels: vec![independent_var.to_string(), dependent_var.to_string()],
            matrix: engine.correlation_matrix(&[&x, &y])?,
        },
        AnalysisMethod::TimeSeries => {
            AnalysisOutcome::TimeSeries(engine.analyze_time_series(&x, &y)?)
        }
        AnalysisMethod::SimpleRegression => {
            AnalysisOutcome::Regression(engine.simple_linear(&x, &y)?)
        }
        AnalysisMethod::IndependentTTest => {
            AnalysisOutcome::TTest(engine.independent_ttest(&x, &y)?)
        }
        AnalysisMethod::PairedTTest => AnalysisOutcome::TTest(engine.paired_ttest(&x, &y)?),
        AnalysisMethod::OneWayAnova => {
            let groups = group_by_key(&x, &y)?;
            let groups: Vec<&[f64]> = groups.iter().map(Vec::as_slice).collect();
            AnalysisOutcome::Anova(engine.one_way_anova(&groups)?)
        }
        AnalysisMethod::ChiSquare => AnalysisOutcome::ChiSquare(
            engine.chi_square_test(&Frequencies::Counts(x.clone()), Some(&Frequencies::Counts(y)))?,
        ),
        AnalysisMethod::MannWhitney => AnalysisOutcome::MannWhitney(engine.mann_whitney(&x, &y)?),
        AnalysisMethod::Wilcoxon => {
            AnalysisOutcome::Wilcoxon(engine.wilcoxon_signed_rank(&x, &y)?)
        }
    };

    let timestamp = Utc::now();
    Ok(Analysis {
        id: format!(
            "analysis_{}",
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        method,
        independent_var: independent_var.to_string(),
        dependent_var: dependent_var.to_string(),
        timestamp,
        data_size: x.len(),
        outcome,
    })
}

/// [`run_analysis`] over JSON row objects, picking both columns by name.
pub fn run_analysis_on_rows(
    engine: &StatsEngine,
    method: AnalysisMethod,
    independent_var: &str,
    dependent_var: &str,
    rows: &[Value],
) -> StatsResult<Analysis> {
    let x_raw = column(rows, independent_var);
    let y_raw = column(rows, dependent_var);
    run_analysis(engine, method, independent_var, dependent_var, &x_raw, &y_raw)
}
