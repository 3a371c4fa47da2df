//! Result records for statistical algorithms.
//!
//! Every record keeps full precision. Rounding happens only in the
//! `summary()` strings meant for display.

use crate::stats::interpretation::{
    CorrelationStrength, EffectSize, KurtosisShape, Normality, SeasonalityStrength,
    SkewnessShape, TrendDirection, Variability,
};
use serde::{Deserialize, Serialize};

/// Descriptive statistics of a sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Smallest of the most frequent values
    pub mode: f64,
    /// Sample standard deviation
    pub std: f64,
    /// Sample variance (n - 1 denominator)
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    /// max - min
    pub range: f64,
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    /// q3 - q1
    pub iqr: f64,
    /// Bias-adjusted skewness (None when n < 3 or the sample is constant)
    pub skewness: Option<f64>,
    /// Bias-adjusted excess kurtosis (None when n < 4 or the sample is constant)
    pub kurtosis: Option<f64>,
    /// Coefficient of variation in percent, std / |mean| · 100 (None when mean = 0)
    pub cv: Option<f64>,
}

/// Spread of a sample with a qualitative reading of the CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispersionSummary {
    pub range: f64,
    pub variance: f64,
    pub std: f64,
    pub iqr: f64,
    pub cv: Option<f64>,
    pub variability: Option<Variability>,
}

impl DispersionSummary {
    pub fn summary(&self) -> String {
        match (self.cv, self.variability) {
            (Some(cv), Some(level)) => format!(
                "The coefficient of variation is {cv:.2}%, so relative dispersion is {level}."
            ),
            _ => format!(
                "The mean is zero, so the coefficient of variation is undefined (std = {:.3}).",
                self.std
            ),
        }
    }
}

/// Shape of a sample: quartiles, skewness and kurtosis with their labels,
/// and the normality verdict when both shape measures are defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSummary {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    pub skewness_shape: Option<SkewnessShape>,
    pub kurtosis_shape: Option<KurtosisShape>,
    /// None when n < 4 or the sd is zero or not finite
    pub normality: Option<Normality>,
    pub is_normal: Option<bool>,
}

impl DistributionSummary {
    pub fn summary(&self) -> String {
        let skew = self
            .skewness_shape
            .map_or_else(|| "of undetermined symmetry".to_string(), |s| s.to_string());
        let kurt = self
            .kurtosis_shape
            .map_or_else(|| "undetermined".to_string(), |k| k.to_string());
        match self.normality {
            Some(normality) => format!(
                "The distribution is {skew}; its kurtosis is {kurt}; overall it is {normality}."
            ),
            None => format!("The distribution is {skew}; its kurtosis is {kurt}."),
        }
    }
}

/// One bin of an equal-width frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyBin {
    pub range_start: f64,
    pub range_end: f64,
    pub frequency: usize,
    pub relative_frequency: f64,
    pub cumulative_frequency: usize,
    pub cumulative_relative_frequency: f64,
}

impl FrequencyBin {
    /// Bin label such as `"1.00 - 2.50"`.
    pub fn label(&self) -> String {
        format!("{:.2} - {:.2}", self.range_start, self.range_end)
    }
}

/// Tukey-fence outlier detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlierReport {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Outlying values in input order
    pub outliers: Vec<f64>,
    /// Positions of the outliers in the input
    pub indices: Vec<usize>,
}

/// Result of the skewness/kurtosis normality heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalityAssessment {
    pub stats: DescriptiveStats,
    pub skewness: f64,
    pub kurtosis: f64,
    pub normality: Normality,
    /// Both |skewness| and |kurtosis| are at most 1
    pub is_normal: bool,
}

/// Which correlation coefficient was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationMethod {
    Pearson,
    Spearman,
}

/// Correlation coefficient with its significance test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    pub method: CorrelationMethod,
    pub coefficient: f64,
    /// t statistic (Pearson) or z statistic (Spearman)
    pub statistic: f64,
    /// Degrees of freedom of the t test; None for the normal approximation
    pub df: Option<f64>,
    pub p_value: f64,
    pub significant: bool,
    pub strength: CorrelationStrength,
    pub n: usize,
}

impl CorrelationResult {
    pub fn summary(&self) -> String {
        let name = match self.method {
            CorrelationMethod::Pearson => "r",
            CorrelationMethod::Spearman => "rho",
        };
        format!(
            "{name} = {:.3}, p = {:.4} ({} correlation)",
            self.coefficient, self.p_value, self.strength
        )
    }
}

/// Simple linear regression y = intercept + slope·x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleRegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub rvalue: f64,
    pub r_squared: f64,
    pub f_statistic: f64,
    pub df_regression: f64,
    pub df_residual: f64,
    pub p_value: f64,
    pub significant: bool,
    /// Residual standard error √(SSres / (n - 2))
    pub standard_error: f64,
    pub slope_stderr: f64,
    pub intercept_stderr: f64,
    /// slope / slope_stderr
    pub t_statistic: f64,
    pub n: usize,
    /// Fitted line such as `y = 2.0000x + 3.0000`
    pub equation: String,
}

impl SimpleRegressionResult {
    /// Predicted value at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn summary(&self) -> String {
        format!(
            "{}, R² = {:.3}, F({}, {}) = {:.3}, p = {:.4}",
            self.equation(),
            self.r_squared,
            self.df_regression,
            self.df_residual,
            self.f_statistic,
            self.p_value
        )
    }
}

/// Multiple linear regression by least squares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleRegressionResult {
    /// One coefficient per design-matrix column
    pub coefficients: Vec<f64>,
    pub standard_errors: Vec<f64>,
    pub t_statistics: Vec<f64>,
    /// Two-sided p-value of each coefficient
    pub p_values: Vec<f64>,
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub df_regression: f64,
    pub df_residual: f64,
    pub significant: bool,
    pub n: usize,
    /// Equation such as `y = 1.0000 + 2.0000·x1 - 0.5000·x2`
    pub equation: String,
}

impl MultipleRegressionResult {
    pub fn equation(&self) -> &str {
        &self.equation
    }

    pub fn summary(&self) -> String {
        format!(
            "{}, R² = {:.3}, F({}, {}) = {:.3}, p = {:.4}",
            self.equation(),
            self.r_squared,
            self.df_regression,
            self.df_residual,
            self.f_statistic,
            self.f_p_value
        )
    }
}

/// `y = 2.0000x + 3.0000`, with the intercept sign folded into the operator.
pub(crate) fn line_equation(slope: f64, intercept: f64) -> String {
    let sign = if intercept < 0.0 { '-' } else { '+' };
    format!("y = {slope:.4}x {sign} {:.4}", intercept.abs())
}

/// `y = b0 + b1·x1 + ...` over the coefficients of a design with an intercept column.
pub(crate) fn linear_equation(coefficients: &[f64]) -> String {
    let mut out = String::from("y =");
    for (i, b) in coefficients.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!(" {b:.4}"));
        } else {
            let sign = if *b < 0.0 { '-' } else { '+' };
            out.push_str(&format!(" {sign} {:.4}·x{i}", b.abs()));
        }
    }
    out
}

/// Two-sided confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceInterval {
    pub level: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Which t test produced a [`TTestResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TTestKind {
    /// Welch's test for independent samples
    Independent,
    /// One-sample test on paired differences
    Paired,
}

/// Result of an independent or paired t test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TTestResult {
    pub kind: TTestKind,
    pub t_statistic: f64,
    pub df: f64,
    pub p_value: f64,
    pub significant: bool,
    /// Mean of the first sample (`before` for paired tests)
    pub mean1: f64,
    /// Mean of the second sample (`after` for paired tests)
    pub mean2: f64,
    pub variance1: f64,
    pub variance2: f64,
    /// mean1 - mean2 (independent) or mean(after - before) (paired)
    pub mean_difference: f64,
    pub standard_error: f64,
    pub confidence_interval: ConfidenceInterval,
    pub cohens_d: f64,
    pub effect_size: EffectSize,
    pub n1: usize,
    pub n2: usize,
}

impl TTestResult {
    pub fn summary(&self) -> String {
        format!(
            "t({}) = {:.3}, p = {:.4}, Cohen's d = {:.3} ({} effect)",
            self.df, self.t_statistic, self.p_value, self.cohens_d, self.effect_size
        )
    }
}

/// One-way ANOVA table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub df_between: f64,
    pub df_within: f64,
    pub ss_between: f64,
    pub ss_within: f64,
    pub ms_between: f64,
    pub ms_within: f64,
    pub p_value: f64,
    pub significant: bool,
    pub eta_squared: f64,
    pub effect_size: EffectSize,
    pub grand_mean: f64,
    pub group_means: Vec<f64>,
    pub group_sizes: Vec<usize>,
}

impl AnovaResult {
    pub fn summary(&self) -> String {
        format!(
            "F({}, {}) = {:.3}, p = {:.4}, η² = {:.3} ({} effect)",
            self.df_between,
            self.df_within,
            self.f_statistic,
            self.p_value,
            self.eta_squared,
            self.effect_size
        )
    }
}

/// Observed or expected counts: a flat list for goodness of fit, a
/// row-major table for independence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Frequencies {
    Counts(Vec<f64>),
    Table(Vec<Vec<f64>>),
}

impl Frequencies {
    /// Sum of all cells.
    pub fn total(&self) -> f64 {
        match self {
            Self::Counts(c) => c.iter().sum(),
            Self::Table(t) => t.iter().flatten().sum(),
        }
    }
}

/// Chi-square goodness-of-fit or independence test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChiSquareResult {
    pub chi_square: f64,
    pub df: f64,
    pub p_value: f64,
    pub significant: bool,
    pub cramers_v: f64,
    pub effect_size: EffectSize,
    pub observed: Frequencies,
    pub expected: Frequencies,
    /// Non-fatal validity warnings (low expected counts)
    pub warnings: Vec<String>,
}

impl ChiSquareResult {
    pub fn summary(&self) -> String {
        format!(
            "χ²({}) = {:.3}, p = {:.4}, Cramer's V = {:.3} ({} effect)",
            self.df, self.chi_square, self.p_value, self.cramers_v, self.effect_size
        )
    }
}

/// Mann-Whitney U test (normal approximation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MannWhitneyResult {
    /// min(U1, U2)
    pub u_statistic: f64,
    pub u1: f64,
    pub u2: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub significant: bool,
    /// |z| / √(n1 + n2)
    pub effect_size_r: f64,
    pub effect_size: EffectSize,
    pub rank_sum1: f64,
    pub rank_sum2: f64,
    pub mean_rank1: f64,
    pub mean_rank2: f64,
    pub n1: usize,
    pub n2: usize,
}

impl MannWhitneyResult {
    pub fn summary(&self) -> String {
        format!(
            "U = {:.1}, z = {:.3}, p = {:.4}, r = {:.3} ({} effect)",
            self.u_statistic, self.z_score, self.p_value, self.effect_size_r, self.effect_size
        )
    }
}

/// Wilcoxon signed-rank test (normal approximation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WilcoxonResult {
    /// min(W+, W-)
    pub w_statistic: f64,
    pub positive_rank_sum: f64,
    pub negative_rank_sum: f64,
    pub z_score: f64,
    pub p_value: f64,
    pub significant: bool,
    /// |z| / √n
    pub effect_size_r: f64,
    pub effect_size: EffectSize,
    /// Pairs with a non-zero difference
    pub n: usize,
    /// Pairs dropped because the difference was zero
    pub zero_differences: usize,
}

impl WilcoxonResult {
    pub fn summary(&self) -> String {
        format!(
            "W = {:.1}, z = {:.3}, p = {:.4}, r = {:.3} ({} effect)",
            self.w_statistic, self.z_score, self.p_value, self.effect_size_r, self.effect_size
        )
    }
}

/// Linear trend over index positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub slope: f64,
    pub intercept: f64,
    /// Centred moving average; shorter than the series by window - 1
    pub moving_average: Vec<f64>,
    pub direction: TrendDirection,
}

/// Period-based seasonality estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Seasonality {
    /// Fewer than two full periods of data.
    InsufficientData { required: usize, got: usize },
    /// Enough data, but relative strength has no meaning (zero grand mean).
    Undefined { period: usize, reason: String },
    #[serde(rename_all = "camelCase")]
    Estimated {
        period: usize,
        /// RMS deviation of seasonal means from the grand mean, over |grand mean|
        strength: f64,
        /// strength > 0.1
        seasonal: bool,
        seasonal_means: Vec<f64>,
        interpretation: SeasonalityStrength,
    },
}

/// Trend and seasonality of a series, plus its correlation with a companion series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesResult {
    pub trend: Trend,
    pub seasonality: Seasonality,
    /// Pearson r between the two series; None when it is undefined
    pub correlation: Option<f64>,
}
