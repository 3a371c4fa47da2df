//! Generic hypothesis testing implementations.
//!
//! # Implemented Tests
//!
//! ## T-Tests
//!
//! - **Independent two-sample t-test** (`independent_ttest_impl`): **Welch's
//!   t-test**, which does not assume equal variances.
//!
//!   ```text
//!   t = (x̄₁ - x̄₂) / √(s₁²/n₁ + s₂²/n₂)
//!   ```
//!
//!   Degrees of freedom from the Welch-Satterthwaite approximation, floored
//!   to an integer:
//!   ```text
//!   df = ⌊(s₁²/n₁ + s₂²/n₂)² / [(s₁²/n₁)²/(n₁-1) + (s₂²/n₂)²/(n₂-1)]⌋
//!   ```
//!
//!   The effect size is Cohen's d with the **pooled** standard deviation,
//!   not the Welch denominator:
//!   ```text
//!   d = |x̄₁ - x̄₂| / √[((n₁-1)s₁² + (n₂-1)s₂²) / (n₁+n₂-2)]
//!   ```
//!
//! - **Paired t-test** (`paired_ttest_impl`): one-sample t-test on the
//!   differences `after - before` with df = n - 1 and d = |d̄| / s_d.
//!
//! ## ANOVA
//!
//! - **One-way ANOVA** (`one_way_anova_impl`):
//!
//!   ```text
//!   SSB = Σ nⱼ(x̄ⱼ - x̄)²,  SSW = ΣΣ(xᵢⱼ - x̄ⱼ)²
//!   F = (SSB / (k-1)) / (SSW / (N-k))
//!   η² = SSB / (SSB + SSW)
//!   ```
//!
//! ## Chi-Square
//!
//! - **Goodness of fit** (flat counts) with df = n - 1 and
//!   **independence** (contingency table) with df = (r-1)(c-1):
//!
//!   ```text
//!   χ² = Σ (O - E)² / E
//!   V  = √(χ² / (N · (m - 1)))
//!   ```
//!
//!   where m = min(r, c) for tables and m = 2 for flat counts.
//!
//! # P-Value Computation
//!
//! t tests report two-sided p-values `2 × P(T > |t|)`; F and χ² tests use
//! the upper tail. Every tail probability comes straight from the
//! distribution's survival function, so small p-values keep their precision.

use crate::stats::config::StatsConfig;
use crate::stats::continuous::{StudentT, chi_squared_upper_tail, f_upper_tail, t_two_tailed};
use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_min_len, ensure_non_empty, ensure_same_len};
use crate::stats::interpretation::EffectSize;
use crate::stats::math;
use crate::stats::traits::{
    AnovaResult, ChiSquareResult, ConfidenceInterval, Frequencies, TTestKind, TTestResult,
};

/// Two-sided interval `estimate ± t* · se` at the configured confidence level.
fn t_interval(
    config: &StatsConfig,
    estimate: f64,
    se: f64,
    df: f64,
) -> StatsResult<ConfidenceInterval> {
    let level = config.confidence_level;
    let t_crit = StudentT::new(df)?.ppf(1.0 - (1.0 - level) / 2.0)?;
    Ok(ConfidenceInterval {
        level,
        lower: estimate - t_crit * se,
        upper: estimate + t_crit * se,
    })
}

/// Generic implementation of Welch's independent t-test.
pub fn independent_ttest_impl(
    config: &StatsConfig,
    a: &[f64],
    b: &[f64],
) -> StatsResult<TTestResult> {
    ensure_min_len(a, 2, "independent t-test group 1")?;
    ensure_min_len(b, 2, "independent t-test group 2")?;
    tracing::debug!(n1 = a.len(), n2 = b.len(), "independent_ttest");

    let (n1, n2) = (a.len() as f64, b.len() as f64);
    let mean1 = math::mean(a)?;
    let mean2 = math::mean(b)?;
    let var1 = math::variance(a)?;
    let var2 = math::variance(b)?;

    let w1 = var1 / n1;
    let w2 = var2 / n2;
    let standard_error = (w1 + w2).sqrt();
    if standard_error == 0.0 {
        return Err(StatsError::degenerate(
            "independent t-test",
            "both groups have zero variance",
        ));
    }

    let mean_difference = mean1 - mean2;
    let t = mean_difference / standard_error;
    let df = ((w1 + w2).powi(2) / (w1 * w1 / (n1 - 1.0) + w2 * w2 / (n2 - 1.0)))
        .floor()
        .max(1.0);
    let p_value = t_two_tailed(t, df)?;

    let pooled_sd = (((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0)).sqrt();
    let cohens_d = mean_difference.abs() / pooled_sd;

    Ok(TTestResult {
        kind: TTestKind::Independent,
        t_statistic: t,
        df,
        p_value,
        significant: config.is_significant(p_value),
        mean1,
        mean2,
        variance1: var1,
        variance2: var2,
        mean_difference,
        standard_error,
        confidence_interval: t_interval(config, mean_difference, standard_error, df)?,
        cohens_d,
        effect_size: EffectSize::from_cohens_d(cohens_d),
        n1: a.len(),
        n2: b.len(),
    })
}

/// Generic implementation of the paired t-test.
pub fn paired_ttest_impl(
    config: &StatsConfig,
    before: &[f64],
    after: &[f64],
) -> StatsResult<TTestResult> {
    ensure_same_len(before, after, "paired t-test")?;
    ensure_min_len(before, 2, "paired t-test")?;
    tracing::debug!(n = before.len(), "paired_ttest");

    let differences: Vec<f64> = before.iter().zip(after).map(|(b, a)| a - b).collect();
    let n = differences.len() as f64;
    let mean_difference = math::mean(&differences)?;
    let sd_diff = math::standard_deviation(&differences)?;
    if sd_diff == 0.0 {
        return Err(StatsError::degenerate(
            "paired t-test",
            "differences have zero variance",
        ));
    }

    let standard_error = sd_diff / n.sqrt();
    let t = mean_difference / standard_error;
    let df = n - 1.0;
    let p_value = t_two_tailed(t, df)?;
    let cohens_d = mean_difference.abs() / sd_diff;

    Ok(TTestResult {
        kind: TTestKind::Paired,
        t_statistic: t,
        df,
        p_value,
        significant: config.is_significant(p_value),
        mean1: math::mean(before)?,
        mean2: math::mean(after)?,
        variance1: math::variance(before)?,
        variance2: math::variance(after)?,
        mean_difference,
        standard_error,
        confidence_interval: t_interval(config, mean_difference, standard_error, df)?,
        cohens_d,
        effect_size: EffectSize::from_cohens_d(cohens_d),
        n1: before.len(),
        n2: after.len(),
    })
}

/// Generic implementation of one-way ANOVA.
pub fn one_way_anova_impl(config: &StatsConfig, groups: &[&[f64]]) -> StatsResult<AnovaResult> {
    if groups.len() < 2 {
        return Err(StatsError::insufficient(2, groups.len(), "one-way ANOVA groups"));
    }
    for group in groups {
        ensure_non_empty(group, "one-way ANOVA group")?;
    }
    let k = groups.len();
    let total: usize = groups.iter().map(|g| g.len()).sum();
    if total <= k {
        return Err(StatsError::insufficient(k + 1, total, "one-way ANOVA"));
    }
    tracing::debug!(groups = k, n = total, "one_way_anova");

    let grand_mean = groups.iter().flat_map(|g| g.iter()).sum::<f64>() / total as f64;
    let group_means = groups
        .iter()
        .map(|g| math::mean(g))
        .collect::<StatsResult<Vec<f64>>>()?;

    let ss_between: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, m)| g.len() as f64 * (m - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, m)| g.iter().map(|v| (v - m).powi(2)).sum::<f64>())
        .sum();
    if ss_within == 0.0 {
        return Err(StatsError::degenerate(
            "one-way ANOVA",
            "all groups have zero within-group variance",
        ));
    }

    let df_between = (k - 1) as f64;
    let df_within = (total - k) as f64;
    let ms_between = ss_between / df_between;
    let ms_within = ss_within / df_within;
    let f = ms_between / ms_within;
    let p_value = f_upper_tail(f, df_between, df_within)?;
    let eta_squared = ss_between / (ss_between + ss_within);

    Ok(AnovaResult {
        f_statistic: f,
        df_between,
        df_within,
        ss_between,
        ss_within,
        ms_between,
        ms_within,
        p_value,
        significant: config.is_significant(p_value),
        eta_squared,
        effect_size: EffectSize::from_eta_squared(eta_squared),
        grand_mean,
        group_means,
        group_sizes: groups.iter().map(|g| g.len()).collect(),
    })
}

fn check_observed(cells: &[f64]) -> StatsResult<()> {
    if let Some(&bad) = cells.iter().find(|v| !(**v >= 0.0 && v.is_finite())) {
        return Err(StatsError::invalid_parameter(
            "observed",
            bad,
            "counts must be non-negative and finite",
        ));
    }
    Ok(())
}

fn check_expected(cells: &[f64]) -> StatsResult<()> {
    if cells.iter().any(|v| !(*v > 0.0)) {
        return Err(StatsError::degenerate(
            "chi-square test",
            "expected counts must all be positive",
        ));
    }
    Ok(())
}

/// Expected counts under independence: row total × column total / N.
fn independence_expected(table: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let cols = table[0].len();
    let row_totals: Vec<f64> = table.iter().map(|r| r.iter().sum()).collect();
    let col_totals: Vec<f64> = (0..cols).map(|j| table.iter().map(|r| r[j]).sum()).collect();
    let grand: f64 = row_totals.iter().sum();
    row_totals
        .iter()
        .map(|rt| col_totals.iter().map(|ct| rt * ct / grand).collect())
        .collect()
}

/// Generic implementation of the chi-square test.
pub fn chi_square_test_impl(
    config: &StatsConfig,
    observed: &Frequencies,
    expected: Option<&Frequencies>,
) -> StatsResult<ChiSquareResult> {
    const CONTEXT: &str = "chi-square test";

    // Flatten both shapes to (cells, expected cells, df, min dimension).
    let (obs_cells, expected, df, min_dim) = match observed {
        Frequencies::Counts(counts) => {
            if counts.len() < 2 {
                return Err(StatsError::insufficient(2, counts.len(), CONTEXT));
            }
            check_observed(counts)?;
            let exp = match expected {
                None => {
                    let uniform = counts.iter().sum::<f64>() / counts.len() as f64;
                    vec![uniform; counts.len()]
                }
                Some(Frequencies::Counts(e)) => {
                    if e.len() != counts.len() {
                        return Err(StatsError::length_mismatch(counts.len(), e.len(), CONTEXT));
                    }
                    e.clone()
                }
                Some(Frequencies::Table(t)) => {
                    return Err(StatsError::length_mismatch(counts.len(), t.len(), CONTEXT));
                }
            };
            let df = (counts.len() - 1) as f64;
            (
                counts.clone(),
                Frequencies::Counts(exp),
                df,
                2usize.min(counts.len()),
            )
        }
        Frequencies::Table(table) => {
            let rows = table.len();
            let cols = table.first().map_or(0, Vec::len);
            if rows < 2 || cols < 2 {
                return Err(StatsError::insufficient(2, rows.min(cols), CONTEXT));
            }
            if let Some(row) = table.iter().find(|r| r.len() != cols) {
                return Err(StatsError::length_mismatch(cols, row.len(), CONTEXT));
            }
            let cells: Vec<f64> = table.iter().flatten().copied().collect();
            check_observed(&cells)?;
            let exp = match expected {
                None => independence_expected(table),
                Some(Frequencies::Table(e)) => {
                    if e.len() != rows || e.iter().any(|r| r.len() != cols) {
                        let got = e.iter().map(Vec::len).sum();
                        return Err(StatsError::length_mismatch(cells.len(), got, CONTEXT));
                    }
                    e.clone()
                }
                Some(Frequencies::Counts(e)) => {
                    return Err(StatsError::length_mismatch(cells.len(), e.len(), CONTEXT));
                }
            };
            let df = ((rows - 1) * (cols - 1)) as f64;
            (cells, Frequencies::Table(exp), df, rows.min(cols))
        }
    };

    let exp_cells: Vec<f64> = match &expected {
        Frequencies::Counts(e) => e.clone(),
        Frequencies::Table(t) => t.iter().flatten().copied().collect(),
    };
    check_expected(&exp_cells)?;
    let total: f64 = obs_cells.iter().sum();
    if total == 0.0 {
        return Err(StatsError::degenerate(CONTEXT, "observed counts sum to zero"));
    }
    tracing::debug!(cells = obs_cells.len(), df, "chi_square_test");

    let mut warnings = Vec::new();
    let low = exp_cells
        .iter()
        .filter(|&&e| e < config.min_expected_frequency)
        .count();
    if low > 0 {
        tracing::warn!(
            low_cells = low,
            threshold = config.min_expected_frequency,
            "chi-square expected counts below threshold"
        );
        warnings.push(format!(
            "{low} expected cell(s) below {}; interpret the result with caution",
            config.min_expected_frequency
        ));
    }

    let chi_square: f64 = obs_cells
        .iter()
        .zip(&exp_cells)
        .map(|(o, e)| (o - e).powi(2) / e)
        .sum();
    let p_value = chi_squared_upper_tail(chi_square, df)?;
    let cramers_v = (chi_square / (total * (min_dim - 1) as f64)).sqrt();

    Ok(ChiSquareResult {
        chi_square,
        df,
        p_value,
        significant: config.is_significant(p_value),
        cramers_v,
        effect_size: EffectSize::from_cramers_v(cramers_v),
        observed: observed.clone(),
        expected,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welch_reference() {
        let config = StatsConfig::default();
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0];
        let r = independent_ttest_impl(&config, &a, &b).unwrap();
        // var1 = 2.5, var2 = 10, se = √2.5
        assert!((r.standard_error - 2.5f64.sqrt()).abs() < 1e-12);
        assert!((r.t_statistic - (-3.0 / 2.5f64.sqrt())).abs() < 1e-12);
        // Welch df = 6.25 / (0.25/4 + 4/4) = 5.88 → 5
        assert_eq!(r.df, 5.0);
        // Pooled sd = √6.25 = 2.5
        assert!((r.cohens_d - 1.2).abs() < 1e-12);
        assert_eq!(r.effect_size, EffectSize::Large);
        assert!(r.p_value > 0.05 && r.p_value < 0.2);
        assert!(!r.significant);
        let ci = r.confidence_interval;
        assert!(ci.lower < r.mean_difference && r.mean_difference < ci.upper);
        // The 95% interval straddles 0 exactly when the test is not significant.
        assert!(ci.lower < 0.0 && ci.upper > 0.0);
    }

    #[test]
    fn test_paired_reference() {
        let config = StatsConfig::default();
        let before = [10.0, 12.0, 14.0, 16.0];
        let after = [11.0, 14.0, 15.0, 18.0];
        let r = paired_ttest_impl(&config, &before, &after).unwrap();
        // differences [1, 2, 1, 2]: mean 1.5, sd = √(1/3)
        let sd = (1.0f64 / 3.0).sqrt();
        assert!((r.mean_difference - 1.5).abs() < 1e-12);
        assert!((r.t_statistic - 1.5 / (sd / 2.0)).abs() < 1e-10);
        assert_eq!(r.df, 3.0);
        assert!((r.cohens_d - 1.5 / sd).abs() < 1e-10);
        assert!(r.significant);
        assert_eq!(r.kind, TTestKind::Paired);
    }

    #[test]
    fn test_ttest_errors() {
        let config = StatsConfig::default();
        assert!(matches!(
            paired_ttest_impl(&config, &[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { .. })
        ));
        assert!(matches!(
            independent_ttest_impl(&config, &[1.0], &[1.0, 2.0]),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            independent_ttest_impl(&config, &[3.0, 3.0], &[3.0, 3.0]),
            Err(StatsError::DegenerateInput { .. })
        ));
        assert!(matches!(
            paired_ttest_impl(&config, &[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]),
            Err(StatsError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_anova_equal_groups() {
        let config = StatsConfig::default();
        let g1 = [1.0, 2.0, 3.0];
        let g2 = [3.0, 2.0, 1.0];
        let r = one_way_anova_impl(&config, &[&g1, &g2]).unwrap();
        assert!(r.f_statistic.abs() < 1e-12);
        assert!((r.p_value - 1.0).abs() < 1e-12);
        assert!(!r.significant);
        assert_eq!(r.effect_size, EffectSize::Negligible);
    }

    #[test]
    fn test_anova_reference() {
        let config = StatsConfig::default();
        let g1 = [1.0, 2.0, 3.0];
        let g2 = [4.0, 5.0, 6.0];
        let g3 = [7.0, 8.0, 9.0];
        let r = one_way_anova_impl(&config, &[&g1, &g2, &g3]).unwrap();
        // SSB = 3·(9 + 0 + 9) = 54, SSW = 6
        assert!((r.ss_between - 54.0).abs() < 1e-12);
        assert!((r.ss_within - 6.0).abs() < 1e-12);
        assert!((r.f_statistic - 27.0).abs() < 1e-10);
        assert!((r.eta_squared - 0.9).abs() < 1e-12);
        assert!(r.significant);
        assert_eq!(r.group_sizes, vec![3, 3, 3]);
    }

    #[test]
    fn test_anova_errors() {
        let config = StatsConfig::default();
        let g = [1.0, 2.0];
        assert!(matches!(
            one_way_anova_impl(&config, &[&g]),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            one_way_anova_impl(&config, &[&[1.0], &[2.0]]),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            one_way_anova_impl(&config, &[&[1.0, 1.0], &[2.0, 2.0]]),
            Err(StatsError::DegenerateInput { .. })
        ));
    }

    #[test]
    fn test_chi_square_uniform_fit() {
        let config = StatsConfig::default();
        let observed = Frequencies::Counts(vec![10.0, 10.0, 10.0, 10.0]);
        let r = chi_square_test_impl(&config, &observed, None).unwrap();
        assert_eq!(r.expected, Frequencies::Counts(vec![10.0; 4]));
        assert!(r.chi_square.abs() < 1e-12);
        assert!((r.p_value - 1.0).abs() < 1e-12);
        assert!(!r.significant);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_chi_square_goodness_of_fit() {
        let config = StatsConfig::default();
        let observed = Frequencies::Counts(vec![30.0, 10.0]);
        let r = chi_square_test_impl(&config, &observed, None).unwrap();
        // E = 20 each: χ² = 100/20 + 100/20 = 10, V = √(10/40)
        assert!((r.chi_square - 10.0).abs() < 1e-12);
        assert_eq!(r.df, 1.0);
        assert!((r.cramers_v - 0.5).abs() < 1e-12);
        assert!(r.significant);
    }

    #[test]
    fn test_chi_square_independence_table() {
        let config = StatsConfig::default();
        let observed = Frequencies::Table(vec![vec![20.0, 30.0], vec![30.0, 20.0]]);
        let r = chi_square_test_impl(&config, &observed, None).unwrap();
        // All expected = 25: χ² = 4 · 25/25 = 4
        assert!((r.chi_square - 4.0).abs() < 1e-12);
        assert_eq!(r.df, 1.0);
        assert!((r.cramers_v - 0.2).abs() < 1e-12);
        assert_eq!(r.expected, Frequencies::Table(vec![vec![25.0; 2]; 2]));
    }

    #[test]
    fn test_chi_square_low_expected_warns() {
        let config = StatsConfig::default();
        let observed = Frequencies::Counts(vec![1.0, 2.0, 3.0]);
        let r = chi_square_test_impl(&config, &observed, None).unwrap();
        assert_eq!(r.warnings.len(), 1);
        assert!(r.warnings[0].starts_with("3 expected cell(s)"));
    }

    #[test]
    fn test_chi_square_errors() {
        let config = StatsConfig::default();
        assert!(matches!(
            chi_square_test_impl(&config, &Frequencies::Counts(vec![5.0]), None),
            Err(StatsError::InsufficientData { .. })
        ));
        assert!(matches!(
            chi_square_test_impl(&config, &Frequencies::Counts(vec![5.0, -1.0]), None),
            Err(StatsError::InvalidParameter { .. })
        ));
        let observed = Frequencies::Counts(vec![5.0, 5.0]);
        assert!(matches!(
            chi_square_test_impl(
                &config,
                &observed,
                Some(&Frequencies::Counts(vec![10.0, 0.0]))
            ),
            Err(StatsError::DegenerateInput { .. })
        ));
        assert!(matches!(
            chi_square_test_impl(
                &config,
                &observed,
                Some(&Frequencies::Counts(vec![1.0, 2.0, 3.0]))
            ),
            Err(StatsError::LengthMismatch { .. })
        ));
        assert!(matches!(
            chi_square_test_impl(&config, &Frequencies::Table(vec![vec![1.0, 2.0]]), None),
            Err(StatsError::InsufficientData { .. })
        ));
    }
}
