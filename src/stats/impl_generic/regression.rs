//! Generic regression implementations.
//!
//! # Simple Linear Regression
//!
//! Fits the model y = β₀ + β₁x + ε using **Ordinary Least Squares (OLS)**.
//!
//! ## Formulas
//!
//! **Slope and intercept:**
//! ```text
//! β₁ = SS_xy / SS_xx
//! β₀ = ȳ - β₁x̄
//! ```
//!
//! **Goodness of fit** with df = (1, n - 2):
//! ```text
//! R² = 1 - SS_res / SS_tot
//! F  = (SS_tot - SS_res) / (SS_res / (n - 2))
//! ```
//!
//! **Standard errors:**
//! ```text
//! s² = SS_res / (n - 2)
//! SE(β₁) = √(s² / SS_xx)
//! SE(β₀) = √(s² (1/n + x̄²/SS_xx))
//! ```
//!
//! where:
//! - SS_xx = Σ(xᵢ - x̄)²
//! - SS_xy = Σ(xᵢ - x̄)(yᵢ - ȳ)
//! - SS_tot = Σ(yᵢ - ȳ)²
//!
//! # Multiple Linear Regression
//!
//! Solves the normal equations β = (XᵀX)⁻¹Xᵀy, inverting XᵀX by Gauss-Jordan
//! elimination. The design matrix is used as given; the overall F-test uses
//! df = (k - 1, n - k), which assumes one column is the intercept (see
//! [`with_intercept`]). Per-coefficient standard errors come from the
//! diagonal of the inverse:
//!
//! ```text
//! SE(βᵢ) = √(MS_res · [(XᵀX)⁻¹]ᵢᵢ)
//! ```
//!
//! ## Assumptions
//!
//! OLS assumes:
//! 1. **Linearity**: True relationship is linear
//! 2. **Independence**: Observations are independent
//! 3. **Homoscedasticity**: Constant variance of residuals
//! 4. **Normality**: Residuals are normally distributed (for valid p-values)

use super::linalg;
use crate::stats::config::StatsConfig;
use crate::stats::continuous::{f_upper_tail, t_two_tailed};
use crate::stats::error::{StatsError, StatsResult};
use crate::stats::helpers::{ensure_min_len, ensure_same_len};
use crate::stats::math;
use crate::stats::traits::{
    MultipleRegressionResult, SimpleRegressionResult, line_equation, linear_equation,
};

/// SS_xx below this fraction of Σx² means x is numerically constant.
const DEGENERATE_TOL: f64 = 1e-12;

/// Prepend a column of ones to every row of a design matrix.
pub fn with_intercept(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| {
            let mut r = Vec::with_capacity(row.len() + 1);
            r.push(1.0);
            r.extend_from_slice(row);
            r
        })
        .collect()
}

/// Centered sums (x̄, ȳ, SS_xx, SS_yy, SS_xy).
fn centered_sums(x: &[f64], y: &[f64]) -> StatsResult<(f64, f64, f64, f64, f64)> {
    let mx = math::mean(x)?;
    let my = math::mean(y)?;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let (dx, dy) = (a - mx, b - my);
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    Ok((mx, my, sxx, syy, sxy))
}

fn ensure_x_varies(x: &[f64], sxx: f64, context: &str) -> StatsResult<()> {
    let sum_sq: f64 = x.iter().map(|v| v * v).sum();
    if sxx <= DEGENERATE_TOL * sum_sq {
        return Err(StatsError::degenerate(context, "predictor has zero variance"));
    }
    Ok(())
}

/// Least-squares (slope, intercept) of `y` on `x`.
pub(crate) fn least_squares_line(x: &[f64], y: &[f64], context: &str) -> StatsResult<(f64, f64)> {
    ensure_same_len(x, y, context)?;
    ensure_min_len(x, 2, context)?;
    let (mx, my, sxx, _, sxy) = centered_sums(x, y)?;
    ensure_x_varies(x, sxx, context)?;
    let slope = sxy / sxx;
    Ok((slope, my - slope * mx))
}

/// Generic implementation of simple linear regression.
pub fn simple_linear_impl(
    config: &StatsConfig,
    x: &[f64],
    y: &[f64],
) -> StatsResult<SimpleRegressionResult> {
    ensure_same_len(x, y, "simple regression")?;
    ensure_min_len(x, 3, "simple regression")?;
    tracing::debug!(n = x.len(), "simple_linear");

    let (mx, my, sxx, syy, sxy) = centered_sums(x, y)?;
    ensure_x_varies(x, sxx, "simple regression")?;
    if syy == 0.0 {
        return Err(StatsError::degenerate(
            "simple regression",
            "response has zero variance",
        ));
    }

    let n = x.len();
    let n_f = n as f64;
    let slope = sxy / sxx;
    let intercept = my - slope * mx;

    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| {
            let e = yi - (intercept + slope * xi);
            e * e
        })
        .sum();
    let r_squared = (1.0 - ss_res / syy).clamp(0.0, 1.0);

    let df_residual = n_f - 2.0;
    let ms_res = ss_res / df_residual;
    let ss_reg = (syy - ss_res).max(0.0);

    let (f_statistic, p_value) = if ms_res > 0.0 {
        let f = ss_reg / ms_res;
        (f, f_upper_tail(f, 1.0, df_residual)?)
    } else {
        (f64::INFINITY, 0.0)
    };

    let standard_error = ms_res.sqrt();
    let slope_stderr = (ms_res / sxx).sqrt();
    let intercept_stderr = (ms_res * (1.0 / n_f + mx * mx / sxx)).sqrt();
    let t_statistic = if slope_stderr > 0.0 {
        slope / slope_stderr
    } else {
        f64::INFINITY.copysign(slope)
    };

    Ok(SimpleRegressionResult {
        slope,
        intercept,
        rvalue: (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0),
        r_squared,
        f_statistic,
        df_regression: 1.0,
        df_residual,
        p_value,
        significant: config.is_significant(p_value),
        standard_error,
        slope_stderr,
        intercept_stderr,
        t_statistic,
        equation: line_equation(slope, intercept),
        n,
    })
}

/// Generic implementation of multiple linear regression.
pub fn multiple_linear_impl(
    config: &StatsConfig,
    x: &[Vec<f64>],
    y: &[f64],
) -> StatsResult<MultipleRegressionResult> {
    const CONTEXT: &str = "multiple regression";

    let n = x.len();
    if n == 0 {
        return Err(StatsError::empty(CONTEXT));
    }
    if n != y.len() {
        return Err(StatsError::length_mismatch(n, y.len(), CONTEXT));
    }
    let k = x[0].len();
    if let Some(row) = x.iter().find(|row| row.len() != k) {
        return Err(StatsError::length_mismatch(k, row.len(), CONTEXT));
    }
    if k < 2 {
        return Err(StatsError::insufficient(2, k, "multiple regression columns"));
    }
    if n <= k {
        return Err(StatsError::insufficient(k + 1, n, CONTEXT));
    }
    tracing::debug!(n, k, "multiple_linear");

    let xtx = linalg::gram(x, k);
    let inv = linalg::invert(&xtx, CONTEXT)?;
    let coefficients = linalg::mat_vec(&inv, &linalg::xt_y(x, y, k));

    let my = math::mean(y)?;
    let ss_tot: f64 = y.iter().map(|v| (v - my) * (v - my)).sum();
    if ss_tot == 0.0 {
        return Err(StatsError::degenerate(CONTEXT, "response has zero variance"));
    }
    let fitted = linalg::mat_vec(x, &coefficients);
    let ss_res: f64 = y
        .iter()
        .zip(&fitted)
        .map(|(yi, fi)| (yi - fi) * (yi - fi))
        .sum();

    let n_f = n as f64;
    let k_f = k as f64;
    let r_squared = 1.0 - ss_res / ss_tot;
    let adjusted_r_squared = 1.0 - (1.0 - r_squared) * (n_f - 1.0) / (n_f - k_f);
    let df_regression = k_f - 1.0;
    let df_residual = n_f - k_f;
    let ms_reg = (ss_tot - ss_res).max(0.0) / df_regression;
    let ms_res = ss_res / df_residual;

    let (f_statistic, f_p_value) = if ms_res > 0.0 {
        let f = ms_reg / ms_res;
        (f, f_upper_tail(f, df_regression, df_residual)?)
    } else {
        (f64::INFINITY, 0.0)
    };

    let mut standard_errors = Vec::with_capacity(k);
    let mut t_statistics = Vec::with_capacity(k);
    let mut p_values = Vec::with_capacity(k);
    for (i, &b) in coefficients.iter().enumerate() {
        let se = (ms_res * inv[i][i]).max(0.0).sqrt();
        let (t, p) = if se > 0.0 {
            let t = b / se;
            (t, t_two_tailed(t, df_residual)?)
        } else if b == 0.0 {
            (0.0, 1.0)
        } else {
            (f64::INFINITY.copysign(b), 0.0)
        };
        standard_errors.push(se);
        t_statistics.push(t);
        p_values.push(p);
    }

    Ok(MultipleRegressionResult {
        equation: linear_equation(&coefficients),
        coefficients,
        standard_errors,
        t_statistics,
        p_values,
        r_squared,
        adjusted_r_squared,
        f_statistic,
        f_p_value,
        df_regression,
        df_residual,
        significant: config.is_significant(f_p_value),
        n,
    })
}
