//! Continuous probability distributions.
//!
//! The distributions here exist to turn test statistics into p-values. Each
//! implements [`ContinuousDistribution`](crate::stats::ContinuousDistribution);
//! the free functions below are the scalar CDF shortcuts the test routines use.

mod chi_squared;
mod f_distribution;
mod gamma;
mod normal;
pub mod special;
mod student_t;

pub use chi_squared::ChiSquared;
pub use f_distribution::FDistribution;
pub use gamma::Gamma;
pub use normal::Normal;
pub use student_t::StudentT;

use crate::stats::distribution::ContinuousDistribution;
use crate::stats::error::StatsResult;

/// Standard normal CDF Φ(z).
pub fn normal_cdf(z: f64) -> f64 {
    special::norm_cdf(z)
}

/// Student's t CDF with `df` degrees of freedom.
///
/// # Errors
///
/// Returns `InvalidParameter` if `df` is not positive and finite.
pub fn t_cdf(t: f64, df: f64) -> StatsResult<f64> {
    Ok(StudentT::new(df)?.cdf(t))
}

/// F distribution CDF with `df1` and `df2` degrees of freedom.
///
/// # Errors
///
/// Returns `InvalidParameter` if either df is not positive and finite.
pub fn f_cdf(f: f64, df1: f64, df2: f64) -> StatsResult<f64> {
    Ok(FDistribution::new(df1, df2)?.cdf(f))
}

/// Chi-squared CDF with `df` degrees of freedom.
///
/// # Errors
///
/// Returns `InvalidParameter` if `df` is not positive and finite.
pub fn chi_squared_cdf(x: f64, df: f64) -> StatsResult<f64> {
    Ok(ChiSquared::new(df)?.cdf(x))
}

/// Two-sided p-value of a t statistic: 2·P(T > |t|).
pub(crate) fn t_two_tailed(t: f64, df: f64) -> StatsResult<f64> {
    let dist = StudentT::new(df)?;
    Ok((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}

/// Two-sided p-value of a z statistic: 2·P(Z > |z|).
pub(crate) fn z_two_tailed(z: f64) -> f64 {
    (2.0 * special::norm_cdf(-z.abs())).clamp(0.0, 1.0)
}

/// Upper-tail p-value of an F statistic.
pub(crate) fn f_upper_tail(f: f64, df1: f64, df2: f64) -> StatsResult<f64> {
    Ok(FDistribution::new(df1, df2)?.sf(f))
}

/// Upper-tail p-value of a chi-squared statistic.
pub(crate) fn chi_squared_upper_tail(x: f64, df: f64) -> StatsResult<f64> {
    Ok(ChiSquared::new(df)?.sf(x))
}
