//! Student's t distribution.

use super::special;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};
use std::f64::consts::PI;

/// Student's t distribution.
///
/// The Student's t distribution with ν degrees of freedom has PDF:
///
/// f(x) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) (1 + x²/ν)^(-(ν+1)/2)
///
/// As ν → ∞, the t distribution approaches the standard normal.
///
/// # Examples
///
/// ```
/// use statr::stats::{StudentT, ContinuousDistribution};
///
/// let t = StudentT::new(10.0).unwrap();
/// // Two-tailed critical value for α = 0.05
/// let t_crit = t.ppf(0.975).unwrap();
/// assert!((t_crit - 2.228).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    /// Degrees of freedom (ν)
    nu: f64,
    /// Log of normalizing constant
    log_norm: f64,
}

impl StudentT {
    /// Create a new Student's t distribution with ν degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns an error if nu is not positive and finite.
    pub fn new(nu: f64) -> StatsResult<Self> {
        if !(nu > 0.0) {
            return Err(StatsError::invalid_parameter(
                "nu",
                nu,
                "degrees of freedom must be positive",
            ));
        }
        if !nu.is_finite() {
            return Err(StatsError::invalid_parameter("nu", nu, "must be finite"));
        }

        // log_norm = ln(Γ((ν+1)/2)) - ln(√(νπ)) - ln(Γ(ν/2))
        let log_norm = special::ln_gamma((nu + 1.0) / 2.0)
            - 0.5 * (nu * PI).ln()
            - special::ln_gamma(nu / 2.0);

        Ok(Self { nu, log_norm })
    }

    /// Get the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.nu
    }
}

impl Distribution for StudentT {
    fn mean(&self) -> f64 {
        if self.nu > 1.0 { 0.0 } else { f64::NAN }
    }

    fn var(&self) -> f64 {
        if self.nu > 2.0 {
            self.nu / (self.nu - 2.0)
        } else if self.nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        (self.log_norm - ((self.nu + 1.0) / 2.0) * (1.0 + x * x / self.nu).ln()).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.5;
        }

        // CDF(x) = 1 - 0.5 * I_{ν/(ν+x²)}(ν/2, 1/2) for x > 0
        // CDF(x) = 0.5 * I_{ν/(ν+x²)}(ν/2, 1/2) for x < 0
        let t = self.nu / (self.nu + x * x);
        let beta_inc = special::betainc(self.nu / 2.0, 0.5, t);

        if x > 0.0 {
            1.0 - 0.5 * beta_inc
        } else {
            0.5 * beta_inc
        }
    }

    fn sf(&self, x: f64) -> f64 {
        // SF(x) = CDF(-x)
        self.cdf(-x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_t_creation() {
        let t = StudentT::new(10.0).unwrap();
        assert!((t.df() - 10.0).abs() < 1e-10);

        assert!(StudentT::new(0.0).is_err());
        assert!(StudentT::new(-1.0).is_err());
        assert!(StudentT::new(f64::NAN).is_err());
        assert!(StudentT::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_student_t_moments() {
        let t = StudentT::new(10.0).unwrap();
        assert!((t.mean() - 0.0).abs() < 1e-10);
        assert!((t.var() - 10.0 / 8.0).abs() < 1e-10);

        // t(1) is Cauchy
        let t = StudentT::new(1.0).unwrap();
        assert!(t.mean().is_nan());
        assert!(StudentT::new(2.0).unwrap().var().is_infinite());
    }

    #[test]
    fn test_student_t_pdf_symmetry() {
        let t = StudentT::new(5.0).unwrap();
        for x in [0.5, 1.0, 2.0, 3.0] {
            assert!((t.pdf(x) - t.pdf(-x)).abs() < 1e-14);
        }
        assert!(t.pdf(0.0) > t.pdf(1.0));
    }

    #[test]
    fn test_student_t_cdf() {
        let t = StudentT::new(10.0).unwrap();
        assert!((t.cdf(0.0) - 0.5).abs() < 1e-15);
        for x in [0.5, 1.0, 2.0] {
            assert!((t.cdf(-x) + t.cdf(x) - 1.0).abs() < 1e-13);
        }
        // t(10) two-tailed 5% critical value
        assert!((t.cdf(2.228_138_851_986_273) - 0.975).abs() < 1e-10);

        // t(1) is Cauchy: CDF(x) = 1/2 + atan(x)/π
        let c = StudentT::new(1.0).unwrap();
        assert!((c.cdf(1.0) - 0.75).abs() < 1e-13);
        assert_eq!(c.cdf(f64::INFINITY), 1.0);
        assert_eq!(c.cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_student_t_ppf_roundtrip() {
        let t = StudentT::new(10.0).unwrap();
        for p in [0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
            let x = t.ppf(p).unwrap();
            assert!((t.cdf(x) - p).abs() < 1e-9, "roundtrip failed for p={p}");
        }
    }

    #[test]
    fn test_student_t_convergence_to_normal() {
        let t = StudentT::new(100_000.0).unwrap();
        let normal_cdf_1 = 0.841_344_746_068_542_9; // Φ(1)
        assert!((t.cdf(1.0) - normal_cdf_1).abs() < 1e-5);
    }
}
