//! Gamma distribution.

use super::special;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Gamma distribution.
///
/// The gamma distribution with shape α and rate β has PDF:
///
/// f(x) = (β^α / Γ(α)) x^(α-1) exp(-βx)  for x > 0
///
/// Its CDF is the regularized lower incomplete gamma function P(α, βx).
#[derive(Debug, Clone, Copy)]
pub struct Gamma {
    /// Shape parameter (α)
    alpha: f64,
    /// Rate parameter (β)
    beta: f64,
    /// Log of normalizing constant: α*ln(β) - ln(Γ(α))
    log_norm: f64,
}

impl Gamma {
    /// Create a new gamma distribution with shape α and rate β.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is not positive and finite.
    pub fn new(alpha: f64, beta: f64) -> StatsResult<Self> {
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "alpha",
                alpha,
                "shape must be positive and finite",
            ));
        }
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "beta",
                beta,
                "rate must be positive and finite",
            ));
        }

        let log_norm = alpha * beta.ln() - special::ln_gamma(alpha);
        Ok(Self {
            alpha,
            beta,
            log_norm,
        })
    }

    /// Get the shape parameter α.
    pub fn shape(&self) -> f64 {
        self.alpha
    }

    /// Get the rate parameter β.
    pub fn rate(&self) -> f64 {
        self.beta
    }
}

impl Distribution for Gamma {
    fn mean(&self) -> f64 {
        self.alpha / self.beta
    }

    fn var(&self) -> f64 {
        self.alpha / (self.beta * self.beta)
    }
}

impl ContinuousDistribution for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        (self.log_norm + (self.alpha - 1.0) * x.ln() - self.beta * x).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            0.0
        } else {
            special::gammainc(self.alpha, self.beta * x)
        }
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            1.0
        } else {
            special::gammaincc(self.alpha, self.beta * x)
        }
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gamma_creation() {
        assert!(Gamma::new(2.0, 1.0).is_ok());
        assert!(Gamma::new(0.0, 1.0).is_err());
        assert!(Gamma::new(1.0, -1.0).is_err());
        assert!(Gamma::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_gamma_exponential_special_case() {
        // Gamma(1, λ) is Exponential(λ)
        let g = Gamma::new(1.0, 2.0).unwrap();
        assert!((g.mean() - 0.5).abs() < 1e-12);
        assert!((g.cdf(1.0) - (1.0 - (-2.0f64).exp())).abs() < 1e-13);
        assert!((g.pdf(1.0) - 2.0 * (-2.0f64).exp()).abs() < 1e-13);
        assert!((g.cdf(0.7) + g.sf(0.7) - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_gamma_ppf_roundtrip() {
        let g = Gamma::new(3.0, 0.5).unwrap();
        for p in [0.05, 0.5, 0.95] {
            let x = g.ppf(p).unwrap();
            assert!((g.cdf(x) - p).abs() < 1e-9);
        }
        assert_eq!(g.ppf(0.0).unwrap(), 0.0);
    }
}
