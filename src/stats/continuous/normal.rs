//! Normal (Gaussian) distribution.

use super::special::{self, INV_SQRT_2PI};
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Normal (Gaussian) distribution.
///
/// The normal distribution with mean μ and standard deviation σ has PDF:
///
/// f(x) = (1 / (σ√(2π))) exp(-(x-μ)² / (2σ²))
///
/// # Examples
///
/// ```
/// use statr::stats::{Normal, ContinuousDistribution};
///
/// let n = Normal::standard();
/// assert!((n.cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!((n.cdf(1.959_963_985) - 0.975).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a new normal distribution with given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns an error if sigma is not positive or mu is not finite.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "sigma",
                sigma,
                "must be positive and finite",
            ));
        }
        if !mu.is_finite() {
            return Err(StatsError::invalid_parameter("mu", mu, "must be finite"));
        }
        Ok(Self { mu, sigma })
    }

    /// Create a standard normal distribution N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Standardize a value: z = (x - μ) / σ
    fn standardize(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        INV_SQRT_2PI * (-0.5 * z * z).exp() / self.sigma
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.standardize(x))
    }

    fn sf(&self, x: f64) -> f64 {
        // Upper tail by symmetry keeps precision for large z.
        special::norm_cdf(-self.standardize(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_creation() {
        assert!(Normal::new(0.0, 1.0).is_ok());
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_normal_pdf_peak() {
        let n = Normal::standard();
        assert!((n.pdf(0.0) - INV_SQRT_2PI).abs() < 1e-15);
        assert!((n.pdf(1.0) - n.pdf(-1.0)).abs() < 1e-15);
    }

    #[test]
    fn test_normal_cdf_sf() {
        let n = Normal::new(100.0, 15.0).unwrap();
        assert!((n.cdf(100.0) - 0.5).abs() < 1e-15);
        assert!((n.cdf(115.0) - 0.841_344_746_068_542_9).abs() < 1e-13);
        assert!((n.cdf(130.0) + n.sf(130.0) - 1.0).abs() < 1e-14);
        // Far tail stays positive instead of cancelling to 0.
        assert!(Normal::standard().sf(9.0) > 0.0);
    }

    #[test]
    fn test_normal_ppf() {
        let n = Normal::standard();
        assert!((n.ppf(0.975).unwrap() - 1.959_963_984_540_054).abs() < 1e-9);
        assert!(n.ppf(0.5).unwrap().abs() < 1e-12);
        assert!(n.ppf(1.2).is_err());
    }
}
