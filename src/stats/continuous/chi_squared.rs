//! Chi-squared distribution.

use super::Gamma;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// Chi-squared distribution.
///
/// The chi-squared distribution with k degrees of freedom is a special case
/// of the gamma distribution: χ²(k) = Gamma(k/2, 1/2).
///
/// f(x) = (1 / (2^(k/2) Γ(k/2))) x^(k/2-1) exp(-x/2)  for x > 0
///
/// # Examples
///
/// ```
/// use statr::stats::{ChiSquared, ContinuousDistribution};
///
/// let chi2 = ChiSquared::new(3.0).unwrap();
/// // Critical value of the 3-df test at α = 0.05
/// assert!((chi2.sf(7.814_727_903) - 0.05).abs() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChiSquared {
    /// Degrees of freedom
    k: f64,
    /// Underlying gamma distribution
    gamma: Gamma,
}

impl ChiSquared {
    /// Create a new chi-squared distribution with k degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns an error if k is not positive.
    pub fn new(k: f64) -> StatsResult<Self> {
        if !(k > 0.0 && k.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "k",
                k,
                "degrees of freedom must be positive",
            ));
        }
        let gamma = Gamma::new(k / 2.0, 0.5)?;
        Ok(Self { k, gamma })
    }

    /// Get the degrees of freedom.
    pub fn df(&self) -> f64 {
        self.k
    }
}

impl Distribution for ChiSquared {
    fn mean(&self) -> f64 {
        self.k
    }

    fn var(&self) -> f64 {
        2.0 * self.k
    }
}

impl ContinuousDistribution for ChiSquared {
    fn pdf(&self, x: f64) -> f64 {
        self.gamma.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.gamma.cdf(x)
    }

    fn sf(&self, x: f64) -> f64 {
        self.gamma.sf(x)
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chi_squared_creation() {
        let chi2 = ChiSquared::new(5.0).unwrap();
        assert!((chi2.df() - 5.0).abs() < 1e-10);
        assert!(ChiSquared::new(0.0).is_err());
        assert!(ChiSquared::new(f64::NAN).is_err());
    }

    #[test]
    fn test_chi_squared_moments() {
        let chi2 = ChiSquared::new(4.0).unwrap();
        assert!((chi2.mean() - 4.0).abs() < 1e-12);
        assert!((chi2.var() - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_chi_squared_cdf_reference() {
        // χ²(2) is Exponential(1/2): CDF = 1 - exp(-x/2)
        let chi2 = ChiSquared::new(2.0).unwrap();
        assert!((chi2.cdf(3.0) - (1.0 - (-1.5f64).exp())).abs() < 1e-13);

        // 95th percentile of χ²(1) is 3.841458820694124
        let chi1 = ChiSquared::new(1.0).unwrap();
        assert!((chi1.cdf(3.841_458_820_694_124) - 0.95).abs() < 1e-10);
        assert!((chi1.ppf(0.95).unwrap() - 3.841_458_820_694_124).abs() < 1e-8);

        assert_eq!(chi1.cdf(0.0), 0.0);
        assert_eq!(chi1.sf(f64::INFINITY), 0.0);
    }
}
