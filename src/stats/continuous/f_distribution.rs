//! F distribution (Fisher-Snedecor).

use super::special;
use crate::stats::distribution::{ContinuousDistribution, Distribution};
use crate::stats::error::{StatsError, StatsResult};

/// F distribution (Fisher-Snedecor distribution).
///
/// The F distribution with d1 and d2 degrees of freedom is the ratio of two
/// chi-squared variables divided by their degrees of freedom. Its CDF is
///
/// F(x) = I_{d1·x/(d1·x + d2)}(d1/2, d2/2)
///
/// # Examples
///
/// ```
/// use statr::stats::{FDistribution, ContinuousDistribution};
///
/// // ANOVA F-test with 3 and 20 degrees of freedom
/// let f = FDistribution::new(3.0, 20.0).unwrap();
/// let p_value = f.sf(3.5); // Right-tail probability
/// assert!(p_value > 0.0 && p_value < 0.05);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FDistribution {
    /// Numerator degrees of freedom (d1)
    d1: f64,
    /// Denominator degrees of freedom (d2)
    d2: f64,
    /// Log of normalizing constant: -ln B(d1/2, d2/2) + (d1/2) ln(d1/d2)
    log_norm: f64,
}

impl FDistribution {
    /// Create a new F distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if either parameter is not positive and finite.
    pub fn new(d1: f64, d2: f64) -> StatsResult<Self> {
        if !(d1 > 0.0 && d1.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "d1",
                d1,
                "numerator df must be positive",
            ));
        }
        if !(d2 > 0.0 && d2.is_finite()) {
            return Err(StatsError::invalid_parameter(
                "d2",
                d2,
                "denominator df must be positive",
            ));
        }

        let log_norm = -special::ln_beta(d1 / 2.0, d2 / 2.0) + (d1 / 2.0) * (d1 / d2).ln();
        Ok(Self { d1, d2, log_norm })
    }

    /// Numerator degrees of freedom.
    pub fn dfn(&self) -> f64 {
        self.d1
    }

    /// Denominator degrees of freedom.
    pub fn dfd(&self) -> f64 {
        self.d2
    }
}

impl Distribution for FDistribution {
    fn mean(&self) -> f64 {
        if self.d2 > 2.0 {
            self.d2 / (self.d2 - 2.0)
        } else {
            f64::NAN
        }
    }

    fn var(&self) -> f64 {
        let (d1, d2) = (self.d1, self.d2);
        if d2 > 4.0 {
            2.0 * d2 * d2 * (d1 + d2 - 2.0) / (d1 * (d2 - 2.0).powi(2) * (d2 - 4.0))
        } else if d2 > 2.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for FDistribution {
    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        let (d1, d2) = (self.d1, self.d2);
        (self.log_norm + (d1 / 2.0 - 1.0) * x.ln()
            - ((d1 + d2) / 2.0) * (1.0 + d1 * x / d2).ln())
        .exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        if x.is_infinite() {
            return 1.0;
        }
        let t = self.d1 * x / (self.d1 * x + self.d2);
        special::betainc(self.d1 / 2.0, self.d2 / 2.0, t)
    }

    fn sf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 1.0;
        }
        if x.is_infinite() {
            return 0.0;
        }
        // Complementary argument keeps the upper tail accurate.
        let t = self.d2 / (self.d2 + self.d1 * x);
        special::betainc(self.d2 / 2.0, self.d1 / 2.0, t)
    }

    fn support(&self) -> (f64, f64) {
        (0.0, f64::INFINITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_creation() {
        assert!(FDistribution::new(3.0, 20.0).is_ok());
        assert!(FDistribution::new(0.0, 20.0).is_err());
        assert!(FDistribution::new(3.0, -1.0).is_err());
    }

    #[test]
    fn test_f_moments() {
        let f = FDistribution::new(5.0, 10.0).unwrap();
        assert!((f.mean() - 10.0 / 8.0).abs() < 1e-12);
        assert!(FDistribution::new(5.0, 2.0).unwrap().mean().is_nan());
    }

    #[test]
    fn test_f_cdf_reference() {
        // F(1, 1) at x = 1 is exactly 1/2
        let f11 = FDistribution::new(1.0, 1.0).unwrap();
        assert!((f11.cdf(1.0) - 0.5).abs() < 1e-13);

        // Upper 5% point of F(2, 10) is 4.102821015130399
        let f = FDistribution::new(2.0, 10.0).unwrap();
        assert!((f.sf(4.102_821_015_130_399) - 0.05).abs() < 1e-10);
        assert!((f.cdf(2.0) + f.sf(2.0) - 1.0).abs() < 1e-14);

        assert_eq!(f.cdf(0.0), 0.0);
        assert_eq!(f.cdf(f64::INFINITY), 1.0);
        assert_eq!(f.sf(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_f_pdf_integrates_to_cdf() {
        // Trapezoid check of the density against the CDF on [0.5, 2].
        let f = FDistribution::new(4.0, 12.0).unwrap();
        let steps = 2000;
        let (a, b) = (0.5, 2.0);
        let h = (b - a) / steps as f64;
        let mut area = 0.5 * (f.pdf(a) + f.pdf(b));
        for i in 1..steps {
            area += f.pdf(a + i as f64 * h);
        }
        area *= h;
        assert!((area - (f.cdf(b) - f.cdf(a))).abs() < 1e-6);
    }
}
