//! Distribution traits shared by the continuous distributions.

use crate::stats::error::{StatsError, StatsResult};

/// Summary moments of a probability distribution.
pub trait Distribution {
    /// Mean (NaN when undefined).
    fn mean(&self) -> f64;

    /// Variance (NaN when undefined, infinite when divergent).
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }
}

/// A continuous distribution with density, CDF, survival and quantile functions.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    ///
    /// Implementations override this when the upper tail can be computed
    /// directly, which keeps small p-values accurate.
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Lower and upper bound of the support.
    fn support(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Quantile function (inverse CDF).
    ///
    /// The default brackets the root by doubling outward from the support
    /// bounds, then bisects on the CDF.
    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) || p.is_nan() {
            return Err(StatsError::InvalidProbability { value: p });
        }
        let (lower, upper) = self.support();
        if p == 0.0 {
            return Ok(lower);
        }
        if p == 1.0 {
            return Ok(upper);
        }

        let mut lo = if lower.is_finite() { lower } else { -1.0 };
        let mut hi = if upper.is_finite() { upper } else { lo.max(0.0) + 1.0 };
        let mut expansions = 0;
        while self.cdf(lo) > p && !lower.is_finite() && expansions < MAX_EXPANSIONS {
            lo *= 2.0;
            expansions += 1;
        }
        while self.cdf(hi) < p && !upper.is_finite() && expansions < MAX_EXPANSIONS {
            hi = if hi <= 0.0 { 1.0 } else { hi * 2.0 };
            expansions += 1;
        }

        for _ in 0..MAX_BISECTIONS {
            let mid = 0.5 * (lo + hi);
            if self.cdf(mid) < p {
                lo = mid;
            } else {
                hi = mid;
            }
            if hi - lo <= PPF_TOL * mid.abs().max(1.0) {
                break;
            }
        }
        Ok(0.5 * (lo + hi))
    }
}

const MAX_EXPANSIONS: usize = 2048;
const MAX_BISECTIONS: usize = 300;
const PPF_TOL: f64 = 1e-13;
