//! Qualitative labels attached to statistics.
//!
//! Every label is derived from a number by a fixed set of thresholds. The
//! `from_*` constructors hold the thresholds; `Display` gives the text shown
//! to users.
//!
//! | Label                 | Input              | Bands                      |
//! |-----------------------|--------------------|----------------------------|
//! | [`Variability`]       | CV in percent      | < 15, < 30, else           |
//! | [`SkewnessShape`]     | \|skewness\|       | < 0.5, < 1, else           |
//! | [`KurtosisShape`]     | \|excess kurtosis\|| < 0.5, < 1, else           |
//! | [`Normality`]         | \|skew\|, \|kurt\| | both ≤ 0.5, both ≤ 1, else |
//! | [`CorrelationStrength`]| \|r\|             | ≥ 0.9, 0.7, 0.5, 0.3, else |
//! | [`EffectSize`]        | d, η², V, r        | per-measure cutoffs        |
//! | [`SeasonalityStrength`]| strength          | < 0.1, < 0.3, < 0.5, else  |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relative spread from the coefficient of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variability {
    Low,
    Medium,
    High,
}

impl Variability {
    /// Band a coefficient of variation given in percent.
    pub fn from_cv_percent(cv: f64) -> Self {
        if cv < 15.0 {
            Self::Low
        } else if cv < 30.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

impl fmt::Display for Variability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Symmetry of a sample from its skewness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkewnessShape {
    NearSymmetric,
    SlightlySkewed,
    HighlySkewed,
}

impl SkewnessShape {
    pub fn from_skewness(skewness: f64) -> Self {
        let s = skewness.abs();
        if s < 0.5 {
            Self::NearSymmetric
        } else if s < 1.0 {
            Self::SlightlySkewed
        } else {
            Self::HighlySkewed
        }
    }
}

impl fmt::Display for SkewnessShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NearSymmetric => "near symmetric",
            Self::SlightlySkewed => "slightly skewed",
            Self::HighlySkewed => "highly skewed",
        })
    }
}

/// Tail weight relative to the normal distribution, from excess kurtosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KurtosisShape {
    NearNormal,
    SlightlyDifferent,
    VeryDifferent,
}

impl KurtosisShape {
    pub fn from_kurtosis(kurtosis: f64) -> Self {
        let k = kurtosis.abs();
        if k < 0.5 {
            Self::NearNormal
        } else if k < 1.0 {
            Self::SlightlyDifferent
        } else {
            Self::VeryDifferent
        }
    }
}

impl fmt::Display for KurtosisShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NearNormal => "near normal",
            Self::SlightlyDifferent => "slightly different from normal",
            Self::VeryDifferent => "very different from normal",
        })
    }
}

/// Outcome of the skewness/kurtosis normality heuristic.
///
/// This is a rule of thumb on the shape moments, not a formal test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normality {
    NearNormal,
    SlightlyDifferent,
    Different,
}

impl Normality {
    pub fn from_shape(skewness: f64, kurtosis: f64) -> Self {
        let (s, k) = (skewness.abs(), kurtosis.abs());
        if s > 1.0 || k > 1.0 {
            Self::Different
        } else if s > 0.5 || k > 0.5 {
            Self::SlightlyDifferent
        } else {
            Self::NearNormal
        }
    }
}

impl fmt::Display for Normality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NearNormal => "near normal",
            Self::SlightlyDifferent => "slightly different from normal",
            Self::Different => "different from normal",
        })
    }
}

/// Strength of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    pub fn from_coefficient(r: f64) -> Self {
        let a = r.abs();
        if a >= 0.9 {
            Self::VeryStrong
        } else if a >= 0.7 {
            Self::Strong
        } else if a >= 0.5 {
            Self::Moderate
        } else if a >= 0.3 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryWeak => "very weak",
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::VeryStrong => "very strong",
        })
    }
}

/// Magnitude of an effect size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSize {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectSize {
    fn banded(value: f64, small: f64, medium: f64, large: f64) -> Self {
        let v = value.abs();
        if v < small {
            Self::Negligible
        } else if v < medium {
            Self::Small
        } else if v < large {
            Self::Medium
        } else {
            Self::Large
        }
    }

    /// Cohen's d: 0.2 / 0.5 / 0.8.
    pub fn from_cohens_d(d: f64) -> Self {
        Self::banded(d, 0.2, 0.5, 0.8)
    }

    /// Eta squared: 0.01 / 0.06 / 0.14.
    pub fn from_eta_squared(eta_squared: f64) -> Self {
        Self::banded(eta_squared, 0.01, 0.06, 0.14)
    }

    /// Cramer's V: 0.1 / 0.3 / 0.5.
    pub fn from_cramers_v(v: f64) -> Self {
        Self::banded(v, 0.1, 0.3, 0.5)
    }

    /// Rank-biserial style r = |z|/√n: 0.1 / 0.3 / 0.5.
    pub fn from_r(r: f64) -> Self {
        Self::banded(r, 0.1, 0.3, 0.5)
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        })
    }
}

/// Strength of a seasonal pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityStrength {
    None,
    Weak,
    Moderate,
    Strong,
}

impl SeasonalityStrength {
    pub fn from_strength(strength: f64) -> Self {
        if strength < 0.1 {
            Self::None
        } else if strength < 0.3 {
            Self::Weak
        } else if strength < 0.5 {
            Self::Moderate
        } else {
            Self::Strong
        }
    }
}

impl fmt::Display for SeasonalityStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "no seasonality",
            Self::Weak => "weak seasonality",
            Self::Moderate => "moderate seasonality",
            Self::Strong => "strong seasonality",
        })
    }
}

/// Direction of a fitted trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Flat,
}

impl TrendDirection {
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Self::Increasing
        } else if slope < 0.0 {
            Self::Decreasing
        } else {
            Self::Flat
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Flat => "flat",
        })
    }
}
