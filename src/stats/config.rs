//! Engine configuration.

use crate::stats::error::{StatsError, StatsResult};
use serde::{Deserialize, Serialize};

/// Read-only settings threaded into every statistics routine.
///
/// # Example
/// ```
/// use statr::stats::StatsConfig;
///
/// let config = StatsConfig::default();
/// assert_eq!(config.significance_level, 0.05);
/// assert_eq!(config.frequency_bins, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsConfig {
    /// Significance level (alpha): a test is significant when p < alpha.
    ///
    /// - 0.05 (default)
    /// - 0.01 with [`StatsConfig::strict`]
    /// - 0.10 with [`StatsConfig::permissive`]
    pub significance_level: f64,

    /// Coverage of reported confidence intervals.
    ///
    /// Default: 0.95
    pub confidence_level: f64,

    /// Default number of equal-width bins for frequency tables.
    pub frequency_bins: usize,

    /// Season length used by seasonality analysis. At least two full
    /// periods of data are needed before a strength is reported.
    ///
    /// Default: 12
    pub seasonal_period: usize,

    /// Width of the centred moving average attached to a trend.
    ///
    /// Default: 3
    pub moving_average_window: usize,

    /// Tukey fence multiplier: outliers lie outside
    /// `[q1 - k·iqr, q3 + k·iqr]`.
    pub outlier_iqr_multiplier: f64,

    /// Chi-square cells with a smaller expected count produce a warning.
    ///
    /// Default: 5.0
    pub min_expected_frequency: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            confidence_level: 0.95,
            frequency_bins: 10,
            seasonal_period: 12,
            moving_average_window: 3,
            outlier_iqr_multiplier: 1.5,
            min_expected_frequency: 5.0,
        }
    }
}

impl StatsConfig {
    /// Stricter testing: alpha = 0.01, 99% intervals.
    pub fn strict() -> Self {
        Self {
            significance_level: 0.01,
            confidence_level: 0.99,
            ..Self::default()
        }
    }

    /// Looser testing: alpha = 0.10, 90% intervals.
    pub fn permissive() -> Self {
        Self {
            significance_level: 0.10,
            confidence_level: 0.90,
            ..Self::default()
        }
    }

    /// Parse a JSON settings blob. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the JSON is malformed or fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> StatsResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| StatsError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> StatsResult<()> {
        let invalid = |reason: String| Err(StatsError::InvalidConfig { reason });

        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return invalid(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return invalid(format!(
                "confidence_level must be in (0, 1), got {}",
                self.confidence_level
            ));
        }
        if self.frequency_bins == 0 {
            return invalid("frequency_bins must be >= 1".to_string());
        }
        if self.seasonal_period < 2 {
            return invalid(format!(
                "seasonal_period must be >= 2, got {}",
                self.seasonal_period
            ));
        }
        if self.moving_average_window == 0 {
            return invalid("moving_average_window must be >= 1".to_string());
        }
        if !(self.outlier_iqr_multiplier >= 0.0 && self.outlier_iqr_multiplier.is_finite()) {
            return invalid(format!(
                "outlier_iqr_multiplier must be non-negative, got {}",
                self.outlier_iqr_multiplier
            ));
        }
        if !(self.min_expected_frequency >= 0.0 && self.min_expected_frequency.is_finite()) {
            return invalid(format!(
                "min_expected_frequency must be non-negative, got {}",
                self.min_expected_frequency
            ));
        }
        Ok(())
    }

    /// True when `p_value` falls below the significance level.
    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value < self.significance_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StatsConfig::default();
        assert_eq!(config.significance_level, 0.05);
        assert_eq!(config.seasonal_period, 12);
        assert_eq!(config.moving_average_window, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let strict = StatsConfig::strict();
        assert_eq!(strict.significance_level, 0.01);
        assert!(strict.validate().is_ok());
        assert!(strict.is_significant(0.009));
        assert!(!strict.is_significant(0.02));

        let permissive = StatsConfig::permissive();
        assert_eq!(permissive.significance_level, 0.10);
        assert!(permissive.is_significant(0.08));
    }

    #[test]
    #[allow(clippy::field_reassign_with_default)]
    fn test_invalid_fields() {
        let mut config = StatsConfig::default();
        config.significance_level = 1.5;
        assert!(matches!(config.validate(), Err(StatsError::InvalidConfig { .. })));

        let mut config = StatsConfig::default();
        config.frequency_bins = 0;
        assert!(config.validate().is_err());

        let mut config = StatsConfig::default();
        config.seasonal_period = 1;
        assert!(config.validate().is_err());

        let mut config = StatsConfig::default();
        config.outlier_iqr_multiplier = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = StatsConfig::from_json(r#"{"significanceLevel": 0.01, "frequencyBins": 5}"#)
            .unwrap();
        assert_eq!(config.significance_level, 0.01);
        assert_eq!(config.frequency_bins, 5);
        assert_eq!(config.seasonal_period, 12);

        assert!(StatsConfig::from_json("{not json").is_err());
        assert!(StatsConfig::from_json(r#"{"seasonalPeriod": 0}"#).is_err());
    }
}
