//! Analytics configuration
//!
//! All knobs are plain named numbers. Sources are layered: built-in defaults,
//! then an optional TOML file, then `REVENUE_INSIGHT_*` environment variables.

use crate::error::{AnalyticsError, Result};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment variable overrides, e.g. `REVENUE_INSIGHT_EMA_ALPHA=0.5`
pub const ENV_PREFIX: &str = "REVENUE_INSIGHT";

/// Tunable parameters for every analytics component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Window for the MA and WMA smoothers
    pub forecasting_window: usize,
    /// Smoothing factor for the EMA, in (0, 1)
    pub ema_alpha: f64,
    /// Absolute z-score above which a day is flagged as an anomaly
    pub anomaly_threshold: f64,
    /// Mean shift, in whole-series standard deviations, that marks a structural break
    pub break_sensitivity: f64,
    /// Points compared on each side of a candidate break
    pub break_window: usize,
    /// Number of future days to forecast
    pub forecast_periods: usize,
    /// History length below which the analyzer skips forecasting
    pub min_forecast_history: usize,
    /// Highest lag reported by the autocorrelation diagnostics
    pub max_autocorrelation_lag: usize,
    /// Trailing share of history held out when scoring forecast accuracy
    pub holdout_ratio: f64,
    /// Multiplier of the residual standard error for the forecast band
    pub confidence_z: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            forecasting_window: 7,
            ema_alpha: 0.3,
            anomaly_threshold: 2.0,
            break_sensitivity: 1.5,
            break_window: 5,
            forecast_periods: 7,
            min_forecast_history: 7,
            max_autocorrelation_lag: 7,
            holdout_ratio: 0.2,
            confidence_z: 1.96,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from the environment only
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from an optional TOML file, then apply environment overrides.
    ///
    /// Missing keys keep their defaults. The result is validated before it is returned.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = settings.try_deserialize::<AnalyticsConfig>()?;
        config.validate()?;

        tracing::debug!(?config, "Loaded analytics configuration");
        Ok(config)
    }

    /// Reject parameter combinations the components cannot use
    pub fn validate(&self) -> Result<()> {
        if self.forecasting_window == 0 {
            return Err(AnalyticsError::InvalidParameter(
                "forecasting_window must be at least 1".to_string(),
            ));
        }

        if self.break_window == 0 {
            return Err(AnalyticsError::InvalidParameter(
                "break_window must be at least 1".to_string(),
            ));
        }

        if self.ema_alpha <= 0.0 || self.ema_alpha >= 1.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "ema_alpha must be between 0 and 1 (exclusive), got {}",
                self.ema_alpha
            )));
        }

        if self.anomaly_threshold <= 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "anomaly_threshold must be positive, got {}",
                self.anomaly_threshold
            )));
        }

        if self.break_sensitivity <= 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "break_sensitivity must be positive, got {}",
                self.break_sensitivity
            )));
        }

        if self.confidence_z <= 0.0 {
            return Err(AnalyticsError::InvalidParameter(format!(
                "confidence_z must be positive, got {}",
                self.confidence_z
            )));
        }

        if !(0.0..1.0).contains(&self.holdout_ratio) {
            return Err(AnalyticsError::InvalidParameter(format!(
                "holdout_ratio must be in [0, 1), got {}",
                self.holdout_ratio
            )));
        }

        Ok(())
    }
}
