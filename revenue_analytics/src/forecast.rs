//! Multi-model revenue forecasting
//!
//! Four models are evaluated side by side over the same history:
//! - Linear trend, extrapolated per future offset
//! - MA, EMA and WMA, each projected flat at its last defined value
//!
//! Only the linear estimate carries a confidence band. Its width is the
//! standard deviation of the in-sample regression residuals times `z`, and it
//! does not widen with the horizon.

use crate::config::AnalyticsConfig;
use crate::data::RevenueSeries;
use crate::utils::future_dates;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stats_math::{
    exponential_moving_average, last_defined, moving_average, std_dev, weighted_moving_average,
    LinearRegression,
};

/// z-value of a two-sided 95% normal interval
pub const Z_95: f64 = 1.96;

/// Forecast for one future offset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Zero-based offset past the last observation
    pub offset: usize,
    /// Calendar day the offset lands on, when the history has dates
    pub date: Option<NaiveDate>,
    /// Linear trend estimate
    pub linear: f64,
    /// Flat simple moving average projection
    pub ma: f64,
    /// Flat exponential moving average projection
    pub ema: f64,
    /// Flat weighted moving average projection
    pub wma: f64,
    /// Lower bound of the linear estimate
    pub lower: f64,
    /// Upper bound of the linear estimate
    pub upper: f64,
}

/// Smoothing and band parameters for [`forecast_values`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastParams {
    /// Window for MA and WMA; clamped to the history length
    pub window: usize,
    /// EMA smoothing factor
    pub alpha: f64,
    /// Band half-width in residual standard errors; the sign is ignored
    pub z: f64,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            window: 7,
            alpha: 0.3,
            z: Z_95,
        }
    }
}

impl From<&AnalyticsConfig> for ForecastParams {
    fn from(config: &AnalyticsConfig) -> Self {
        Self {
            window: config.forecasting_window,
            alpha: config.ema_alpha,
            z: config.confidence_z,
        }
    }
}

/// Forecast `periods` points past the end of `history`.
///
/// Point `i` uses position `n + i` for the linear model. Short histories are
/// not rejected: an empty history forecasts zeros and a history with perfect
/// fit yields a zero-width band.
pub fn forecast_values(history: &[f64], periods: usize, params: ForecastParams) -> Vec<ForecastPoint> {
    let n = history.len();
    let regression = LinearRegression::fit(history);
    let se = std_dev(&regression.residuals(history));
    let margin = params.z.abs() * se;

    let window = params.window.min(n).max(1);
    let ma = last_defined(&moving_average(history, window)).unwrap_or(0.0);
    let wma = last_defined(&weighted_moving_average(history, window)).unwrap_or(0.0);
    let ema = exponential_moving_average(history, params.alpha)
        .last()
        .copied()
        .unwrap_or(0.0);

    (0..periods)
        .map(|offset| {
            let linear = regression.predict((n + offset) as f64);

            ForecastPoint {
                offset,
                date: None,
                linear,
                ma,
                ema,
                wma,
                lower: linear - margin,
                upper: linear + margin,
            }
        })
        .collect()
}

/// Forecast a dated series, labelling each point with its projected calendar day.
///
/// Dates count whole calendar days from the last observation, even though the
/// linear model steps by series position.
pub fn forecast_series(series: &RevenueSeries, periods: usize, params: ForecastParams) -> Vec<ForecastPoint> {
    let mut points = forecast_values(&series.revenues(), periods, params);

    if let Some(last) = series.last_date() {
        for (point, date) in points.iter_mut().zip(future_dates(last, periods)) {
            point.date = Some(date);
        }
    }

    points
}
