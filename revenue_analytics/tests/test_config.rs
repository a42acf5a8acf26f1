use revenue_analytics::{AnalyticsConfig, AnalyticsError};
use rstest::rstest;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};
use tempfile::NamedTempFile;

// Loading reads the process environment, so tests that load or set
// REVENUE_INSIGHT_* variables take this lock
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AnalyticsConfig::default();

    assert_eq!(config.forecasting_window, 7);
    assert_eq!(config.ema_alpha, 0.3);
    assert_eq!(config.anomaly_threshold, 2.0);
    assert_eq!(config.break_sensitivity, 1.5);
    assert_eq!(config.break_window, 5);
    assert_eq!(config.min_forecast_history, 7);
    assert_eq!(config.confidence_z, 1.96);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let _guard = env_lock();
    let file = toml_file("forecasting_window = 14\nema_alpha = 0.5\n");
    let config = AnalyticsConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.forecasting_window, 14);
    assert_eq!(config.ema_alpha, 0.5);
    assert_eq!(config.anomaly_threshold, 2.0);
    assert_eq!(config.forecast_periods, 7);
}

#[test]
fn test_load_rejects_invalid_values() {
    let _guard = env_lock();
    let file = toml_file("ema_alpha = 1.5\n");
    let result = AnalyticsConfig::load(Some(file.path()));

    assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));
}

#[test]
fn test_load_missing_file() {
    let _guard = env_lock();
    let result = AnalyticsConfig::load(Some(std::path::Path::new(
        "/nonexistent/revenue_insight.toml",
    )));

    assert!(matches!(result, Err(AnalyticsError::Config(_))));
}

#[test]
fn test_environment_overrides_file() {
    let _guard = env_lock();
    let file = toml_file("ema_alpha = 0.2\nmax_autocorrelation_lag = 14\n");

    std::env::set_var("REVENUE_INSIGHT_EMA_ALPHA", "0.5");
    std::env::set_var("REVENUE_INSIGHT_FORECASTING_WINDOW", "3");
    let result = AnalyticsConfig::load(Some(file.path()));
    std::env::remove_var("REVENUE_INSIGHT_EMA_ALPHA");
    std::env::remove_var("REVENUE_INSIGHT_FORECASTING_WINDOW");

    let config = result.unwrap();
    assert_eq!(config.ema_alpha, 0.5);
    assert_eq!(config.forecasting_window, 3);
    assert_eq!(config.max_autocorrelation_lag, 14);
    assert_eq!(config.anomaly_threshold, 2.0);
}

#[test]
fn test_from_env_rejects_invalid_override() {
    let _guard = env_lock();

    std::env::set_var("REVENUE_INSIGHT_BREAK_WINDOW", "0");
    let result = AnalyticsConfig::from_env();
    std::env::remove_var("REVENUE_INSIGHT_BREAK_WINDOW");

    assert!(matches!(result, Err(AnalyticsError::InvalidParameter(_))));
}

#[rstest]
#[case(AnalyticsConfig { forecasting_window: 0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { break_window: 0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { ema_alpha: 0.0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { ema_alpha: 1.0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { anomaly_threshold: -2.0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { break_sensitivity: 0.0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { confidence_z: 0.0, ..AnalyticsConfig::default() })]
#[case(AnalyticsConfig { holdout_ratio: 1.0, ..AnalyticsConfig::default() })]
fn test_validate_rejects(#[case] config: AnalyticsConfig) {
    assert!(matches!(
        config.validate(),
        Err(AnalyticsError::InvalidParameter(_))
    ));
}

#[test]
fn test_error_display() {
    let error = AnalyticsError::InvalidParameter("ema_alpha must be between 0 and 1".to_string());
    let message = format!("{}", error);

    assert!(message.contains("Invalid parameter"));
    assert!(message.contains("ema_alpha"));
}
