//! Utility functions for the revenue_analytics crate

use chrono::{Days, NaiveDate};

/// Split `values` into a leading training part and a trailing holdout.
///
/// The holdout is `holdout_ratio` of the values, rounded. A ratio outside
/// `(0, 1)` keeps everything for training.
pub fn train_test_split(values: &[f64], holdout_ratio: f64) -> (&[f64], &[f64]) {
    if !(holdout_ratio > 0.0 && holdout_ratio < 1.0) {
        return values.split_at(values.len());
    }

    let holdout = (values.len() as f64 * holdout_ratio).round() as usize;
    values.split_at(values.len() - holdout)
}

/// Calendar days following `last_date`, one per forecast offset
pub fn future_dates(last_date: NaiveDate, horizon: usize) -> Vec<NaiveDate> {
    (1..=horizon as u64)
        .map_while(|offset| last_date.checked_add_days(Days::new(offset)))
        .collect()
}

/// Clamp `value` into `[0, 100]`, mapping NaN to 0
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }

    value.clamp(0.0, 100.0)
}
