//! Outlier and structural-break detection
//!
//! Both detectors measure deviations in units of the whole series' population
//! standard deviation.

use crate::data::RevenueSeries;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stats_math::{is_flat, mean, std_dev};

/// Default absolute z-score above which a day is anomalous
pub const DEFAULT_ANOMALY_THRESHOLD: f64 = 2.0;
/// Default break sensitivity, in standard deviations
pub const DEFAULT_BREAK_SENSITIVITY: f64 = 1.5;
/// Default number of points compared on each side of a candidate break
pub const DEFAULT_BREAK_WINDOW: usize = 5;

/// Z-score assessment of a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Observed revenue
    pub revenue: f64,
    /// Standard deviations from the series mean, `0.0` for a flat series
    pub zscore: f64,
    /// Whether `|zscore|` exceeds the threshold
    pub is_anomaly: bool,
}

/// Score every day of `series` against the series mean.
///
/// A series with zero variance scores every day at zero and flags nothing.
pub fn detect_anomalies(series: &RevenueSeries, threshold: f64) -> Vec<AnomalyPoint> {
    let revenues = series.revenues();
    let avg = mean(&revenues);
    let sigma = std_dev(&revenues);
    let flat = is_flat(&revenues);

    series
        .days()
        .iter()
        .map(|day| {
            let zscore = if flat {
                0.0
            } else {
                (day.revenue - avg) / sigma
            };

            AnomalyPoint {
                date: day.date,
                revenue: day.revenue,
                zscore,
                is_anomaly: zscore.abs() > threshold,
            }
        })
        .collect()
}

/// Positions where the mean level shifts abruptly.
///
/// For each position `i` with `window` points on both sides, compares the mean
/// of `values[i - window..i]` with the mean of `values[i..i + window]`. The
/// position is flagged when the absolute difference exceeds
/// `sensitivity * std_dev(values)`. Flags are ascending and adjacent flags are
/// not merged, so one real shift usually yields a short run of positions.
pub fn detect_structural_breaks(values: &[f64], window: usize, sensitivity: f64) -> Vec<usize> {
    let window = window.max(1);
    let n = values.len();
    if n < 2 * window + 1 {
        return Vec::new();
    }

    let threshold = sensitivity * std_dev(values);

    (window..n - window)
        .filter(|&i| {
            let left = mean(&values[i - window..i]);
            let right = mean(&values[i..i + window]);
            (left - right).abs() > threshold
        })
        .collect()
}

/// Dates of the flagged positions in `series`
pub fn break_dates(series: &RevenueSeries, breaks: &[usize]) -> Vec<NaiveDate> {
    breaks
        .iter()
        .filter_map(|&i| series.days().get(i).map(|d| d.date))
        .collect()
}
