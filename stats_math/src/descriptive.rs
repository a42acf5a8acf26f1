//! Descriptive statistics
//!
//! Contains the primitives every other component builds on:
//! - Arithmetic mean
//! - Population variance and standard deviation
//! - Coefficient of variation
//! - Median, minimum and maximum
//! - Scale-relative flatness test

use crate::EPSILON;

/// Arithmetic mean of `values`, `0.0` for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divides by `n`), `0.0` for fewer than two values
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let avg = mean(values);
    values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation, `0.0` for fewer than two values
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Whether `values` have no spread beyond rounding noise.
///
/// Fewer than two values are flat. The tolerance is relative to the size of
/// the values, so a series on a tiny scale still counts as varying.
pub fn is_flat(values: &[f64]) -> bool {
    if values.len() < 2 {
        return true;
    }

    let avg = mean(values);
    let spread: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();
    negligible_spread(spread, values)
}

// `spread` is the sum of squared deviations of `values` from their mean
pub(crate) fn negligible_spread(spread: f64, values: &[f64]) -> bool {
    let scale: f64 = values.iter().map(|v| v * v).sum();
    spread <= EPSILON * scale
}

/// Ratio of standard deviation to mean.
///
/// A zero mean yields `0.0` rather than an unbounded ratio, so callers scoring
/// stability treat an all-zero series as perfectly stable.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg == 0.0 {
        return 0.0;
    }

    std_dev(values) / avg
}

/// Median of `values`, `0.0` for an empty slice
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Smallest value, `0.0` for an empty slice
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value, `0.0` for an empty slice
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}
