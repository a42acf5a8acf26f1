//! Correlation calculations
//!
//! Contains:
//! - Pearson correlation over the overlapping prefix of two series
//! - Lag autocorrelation (biased estimator)

use crate::descriptive::{mean, negligible_spread};
use serde::{Deserialize, Serialize};

/// Autocorrelation coefficient for a single lag
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagCorrelation {
    /// Shift in positions, starting at 1
    pub lag: usize,
    /// Correlation of the series with itself shifted by `lag`
    pub coefficient: f64,
}

/// Pearson correlation coefficient of `xs` and `ys`.
///
/// Only the first `min(xs.len(), ys.len())` pairs are used. Fewer than two
/// pairs, or zero variance on either side, yields `0.0`.
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }

    let xs = &xs[..n];
    let ys = &ys[..n];
    let x_mean = mean(xs);
    let y_mean = mean(ys);

    let mut covariance = 0.0;
    let mut x_sum_sq = 0.0;
    let mut y_sum_sq = 0.0;

    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - x_mean;
        let dy = y - y_mean;
        covariance += dx * dy;
        x_sum_sq += dx * dx;
        y_sum_sq += dy * dy;
    }

    if negligible_spread(x_sum_sq, xs) || negligible_spread(y_sum_sq, ys) {
        return 0.0;
    }

    covariance / (x_sum_sq * y_sum_sq).sqrt()
}

/// Autocorrelation for lags `1..=min(max_lag, n - 1)`, ascending.
///
/// Every lag is normalised by the full series' sum of squared deviations, so
/// the coefficients shrink as the lag grows. A constant series yields `0.0`
/// at every lag.
pub fn autocorrelation(values: &[f64], max_lag: usize) -> Vec<LagCorrelation> {
    let n = values.len();
    if n < 2 {
        return Vec::new();
    }

    let avg = mean(values);
    let denominator: f64 = values.iter().map(|v| (v - avg).powi(2)).sum();

    (1..=max_lag.min(n - 1))
        .map(|lag| {
            let coefficient = if negligible_spread(denominator, values) {
                0.0
            } else {
                let numerator: f64 = values[..n - lag]
                    .iter()
                    .zip(&values[lag..])
                    .map(|(a, b)| (a - avg) * (b - avg))
                    .sum();
                numerator / denominator
            };

            LagCorrelation { lag, coefficient }
        })
        .collect()
}
