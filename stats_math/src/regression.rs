//! Ordinary least squares trend fitting
//!
//! The independent variable is the implicit position `0..n-1` of each value,
//! not a calendar date. Callers holding dated observations map positions back
//! to dates themselves.

use crate::correlation::pearson_correlation;
use crate::descriptive::{mean, negligible_spread};
use serde::{Deserialize, Serialize};

/// Fitted linear trend `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Change in value per position step
    pub slope: f64,
    /// Fitted value at position zero
    pub intercept: f64,
    /// Coefficient of determination, `0.0` when the values have no variance
    pub r_squared: f64,
}

impl LinearRegression {
    /// Fit a least-squares line through `values` indexed by position.
    ///
    /// With fewer than two values the fit is a flat line at the single
    /// observed value (or zero for an empty slice) with `r_squared = 0`.
    pub fn fit(values: &[f64]) -> Self {
        let n = values.len();
        if n < 2 {
            return Self {
                slope: 0.0,
                intercept: values.first().copied().unwrap_or(0.0),
                r_squared: 0.0,
            };
        }

        let positions = positions(n);
        let x_mean = mean(&positions);
        let y_mean = mean(values);

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (&x, &y) in positions.iter().zip(values) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        let slope = if negligible_spread(denominator, &positions) {
            0.0
        } else {
            numerator / denominator
        };
        let intercept = y_mean - slope * x_mean;

        // For a single regressor R² is the squared Pearson coefficient
        let r = pearson_correlation(&positions, values);

        Self {
            slope,
            intercept,
            r_squared: r * r,
        }
    }

    /// Evaluate the fitted line at position `x`, inside or beyond the observed range
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Fitted values for positions `0..n`
    pub fn fitted_values(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.predict(i as f64)).collect()
    }

    /// Observed minus fitted for each position of `values`
    pub fn residuals(&self, values: &[f64]) -> Vec<f64> {
        values
            .iter()
            .enumerate()
            .map(|(i, &y)| y - self.predict(i as f64))
            .collect()
    }
}

fn positions(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}
