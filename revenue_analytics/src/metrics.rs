//! Summary, growth and forecast-accuracy metrics

use crate::data::RevenueSeries;
use crate::utils::train_test_split;
use serde::{Deserialize, Serialize};
use stats_math::descriptive::{max, median, min};
use stats_math::{
    autocorrelation, coefficient_of_variation, mean, pearson_correlation, std_dev, LagCorrelation,
    LinearRegression,
};
use std::fmt;

/// Days averaged at each end of the series when measuring growth
const GROWTH_EDGE_DAYS: usize = 7;
const DAYS_PER_YEAR: f64 = 365.25;

/// Descriptive statistics of daily revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveSummary {
    pub days: usize,
    pub total_revenue: f64,
    pub total_quantity: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub cv: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// Revenue per unit sold, `0.0` with no units
    pub revenue_per_unit: f64,
}

impl DescriptiveSummary {
    pub fn from_series(series: &RevenueSeries) -> Self {
        let revenues = series.revenues();
        let total_revenue = series.total_revenue();
        let total_quantity = series.total_quantity();

        Self {
            days: series.len(),
            total_revenue,
            total_quantity,
            mean: mean(&revenues),
            std_dev: std_dev(&revenues),
            cv: coefficient_of_variation(&revenues),
            min: min(&revenues),
            max: max(&revenues),
            median: median(&revenues),
            revenue_per_unit: if total_quantity > 0 {
                total_revenue / total_quantity as f64
            } else {
                0.0
            },
        }
    }
}

impl fmt::Display for DescriptiveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Revenue Summary ({} days):", self.days)?;
        writeln!(f, "  Total:    {:.2}", self.total_revenue)?;
        writeln!(f, "  Mean:     {:.2}", self.mean)?;
        writeln!(f, "  Median:   {:.2}", self.median)?;
        writeln!(f, "  Std Dev:  {:.2}", self.std_dev)?;
        writeln!(f, "  CV:       {:.4}", self.cv)?;
        writeln!(f, "  Range:    {:.2} - {:.2}", self.min, self.max)?;
        writeln!(f, "  Per Unit: {:.2}", self.revenue_per_unit)?;
        Ok(())
    }
}

/// Compound rate that grows `start` into `end` over `periods` periods.
///
/// Non-positive `start`, `end` or `periods` yield `0.0`.
pub fn compound_growth_rate(start: f64, end: f64, periods: f64) -> f64 {
    if start <= 0.0 || end <= 0.0 || periods <= 0.0 {
        return 0.0;
    }

    (end / start).powf(1.0 / periods) - 1.0
}

/// Annual compound growth of daily revenue.
///
/// Compares the mean of the first and last `min(7, n / 2)` days. Spans shorter
/// than a year count as one period, so short histories report plain growth
/// rather than an annualised extrapolation.
pub fn series_growth_rate(series: &RevenueSeries) -> f64 {
    let revenues = series.revenues();
    let edge = GROWTH_EDGE_DAYS.min(revenues.len() / 2);
    if edge == 0 {
        return 0.0;
    }

    let start = mean(&revenues[..edge]);
    let end = mean(&revenues[revenues.len() - edge..]);

    let span_days = match (series.first_date(), series.last_date()) {
        (Some(first), Some(last)) => (last - first).num_days() as f64,
        _ => 0.0,
    };
    let years = (span_days / DAYS_PER_YEAR).max(1.0);

    compound_growth_rate(start, end, years)
}

/// Mean absolute percentage error in percentage points.
///
/// Pairs with a zero actual are skipped; with no usable pairs the result is `0.0`.
pub fn mean_absolute_percentage_error(actual: &[f64], predicted: &[f64]) -> f64 {
    let errors: Vec<f64> = actual
        .iter()
        .zip(predicted)
        .filter(|(&a, _)| a != 0.0)
        .map(|(&a, &p)| ((a - p) / a).abs() * 100.0)
        .collect();

    mean(&errors)
}

/// Accuracy of a forecast against observed values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastAccuracy {
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percentage points
    pub mape: f64,
    /// Number of compared pairs
    pub samples: usize,
}

impl ForecastAccuracy {
    /// Compare the overlapping prefix of `actual` and `predicted`
    pub fn measure(actual: &[f64], predicted: &[f64]) -> Self {
        let samples = actual.len().min(predicted.len());
        let errors: Vec<f64> = actual
            .iter()
            .zip(predicted)
            .map(|(a, p)| a - p)
            .collect();

        let mae = mean(&errors.iter().map(|e| e.abs()).collect::<Vec<_>>());
        let mse = mean(&errors.iter().map(|e| e * e).collect::<Vec<_>>());

        Self {
            mae,
            rmse: mse.sqrt(),
            mape: mean_absolute_percentage_error(actual, predicted),
            samples,
        }
    }
}

impl fmt::Display for ForecastAccuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Forecast Accuracy ({} samples):", self.samples)?;
        writeln!(f, "  MAE:   {:.4}", self.mae)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        Ok(())
    }
}

/// Accuracy of the linear trend model on a held-out tail of `values`.
///
/// The regression is fitted on the leading part and extrapolated over the
/// trailing `holdout_ratio` share. When the split leaves fewer than two
/// training points or no test points, the in-sample fit is scored instead.
pub fn holdout_accuracy(values: &[f64], holdout_ratio: f64) -> ForecastAccuracy {
    let (train, test) = train_test_split(values, holdout_ratio);

    if train.len() < 2 || test.is_empty() {
        let fitted = LinearRegression::fit(values).fitted_values(values.len());
        return ForecastAccuracy::measure(values, &fitted);
    }

    let model = LinearRegression::fit(train);
    let predicted: Vec<f64> = (0..test.len())
        .map(|i| model.predict((train.len() + i) as f64))
        .collect();

    ForecastAccuracy::measure(test, &predicted)
}

/// Correlation diagnostics of a revenue series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Pearson correlation of daily revenue with daily quantity
    pub revenue_quantity: f64,
    /// Revenue autocorrelation for lags `1..=max_lag`
    pub autocorrelation: Vec<LagCorrelation>,
}

impl CorrelationReport {
    pub fn from_series(series: &RevenueSeries, max_lag: usize) -> Self {
        let revenues = series.revenues();

        Self {
            revenue_quantity: pearson_correlation(&revenues, &series.quantities()),
            autocorrelation: autocorrelation(&revenues, max_lag),
        }
    }

    /// Lag with the strongest absolute autocorrelation, if any
    pub fn dominant_lag(&self) -> Option<LagCorrelation> {
        self.autocorrelation
            .iter()
            .copied()
            .max_by(|a, b| a.coefficient.abs().total_cmp(&b.coefficient.abs()))
    }
}
