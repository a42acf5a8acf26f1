//! Additive trend/seasonal/residual decomposition
//!
//! `revenue = trend + seasonal + residual`, where the trend is a least-squares
//! line over series positions, the seasonal term is a per-weekday offset and
//! the residual is whatever remains.

use crate::data::RevenueSeries;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use stats_math::LinearRegression;

/// Number of seasonal buckets, one per weekday
pub const WEEKDAYS: usize = 7;

/// One day of a decomposed series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Observed revenue
    pub revenue: f64,
    /// Linear trend at this position
    pub trend: f64,
    /// Weekday offset, centred so the seven offsets average to zero
    pub seasonal: f64,
    /// `revenue - trend - seasonal`
    pub residual: f64,
}

/// Weekday bucket for `date`, Sunday = 0 through Saturday = 6
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Centred seasonal offset for each weekday.
///
/// Each weekday's offset is the mean de-trended revenue of the observations on
/// that weekday (zero when there are none), shifted so the seven offsets
/// average to zero.
pub fn weekday_seasonality(series: &RevenueSeries, trend: &LinearRegression) -> [f64; WEEKDAYS] {
    let mut sums = [0.0; WEEKDAYS];
    let mut counts = [0usize; WEEKDAYS];

    for (day, revenue) in series.indexed().zip(series.days().iter().map(|d| d.revenue)) {
        let bucket = weekday_index(day.date);
        sums[bucket] += revenue - trend.predict(day.position as f64);
        counts[bucket] += 1;
    }

    let mut seasonal = [0.0; WEEKDAYS];
    for bucket in 0..WEEKDAYS {
        if counts[bucket] > 0 {
            seasonal[bucket] = sums[bucket] / counts[bucket] as f64;
        }
    }

    let level = seasonal.iter().sum::<f64>() / WEEKDAYS as f64;
    seasonal.iter_mut().for_each(|s| *s -= level);

    seasonal
}

/// Decompose `series` into one point per day, in input order
pub fn decompose(series: &RevenueSeries) -> Vec<DecompositionPoint> {
    let revenues = series.revenues();
    let trend = LinearRegression::fit(&revenues);
    let seasonal = weekday_seasonality(series, &trend);

    series
        .indexed()
        .zip(revenues)
        .map(|(day, revenue)| {
            let trend_value = trend.predict(day.position as f64);
            let seasonal_value = seasonal[weekday_index(day.date)];

            DecompositionPoint {
                date: day.date,
                revenue,
                trend: trend_value,
                seasonal: seasonal_value,
                residual: revenue - trend_value - seasonal_value,
            }
        })
        .collect()
}
