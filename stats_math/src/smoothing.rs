//! Moving average smoothing
//!
//! Contains full-series implementations of:
//! - Simple Moving Average (MA)
//! - Exponential Moving Average (EMA)
//! - Weighted Moving Average (WMA)
//!
//! MA and WMA positions before the window fills are `None`, never a numeric
//! placeholder, so warm-up entries cannot leak into later arithmetic.

/// Simple moving average over a trailing window.
///
/// The output has the same length as `values`; the first `window - 1` entries
/// are `None`. A `window` of zero is treated as one.
pub fn moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }

            let slice = &values[i + 1 - window..=i];
            Some(slice.iter().sum::<f64>() / window as f64)
        })
        .collect()
}

/// Exponential moving average seeded with the first value.
///
/// `EMA[0] = values[0]`, then `EMA[t] = alpha * values[t] + (1 - alpha) * EMA[t-1]`.
/// There is no warm-up gap.
pub fn exponential_moving_average(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut smoothed = Vec::with_capacity(values.len());

    for &value in values {
        let next = match smoothed.last() {
            None => value,
            Some(&previous) => alpha * value + (1.0 - alpha) * previous,
        };
        smoothed.push(next);
    }

    smoothed
}

/// Linearly weighted moving average over a trailing window.
///
/// Within each window the oldest value has weight 1 and the newest weight
/// `window`; weights are normalised by their sum. Same warm-up rule as
/// [`moving_average`].
pub fn weighted_moving_average(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let weight_sum = (window * (window + 1)) as f64 / 2.0;

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                return None;
            }

            let weighted: f64 = values[i + 1 - window..=i]
                .iter()
                .enumerate()
                .map(|(j, v)| (j + 1) as f64 * v)
                .sum();
            Some(weighted / weight_sum)
        })
        .collect()
}

/// Last defined entry of a windowed smoother output
pub fn last_defined(smoothed: &[Option<f64>]) -> Option<f64> {
    smoothed.iter().rev().find_map(|v| *v)
}
