//! # Stats Math
//!
//! Numeric primitives for daily revenue analytics.
//! Every function here is a pure function of the slice it is given: there is no
//! streaming state, and degenerate input (empty slices, zero variance) yields a
//! neutral value instead of an error.

// Primitive modules
pub mod correlation;
pub mod descriptive;
pub mod regression;
pub mod smoothing;

pub use correlation::{autocorrelation, pearson_correlation, LagCorrelation};
pub use descriptive::{coefficient_of_variation, is_flat, mean, std_dev};
pub use regression::LinearRegression;
pub use smoothing::{
    exponential_moving_average, last_defined, moving_average, weighted_moving_average,
};

/// Relative tolerance below which a spread counts as zero, as a share of the
/// sum of squared values
pub const EPSILON: f64 = 1e-12;
