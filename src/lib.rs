//! # Revenue Insight
//!
//! Workspace facade for the revenue analytics engine.
//!
//! - [`stats_math`]: mean, standard deviation, regression, smoothing and correlation
//! - [`revenue_analytics`]: decomposition, anomaly and break detection,
//!   forecasting, sensitivity scenarios and the health index
//!
//! ## Example
//!
//! ```
//! use revenue_insight_workspace::stats_math::{mean, std_dev, LinearRegression};
//!
//! let revenues = [100.0; 7];
//! assert_eq!(mean(&revenues), 100.0);
//! assert_eq!(std_dev(&revenues), 0.0);
//!
//! let trend = LinearRegression::fit(&revenues);
//! assert_eq!(trend.slope, 0.0);
//! assert_eq!(trend.r_squared, 0.0);
//! ```

pub use revenue_analytics;
pub use stats_math;

pub use revenue_analytics::{
    AnalyticsConfig, AnalyticsReport, Baseline, DailyAggregate, HealthBand, HealthIndex,
    RevenueAnalyzer, RevenueSeries,
};
