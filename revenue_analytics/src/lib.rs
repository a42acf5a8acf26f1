//! # Revenue Analytics
//!
//! A deterministic analytics engine for daily revenue series.
//!
//! ## Features
//!
//! - Daily aggregate series and a provider contract for transaction stores
//! - Descriptive statistics, growth and forecast-accuracy metrics
//! - Additive trend/weekday-seasonal/residual decomposition
//! - Z-score anomaly flags and mean-shift structural-break detection
//! - Multi-model forecasts (linear, MA, EMA, WMA) with a confidence band
//! - Price/quantity sensitivity scenarios
//! - A composite 0-100 health index
//!
//! Every component is a pure function of the series it is given. Nothing is
//! cached between calls, so independent analyses can run concurrently.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use revenue_analytics::{AnalyticsConfig, Baseline, DailyAggregate, RevenueAnalyzer, RevenueSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let days = (0..14)
//!     .map(|i| DailyAggregate::new(start + chrono::Days::new(i), 100.0 + i as f64, 10))
//!     .collect();
//! let series = RevenueSeries::new(days).unwrap();
//!
//! let analyzer = RevenueAnalyzer::new(AnalyticsConfig::default()).unwrap();
//! let report = analyzer.analyze(&series, &Baseline::from_series(&series, 500.0));
//!
//! assert_eq!(report.forecast.len(), 7);
//! assert!(report.health.score <= 100);
//! ```

pub mod anomaly;
pub mod config;
pub mod data;
pub mod decomposition;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod health;
pub mod metrics;
pub mod report;
pub mod sensitivity;
pub mod utils;

// Re-export commonly used types
pub use crate::config::AnalyticsConfig;
pub use crate::data::{
    DailyAggregate, DailyAggregateProvider, DateRange, InMemoryTransactionStore, RevenueSeries,
    Transaction,
};
pub use crate::engine::RevenueAnalyzer;
pub use crate::error::AnalyticsError;
pub use crate::health::{HealthBand, HealthIndex, HealthInputs};
pub use crate::report::AnalyticsReport;
pub use crate::sensitivity::Baseline;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
