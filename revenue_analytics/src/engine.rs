//! Orchestration of every analytics component over one revenue series

use crate::anomaly::{break_dates, detect_anomalies, detect_structural_breaks};
use crate::config::AnalyticsConfig;
use crate::data::{DailyAggregateProvider, DateRange, RevenueSeries};
use crate::decomposition::decompose;
use crate::error::Result;
use crate::forecast::{forecast_series, ForecastParams};
use crate::health::{HealthIndex, HealthInputs};
use crate::metrics::{holdout_accuracy, series_growth_rate, CorrelationReport, DescriptiveSummary};
use crate::report::AnalyticsReport;
use crate::sensitivity::{simulate, Baseline};
use stats_math::LinearRegression;

/// A stateless orchestrator that runs every analytics component over one series.
#[derive(Debug, Clone, Default)]
pub struct RevenueAnalyzer {
    config: AnalyticsConfig,
}

impl RevenueAnalyzer {
    /// Create an analyzer with validated configuration
    pub fn new(config: AnalyticsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// The main entry point for analysing a revenue series.
    ///
    /// # Arguments
    ///
    /// * `series` - Daily aggregates, ascending by date.
    /// * `baseline` - Period totals and fixed cost used for scenarios and profit margin.
    ///
    /// Degenerate input never fails: an empty series produces a zeroed report.
    /// The forecast is left empty when the history is shorter than
    /// `min_forecast_history`.
    pub fn analyze(&self, series: &RevenueSeries, baseline: &Baseline) -> AnalyticsReport {
        let config = &self.config;
        let revenues = series.revenues();

        let summary = DescriptiveSummary::from_series(series);
        let trend = LinearRegression::fit(&revenues);
        tracing::debug!(
            days = summary.days,
            mean = summary.mean,
            cv = summary.cv,
            slope = trend.slope,
            r_squared = trend.r_squared,
            "Computed descriptive statistics and trend"
        );

        let decomposition = decompose(series);

        let anomalies = detect_anomalies(series, config.anomaly_threshold);
        let structural_breaks =
            detect_structural_breaks(&revenues, config.break_window, config.break_sensitivity);
        let break_dates = break_dates(series, &structural_breaks);
        tracing::debug!(
            anomalies = anomalies.iter().filter(|a| a.is_anomaly).count(),
            breaks = structural_breaks.len(),
            "Ran anomaly and structural-break detection"
        );

        let forecast = if series.len() >= config.min_forecast_history {
            forecast_series(series, config.forecast_periods, ForecastParams::from(config))
        } else {
            tracing::warn!(
                days = series.len(),
                required = config.min_forecast_history,
                "Not enough history to forecast, skipping"
            );
            Vec::new()
        };

        let accuracy = holdout_accuracy(&revenues, config.holdout_ratio);
        let correlation = CorrelationReport::from_series(series, config.max_autocorrelation_lag);
        let scenarios = simulate(baseline);

        let health_inputs = HealthInputs {
            cagr: series_growth_rate(series),
            cv: summary.cv,
            profit_margin: baseline.profit_margin(),
            mape: accuracy.mape,
        };
        let health = HealthIndex::calculate(&health_inputs);

        tracing::info!(
            days = summary.days,
            score = health.score,
            band = %health.band(),
            "Revenue analysis complete"
        );

        AnalyticsReport {
            summary,
            trend,
            decomposition,
            anomalies,
            structural_breaks,
            break_dates,
            forecast,
            accuracy,
            correlation,
            baseline: *baseline,
            scenarios,
            health_inputs,
            health,
        }
    }

    /// Fetch the series for `range` from `provider` and analyse it against `fixed_cost`
    pub fn analyze_range<P: DailyAggregateProvider>(
        &self,
        provider: &P,
        range: DateRange,
        fixed_cost: f64,
    ) -> Result<AnalyticsReport> {
        let series = provider.daily_aggregates(range)?;
        let baseline = Baseline::from_series(&series, fixed_cost);

        Ok(self.analyze(&series, &baseline))
    }
}
