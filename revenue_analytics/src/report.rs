//! Combined analysis output and its plain-text rendering

use crate::anomaly::AnomalyPoint;
use crate::decomposition::DecompositionPoint;
use crate::forecast::ForecastPoint;
use crate::health::{HealthBand, HealthIndex, HealthInputs};
use crate::metrics::{CorrelationReport, DescriptiveSummary, ForecastAccuracy};
use crate::sensitivity::{Baseline, SensitivityScenario};
use chrono::NaiveDate;
use serde::Serialize;
use stats_math::LinearRegression;
use std::fmt;

/// Everything the analyzer derives from one revenue series.
///
/// A plain value: it is rebuilt from the full series on every analysis and
/// carries no reference back to its input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub summary: DescriptiveSummary,
    pub trend: LinearRegression,
    pub decomposition: Vec<DecompositionPoint>,
    pub anomalies: Vec<AnomalyPoint>,
    /// Positions flagged as structural breaks
    pub structural_breaks: Vec<usize>,
    /// Calendar days of `structural_breaks`
    pub break_dates: Vec<NaiveDate>,
    /// Empty when the history is shorter than the configured minimum
    pub forecast: Vec<ForecastPoint>,
    pub accuracy: ForecastAccuracy,
    pub correlation: CorrelationReport,
    pub baseline: Baseline,
    pub scenarios: Vec<SensitivityScenario>,
    pub health_inputs: HealthInputs,
    pub health: HealthIndex,
}

impl AnalyticsReport {
    /// Days flagged as anomalous
    pub fn flagged_anomalies(&self) -> impl Iterator<Item = &AnomalyPoint> {
        self.anomalies.iter().filter(|a| a.is_anomaly)
    }

    /// Presentation band of the health score
    pub fn health_band(&self) -> HealthBand {
        self.health.band()
    }
}

impl fmt::Display for AnalyticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        writeln!(
            f,
            "Trend: slope {:.4}/day, intercept {:.2}, R² {:.4}",
            self.trend.slope, self.trend.intercept, self.trend.r_squared
        )?;

        writeln!(f, "Anomalies: {}", self.flagged_anomalies().count())?;
        for point in self.flagged_anomalies() {
            writeln!(f, "  {} {:.2} (z = {:.2})", point.date, point.revenue, point.zscore)?;
        }

        writeln!(f, "Structural breaks: {}", self.break_dates.len())?;
        for date in &self.break_dates {
            writeln!(f, "  {}", date)?;
        }

        if !self.forecast.is_empty() {
            writeln!(f, "Forecast:")?;
            for point in &self.forecast {
                let label = point
                    .date
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| format!("+{}", point.offset + 1));
                writeln!(
                    f,
                    "  {}  linear {:.2} [{:.2}, {:.2}]  ma {:.2}  ema {:.2}  wma {:.2}",
                    label, point.linear, point.lower, point.upper, point.ma, point.ema, point.wma
                )?;
            }
        }
        write!(f, "{}", self.accuracy)?;

        writeln!(f, "Revenue/quantity correlation: {:.4}", self.correlation.revenue_quantity)?;
        if let Some(lag) = self.correlation.dominant_lag() {
            writeln!(f, "Strongest autocorrelation: lag {} ({:.4})", lag.lag, lag.coefficient)?;
        }

        writeln!(f, "Scenarios:")?;
        for scenario in &self.scenarios {
            writeln!(
                f,
                "  {:<26} revenue {:>12.2}  profit {:>12.2}",
                scenario.name, scenario.estimated_revenue, scenario.estimated_profit
            )?;
        }

        write!(f, "{}", self.health)
    }
}
