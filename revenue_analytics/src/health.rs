//! Composite business health score

use crate::utils::clamp_percent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw measurements the health score is built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthInputs {
    /// Compound growth rate as a fraction (0.1 = 10%)
    pub cagr: f64,
    /// Coefficient of variation of daily revenue
    pub cv: f64,
    /// Profit margin as a fraction
    pub profit_margin: f64,
    /// Forecast mean absolute percentage error, in percentage points
    pub mape: f64,
}

/// Sub-scores, each rounded into `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthComponents {
    pub growth: u8,
    pub stability: u8,
    pub profitability: u8,
    pub forecast_reliability: u8,
}

/// Overall score with its components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthIndex {
    /// Equal-weight blend of the unrounded sub-scores, rounded into `0..=100`
    pub score: u8,
    pub components: HealthComponents,
}

/// Presentation band for a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    Excellent,
    Good,
    Moderate,
    AtRisk,
}

impl HealthBand {
    /// Band for `score`: 75+ Excellent, 60+ Good, 45+ Moderate, otherwise At Risk
    pub fn from_score(score: u8) -> Self {
        match score {
            75.. => HealthBand::Excellent,
            60..=74 => HealthBand::Good,
            45..=59 => HealthBand::Moderate,
            _ => HealthBand::AtRisk,
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthBand::Excellent => "Excellent",
            HealthBand::Good => "Good",
            HealthBand::Moderate => "Moderate",
            HealthBand::AtRisk => "At Risk",
        };
        f.write_str(label)
    }
}

impl HealthIndex {
    /// Score `inputs`.
    ///
    /// - growth = 50 + cagr * 100
    /// - stability = (1 - cv) * 100
    /// - profitability = profit_margin * 200
    /// - forecast_reliability = 100 - mape * 2
    ///
    /// Each is clamped to `[0, 100]` before averaging.
    pub fn calculate(inputs: &HealthInputs) -> Self {
        let growth = clamp_percent(50.0 + inputs.cagr * 100.0);
        let stability = clamp_percent((1.0 - inputs.cv) * 100.0);
        let profitability = clamp_percent(inputs.profit_margin * 200.0);
        let forecast_reliability = clamp_percent(100.0 - inputs.mape * 2.0);

        let overall = 0.25 * (growth + stability + profitability + forecast_reliability);

        Self {
            score: to_score(overall),
            components: HealthComponents {
                growth: to_score(growth),
                stability: to_score(stability),
                profitability: to_score(profitability),
                forecast_reliability: to_score(forecast_reliability),
            },
        }
    }

    /// Presentation band of the overall score
    pub fn band(&self) -> HealthBand {
        HealthBand::from_score(self.score)
    }
}

impl fmt::Display for HealthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Health Index: {} ({})", self.score, self.band())?;
        writeln!(f, "  Growth:               {}", self.components.growth)?;
        writeln!(f, "  Stability:            {}", self.components.stability)?;
        writeln!(f, "  Profitability:        {}", self.components.profitability)?;
        writeln!(f, "  Forecast Reliability: {}", self.components.forecast_reliability)?;
        Ok(())
    }
}

// Input is already clamped to [0, 100]
fn to_score(value: f64) -> u8 {
    value.round() as u8
}
