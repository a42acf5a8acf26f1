//! Price and quantity what-if scenarios

use crate::data::RevenueSeries;
use serde::{Deserialize, Serialize};

/// Baseline figures the scenarios perturb
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Revenue over the period
    pub revenue: f64,
    /// Units sold over the period
    pub quantity: f64,
    /// Average unit price
    pub price: f64,
    /// Fixed cost over the period
    pub fixed_cost: f64,
}

impl Baseline {
    /// Create a new baseline
    pub fn new(revenue: f64, quantity: f64, price: f64, fixed_cost: f64) -> Self {
        Self {
            revenue,
            quantity,
            price,
            fixed_cost,
        }
    }

    /// Derive the baseline from a series' totals; price is revenue per unit (0 with no units)
    pub fn from_series(series: &RevenueSeries, fixed_cost: f64) -> Self {
        let revenue = series.total_revenue();
        let quantity = series.total_quantity() as f64;
        let price = if quantity > 0.0 { revenue / quantity } else { 0.0 };

        Self::new(revenue, quantity, price, fixed_cost)
    }

    /// `(revenue - fixed_cost) / revenue`, `0.0` when there is no revenue
    pub fn profit_margin(&self) -> f64 {
        if self.revenue == 0.0 {
            return 0.0;
        }

        (self.revenue - self.fixed_cost) / self.revenue
    }
}

/// One perturbation and its outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityScenario {
    /// Display name
    pub name: String,
    /// Fractional price change, e.g. `0.05` for +5%
    pub price_change: f64,
    /// Fractional quantity change
    pub quantity_change: f64,
    /// Price after the change
    pub estimated_price: f64,
    /// Quantity after the change
    pub estimated_quantity: f64,
    /// `estimated_price * estimated_quantity`
    pub estimated_revenue: f64,
    /// `estimated_revenue - fixed_cost`
    pub estimated_profit: f64,
    /// `estimated_revenue - baseline.revenue`
    pub revenue_delta: f64,
}

/// The fixed scenario catalog as `(name, price_change, quantity_change)`
pub const SCENARIOS: [(&str, f64, f64); 7] = [
    ("Base", 0.0, 0.0),
    ("Price +5%", 0.05, 0.0),
    ("Price -5%", -0.05, 0.0),
    ("Quantity +10%", 0.0, 0.10),
    ("Quantity -10%", 0.0, -0.10),
    ("Price +5%, Quantity +10%", 0.05, 0.10),
    ("Price -5%, Quantity -10%", -0.05, -0.10),
];

/// Apply every catalog scenario to `baseline`, in catalog order
pub fn simulate(baseline: &Baseline) -> Vec<SensitivityScenario> {
    SCENARIOS
        .iter()
        .map(|&(name, price_change, quantity_change)| {
            let estimated_price = baseline.price * (1.0 + price_change);
            let estimated_quantity = baseline.quantity * (1.0 + quantity_change);
            let estimated_revenue = estimated_price * estimated_quantity;

            SensitivityScenario {
                name: name.to_string(),
                price_change,
                quantity_change,
                estimated_price,
                estimated_quantity,
                estimated_revenue,
                estimated_profit: estimated_revenue - baseline.fixed_cost,
                revenue_delta: estimated_revenue - baseline.revenue,
            }
        })
        .collect()
}
