//! Daily revenue data handling
//!
//! A [`RevenueSeries`] is the only input the analytics components accept. It is
//! built from per-day aggregates, which a [`DailyAggregateProvider`] derives from
//! whatever transaction store the application uses.

use crate::error::{AnalyticsError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sale as recorded by the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar day of the sale
    pub date: NaiveDate,
    /// Revenue of the sale
    pub amount: f64,
    /// Units sold
    pub quantity: u64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, amount: f64, quantity: u64) -> Self {
        Self {
            date,
            amount,
            quantity,
        }
    }
}

/// Sum of all transactions on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAggregate {
    /// Calendar day
    pub date: NaiveDate,
    /// Total revenue for the day
    pub revenue: f64,
    /// Total units sold for the day
    pub quantity: u64,
}

impl DailyAggregate {
    /// Create a new daily aggregate
    pub fn new(date: NaiveDate, revenue: f64, quantity: u64) -> Self {
        Self {
            date,
            revenue,
            quantity,
        }
    }
}

/// Position of a day within a series paired with its calendar date.
///
/// Regression works on `position`; weekday seasonality and forecast labels
/// work on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedDay {
    /// Zero-based position in the series
    pub position: usize,
    /// Calendar day at that position
    pub date: NaiveDate,
}

/// Date-ordered daily revenue series.
///
/// Dates are strictly ascending. Days without transactions are absent, so
/// consecutive positions may be more than one calendar day apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RevenueSeries {
    days: Vec<DailyAggregate>,
}

impl RevenueSeries {
    /// Create a series from aggregates that are already strictly date-ascending
    pub fn new(days: Vec<DailyAggregate>) -> Result<Self> {
        if let Some(pair) = days.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(AnalyticsError::DataError(format!(
                "Daily aggregates must be strictly ascending by date, found {} followed by {}",
                pair[0].date, pair[1].date
            )));
        }

        if let Some(day) = days.iter().find(|d| !d.revenue.is_finite() || d.revenue < 0.0) {
            return Err(AnalyticsError::DataError(format!(
                "Revenue must be a finite non-negative number, found {} on {}",
                day.revenue, day.date
            )));
        }

        Ok(Self { days })
    }

    /// Create a series from aggregates in any order, merging rows that share a date
    pub fn from_unsorted(days: Vec<DailyAggregate>) -> Result<Self> {
        let mut merged: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();

        for day in days {
            merged
                .entry(day.date)
                .and_modify(|existing| {
                    existing.revenue += day.revenue;
                    existing.quantity += day.quantity;
                })
                .or_insert(day);
        }

        Self::new(merged.into_values().collect())
    }

    /// Create a series from parallel date and revenue vectors (quantity 0)
    pub fn from_revenues(dates: Vec<NaiveDate>, revenues: Vec<f64>) -> Result<Self> {
        if dates.len() != revenues.len() {
            return Err(AnalyticsError::ValidationError(format!(
                "Dates length ({}) doesn't match revenues length ({})",
                dates.len(),
                revenues.len()
            )));
        }

        Self::new(
            dates
                .into_iter()
                .zip(revenues)
                .map(|(date, revenue)| DailyAggregate::new(date, revenue, 0))
                .collect(),
        )
    }

    /// Daily aggregates in date order
    pub fn days(&self) -> &[DailyAggregate] {
        &self.days
    }

    /// Number of days with at least one transaction
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the series has no days
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Daily revenues in date order
    pub fn revenues(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.revenue).collect()
    }

    /// Daily quantities in date order, as floats for correlation
    pub fn quantities(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.quantity as f64).collect()
    }

    /// Calendar dates in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }

    /// Pair each position with its calendar date
    pub fn indexed(&self) -> impl Iterator<Item = IndexedDay> + '_ {
        self.days.iter().enumerate().map(|(position, d)| IndexedDay {
            position,
            date: d.date,
        })
    }

    /// First observed date
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    /// Last observed date
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }

    /// Sum of daily revenue
    pub fn total_revenue(&self) -> f64 {
        self.days.iter().map(|d| d.revenue).sum()
    }

    /// Sum of daily quantity
    pub fn total_quantity(&self) -> u64 {
        self.days.iter().map(|d| d.quantity).sum()
    }

    /// Days falling inside `range`, preserving order
    pub fn slice(&self, range: &DateRange) -> Self {
        Self {
            days: self
                .days
                .iter()
                .filter(|d| range.contains(d.date))
                .cloned()
                .collect(),
        }
    }
}

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included
    pub start: NaiveDate,
    /// Last day included
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a new range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AnalyticsError::ValidationError(format!(
                "Date range start {} is after end {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Source of daily aggregates for a requested date range
pub trait DailyAggregateProvider {
    /// Build the ordered daily series for `range`
    fn daily_aggregates(&self, range: DateRange) -> Result<RevenueSeries>;
}

/// Provider backed by transactions held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryTransactionStore {
    transactions: Vec<Transaction>,
}

impl InMemoryTransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `transactions`
    pub fn from_transactions(transactions: Vec<Transaction>) -> Result<Self> {
        let mut store = Self::new();
        for transaction in transactions {
            store.record(transaction)?;
        }
        Ok(store)
    }

    /// Record a transaction
    pub fn record(&mut self, transaction: Transaction) -> Result<()> {
        if !transaction.amount.is_finite() || transaction.amount < 0.0 {
            return Err(AnalyticsError::DataError(format!(
                "Transaction amount must be a finite non-negative number, got {}",
                transaction.amount
            )));
        }

        self.transactions.push(transaction);
        Ok(())
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl DailyAggregateProvider for InMemoryTransactionStore {
    fn daily_aggregates(&self, range: DateRange) -> Result<RevenueSeries> {
        let mut by_day: BTreeMap<NaiveDate, DailyAggregate> = BTreeMap::new();

        for tx in self.transactions.iter().filter(|tx| range.contains(tx.date)) {
            let day = by_day
                .entry(tx.date)
                .or_insert_with(|| DailyAggregate::new(tx.date, 0.0, 0));
            day.revenue += tx.amount;
            day.quantity += tx.quantity;
        }

        tracing::debug!(
            start = %range.start,
            end = %range.end,
            days = by_day.len(),
            "Aggregated transactions into daily series"
        );

        RevenueSeries::new(by_day.into_values().collect())
    }
}
