use chrono::{Datelike, Days, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use revenue_analytics::{
    AnalyticsConfig, DateRange, InMemoryTransactionStore, RevenueAnalyzer, Transaction,
};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HISTORY_DAYS: u64 = 90;
const FIXED_COST: f64 = 25_000.0;

// Synthetic shop history: slow upward drift, busier weekends, a price rise
// two thirds of the way through, and a few closed days
fn generate_transactions(start: NaiveDate, rng: &mut StdRng) -> Vec<Transaction> {
    let mut transactions = Vec::new();

    for day in 0..HISTORY_DAYS {
        let Some(date) = start.checked_add_days(Days::new(day)) else {
            break;
        };

        // Roughly one closed day a fortnight
        if rng.gen_bool(0.07) {
            continue;
        }

        let weekend_boost: u32 = match date.weekday() {
            Weekday::Sat | Weekday::Sun => 6,
            _ => 0,
        };
        let orders = rng.gen_range(8..16u32) + weekend_boost + (day / 15) as u32;
        let unit_price = if day < 60 { 12.5 } else { 14.0 };

        for _ in 0..orders {
            let quantity = rng.gen_range(1..4u64);
            let discount = rng.gen_range(0.9..1.0);
            transactions.push(Transaction::new(
                date,
                unit_price * quantity as f64 * discount,
                quantity,
            ));
        }
    }

    transactions
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AnalyticsConfig::load(config_path.as_deref())?;
    let analyzer = RevenueAnalyzer::new(config)?;

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("invalid start date")?;
    let end = start
        .checked_add_days(Days::new(HISTORY_DAYS - 1))
        .ok_or("invalid end date")?;

    let mut rng = StdRng::seed_from_u64(42);
    let store = InMemoryTransactionStore::from_transactions(generate_transactions(start, &mut rng))?;
    tracing::info!(transactions = store.len(), "Generated synthetic transactions");

    let report = analyzer.analyze_range(&store, DateRange::new(start, end)?, FIXED_COST)?;
    println!("{}", report);

    Ok(())
}
