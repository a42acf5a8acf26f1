use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};
use revenue_analytics::{
    AnalyticsConfig, Baseline, DailyAggregate, DateRange, InMemoryTransactionStore,
    RevenueAnalyzer, RevenueSeries, Transaction,
};
use stats_math::{exponential_moving_average, moving_average, weighted_moving_average};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn flat_week() -> RevenueSeries {
    RevenueSeries::new(
        (0..7)
            .map(|i| DailyAggregate::new(start() + Days::new(i), 100.0, 10))
            .collect(),
    )
    .unwrap()
}

// Four weeks of orders with a weekend lift and a slow upward drift
fn sample_store() -> InMemoryTransactionStore {
    let mut store = InMemoryTransactionStore::new();

    for day in 0..28u64 {
        let date = start() + Days::new(day);
        let base_orders = if matches!(day % 7, 5 | 6) { 12 } else { 8 };
        let orders = base_orders + day / 7;
        for _ in 0..orders {
            store.record(Transaction::new(date, 25.0, 2)).unwrap();
        }
    }

    store
}

#[test]
fn test_flat_week_end_to_end() {
    let series = flat_week();
    let analyzer = RevenueAnalyzer::new(AnalyticsConfig::default()).unwrap();
    let report = analyzer.analyze(&series, &Baseline::from_series(&series, 350.0));

    assert_approx_eq!(report.summary.mean, 100.0);
    assert_eq!(report.summary.std_dev, 0.0);
    assert_eq!(report.summary.cv, 0.0);
    assert_eq!(report.trend.slope, 0.0);
    assert_eq!(report.trend.r_squared, 0.0);

    let revenues = series.revenues();
    for value in moving_average(&revenues, 7).into_iter().flatten() {
        assert_approx_eq!(value, 100.0);
    }
    for value in weighted_moving_average(&revenues, 7).into_iter().flatten() {
        assert_approx_eq!(value, 100.0);
    }
    for value in exponential_moving_average(&revenues, 0.3) {
        assert_approx_eq!(value, 100.0);
    }

    assert_eq!(report.flagged_anomalies().count(), 0);
    assert!(report.structural_breaks.is_empty());
    assert_eq!(report.health.components.stability, 100);
    assert_eq!(report.health.components.growth, 50);

    // Seven days meets the minimum history, so the forecast runs
    assert_eq!(report.forecast.len(), 7);
    for point in &report.forecast {
        assert_approx_eq!(point.linear, 100.0);
        assert_approx_eq!(point.ma, 100.0);
        assert_approx_eq!(point.ema, 100.0);
        assert_approx_eq!(point.wma, 100.0);
    }
}

#[test]
fn test_short_history_skips_forecast() {
    let series = RevenueSeries::new(flat_week().days()[..5].to_vec()).unwrap();
    let analyzer = RevenueAnalyzer::default();
    let report = analyzer.analyze(&series, &Baseline::from_series(&series, 0.0));

    assert!(report.forecast.is_empty());
    assert_eq!(report.decomposition.len(), 5);
    assert_eq!(report.scenarios.len(), 7);
}

#[test]
fn test_empty_series_produces_neutral_report() {
    let series = RevenueSeries::default();
    let report = RevenueAnalyzer::default().analyze(&series, &Baseline::from_series(&series, 0.0));

    assert_eq!(report.summary.days, 0);
    assert!(report.decomposition.is_empty());
    assert!(report.anomalies.is_empty());
    assert!(report.forecast.is_empty());
    assert!(report.correlation.autocorrelation.is_empty());
    assert!(report.health.score <= 100);
}

#[test]
fn test_analyze_range_from_store() {
    let store = sample_store();
    let analyzer = RevenueAnalyzer::new(AnalyticsConfig {
        forecast_periods: 14,
        ..AnalyticsConfig::default()
    })
    .unwrap();

    let range = DateRange::new(start(), start() + Days::new(27)).unwrap();
    let report = analyzer.analyze_range(&store, range, 2_000.0).unwrap();

    assert_eq!(report.summary.days, 28);
    assert!(report.trend.slope > 0.0);
    assert_eq!(report.forecast.len(), 14);
    assert_eq!(report.forecast[0].date, Some(start() + Days::new(28)));
    assert_approx_eq!(report.correlation.revenue_quantity, 1.0);

    // Base scenario reproduces the period totals
    assert_approx_eq!(report.scenarios[0].estimated_revenue, report.summary.total_revenue);
    assert_approx_eq!(report.baseline.price, 12.5);

    for point in &report.decomposition {
        assert_approx_eq!(point.trend + point.seasonal + point.residual, point.revenue, 1e-9);
    }
    for point in &report.forecast {
        assert!(point.lower <= point.linear && point.linear <= point.upper);
    }
}

#[test]
fn test_partial_range_uses_only_matching_days() {
    let store = sample_store();
    let range = DateRange::new(start(), start() + Days::new(6)).unwrap();
    let report = RevenueAnalyzer::default()
        .analyze_range(&store, range, 0.0)
        .unwrap();

    assert_eq!(report.summary.days, 7);
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = RevenueAnalyzer::new(AnalyticsConfig {
        ema_alpha: 2.0,
        ..AnalyticsConfig::default()
    });

    assert!(result.is_err());
}

#[test]
fn test_report_serializes_and_renders() {
    let series = flat_week();
    let report = RevenueAnalyzer::default().analyze(&series, &Baseline::from_series(&series, 350.0));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["health"]["components"]["stability"], 100);
    assert_eq!(json["scenarios"].as_array().map(|s| s.len()), Some(7));

    let rendered = report.to_string();
    assert!(rendered.contains("Revenue Summary (7 days)"));
    assert!(rendered.contains("Health Index"));
}

#[test]
fn test_concurrent_analyses_agree() {
    let store = &sample_store();
    let analyzer = &RevenueAnalyzer::default();
    let range = DateRange::new(start(), start() + Days::new(27)).unwrap();

    let reports: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(move |_| scope.spawn(move || analyzer.analyze_range(store, range, 500.0).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for report in &reports[1..] {
        assert_eq!(report, &reports[0]);
    }
}
