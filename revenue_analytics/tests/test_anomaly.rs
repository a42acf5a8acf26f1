use assert_approx_eq::assert_approx_eq;
use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use revenue_analytics::anomaly::{
    break_dates, detect_anomalies, detect_structural_breaks, DEFAULT_ANOMALY_THRESHOLD,
    DEFAULT_BREAK_SENSITIVITY, DEFAULT_BREAK_WINDOW,
};
use revenue_analytics::data::RevenueSeries;
use rstest::rstest;

fn series_from(revenues: &[f64]) -> RevenueSeries {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    RevenueSeries::from_revenues(
        (0..revenues.len() as u64).map(|i| start + Days::new(i)).collect(),
        revenues.to_vec(),
    )
    .unwrap()
}

fn step_series() -> Vec<f64> {
    let mut values = vec![100.0; 10];
    values.extend(vec![200.0; 10]);
    values
}

#[test]
fn test_constant_series_has_no_anomalies() {
    let points = detect_anomalies(&series_from(&[100.0; 12]), DEFAULT_ANOMALY_THRESHOLD);

    assert_eq!(points.len(), 12);
    assert!(points.iter().all(|p| p.zscore == 0.0 && !p.is_anomaly));
}

#[test]
fn test_fractional_constant_series_scores_zero() {
    let points = detect_anomalies(&series_from(&[0.1; 10]), DEFAULT_ANOMALY_THRESHOLD);
    assert!(points.iter().all(|p| p.zscore == 0.0 && !p.is_anomaly));
}

#[test]
fn test_small_scale_spike_is_flagged() {
    let mut revenues = vec![1e-8; 10];
    revenues[4] = 6e-8;

    let points = detect_anomalies(&series_from(&revenues), DEFAULT_ANOMALY_THRESHOLD);
    assert_approx_eq!(points[4].zscore, 3.0, 1e-6);
    assert!(points[4].is_anomaly);
}

#[test]
fn test_single_spike_is_flagged() {
    // Nine days at 100 and one at 600: mean 150, population std dev 150
    let mut revenues = vec![100.0; 10];
    revenues[4] = 600.0;

    let points = detect_anomalies(&series_from(&revenues), DEFAULT_ANOMALY_THRESHOLD);
    let flagged: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.is_anomaly)
        .map(|(i, _)| i)
        .collect();

    assert_eq!(flagged, vec![4]);
    assert_approx_eq!(points[4].zscore, 3.0);
    assert_approx_eq!(points[0].zscore, -1.0 / 3.0);
}

#[rstest]
#[case(2.0, 1)]
#[case(2.99, 1)]
#[case(3.0, 0)]
#[case(3.5, 0)]
fn test_threshold_is_strict(#[case] threshold: f64, #[case] expected: usize) {
    let mut revenues = vec![100.0; 10];
    revenues[4] = 600.0;

    let flagged = detect_anomalies(&series_from(&revenues), threshold)
        .iter()
        .filter(|p| p.is_anomaly)
        .count();

    assert_eq!(flagged, expected);
}

#[test]
fn test_negative_deviations_are_flagged() {
    let mut revenues = vec![500.0; 10];
    revenues[7] = 0.0;

    let points = detect_anomalies(&series_from(&revenues), DEFAULT_ANOMALY_THRESHOLD);
    assert!(points[7].is_anomaly);
    assert!(points[7].zscore < 0.0);
}

#[test]
fn test_step_change_produces_break_cluster() {
    // Whole-series std dev is 50, so the threshold is 75. Positions 9..=11 see
    // mean differences of 80, 100 and 80; the cluster is reported as-is.
    let breaks = detect_structural_breaks(
        &step_series(),
        DEFAULT_BREAK_WINDOW,
        DEFAULT_BREAK_SENSITIVITY,
    );

    assert_eq!(breaks, vec![9, 10, 11]);
}

#[test]
fn test_constant_series_has_no_breaks() {
    let breaks = detect_structural_breaks(&[100.0; 30], DEFAULT_BREAK_WINDOW, DEFAULT_BREAK_SENSITIVITY);
    assert!(breaks.is_empty());
}

#[rstest]
#[case(0)]
#[case(5)]
#[case(10)]
fn test_short_series_has_no_breaks(#[case] len: usize) {
    let values: Vec<f64> = (0..len).map(|i| if i < len / 2 { 0.0 } else { 1000.0 }).collect();
    assert!(detect_structural_breaks(&values, 5, 1.5).is_empty());
}

#[test]
fn test_minimum_length_checks_single_position() {
    // With 11 points only position 5 has five points on each side
    let mut values = vec![0.0; 5];
    values.extend(vec![100.0; 6]);

    assert_eq!(detect_structural_breaks(&values, 5, 1.5), vec![5]);
}

#[test]
fn test_break_dates_follow_positions() {
    let series = series_from(&step_series());
    let breaks = detect_structural_breaks(&series.revenues(), 5, 1.5);
    let dates = break_dates(&series, &breaks);

    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(
        dates,
        vec![start + Days::new(9), start + Days::new(10), start + Days::new(11)]
    );
}
