//! JSON export round-trip tests

use chrono::NaiveDate;

use nbp_invest::prelude::*;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn series(currency: Currency, start_mid: f64, end_mid: f64) -> RateSeries {
    RateSeries::new(
        currency,
        vec![
            RatePoint::new(date("2023-01-02"), start_mid),
            RatePoint::new(date("2023-02-01"), end_mid),
        ],
    )
}

fn result_with_split(usd: f64, eur: f64, huf: f64) -> InvestmentResult {
    let allocation = Allocation::new(
        date("2023-01-02"),
        date("2023-06-01"),
        1000.0,
        usd,
        eur,
        huf,
    )
    .unwrap();
    let series = [
        series(Currency::USD, 4.40, 4.35),
        series(Currency::EUR, 4.69, 4.68),
        series(Currency::HUF, 0.0115, 0.0114),
    ];

    simulate(&allocation, &series).unwrap()
}

#[test]
fn export_writes_exactly_two_snapshots() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exchange_rates.json");

    let result = result_with_split(0.5, 0.3, 0.2);
    write_export(&result, &path).unwrap();

    let payload = std::fs::read_to_string(&path).unwrap();
    let snapshots: Vec<Snapshot> = serde_json::from_str(&payload).unwrap();

    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].date, date("2023-01-02"));
    assert_eq!(snapshots[1].date, date("2023-02-01"));
    assert_eq!(snapshots[0].investment_amount, 1000.0);

    for snapshot in &snapshots {
        let pct_sum = snapshot.usd_pct + snapshot.eur_pct + snapshot.huf_pct;
        assert!((pct_sum - 1.0).abs() < 1e-9);
    }
}

#[test]
fn export_dates_are_iso_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exchange_rates.json");

    write_export(&result_with_split(0.5, 0.3, 0.2), &path).unwrap();

    let payload = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(value[0]["date"], "2023-01-02");
    assert_eq!(value[1]["date"], "2023-02-01");
    assert!(value[0]["usd_rate"].is_number());
    assert!(value[1]["huf_pct"].is_number());
}

#[test]
fn export_overwrites_the_previous_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exchange_rates.json");

    write_export(&result_with_split(0.5, 0.3, 0.2), &path).unwrap();
    write_export(&result_with_split(1.0, 0.0, 0.0), &path).unwrap();

    let payload = std::fs::read_to_string(&path).unwrap();
    let snapshots: Vec<Snapshot> = serde_json::from_str(&payload).unwrap();

    assert_eq!(snapshots[0].usd_pct, 1.0);
    assert_eq!(snapshots[0].eur_pct, 0.0);
}

#[test]
fn export_into_a_missing_directory_fails_with_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("exchange_rates.json");

    let err = write_export(&result_with_split(0.5, 0.3, 0.2), &path).unwrap_err();

    assert!(matches!(err, InvestError::Export { .. }));
    assert!(err.to_string().contains("no_such_dir"));
}
