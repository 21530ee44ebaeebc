//! Allocation and conversion arithmetic
//!
//! Pure computation over already-fetched rate series. No I/O happens here,
//! so the whole simulation is testable without network access, and repeated
//! runs over the same inputs are bit-identical.

use chrono::NaiveDate;
use serde::Serialize;

use crate::allocation::Allocation;
use crate::currency::Currency;
use crate::error::{InvestError, Result};
use crate::types::RateSeries;

/// One currency's share of the investment
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrencyLeg {
    pub currency: Currency,
    pub pct_start: f64,
    pub pct_end: f64,
    /// Mid rate on the first published day of the range
    pub rate_start: f64,
    /// Mid rate on the last published day of the range
    pub rate_end: f64,
    /// Units of foreign currency bought on the start date
    pub invested_units: f64,
    /// PLN value of those units on the end date
    pub value_end: f64,
}

/// Outcome of a 30-day simulation, immutable once computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentResult {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_start: f64,
    pub total_end: f64,
    /// `total_end - total_start`, rounded to grosze
    pub profit_or_loss: f64,
    /// Legs in the fixed USD, EUR, HUF order
    pub legs: [CurrencyLeg; 3],
}

impl InvestmentResult {
    /// Leg for `currency`
    pub fn leg(&self, currency: Currency) -> &CurrencyLeg {
        match currency {
            Currency::USD => &self.legs[0],
            Currency::EUR => &self.legs[1],
            Currency::HUF => &self.legs[2],
        }
    }
}

/// Round to two decimal places (PLN grosze)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert the allocation at the start rates and value it at the end rates.
///
/// `series` must hold the three legs in the fixed USD, EUR, HUF order, as
/// returned by [`NbpClient::fetch_all`](crate::data::NbpClient::fetch_all).
pub fn simulate(
    allocation: &Allocation,
    series: &[RateSeries; 3],
) -> Result<InvestmentResult> {
    for (expected, found) in Currency::ALL.iter().zip(series) {
        if found.currency != *expected {
            return Err(InvestError::RateData {
                currency: found.currency,
                message: format!("rate series out of order: expected {}", expected),
            });
        }
    }

    let mut legs = [
        convert_leg(allocation, &series[0])?,
        convert_leg(allocation, &series[1])?,
        convert_leg(allocation, &series[2])?,
    ];

    let total_end: f64 = legs.iter().map(|leg| leg.value_end).sum();
    if total_end <= 0.0 {
        return Err(InvestError::InputConstraint(
            "Nothing was invested; the end value of the allocation is zero.".to_string(),
        ));
    }

    for leg in &mut legs {
        leg.pct_end = leg.value_end / total_end;
    }

    let total_start = allocation.amount;
    let profit_or_loss = round2(total_end - total_start);

    log::info!(
        "simulated {} -> {}: {:.2} PLN -> {:.2} PLN ({:+.2})",
        allocation.start_date,
        allocation.end_date,
        total_start,
        total_end,
        profit_or_loss
    );

    Ok(InvestmentResult {
        start_date: allocation.start_date,
        end_date: allocation.end_date,
        total_start,
        total_end,
        profit_or_loss,
        legs,
    })
}

fn convert_leg(allocation: &Allocation, series: &RateSeries) -> Result<CurrencyLeg> {
    let (start, end) = series.endpoints()?;

    let pct_start = allocation.pct(series.currency);
    let invested_units = allocation.amount * pct_start / start.mid;
    let value_end = invested_units * end.mid;

    Ok(CurrencyLeg {
        currency: series.currency,
        pct_start,
        pct_end: 0.0, // filled in once the total is known
        rate_start: start.mid,
        rate_end: end.mid,
        invested_units,
        value_end,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RatePoint;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn two_point_series(currency: Currency, start_mid: f64, end_mid: f64) -> RateSeries {
        RateSeries::new(
            currency,
            vec![
                RatePoint::new(date("2023-01-02"), start_mid),
                RatePoint::new(date("2023-02-01"), end_mid),
            ],
        )
    }

    fn allocation(usd: f64, eur: f64, huf: f64) -> Allocation {
        Allocation::new(date("2023-01-02"), date("2023-06-01"), 1000.0, usd, eur, huf).unwrap()
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(4.318181), 4.32);
        assert_eq!(round2(-8.060607), -8.06);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_series_out_of_order() {
        let series = [
            two_point_series(Currency::EUR, 4.69, 4.68),
            two_point_series(Currency::USD, 4.40, 4.35),
            two_point_series(Currency::HUF, 0.0115, 0.0114),
        ];

        let err = simulate(&allocation(0.5, 0.3, 0.2), &series).unwrap_err();
        assert!(matches!(err, InvestError::RateData { .. }));
    }

    #[test]
    fn test_leg_accessor_follows_fixed_order() {
        let series = [
            two_point_series(Currency::USD, 4.40, 4.35),
            two_point_series(Currency::EUR, 4.69, 4.68),
            two_point_series(Currency::HUF, 0.0115, 0.0114),
        ];

        let result = simulate(&allocation(0.5, 0.3, 0.2), &series).unwrap();
        assert_eq!(result.leg(Currency::USD).rate_start, 4.40);
        assert_eq!(result.leg(Currency::EUR).rate_start, 4.69);
        assert_eq!(result.leg(Currency::HUF).rate_start, 0.0115);
    }
}
