//! Rate series primitives

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::error::{InvestError, Result};

/// A single published mid rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub mid: f64,
}

impl RatePoint {
    /// Create a new rate point
    pub fn new(date: NaiveDate, mid: f64) -> Self {
        Self { date, mid }
    }
}

/// Chronologically ordered mid rates for one currency over a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSeries {
    pub currency: Currency,
    pub points: Vec<RatePoint>,
}

impl RateSeries {
    /// Create a new series; `points` must already be in chronological order
    pub fn new(currency: Currency, points: Vec<RatePoint>) -> Self {
        Self { currency, points }
    }

    /// Number of published rates in the series
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last published mid rates in the range.
    ///
    /// The range boundaries themselves may fall on days without a published
    /// table (weekends, holidays); the nearest published rates inside the
    /// range stand in for them. A series with a single published rate yields
    /// the same point twice.
    pub fn endpoints(&self) -> Result<(RatePoint, RatePoint)> {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(InvestError::RateData {
                    currency: self.currency,
                    message: "no published rates in the requested range".to_string(),
                })
            }
        };

        for point in [first, last] {
            if point.mid <= 0.0 {
                return Err(InvestError::RateData {
                    currency: self.currency,
                    message: format!(
                        "non-positive mid rate {} published on {}",
                        point.mid, point.date
                    ),
                });
            }
        }

        Ok((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_endpoints() {
        let series = RateSeries::new(
            Currency::USD,
            vec![
                RatePoint::new(date("2023-01-02"), 4.40),
                RatePoint::new(date("2023-01-03"), 4.42),
                RatePoint::new(date("2023-02-01"), 4.35),
            ],
        );

        let (start, end) = series.endpoints().unwrap();
        assert_eq!(start.mid, 4.40);
        assert_eq!(end.mid, 4.35);
        assert_eq!(start.date, date("2023-01-02"));
        assert_eq!(end.date, date("2023-02-01"));
    }

    #[test]
    fn test_endpoints_single_point() {
        let series = RateSeries::new(
            Currency::EUR,
            vec![RatePoint::new(date("2023-01-02"), 4.69)],
        );

        let (start, end) = series.endpoints().unwrap();
        assert_eq!(start, end);
    }

    #[test]
    fn test_endpoints_empty_series() {
        let series = RateSeries::new(Currency::HUF, vec![]);

        let err = series.endpoints().unwrap_err();
        assert!(matches!(
            err,
            InvestError::RateData {
                currency: Currency::HUF,
                ..
            }
        ));
    }

    #[test]
    fn test_endpoints_rejects_zero_rate() {
        let series = RateSeries::new(
            Currency::USD,
            vec![
                RatePoint::new(date("2023-01-02"), 0.0),
                RatePoint::new(date("2023-02-01"), 4.35),
            ],
        );

        assert!(matches!(
            series.endpoints().unwrap_err(),
            InvestError::RateData { .. }
        ));
    }
}
