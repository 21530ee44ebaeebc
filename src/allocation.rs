//! Validated allocation parameters

use chrono::{Duration, NaiveDate};

use crate::currency::Currency;
use crate::error::{InvestError, Result};
use crate::input::{min_date_age, validate_percentages};

/// Investment horizon in days
pub const INVESTMENT_DAYS: i64 = 30;

/// Absolute tolerance on the percentage sum
pub const PCT_SUM_TOLERANCE: f64 = 1e-10;

/// Default invested amount in PLN
pub const DEFAULT_AMOUNT_PLN: f64 = 1000.0;

/// A validated three-way split of `amount` PLN, held over a 30-day period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Allocation {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Invested amount in PLN
    pub amount: f64,
    pub usd_pct: f64,
    pub eur_pct: f64,
    pub huf_pct: f64,
}

impl Allocation {
    /// Build an allocation from user input.
    ///
    /// The 30-day recency rule is checked against the supplied `today`.
    /// The end date is always `start_date` + 30 days.
    pub fn new(
        start_date: NaiveDate,
        today: NaiveDate,
        amount: f64,
        usd_pct: f64,
        eur_pct: f64,
        huf_pct: f64,
    ) -> Result<Self> {
        min_date_age(start_date, today)?;
        validate_percentages(usd_pct, eur_pct, huf_pct)?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(InvestError::InputConstraint(format!(
                "Invalid amount {}. The invested amount must be a positive number of PLN.",
                amount
            )));
        }

        Ok(Self {
            start_date,
            end_date: start_date + Duration::days(INVESTMENT_DAYS),
            amount,
            usd_pct,
            eur_pct,
            huf_pct,
        })
    }

    /// Percentage allocated to `currency` at the start of the period
    pub fn pct(&self, currency: Currency) -> f64 {
        match currency {
            Currency::USD => self.usd_pct,
            Currency::EUR => self.eur_pct,
            Currency::HUF => self.huf_pct,
        }
    }
}
