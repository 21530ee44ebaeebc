//! Input parsing and validation backing the interactive prompts
//!
//! Pure functions only; the prompt loops themselves live in the binary.
//! Format failures and constraint failures are distinct variants so the CLI
//! can print a different message for each.

use chrono::NaiveDate;

use crate::allocation::{INVESTMENT_DAYS, PCT_SUM_TOLERANCE};
use crate::error::{InvestError, Result};

/// Parse a prompt answer as an ISO 8601 investment start date.
///
/// Accepts only `YYYY-MM-DD` and only dates at least 30 days before `today`.
pub fn parse_start_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        InvestError::InputFormat(
            "Date is not in the ISO 8601 format. Enter the date as YYYY-MM-DD.".to_string(),
        )
    })?;

    min_date_age(date, today)?;
    Ok(date)
}

/// Reject start dates less than 30 days before `today`
pub fn min_date_age(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if (today - date).num_days() < INVESTMENT_DAYS {
        return Err(InvestError::InputConstraint(
            "Invalid date. Enter a date that is at least 30 days old.".to_string(),
        ));
    }
    Ok(())
}

/// Parse a prompt answer as a percentage value
pub fn parse_percentage(input: &str) -> Result<f64> {
    input.trim().parse::<f64>().map_err(|_| {
        InvestError::InputFormat(
            "Invalid input. Please enter a valid number. Please note that the sum of the \
             percentages of USD, EUR and HUF must be equal to 1.0"
                .to_string(),
        )
    })
}

/// Check that the three percentages are each in [0, 1] and split the whole
/// amount (sum equal to 1.0 within an absolute tolerance of 1e-10)
pub fn validate_percentages(usd_pct: f64, eur_pct: f64, huf_pct: f64) -> Result<()> {
    let in_range = |pct: f64| (0.0..=1.0).contains(&pct);
    let sum_ok = (usd_pct + eur_pct + huf_pct - 1.0).abs() < PCT_SUM_TOLERANCE;

    if !(in_range(usd_pct) && in_range(eur_pct) && in_range(huf_pct) && sum_ok) {
        return Err(InvestError::InputConstraint(
            "Incorrect value. The sum of the percentages of USD, EUR and HUF must be equal to 1.0"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_start_date() {
        let today = date("2023-06-01");
        assert_eq!(
            parse_start_date("2023-01-02", today).unwrap(),
            date("2023-01-02")
        );
        assert_eq!(
            parse_start_date("  2023-01-02\n", today).unwrap(),
            date("2023-01-02")
        );
    }

    #[test]
    fn test_malformed_date_is_a_format_error() {
        let today = date("2023-06-01");
        for input in ["02-01-2023", "2023/01/02", "2023-13-01", "yesterday", ""] {
            assert!(
                matches!(
                    parse_start_date(input, today),
                    Err(InvestError::InputFormat(_))
                ),
                "input {:?} should be a format error",
                input
            );
        }
    }

    #[test]
    fn test_recent_date_is_a_constraint_error() {
        let today = date("2023-06-01");
        assert!(matches!(
            parse_start_date("2023-05-20", today),
            Err(InvestError::InputConstraint(_))
        ));
        // the boundary itself is accepted
        assert!(parse_start_date("2023-05-02", today).is_ok());
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("0.5").unwrap(), 0.5);
        assert_eq!(parse_percentage(" 1 ").unwrap(), 1.0);
        assert!(matches!(
            parse_percentage("half"),
            Err(InvestError::InputFormat(_))
        ));
    }

    #[test]
    fn test_validate_percentages() {
        assert!(validate_percentages(0.5, 0.3, 0.2).is_ok());
        assert!(validate_percentages(1.0, 0.0, 0.0).is_ok());
        assert!(validate_percentages(0.1, 0.2, 0.7).is_ok());

        assert!(validate_percentages(0.5, 0.3, 0.3).is_err());
        assert!(validate_percentages(1.5, -0.3, -0.2).is_err());
        assert!(validate_percentages(0.5, 0.25, 0.2).is_err());
    }
}
