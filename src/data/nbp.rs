//! NBP web API integration
//!
//! Fetches table A mid rates for a currency over an inclusive date range.
//! No API key is required.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::currency::Currency;
use crate::error::{InvestError, Result};
use crate::types::{RatePoint, RateSeries};

const NBP_BASE_URL: &str = "https://api.nbp.pl/api/exchangerates/rates/A";

/// NBP rate-table API client
pub struct NbpClient {
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RateTableResponse {
    rates: Vec<PublishedRate>,
}

#[derive(Debug, Deserialize)]
struct PublishedRate {
    #[serde(rename = "effectiveDate")]
    effective_date: NaiveDate,
    mid: f64,
}

impl NbpClient {
    /// Create a new NBP client with a bounded per-request timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| InvestError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch the published mid rates for `currency` over `[start, end]`.
    ///
    /// NBP answers 404 when the range holds no published rate; that case is
    /// reported as missing data for the range rather than an HTTP failure.
    pub async fn fetch_rates(
        &self,
        currency: Currency,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RateSeries> {
        let url = format!(
            "{}/{}/{}/{}/?format=json",
            NBP_BASE_URL,
            currency.code(),
            start,
            end
        );
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            InvestError::RateFetch {
                currency,
                message: format!("HTTP request failed: {}", e),
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(InvestError::RateData {
                currency,
                message: format!("no rate published between {} and {}", start, end),
            });
        }

        if !response.status().is_success() {
            return Err(InvestError::RateFetch {
                currency,
                message: format!("NBP returned error: {}", response.status()),
            });
        }

        let body: RateTableResponse =
            response.json().await.map_err(|e| InvestError::RateFetch {
                currency,
                message: format!("JSON parse error: {}", e),
            })?;

        let series = parse_rate_table(currency, body)?;
        log::info!(
            "fetched {} published {} rates between {} and {}",
            series.len(),
            currency,
            start,
            end
        );
        Ok(series)
    }

    /// Fetch all three legs concurrently, in the fixed USD, EUR, HUF order.
    ///
    /// The first failure aborts the whole fetch; no retries are attempted.
    pub async fn fetch_all(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<[RateSeries; 3]> {
        let (usd, eur, huf) = tokio::try_join!(
            self.fetch_rates(Currency::USD, start, end),
            self.fetch_rates(Currency::EUR, start, end),
            self.fetch_rates(Currency::HUF, start, end),
        )?;

        Ok([usd, eur, huf])
    }
}

fn parse_rate_table(currency: Currency, body: RateTableResponse) -> Result<RateSeries> {
    if body.rates.is_empty() {
        return Err(InvestError::RateData {
            currency,
            message: "empty rate table in response".to_string(),
        });
    }

    let mut points: Vec<RatePoint> = body
        .rates
        .iter()
        .map(|rate| RatePoint::new(rate.effective_date, rate.mid))
        .collect();

    // NBP publishes in chronological order; sort anyway, endpoints depend on it
    points.sort_by_key(|point| point.date);

    Ok(RateSeries::new(currency, points))
}
