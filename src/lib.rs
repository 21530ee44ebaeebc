//! # nbp-invest
//!
//! Simulates a 30-day USD/EUR/HUF allocation of a PLN amount against the
//! historical table A mid rates published by the National Bank of Poland,
//! and reports the outcome as a comparison table, terminal bar charts and a
//! JSON export.
//!
//! The computation is decoupled from I/O: [`simulate::simulate`] is a pure
//! function over a validated [`allocation::Allocation`] and three fetched
//! [`types::RateSeries`] values, so results are reproducible without network
//! access.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nbp_invest::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let today = chrono::Utc::now().date_naive();
//! let start = today - chrono::Duration::days(60);
//!
//! let allocation = Allocation::new(start, today, 1000.0, 0.5, 0.3, 0.2)?;
//! let client = NbpClient::new()?;
//! let series = client
//!     .fetch_all(allocation.start_date, allocation.end_date)
//!     .await?;
//!
//! let result = simulate(&allocation, &series)?;
//! println!("{:+.2} PLN", result.profit_or_loss);
//! # Ok(())
//! # }
//! ```

pub mod allocation;
pub mod currency;
pub mod data;
pub mod error;
pub mod export;
pub mod input;
pub mod report;
pub mod simulate;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::allocation::{Allocation, DEFAULT_AMOUNT_PLN, INVESTMENT_DAYS};
    pub use crate::currency::Currency;
    pub use crate::data::NbpClient;
    pub use crate::error::{InvestError, Result};
    pub use crate::export::{write_export, Snapshot, DEFAULT_EXPORT_PATH};
    pub use crate::simulate::{simulate, CurrencyLeg, InvestmentResult};
    pub use crate::types::{RatePoint, RateSeries};
}
