//! JSON snapshot export

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::currency::Currency;
use crate::error::{InvestError, Result};
use crate::simulate::InvestmentResult;

/// Default export file, overwritten on every run
pub const DEFAULT_EXPORT_PATH: &str = "exchange_rates.json";

/// One exported period boundary; the field layout is the file format
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub date: NaiveDate,
    pub investment_amount: f64,
    pub usd_pct: f64,
    pub eur_pct: f64,
    pub huf_pct: f64,
    pub usd_rate: f64,
    pub eur_rate: f64,
    pub huf_rate: f64,
}

/// Start and end snapshots for `result`, in that order
pub fn snapshots(result: &InvestmentResult) -> [Snapshot; 2] {
    let usd = result.leg(Currency::USD);
    let eur = result.leg(Currency::EUR);
    let huf = result.leg(Currency::HUF);

    [
        Snapshot {
            date: result.start_date,
            investment_amount: result.total_start,
            usd_pct: usd.pct_start,
            eur_pct: eur.pct_start,
            huf_pct: huf.pct_start,
            usd_rate: usd.rate_start,
            eur_rate: eur.rate_start,
            huf_rate: huf.rate_start,
        },
        Snapshot {
            date: result.end_date,
            investment_amount: result.total_end,
            usd_pct: usd.pct_end,
            eur_pct: eur.pct_end,
            huf_pct: huf.pct_end,
            usd_rate: usd.rate_end,
            eur_rate: eur.rate_end,
            huf_rate: huf.rate_end,
        },
    ]
}

/// Write the two-snapshot export, overwriting any previous run's file
pub fn write_export(result: &InvestmentResult, path: &Path) -> Result<()> {
    let payload = serde_json::to_string_pretty(&snapshots(result))?;

    fs::write(path, payload).map_err(|e| InvestError::Export {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::info!("wrote export to {}", path.display());
    Ok(())
}
