//! Investment currencies, quoted against PLN

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{InvestError, Result};

/// Currency enumeration (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
    /// Hungarian Forint
    HUF,
}

impl Currency {
    /// The fixed leg order used everywhere: USD, EUR, HUF
    pub const ALL: [Currency; 3] = [Currency::USD, Currency::EUR, Currency::HUF];

    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::HUF => "HUF",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::HUF => "Ft",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Result<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "HUF" => Ok(Currency::HUF),
            _ => Err(InvestError::InputFormat(format!(
                "Unknown currency: {}",
                code
            ))),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
