//! Start-vs-end comparison table

use tabled::{builder::Builder, Table};

use crate::currency::Currency;
use crate::simulate::InvestmentResult;

/// Format output as a table using the tabled crate.
pub fn render_table(result: &InvestmentResult) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Parameter", "Start Value", "End Value"]);

    builder.push_record([
        "Date".to_string(),
        result.start_date.to_string(),
        result.end_date.to_string(),
    ]);

    for leg in &result.legs {
        // HUF mid rates are two orders of magnitude smaller; four places
        // keep them legible
        let (start, end) = if leg.currency == Currency::HUF {
            (format!("{:.4}", leg.rate_start), format!("{:.4}", leg.rate_end))
        } else {
            (leg.rate_start.to_string(), leg.rate_end.to_string())
        };
        builder.push_record([format!("{} Rates", leg.currency), start, end]);
    }

    for leg in &result.legs {
        builder.push_record([
            format!("{} pct", leg.currency),
            format!("{:.2}", leg.pct_start),
            format!("{:.2}", leg.pct_end),
        ]);
    }

    builder.push_record([
        "Investment Amount".to_string(),
        format!("{:.2}", result.total_start),
        format!("{:.2}", result.total_end),
    ]);
    builder.push_record([
        "Profit / Loss".to_string(),
        "-".to_string(),
        format!("{:.2}", result.profit_or_loss),
    ]);

    Table::from(builder)
}
