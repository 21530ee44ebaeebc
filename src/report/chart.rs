//! Terminal bar panels for the simulation outcome
//!
//! Three panels mirror the tabular report: percentage distribution, exchange
//! rates and total amount, each as start-vs-end grouped bars with value
//! labels.

use colored::Colorize;

use crate::simulate::InvestmentResult;

const BAR_WIDTH: usize = 32;

struct BarGroup {
    label: String,
    start: f64,
    end: f64,
}

/// Render the three panels into one printable block
pub fn render_charts(result: &InvestmentResult) -> String {
    let mut out = String::new();

    let header = format!(
        "Investment Analysis - duration 30 days (Start: {} End: {})",
        result.start_date, result.end_date
    );
    out.push_str(&format!("{}\n\n", header.bold()));

    let pct_groups: Vec<BarGroup> = result
        .legs
        .iter()
        .map(|leg| BarGroup {
            label: leg.currency.code().to_string(),
            start: leg.pct_start,
            end: leg.pct_end,
        })
        .collect();
    push_panel(&mut out, "Percentage Distribution", &pct_groups, 1.0, 2);

    let rate_groups: Vec<BarGroup> = result
        .legs
        .iter()
        .map(|leg| BarGroup {
            label: leg.currency.code().to_string(),
            start: leg.rate_start,
            end: leg.rate_end,
        })
        .collect();
    let max_rate = rate_groups
        .iter()
        .fold(0.0f64, |max, group| max.max(group.start).max(group.end));
    push_panel(&mut out, "Exchange Rates (PLN)", &rate_groups, max_rate, 3);

    let amount_group = [BarGroup {
        label: "PLN".to_string(),
        start: result.total_start,
        end: result.total_end,
    }];
    let max_amount = result.total_start.max(result.total_end);
    push_panel(&mut out, "Investment Amount", &amount_group, max_amount, 2);

    out
}

fn push_panel(
    out: &mut String,
    title: &str,
    groups: &[BarGroup],
    max: f64,
    decimals: usize,
) {
    out.push_str(&format!("{}\n", title.cyan().bold()));
    out.push_str(&format!("{}\n", "=".repeat(title.len()).cyan()));

    for group in groups {
        out.push_str(&format!(
            "  {:<4} {} {} {:.dec$}\n",
            group.label,
            "Start".dimmed(),
            bar(group.start, max).cyan(),
            group.start,
            dec = decimals
        ));
        out.push_str(&format!(
            "  {:<4} {} {} {:.dec$}\n",
            "",
            "End  ".dimmed(),
            bar(group.end, max).yellow(),
            group.end,
            dec = decimals
        ));
    }
    out.push('\n');
}

/// Scaled block bar over a fixed width
fn bar(value: f64, max: f64) -> String {
    let ratio = if max > 0.0 {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;

    let mut rendered = "█".repeat(filled);
    rendered.push_str(&"░".repeat(BAR_WIDTH - filled));
    rendered
}
