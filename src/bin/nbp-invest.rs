//! nbp-invest CLI - 30-day three-currency investment simulation
//!
//! Interactive by default; pass `--date` and the three percentages to skip
//! the prompts entirely.
//!
//! ## Example Usage
//!
//! ```bash
//! # Interactive run
//! nbp-invest
//!
//! # Non-interactive run
//! nbp-invest --date 2023-01-02 --usd 0.5 --eur 0.3 --huf 0.2
//!
//! # Custom export path, no charts
//! nbp-invest --date 2023-01-02 --usd 1 --eur 0 --huf 0 --output run.json --no-chart
//! ```

use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use nbp_invest::allocation::{Allocation, DEFAULT_AMOUNT_PLN};
use nbp_invest::data::NbpClient;
use nbp_invest::error::{InvestError, Result as InvestResult};
use nbp_invest::export::{write_export, DEFAULT_EXPORT_PATH};
use nbp_invest::input::{parse_percentage, parse_start_date, validate_percentages};
use nbp_invest::report::{render_charts, render_table};
use nbp_invest::simulate::simulate;

/// nbp-invest: 30-day USD/EUR/HUF investment simulation against NBP rates
#[derive(Parser)]
#[command(name = "nbp-invest")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Robert Fall")]
#[command(about = "30-day USD/EUR/HUF investment simulation against NBP rates", long_about = None)]
struct Cli {
    /// Investment start date (YYYY-MM-DD, at least 30 days old)
    #[arg(short = 'd', long)]
    date: Option<String>,

    /// Percentage of USD (range of values from 0.0 to 1.0)
    #[arg(long)]
    usd: Option<f64>,

    /// Percentage of EUR (range of values from 0.0 to 1.0)
    #[arg(long)]
    eur: Option<f64>,

    /// Percentage of HUF (range of values from 0.0 to 1.0)
    #[arg(long)]
    huf: Option<f64>,

    /// Invested amount in PLN
    #[arg(short = 'a', long, default_value_t = DEFAULT_AMOUNT_PLN)]
    amount: f64,

    /// Output file for the JSON export
    #[arg(short = 'o', long, default_value = DEFAULT_EXPORT_PATH)]
    output: PathBuf,

    /// Skip the bar charts
    #[arg(long)]
    no_chart: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> InvestResult<()> {
    let today = Utc::now().date_naive();

    let non_interactive =
        cli.date.is_some() && cli.usd.is_some() && cli.eur.is_some() && cli.huf.is_some();
    let allocation = if non_interactive {
        allocation_from_args(&cli, today)?
    } else {
        prompt_allocation(&cli, today)?
    };

    if cli.verbose {
        println!(
            "{} v{}",
            "nbp-invest".cyan().bold(),
            env!("CARGO_PKG_VERSION")
        );
        println!("  {} {}", "Start:".bold(), allocation.start_date);
        println!("  {} {}", "End:".bold(), allocation.end_date);
        println!("  {} {:.2} PLN", "Amount:".bold(), allocation.amount);
        println!(
            "  {} USD {:.2} / EUR {:.2} / HUF {:.2}",
            "Split:".bold(),
            allocation.usd_pct,
            allocation.eur_pct,
            allocation.huf_pct
        );
        println!();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!(
        "Fetching NBP rates {} to {}...",
        allocation.start_date, allocation.end_date
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let client = NbpClient::new()?;
    let fetched = client
        .fetch_all(allocation.start_date, allocation.end_date)
        .await;
    spinner.finish_and_clear();
    let series = fetched?;

    let result = simulate(&allocation, &series)?;

    println!("{}", render_table(&result));

    if !cli.no_chart {
        println!();
        println!("{}", render_charts(&result));
    }

    write_export(&result, &cli.output)?;
    println!(
        "{} Export saved to: {}",
        "✓".green().bold(),
        cli.output.display()
    );

    Ok(())
}

/// Validate the flag values once; any failure is fatal rather than re-prompted
fn allocation_from_args(cli: &Cli, today: NaiveDate) -> InvestResult<Allocation> {
    let raw_date = cli.date.as_deref().unwrap_or_default();
    let start_date = parse_start_date(raw_date, today)?;

    let usd_pct = cli.usd.unwrap_or_default();
    let eur_pct = cli.eur.unwrap_or_default();
    let huf_pct = cli.huf.unwrap_or_default();

    Allocation::new(start_date, today, cli.amount, usd_pct, eur_pct, huf_pct)
}

/// Interactive prompt flow with local re-prompt loops on invalid input
fn prompt_allocation(cli: &Cli, today: NaiveDate) -> InvestResult<Allocation> {
    prompt(
        "Welcome to the investment analysis program for USD, EUR, and HUF currencies \
         over a 30-day period. To begin, please press the 'Enter' key.",
    )?;

    let start_date = if let Some(raw) = &cli.date {
        // date given on the command line: validate once, fatal on failure
        parse_start_date(raw, today)?
    } else {
        loop {
            let raw = prompt(
                "Enter a start date of the investment in the ISO 8601 format (YYYY-MM-DD): ",
            )?;
            match parse_start_date(&raw, today) {
                Ok(date) => break date,
                Err(e) => println!("{}", e),
            }
        }
    };

    let (usd_pct, eur_pct, huf_pct) = loop {
        // a parse failure restarts the whole triple
        let Some(usd) = prompt_percentage("USD")? else {
            continue;
        };
        let Some(eur) = prompt_percentage("EUR")? else {
            continue;
        };
        let Some(huf) = prompt_percentage("HUF")? else {
            continue;
        };

        match validate_percentages(usd, eur, huf) {
            Ok(()) => break (usd, eur, huf),
            Err(e) => println!("{}", e),
        }
    };

    Allocation::new(start_date, today, cli.amount, usd_pct, eur_pct, huf_pct)
}

fn prompt_percentage(code: &str) -> InvestResult<Option<f64>> {
    let raw = prompt(&format!(
        "Enter the percentage of {} (range of values from 0.0 to 1.0): ",
        code
    ))?;

    match parse_percentage(&raw) {
        Ok(pct) => Ok(Some(pct)),
        Err(e) => {
            println!("{}", e);
            Ok(None)
        }
    }
}

fn prompt(message: &str) -> InvestResult<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Err(InvestError::InputFormat(
            "Unexpected end of input.".to_string(),
        ));
    }
    Ok(line)
}
