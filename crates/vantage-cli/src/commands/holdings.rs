//! Holdings command implementation.
//!
//! Shows the configured positions with their current value and P/L.

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;
use vantage_portfolio::commentary::format::format_amount;
use vantage_portfolio::Portfolio;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{print_json, print_table, print_warning};

/// Arguments for the holdings command.
#[derive(Args, Debug)]
pub struct HoldingsArgs {
    /// Only show holdings trading below their purchase price
    #[arg(long)]
    pub losers: bool,
}

#[derive(Debug, Serialize)]
struct HoldingRecord {
    ticker: String,
    name: String,
    sector: String,
    quantity: u64,
    purchase_price: Decimal,
    current_price: Decimal,
    current_value: Decimal,
    profit_loss: Decimal,
    percent_change: f64,
}

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Sector")]
    sector: String,
    #[tabled(rename = "Qty")]
    quantity: u64,
    #[tabled(rename = "Buy")]
    purchase_price: String,
    #[tabled(rename = "Current")]
    current_price: String,
    #[tabled(rename = "Value")]
    current_value: String,
    #[tabled(rename = "P/L")]
    profit_loss: String,
    #[tabled(rename = "Change")]
    percent_change: String,
}

impl From<&HoldingRecord> for HoldingRow {
    fn from(r: &HoldingRecord) -> Self {
        Self {
            ticker: r.ticker.clone(),
            name: r.name.clone(),
            sector: r.sector.clone(),
            quantity: r.quantity,
            purchase_price: format_amount(r.purchase_price),
            current_price: format_amount(r.current_price),
            current_value: format_amount(r.current_value),
            profit_loss: format_amount(r.profit_loss),
            percent_change: format!("{:+.2}%", r.percent_change),
        }
    }
}

fn records(portfolio: &Portfolio, losers: bool) -> Vec<HoldingRecord> {
    portfolio
        .iter_with_sector()
        .filter(|(h, _)| !losers || !h.is_profitable())
        .map(|(h, sector)| HoldingRecord {
            ticker: h.ticker.to_string(),
            name: h.name.clone(),
            sector: portfolio.sector_map().sectors()[sector].to_string(),
            quantity: h.quantity,
            purchase_price: h.purchase_price,
            current_price: h.current_price,
            current_value: h.current_value(),
            profit_loss: h.profit_loss(),
            percent_change: h.percent_change(),
        })
        .collect()
}

/// Execute the holdings command.
pub fn execute(args: HoldingsArgs, config: &CliConfig, format: OutputFormat) -> Result<()> {
    let portfolio = config.portfolio.build_portfolio()?;
    let records = records(&portfolio, args.losers);

    match format {
        OutputFormat::Text => {
            let rows: Vec<HoldingRow> = records.iter().map(HoldingRow::from).collect();
            print_table(&rows);
            if !args.losers {
                println!(
                    "Total value {}{}, P/L {}{}",
                    config.portfolio.currency_symbol,
                    format_amount(portfolio.total_value()),
                    config.portfolio.currency_symbol,
                    format_amount(portfolio.total_profit_loss()),
                );
            } else if records.is_empty() {
                print_warning("No holdings below purchase price");
            }
        }
        OutputFormat::Json => print_json(&records)?,
    }
    Ok(())
}
