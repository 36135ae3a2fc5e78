//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use vantage_portfolio::{CommentarySnapshot, RiskHeatmap};

/// Width of the longest heatmap bar, in characters.
const BAR_WIDTH: usize = 40;

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Prints rows as a formatted table.
pub fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No holdings.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..)).with(Alignment::right()))
        .to_string();

    println!("{}", table);
}

/// Prints one commentary report.
pub fn print_report(snapshot: &CommentarySnapshot) {
    print!("{}", snapshot.text);
}

/// Prints a history entry with its "Analysis from" header.
pub fn print_history_entry(snapshot: &CommentarySnapshot) {
    let header = format!("Analysis from {}", snapshot.timestamp_label());
    println!("{} {}", header.bold(), format!("({} {})", snapshot.id, snapshot.kind).dimmed());
    print_divider();
    print_report(snapshot);
    println!();
}

/// Renders the heatmap as a horizontal bar chart.
pub fn render_heatmap(heatmap: &RiskHeatmap) -> Vec<String> {
    let max = heatmap.max_score();
    let label_width = heatmap
        .entries()
        .iter()
        .map(|e| e.sector.as_str().chars().count())
        .max()
        .unwrap_or(0);

    heatmap
        .entries()
        .iter()
        .map(|entry| {
            let ratio = if max > 0.0 { entry.score / max } else { 0.0 };
            let bar = "█".repeat((ratio * BAR_WIDTH as f64).round() as usize);
            let bar = if ratio >= 2.0 / 3.0 {
                bar.red()
            } else if ratio >= 1.0 / 3.0 {
                bar.yellow()
            } else {
                bar.green()
            };
            format!(
                "{:<width$}  {:>7.3}  {}",
                entry.sector.as_str(),
                entry.score,
                bar,
                width = label_width
            )
        })
        .collect()
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a divider line.
pub fn print_divider() {
    println!("{}", "─".repeat(60).dimmed());
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
