//! Spend-vs-limit summary command

use std::path::Path;

use anyhow::Result;

use tally_core::{summarize, LimitStatus, Summary};

use super::{load_expenses, load_limits};

pub fn cmd_summary(expenses_path: &Path, limits_path: &Path, json: bool) -> Result<()> {
    let expenses = load_expenses(expenses_path)?;
    let limits = load_limits(limits_path)?;
    let summary = summarize(&expenses, &limits);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &Summary) {
    println!();
    println!("📊 Tally Summary");
    println!("   ─────────────────────────────────────────────");

    for entry in &summary.categories {
        let limit_text = match entry.limit {
            Some(limit) => format!("/ {}", limit),
            None => String::new(),
        };
        println!("   {:<16} {:>10} {}", entry.category, entry.spent, limit_text);
        println!("      {}", status_line(entry.spent, entry.limit, entry.status));
    }

    println!("   ─────────────────────────────────────────────");
    println!("   Total spending: {}", summary.total_spending);
    println!();
}

/// The same over/remaining figures the budget page shows.
fn status_line(spent: i64, limit: Option<f64>, status: LimitStatus) -> String {
    match (status, limit) {
        (LimitStatus::Over, Some(limit)) => {
            format!("Over budget: {}", spent as f64 - limit)
        }
        (LimitStatus::Under, Some(limit)) => {
            format!("Remaining: {}", limit - spent as f64)
        }
        (LimitStatus::Equal, _) => "At limit".to_string(),
        _ => "No limit set yet".to_string(),
    }
}
