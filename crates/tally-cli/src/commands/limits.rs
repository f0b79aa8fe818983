//! Limit display and update commands

use std::path::Path;

use anyhow::Result;

use super::{load_limits, store_limits};

pub fn cmd_limits_list(limits_path: &Path) -> Result<()> {
    let limits = load_limits(limits_path)?;

    println!();
    println!("💰 Budget Limits");
    println!("   ─────────────────────────────────────────────");
    for entry in limits.display() {
        match entry.limit {
            Some(limit) => println!("   {:<16} {}", entry.category, limit),
            None => println!("   {:<16} (no limit)", entry.category),
        }
    }
    println!();
    Ok(())
}

pub fn cmd_limits_set(limits_path: &Path, category: &str, value: f64) -> Result<()> {
    let mut limits = load_limits(limits_path)?;
    limits.set_limit(category, Some(value));
    store_limits(limits_path, &limits)?;

    match limits.get(category) {
        Some(limit) => println!("Limit for {} set to {}", category, limit),
        None => println!("Limit for {} cleared", category),
    }
    Ok(())
}
