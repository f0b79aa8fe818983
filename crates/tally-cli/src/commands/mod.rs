//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `classify` - One-shot category resolution for a description
//! - `summary` - Spend-vs-limit summary from persisted data
//! - `limits` - Limit display and updates
//!
//! The CLI is the storage collaborator the core expects: it reads
//! persisted expense rows (CSV) and the limit table (JSON) and hands
//! them to `tally-core`. Missing data files degrade gracefully (no
//! expenses, a freshly seeded limit table) instead of erroring.

pub mod classify;
pub mod limits;
pub mod summary;

// Re-export command functions for main.rs
pub use classify::*;
pub use limits::*;
pub use summary::*;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use tally_core::{ExpenseRow, LimitTable};

/// Environment variable overriding the model artifact directory.
pub const MODEL_DIR_ENV: &str = "TALLY_MODEL_DIR";

/// Resolve the model artifact directory: explicit flag, then
/// TALLY_MODEL_DIR, then the platform data dir (~/.local/share/tally).
pub fn resolve_model_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Ok(dir) = std::env::var(MODEL_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tally")
}

/// One row of the persisted expense CSV. Only the aggregation
/// projection is read; other columns (id, date, description) belong to
/// the storage collaborator.
#[derive(Debug, Deserialize)]
struct CsvExpense {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    amount: Option<String>,
}

/// Load persisted expense rows. A missing file is an empty store, not
/// an error; malformed rows are kept with whatever fields parsed so the
/// core's coercion rules apply.
pub fn load_expenses(path: &Path) -> Result<Vec<ExpenseRow>> {
    if !path.exists() {
        warn!("Expense file {} not found, treating as empty", path.display());
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open expense file {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<CsvExpense>() {
        match record {
            Ok(row) => rows.push(ExpenseRow {
                category: row.category,
                amount: row.amount.map(Value::String).unwrap_or(Value::Null),
            }),
            Err(e) => warn!("Skipping unreadable expense row: {}", e),
        }
    }
    Ok(rows)
}

/// Load the limit table. A missing file yields a freshly seeded table
/// (all display categories, no limits set); malformed entries coerce
/// inside `LimitTable::from_json`.
pub fn load_limits(path: &Path) -> Result<LimitTable> {
    if !path.exists() {
        warn!("Limit file {} not found, using seeded defaults", path.display());
        return Ok(LimitTable::seeded());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read limit file {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse limit file {}", path.display()))?;
    Ok(LimitTable::from_json(&value))
}

/// Write the limit table back to its JSON file.
pub fn store_limits(path: &Path, limits: &LimitTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let content = serde_json::to_string_pretty(&limits.to_json())?;
    fs::write(path, content)
        .with_context(|| format!("failed to write limit file {}", path.display()))?;
    Ok(())
}
