//! CLI argument definitions using clap
//!
//! This module contains the clap structs and enums for parsing CLI
//! arguments. The command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tally - Categorize expenses and track them against budgets
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Expense categorization and budget tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Categorize a free-text expense description
    Classify {
        /// The expense description, e.g. "Buy new Shoes!!"
        description: String,

        /// Model artifact directory (defaults to TALLY_MODEL_DIR or the
        /// platform data dir)
        #[arg(long)]
        model_dir: Option<PathBuf>,

        /// Also print which pipeline stage decided
        #[arg(long)]
        explain: bool,
    },

    /// Summarize spending per category against configured limits
    Summary {
        /// CSV file of persisted expenses
        #[arg(long, default_value = "data/expenses.csv")]
        expenses: PathBuf,

        /// JSON file of per-category limits
        #[arg(long, default_value = "data/limits.json")]
        limits: PathBuf,

        /// Print the raw JSON payload instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show or update per-category budget limits
    Limits {
        #[command(subcommand)]
        action: LimitsAction,
    },
}

#[derive(Subcommand)]
pub enum LimitsAction {
    /// List limits in display order
    List {
        /// JSON file of per-category limits
        #[arg(long, default_value = "data/limits.json")]
        limits: PathBuf,
    },

    /// Set the limit for one category (the last write wins)
    Set {
        /// Category name (free-form spellings are normalized)
        category: String,

        /// Limit value; negative clears the limit
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// JSON file of per-category limits
        #[arg(long, default_value = "data/limits.json")]
        limits: PathBuf,
    },
}
