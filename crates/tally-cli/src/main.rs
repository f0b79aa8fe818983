//! Tally CLI - Expense categorization and budget tracking
//!
//! Usage:
//!   tally classify "Buy new Shoes!!"        Resolve a category
//!   tally summary --expenses data.csv       Spend-vs-limit summary
//!   tally limits list                       Show configured limits
//!   tally limits set food 100               Update one limit

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Classify {
            description,
            model_dir,
            explain,
        } => commands::cmd_classify(&description, model_dir, explain),
        Commands::Summary {
            expenses,
            limits,
            json,
        } => commands::cmd_summary(&expenses, &limits, json),
        Commands::Limits { action } => match action {
            LimitsAction::List { limits } => commands::cmd_limits_list(&limits),
            LimitsAction::Set {
                category,
                value,
                limits,
            } => commands::cmd_limits_set(&limits, &category, value),
        },
    }
}
