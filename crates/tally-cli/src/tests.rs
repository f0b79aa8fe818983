//! CLI command tests

use std::fs;
use std::path::PathBuf;

use tally_core::{summarize, LimitStatus};

use crate::commands::{self, load_expenses, load_limits, store_limits};

fn temp_path(dir: &tempfile::TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn test_load_expenses_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let rows = load_expenses(&temp_path(&dir, "expenses.csv")).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_load_expenses_reads_category_and_amount() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir, "expenses.csv");
    fs::write(
        &path,
        "id,date,description,amount,category\n\
         1,2025-01-01T00:00:00Z,pho,50,Food\n\
         2,2025-01-02T00:00:00Z,grab,oops,transport\n",
    )
    .unwrap();

    let rows = load_expenses(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category.as_deref(), Some("Food"));

    // The core's coercion rules apply: "50" parses, "oops" counts as 0.
    let summary = summarize(&rows, &tally_core::LimitTable::new());
    assert_eq!(summary.total_spending, 50);
    let names: Vec<&str> = summary
        .categories
        .iter()
        .map(|e| e.category.as_str())
        .collect();
    assert_eq!(names, vec!["Food & Drinks", "Transportation"]);
}

#[test]
fn test_load_limits_missing_file_is_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let limits = load_limits(&temp_path(&dir, "limits.json")).unwrap();
    assert!(!limits.is_empty());
    assert_eq!(limits.get("Food & Drinks"), None);
    assert_eq!(limits.display().len(), tally_core::PREFERRED_ORDER.len());
}

#[test]
fn test_limits_set_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir, "limits.json");

    commands::cmd_limits_set(&path, "food", 50.0).unwrap();
    commands::cmd_limits_set(&path, "Food & Drinks", 75.0).unwrap();

    // Last write wins, stored under the display-normalized key.
    let limits = load_limits(&path).unwrap();
    assert_eq!(limits.get("food"), Some(75.0));
    assert_eq!(limits.get("Food & Drinks"), Some(75.0));
}

#[test]
fn test_store_and_reload_limits() {
    let dir = tempfile::tempdir().unwrap();
    let path = temp_path(&dir, "nested/limits.json");

    let mut limits = tally_core::LimitTable::new();
    limits.set_limit("Study", Some(200.0));
    limits.set_limit("Shopping", None);
    store_limits(&path, &limits).unwrap();

    let reloaded = load_limits(&path).unwrap();
    assert_eq!(reloaded, limits);
}

#[test]
fn test_summary_command_with_data() {
    let dir = tempfile::tempdir().unwrap();
    let expenses = temp_path(&dir, "expenses.csv");
    let limits = temp_path(&dir, "limits.json");
    fs::write(
        &expenses,
        "id,date,description,amount,category\n1,2025-01-01T00:00:00Z,pho,80,food\n",
    )
    .unwrap();
    fs::write(&limits, r#"{"Food & Drinks": 100}"#).unwrap();

    assert!(commands::cmd_summary(&expenses, &limits, false).is_ok());
    assert!(commands::cmd_summary(&expenses, &limits, true).is_ok());

    let summary = summarize(&load_expenses(&expenses).unwrap(), &load_limits(&limits).unwrap());
    let food = &summary.categories[0];
    assert_eq!(food.spent, 80);
    assert_eq!(food.status, LimitStatus::Under);
}

#[test]
fn test_classify_command_without_model() {
    let dir = tempfile::tempdir().unwrap();
    // Empty model dir: keyword + fallback layers only.
    assert!(commands::cmd_classify("Buy new Shoes!!", Some(dir.path().into()), false).is_ok());
    assert!(commands::cmd_classify("asdkj qweoi", Some(dir.path().into()), true).is_ok());
}

#[test]
fn test_limits_list_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(commands::cmd_limits_list(&temp_path(&dir, "limits.json")).is_ok());
}
