//! Budget aggregation: spend-vs-limit summaries
//!
//! Groups persisted (category, amount) pairs by display category and
//! compares each group against the configured limit table. Amounts are
//! coerced, never rejected: a malformed amount counts as zero so the row
//! still shows up in the summary.
//!
//! The total and each per-category sum are rounded independently, so the
//! rounded group sums are not guaranteed to add up to the rounded total.
//! That artifact is accepted, not papered over.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::category::{normalize_category, order_categories, PREFERRED_ORDER};
use crate::models::{ExpenseRow, LimitEntry, LimitStatus, Summary, SummaryEntry};

/// Per-category budget limits, keyed by display-normalized category.
/// `None` means "no limit set"; entries are only ever written by
/// [`LimitTable::set_limit`] and never auto-deleted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitTable {
    limits: BTreeMap<String, Option<f64>>,
}

impl LimitTable {
    /// Empty table: no categories known yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with every display category and no limit set, so a
    /// fresh deployment still summarizes all known categories.
    pub fn seeded() -> Self {
        let mut table = Self::new();
        for category in PREFERRED_ORDER {
            table.limits.insert((*category).to_string(), None);
        }
        table
    }

    /// Build a table from a persisted JSON object of the form
    /// `{ "Food & Drinks": 100, "Shopping": null, ... }`.
    ///
    /// Malformed entries coerce to safe defaults instead of failing the
    /// load: non-numeric or negative values become "no limit", blank
    /// category keys are skipped outright.
    pub fn from_json(value: &Value) -> Self {
        let mut table = Self::new();
        if let Value::Object(map) = value {
            for (category, limit) in map {
                if category.trim().is_empty() {
                    debug!("Skipping blank category key in limit table");
                    continue;
                }
                table.set_limit(category, coerce_limit(limit));
            }
        }
        table
    }

    /// Set (or clear) the limit for a category. The category is
    /// display-normalized first; the last write for a category wins.
    /// Negative limits are meaningless and store as "no limit".
    pub fn set_limit(&mut self, category: &str, limit: Option<f64>) {
        let key = normalize_category(Some(category));
        let limit = limit.filter(|l| l.is_finite() && *l >= 0.0);
        self.limits.insert(key, limit);
    }

    /// Configured limit for a category, if one is set.
    pub fn get(&self, category: &str) -> Option<f64> {
        let key = normalize_category(Some(category));
        self.limits.get(&key).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Iterate raw (category, limit) entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.limits.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Ordered `{ category, limit }` pairs for limit display.
    pub fn display(&self) -> Vec<LimitEntry> {
        order_categories(self.limits.keys().cloned())
            .into_iter()
            .map(|category| {
                let limit = self.limits.get(&category).copied().flatten();
                LimitEntry { category, limit }
            })
            .collect()
    }

    /// Serialize back to the persisted JSON object shape.
    pub fn to_json(&self) -> Value {
        let map: serde_json::Map<String, Value> = self
            .limits
            .iter()
            .map(|(category, limit)| {
                let value = match limit {
                    Some(l) => Value::from(*l),
                    None => Value::Null,
                };
                (category.clone(), value)
            })
            .collect();
        Value::Object(map)
    }
}

fn coerce_limit(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Coerce a persisted amount to a number. Numbers pass through, numeric
/// strings parse, everything else (null, booleans, garbage strings,
/// non-finite values) counts as zero.
pub fn coerce_amount(value: &Value) -> f64 {
    let amount = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

/// Summarize expenses against a limit table.
///
/// Categories are display-normalized before grouping; the output covers
/// the union of categories seen in expenses and categories known to the
/// limit table, in display order. With no expense rows at all the result
/// still carries one zero-spend entry per limit-table category.
pub fn summarize(expenses: &[ExpenseRow], limits: &LimitTable) -> Summary {
    let mut raw_total = 0.0_f64;
    let mut groups: BTreeMap<String, f64> = BTreeMap::new();

    for row in expenses {
        let amount = coerce_amount(&row.amount);
        raw_total += amount;
        let category = normalize_category(row.category.as_deref());
        *groups.entry(category).or_insert(0.0) += amount;
    }

    let mut categories: Vec<String> = groups.keys().cloned().collect();
    for (category, _) in limits.iter() {
        if !groups.contains_key(category) {
            categories.push(category.to_string());
        }
    }
    categories.retain(|c| !c.trim().is_empty());

    let entries = order_categories(categories)
        .into_iter()
        .map(|category| {
            let spent = groups.get(&category).copied().unwrap_or(0.0).round() as i64;
            let limit = limits.get(&category);
            let status = match limit {
                None => LimitStatus::NoLimit,
                Some(l) if (spent as f64) > l => LimitStatus::Over,
                Some(l) if (spent as f64) < l => LimitStatus::Under,
                Some(_) => LimitStatus::Equal,
            };
            SummaryEntry {
                category,
                spent,
                limit,
                status,
            }
        })
        .collect();

    Summary {
        total_spending: raw_total.round() as i64,
        categories: entries,
    }
}
