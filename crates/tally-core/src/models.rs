//! Domain models for Tally

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted expense. Owned by the storage collaborator; the core only
/// ever reads the (category, amount) projection for aggregation and
/// produces the category at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

/// One expense row as the aggregator sees it: category as stored (maybe
/// missing), amount as stored (maybe a number, maybe a string, maybe
/// garbage). Coercion happens inside the aggregator, not at parse time,
/// so malformed rows are summarized instead of dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseRow {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: serde_json::Value,
}

impl ExpenseRow {
    pub fn new(category: impl Into<String>, amount: serde_json::Value) -> Self {
        Self {
            category: Some(category.into()),
            amount,
        }
    }
}

/// The aggregation projection of a full expense record.
impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            category: Some(record.category.clone()),
            amount: serde_json::Value::from(record.amount),
        }
    }
}

/// Spend-vs-limit comparison for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitStatus {
    Over,
    Under,
    Equal,
    NoLimit,
}

impl LimitStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Over => "over",
            Self::Under => "under",
            Self::Equal => "equal",
            Self::NoLimit => "no_limit",
        }
    }
}

impl std::str::FromStr for LimitStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "over" => Ok(Self::Over),
            "under" => Ok(Self::Under),
            "equal" => Ok(Self::Equal),
            "no_limit" => Ok(Self::NoLimit),
            _ => Err(format!("Unknown limit status: {}", s)),
        }
    }
}

impl std::fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-category line of a budget summary. `spent` is rounded to the
/// nearest integer independently of the summary total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub category: String,
    pub spent: i64,
    pub limit: Option<f64>,
    pub status: LimitStatus,
}

/// Budget summary payload: overall total plus one entry per category
/// known from expenses or the limit table, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_spending: i64,
    pub categories: Vec<SummaryEntry>,
}

/// An ordered { category, limit } pair for limit display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitEntry {
    pub category: String,
    pub limit: Option<f64>,
}
