//! Tally Core Library
//!
//! Shared functionality for the Tally expense tracker:
//! - Text normalization for classification input
//! - Layered category resolution (keyword rules, confidence-gated
//!   probabilistic model, guaranteed fallback)
//! - Category normalization onto the display vocabulary
//! - Budget aggregation against per-category limits
//!
//! The core is synchronous and request-scoped. It never raises past its
//! own boundary: classification always yields a category and
//! aggregation always yields a well-formed summary, degrading to the
//! fallback category and zero figures when inputs or artifacts are
//! missing or malformed.

pub mod budget;
pub mod category;
pub mod error;
pub mod keywords;
pub mod model;
pub mod models;
pub mod resolver;
pub mod text;

pub use budget::{coerce_amount, summarize, LimitTable};
pub use category::{normalize_category, order_categories, FALLBACK_CATEGORY, PREFERRED_ORDER};
pub use error::{Error, Result};
pub use keywords::classify_by_keyword;
pub use model::{
    BayesModel, InferenceBackend, MockBackend, ModelClassifier, ModelOpinion, LABELS_FILE,
    MODEL_FILE,
};
pub use models::{ExpenseRecord, ExpenseRow, LimitEntry, LimitStatus, Summary, SummaryEntry};
pub use resolver::{CategoryResolver, Resolution, ResolutionSource, CONFIDENCE_GATE};
pub use text::normalize;
