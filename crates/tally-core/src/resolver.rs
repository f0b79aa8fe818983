//! Category resolution: the layered classification pipeline
//!
//! Resolution runs three stages in strict order and short-circuits at
//! the first confident answer:
//!
//! 1. normalize: empty text resolves to the fallback immediately and
//!    never reaches the model
//! 2. keyword rules: a hit is trusted unconditionally, no matter how
//!    confident the model would have been
//! 3. model: accepted only at or above the confidence gate
//!
//! Everything else, including every failure mode, resolves to the
//! fallback category. `resolve` is total: it never panics and never
//! returns an error.

use tracing::debug;

use crate::category::FALLBACK_CATEGORY;
use crate::keywords::classify_by_keyword;
use crate::model::{ModelClassifier, ModelOpinion};
use crate::text::normalize;

/// Probability below which the model's opinion is discarded entirely.
/// Hard design constant; predictions under the gate are never blended
/// in as a secondary signal.
pub const CONFIDENCE_GATE: f64 = 0.60;

/// Which stage produced a resolution. Not persisted, but tests and
/// diagnostics need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Keyword,
    Model,
    Fallback,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Model => "model",
            Self::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved category with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub category: String,
    pub source: ResolutionSource,
}

impl Resolution {
    fn fallback() -> Self {
        Self {
            category: FALLBACK_CATEGORY.to_string(),
            source: ResolutionSource::Fallback,
        }
    }
}

/// Top-level classification entry point. Owns the model handle so the
/// load-once state lives exactly as long as the resolver.
pub struct CategoryResolver {
    model: ModelClassifier,
}

impl CategoryResolver {
    pub fn new(model: ModelClassifier) -> Self {
        Self { model }
    }

    /// Resolver with no model layer: keywords + fallback only.
    pub fn without_model() -> Self {
        Self::new(ModelClassifier::disabled())
    }

    /// Resolve a raw description to a category label.
    pub fn resolve(&self, raw: &str) -> String {
        self.resolve_detailed(raw).category
    }

    /// Resolve, keeping the provenance of the decision.
    pub fn resolve_detailed(&self, raw: &str) -> Resolution {
        let text = normalize(raw);
        if text.is_empty() {
            debug!("Empty after normalization, falling back");
            return Resolution::fallback();
        }

        if let Some(category) = classify_by_keyword(&text) {
            debug!("Keyword matched for '{}': {}", text, category);
            return Resolution {
                category,
                source: ResolutionSource::Keyword,
            };
        }

        if self.model.ready() {
            if let ModelOpinion::Prediction { category, confidence } =
                self.model.predict_with_confidence(&text)
            {
                if confidence >= CONFIDENCE_GATE {
                    debug!(
                        "Model predicted for '{}': {} (confidence: {:.2})",
                        text, category, confidence
                    );
                    return Resolution {
                        category,
                        source: ResolutionSource::Model,
                    };
                }
                debug!(
                    "Model confidence {:.2} below gate for '{}', discarding",
                    confidence, text
                );
            }
        }

        debug!("No confident stage for '{}', falling back", text);
        Resolution::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MockBackend;
    use std::sync::atomic::Ordering;

    fn resolver_with(mock: MockBackend) -> CategoryResolver {
        CategoryResolver::new(ModelClassifier::with_backend(Box::new(mock)))
    }

    #[test]
    fn test_keyword_match_wins_over_confident_model() {
        // The model is certain it's House; the keyword layer still wins.
        let resolver = resolver_with(MockBackend::confident("House", 0.99));
        let res = resolver.resolve_detailed("Buy new Shoes!!");
        assert_eq!(res.category, "Shopping");
        assert_eq!(res.source, ResolutionSource::Keyword);
    }

    #[test]
    fn test_empty_input_skips_model_entirely() {
        let mock = MockBackend::confident("Shopping", 0.99);
        let calls = mock.call_counter();
        let resolver = resolver_with(mock);

        for raw in ["", "   ", "!!!", "123"] {
            let res = resolver.resolve_detailed(raw);
            assert_eq!(res.category, "Others");
            assert_eq!(res.source, ResolutionSource::Fallback);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_model_unavailable_falls_back() {
        let resolver = CategoryResolver::without_model();
        let res = resolver.resolve_detailed("asdkj qweoi");
        assert_eq!(res.category, "Others");
        assert_eq!(res.source, ResolutionSource::Fallback);
    }

    #[test]
    fn test_confidence_gate_is_inclusive() {
        // 0.60 exactly passes the gate.
        let resolver = resolver_with(MockBackend::confident("Food & Drinks", 0.60));
        let res = resolver.resolve_detailed("pho tonight");
        assert_eq!(res.category, "Food & Drinks");
        assert_eq!(res.source, ResolutionSource::Model);
    }

    #[test]
    fn test_below_gate_is_discarded() {
        let resolver = resolver_with(MockBackend::confident("Food & Drinks", 0.59));
        let res = resolver.resolve_detailed("pho tonight");
        assert_eq!(res.category, "Others");
        assert_eq!(res.source, ResolutionSource::Fallback);
    }

    #[test]
    fn test_no_opinion_falls_back() {
        let resolver = resolver_with(MockBackend::no_opinion());
        let res = resolver.resolve_detailed("pho tonight");
        assert_eq!(res.category, "Others");
        assert_eq!(res.source, ResolutionSource::Fallback);
    }

    #[test]
    fn test_keywords_work_without_model() {
        let resolver = CategoryResolver::without_model();
        assert_eq!(resolver.resolve("KFC dinner"), "Food");
        assert_eq!(resolver.resolve("taxi home"), "Transport");
        assert_eq!(resolver.resolve("tuition fee"), "Study");
    }
}
