//! Probabilistic model layer of the category pipeline
//!
//! Wraps a pre-trained multinomial naive Bayes classifier loaded from two
//! JSON artifacts: `model.json` (vocabulary + log probabilities) and
//! `labels.json` (the label encoder's class list). Training lives
//! elsewhere; this module only consumes the artifacts for inference.
//!
//! Inference never errors past this boundary. Anything that goes wrong
//! (missing artifacts, a model/encoder mismatch) collapses to
//! [`ModelOpinion::NoOpinion`] and the resolver falls through to its
//! fallback.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Model artifact file name inside the artifact directory.
pub const MODEL_FILE: &str = "model.json";
/// Label encoder artifact file name inside the artifact directory.
pub const LABELS_FILE: &str = "labels.json";

/// What the model layer has to say about one input. Failures are not a
/// variant of their own: a model with nothing trustworthy to offer
/// simply has no opinion.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOpinion {
    /// The most probable category and its probability.
    Prediction { category: String, confidence: f64 },
    /// Model unavailable, errored, or produced nothing usable.
    NoOpinion,
}

/// Interface for all inference backends. The production backend is
/// [`BayesModel`]; tests inject [`MockBackend`].
pub trait InferenceBackend: Send + Sync {
    /// Predict a category with its probability for normalized text.
    fn predict_with_confidence(&self, text: &str) -> ModelOpinion;
}

/// On-disk shape of `model.json`.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    /// token -> feature index
    vocabulary: HashMap<String, usize>,
    /// per-class log prior, class order matches the label encoder
    class_log_prior: Vec<f64>,
    /// per-class, per-feature log probability
    feature_log_prob: Vec<Vec<f64>>,
}

/// On-disk shape of `labels.json`.
#[derive(Debug, Deserialize)]
struct LabelArtifact {
    /// class index -> category name
    classes: Vec<String>,
}

/// Multinomial naive Bayes inference over whitespace token counts.
#[derive(Debug)]
pub struct BayesModel {
    vocabulary: HashMap<String, usize>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
    classes: Vec<String>,
}

impl BayesModel {
    /// Load and cross-validate both artifacts. Either everything loads
    /// and agrees, or the whole load fails; a partially-loaded model is
    /// never observable.
    pub fn load(model_path: &Path, labels_path: &Path) -> Result<Self> {
        let model: ModelArtifact = serde_json::from_str(&fs::read_to_string(model_path)?)?;
        let labels: LabelArtifact = serde_json::from_str(&fs::read_to_string(labels_path)?)?;

        if labels.classes.is_empty() {
            return Err(Error::Artifact("label encoder has no classes".into()));
        }
        let n_classes = labels.classes.len();
        if model.class_log_prior.len() != n_classes || model.feature_log_prob.len() != n_classes {
            return Err(Error::Artifact(format!(
                "model/encoder mismatch: {} classes in encoder, {} priors, {} probability rows",
                n_classes,
                model.class_log_prior.len(),
                model.feature_log_prob.len()
            )));
        }
        let n_features = model.vocabulary.len();
        if model.feature_log_prob.iter().any(|row| row.len() != n_features) {
            return Err(Error::Artifact(format!(
                "feature log-probability rows do not match vocabulary size {}",
                n_features
            )));
        }
        if model.vocabulary.values().any(|&ix| ix >= n_features) {
            return Err(Error::Artifact("vocabulary index out of range".into()));
        }

        Ok(Self {
            vocabulary: model.vocabulary,
            class_log_prior: model.class_log_prior,
            feature_log_prob: model.feature_log_prob,
            classes: labels.classes,
        })
    }

    /// Posterior distribution over classes for one input, log-sum-exp
    /// normalized. Tokens outside the vocabulary contribute nothing.
    fn predict_proba(&self, text: &str) -> Vec<f64> {
        let mut joint: Vec<f64> = self.class_log_prior.clone();
        for token in text.split_whitespace() {
            if let Some(&ix) = self.vocabulary.get(token) {
                for (class_ix, ll) in joint.iter_mut().enumerate() {
                    *ll += self.feature_log_prob[class_ix][ix];
                }
            }
        }

        let max = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let log_denom = max + joint.iter().map(|ll| (ll - max).exp()).sum::<f64>().ln();
        joint.iter().map(|ll| (ll - log_denom).exp()).collect()
    }
}

impl InferenceBackend for BayesModel {
    fn predict_with_confidence(&self, text: &str) -> ModelOpinion {
        let proba = self.predict_proba(text);
        let best = proba
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .filter(|(_, p)| p.is_finite());
        match best {
            Some((ix, &confidence)) => ModelOpinion::Prediction {
                category: self.classes[ix].clone(),
                confidence,
            },
            None => ModelOpinion::NoOpinion,
        }
    }
}

/// Fixed-opinion backend for tests and embedding. Counts invocations so
/// tests can assert the model was (or wasn't) consulted.
pub struct MockBackend {
    opinion: ModelOpinion,
    calls: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn new(opinion: ModelOpinion) -> Self {
        Self {
            opinion,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A backend that always predicts `category` at `confidence`.
    pub fn confident(category: impl Into<String>, confidence: f64) -> Self {
        Self::new(ModelOpinion::Prediction {
            category: category.into(),
            confidence,
        })
    }

    /// A backend that never has an opinion.
    pub fn no_opinion() -> Self {
        Self::new(ModelOpinion::NoOpinion)
    }

    /// Shared handle to the invocation counter. Clone before boxing the
    /// backend away.
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl InferenceBackend for MockBackend {
    fn predict_with_confidence(&self, _text: &str) -> ModelOpinion {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.opinion.clone()
    }
}

struct ArtifactPaths {
    model: PathBuf,
    labels: PathBuf,
}

/// Owned, lazily-initialized handle to the inference backend.
///
/// The artifact load is attempted at most once per process: the first
/// call that needs the backend runs the load under a `OnceLock`, and the
/// outcome (loaded backend or permanent not-ready) is cached for the
/// lifetime of the handle. Concurrent first calls cannot double-load,
/// and a half-loaded state is never observable.
pub struct ModelClassifier {
    paths: Option<ArtifactPaths>,
    state: OnceLock<Option<Box<dyn InferenceBackend>>>,
}

impl ModelClassifier {
    /// Handle that will load `model.json` + `labels.json` from `dir` on
    /// first use.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            paths: Some(ArtifactPaths {
                model: dir.join(MODEL_FILE),
                labels: dir.join(LABELS_FILE),
            }),
            state: OnceLock::new(),
        }
    }

    /// Handle with no artifacts: never ready, every prediction is
    /// `NoOpinion`.
    pub fn disabled() -> Self {
        Self {
            paths: None,
            state: OnceLock::new(),
        }
    }

    /// Handle around an already-constructed backend. Used by tests and
    /// by embedders that manage artifact loading themselves.
    pub fn with_backend(backend: Box<dyn InferenceBackend>) -> Self {
        let state = OnceLock::new();
        let _ = state.set(Some(backend));
        Self { paths: None, state }
    }

    fn backend(&self) -> Option<&dyn InferenceBackend> {
        self.state
            .get_or_init(|| {
                let paths = self.paths.as_ref()?;
                match BayesModel::load(&paths.model, &paths.labels) {
                    Ok(model) => {
                        debug!(
                            "Loaded model artifacts ({} classes, {} features)",
                            model.classes.len(),
                            model.vocabulary.len()
                        );
                        Some(Box::new(model) as Box<dyn InferenceBackend>)
                    }
                    Err(e) => {
                        warn!("Model artifacts unavailable, model layer disabled: {}", e);
                        None
                    }
                }
            })
            .as_deref()
    }

    /// Whether a backend is available, attempting the one-shot artifact
    /// load if it hasn't happened yet.
    pub fn ready(&self) -> bool {
        self.backend().is_some()
    }

    /// Predict through the loaded backend; `NoOpinion` while not ready.
    pub fn predict_with_confidence(&self, text: &str) -> ModelOpinion {
        match self.backend() {
            Some(backend) => backend.predict_with_confidence(text),
            None => ModelOpinion::NoOpinion,
        }
    }
}
