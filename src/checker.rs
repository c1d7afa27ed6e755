//! The prediction-result policy layer.
//!
//! `LanguageChecker` turns raw model output (ranked code/confidence pairs)
//! into the public query forms: best guess, best guess with confidence,
//! top-k candidates, threshold-gated prediction, and the boolean language
//! comparisons.
//!
//! Failure semantics are split on purpose:
//!
//! - `predict_language_gated` is the single entry point that raises on a
//!   confidence below the caller's threshold. Callers wanting a hard
//!   guarantee use it directly.
//! - `is_language` and `is_same_language` degrade to `false` with a logged
//!   warning on any runtime failure (no prediction, unknown predicted code,
//!   confidence below threshold), so batch comparison workflows are not
//!   interrupted by single-text failures. An unknown *target* name passed by
//!   the caller still raises, since that is a programming error rather than
//!   a runtime condition.

use tracing::{debug, warn};

use crate::error::DetectError;
use crate::predictor::{Candidate, Prediction, Predictor};
use crate::registry::CodeRegistry;

/// Policy layer over a pretrained language-identification model.
///
/// Holds the inference collaborator and the code registry; carries no other
/// state, caches nothing between calls.
#[derive(Debug)]
pub struct LanguageChecker<P> {
    predictor: P,
    registry: CodeRegistry,
}

impl<P: Predictor> LanguageChecker<P> {
    /// Create a checker over a predictor and an explicit registry.
    pub fn new(predictor: P, registry: CodeRegistry) -> Self {
        Self {
            predictor,
            registry,
        }
    }

    /// Create a checker over a predictor with the embedded default registry.
    pub fn with_builtin_registry(predictor: P) -> Self {
        Self::new(predictor, CodeRegistry::builtin())
    }

    /// Access the code registry.
    pub fn registry(&self) -> &CodeRegistry {
        &self.registry
    }

    /// Predict the language of `text`.
    ///
    /// # Returns
    /// * `Ok(String)` with the display name of the top prediction
    /// * `Err(DetectError::NoPrediction)` if the model returned nothing
    /// * `Err(DetectError::UnknownCode)` if the predicted code has no
    ///   registry entry
    pub fn best_language(&self, text: &str) -> Result<String, DetectError> {
        let top = self.top_prediction(text)?;
        let name = self.registry.name_for_code(&top.code)?;
        Ok(name.to_string())
    }

    /// Predict the language of `text` along with the model's confidence.
    ///
    /// The confidence is the raw top-prediction probability, not
    /// re-normalized in any way.
    pub fn best_language_with_confidence(
        &self,
        text: &str,
    ) -> Result<(String, f64), DetectError> {
        let top = self.top_prediction(text)?;
        let name = self.registry.name_for_code(&top.code)?;
        Ok((name.to_string(), top.confidence))
    }

    /// Return up to `k` name-resolved language candidates for `text`,
    /// highest confidence first.
    ///
    /// A predicted code the registry does not know is dropped with a logged
    /// warning rather than failing the whole call; the model's vocabulary is
    /// not assumed to be fully covered by the local table. An empty model
    /// output yields an empty vector.
    pub fn candidates(&self, text: &str, k: usize) -> Result<Vec<Candidate>, DetectError> {
        let predictions = self.predictor.predict(text, k)?;
        debug!(
            requested = k,
            returned = predictions.len(),
            "fetched language candidates"
        );

        let mut candidates = Vec::with_capacity(predictions.len().min(k));
        for prediction in predictions.into_iter().take(k) {
            match self.registry.name_for_code(&prediction.code) {
                Ok(name) => candidates.push(Candidate {
                    name: name.to_string(),
                    confidence: prediction.confidence,
                }),
                Err(_) => {
                    warn!(
                        code = %prediction.code,
                        "model predicted a code missing from the registry, dropping candidate"
                    );
                }
            }
        }
        Ok(candidates)
    }

    /// Predict the language of `text`, requiring the model's confidence to
    /// meet `certainty`.
    ///
    /// This is the only entry point that fails hard on low confidence.
    ///
    /// # Returns
    /// * `Ok(String)` with the display name when confidence ≥ `certainty`
    /// * `Err(DetectError::LowConfidence)` carrying both values otherwise
    /// * `Err(DetectError::NoPrediction)` / `Err(DetectError::UnknownCode)`
    ///   as for [`Self::best_language`]
    pub fn predict_language_gated(
        &self,
        text: &str,
        certainty: f64,
    ) -> Result<String, DetectError> {
        let top = self.gated_prediction(text, Some(certainty))?;
        let name = self.registry.name_for_code(&top.code)?;
        Ok(name.to_string())
    }

    /// Check whether `text` is written in the language called `name`.
    ///
    /// The target `name` is resolved through the registry first and an
    /// unknown name raises `DetectError::UnknownName`. After that the call
    /// never fails: low confidence (when `certainty` is given), a missing
    /// prediction, or an unrecognized predicted code all log a warning and
    /// yield `Ok(false)`.
    pub fn is_language(
        &self,
        name: &str,
        text: &str,
        certainty: Option<f64>,
    ) -> Result<bool, DetectError> {
        let target = self.registry.code_for_name(name)?.to_string();

        match self.checked_code(text, certainty) {
            Ok(code) => Ok(code == target),
            Err(err) => {
                warn!(error = %err, "language check degraded to false");
                Ok(false)
            }
        }
    }

    /// Check whether two texts are written in the same language.
    ///
    /// Both texts go through the same gated path as [`Self::is_language`];
    /// any failure on either side (including a confidence below `certainty`)
    /// logs a warning and yields `false`. Comparison is by language code,
    /// not display name. Symmetric in `text_a` and `text_b`.
    pub fn is_same_language(&self, text_a: &str, text_b: &str, certainty: Option<f64>) -> bool {
        let code_a = match self.checked_code(text_a, certainty) {
            Ok(code) => code,
            Err(err) => {
                warn!(error = %err, "same-language check degraded to false");
                return false;
            }
        };
        let code_b = match self.checked_code(text_b, certainty) {
            Ok(code) => code,
            Err(err) => {
                warn!(error = %err, "same-language check degraded to false");
                return false;
            }
        };
        code_a == code_b
    }

    /// Top-1 prediction, failing on empty model output.
    fn top_prediction(&self, text: &str) -> Result<Prediction, DetectError> {
        let mut predictions = self.predictor.predict(text, 1)?;
        if predictions.is_empty() {
            return Err(DetectError::NoPrediction);
        }
        Ok(predictions.remove(0))
    }

    /// Top-1 prediction with an optional confidence gate.
    fn gated_prediction(
        &self,
        text: &str,
        certainty: Option<f64>,
    ) -> Result<Prediction, DetectError> {
        let top = self.top_prediction(text)?;
        if let Some(threshold) = certainty {
            if top.confidence < threshold {
                return Err(DetectError::LowConfidence {
                    confidence: top.confidence,
                    threshold,
                });
            }
        }
        Ok(top)
    }

    /// Gated top-1 code, verified to exist in the registry.
    ///
    /// Shared by the boolean comparison entry points, which collapse the
    /// error into `false`.
    fn checked_code(&self, text: &str, certainty: Option<f64>) -> Result<String, DetectError> {
        let top = self.gated_prediction(text, certainty)?;
        self.registry.name_for_code(&top.code)?;
        Ok(top.code)
    }
}
