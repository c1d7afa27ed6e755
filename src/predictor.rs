//! Inference collaborator contract.
//!
//! The policy layer in [`crate::checker`] is generic over anything that can
//! produce ranked language predictions for a text. The shipped fastText
//! wrapper implements this trait behind the `fasttext-backend` feature;
//! tests use small scripted implementations.

use serde::{Deserialize, Serialize};

use crate::error::DetectError;

/// A single raw model prediction: a language code and its confidence.
///
/// Confidences come straight from the model. They are approximately in
/// [0, 1] but are not re-normalized here; fastText is known to emit values
/// slightly above 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// ISO 639-3 language code as emitted by the model (e.g., "eng").
    pub code: String,
    /// Model confidence for this code.
    pub confidence: f64,
}

/// A prediction whose code has been resolved to a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Human-readable language name (e.g., "English").
    pub name: String,
    /// Model confidence, unmodified.
    pub confidence: f64,
}

/// Contract for the pretrained identification model.
///
/// `predict` returns at most `k` predictions ordered by descending
/// confidence. It may return fewer than `k` when fewer languages are
/// plausible, and an empty vector on total failure. Implementations own the
/// ordering guarantee; the policy layer does not re-sort.
pub trait Predictor {
    /// Predict the top `k` languages for `text`.
    fn predict(&self, text: &str, k: usize) -> Result<Vec<Prediction>, DetectError>;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(&self, text: &str, k: usize) -> Result<Vec<Prediction>, DetectError> {
        (**self).predict(text, k)
    }
}

/// Extract the ISO 639-3 code from a fastText label.
///
/// Labels follow the format `__label__<code>_<script>`, e.g.
/// `__label__eng_Latn`. The code is the segment between the label prefix and
/// the first underscore after it. Labels without the prefix are returned
/// with only the script suffix stripped.
pub fn code_from_label(label: &str) -> &str {
    let tail = label.rsplit("__").next().unwrap_or(label);
    tail.split('_').next().unwrap_or(tail)
}
