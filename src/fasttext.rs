//! Optional fastText inference backend.
//!
//! Wraps a pretrained fastText language-identification model (e.g., Meta's
//! `fasttext-language-identification` release) behind the [`Predictor`]
//! trait. Gated by the `fasttext-backend` feature because the `fasttext`
//! crate builds the C++ library.
//!
//! fastText output is not guaranteed sorted when a threshold filter is
//! involved, so this backend re-sorts by descending probability before
//! handing predictions to the policy layer, which trusts the ordering.

use anyhow::{Context, Result};
use fasttext::FastText;
use tracing::info;

use crate::error::DetectError;
use crate::predictor::{code_from_label, Prediction, Predictor};

/// Environment variable naming the model file to load.
pub const MODEL_PATH_ENV: &str = "LANGCHECK_MODEL_PATH";

/// Configuration for the fastText backend.
#[derive(Debug, Clone)]
pub struct FastTextConfig {
    /// Path to the fastText `.bin` model file.
    pub model_path: String,
}

impl FastTextConfig {
    /// Read the configuration from the environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            model_path: std::env::var(MODEL_PATH_ENV)
                .with_context(|| format!("{} not set", MODEL_PATH_ENV))?,
        })
    }
}

/// Language detector backed by a loaded fastText model.
pub struct FastTextDetector {
    model: FastText,
}

impl FastTextDetector {
    /// Load a fastText model from a `.bin` file on disk.
    pub fn from_path(path: &str) -> Result<Self> {
        info!(path, "loading fastText language identification model");
        let mut model = FastText::new();
        model
            .load_model(path)
            .map_err(|message| anyhow::anyhow!(message))
            .with_context(|| format!("failed to load fastText model from {path}"))?;
        Ok(Self { model })
    }

    /// Load a fastText model from the path named by `LANGCHECK_MODEL_PATH`.
    pub fn from_env() -> Result<Self> {
        let config = FastTextConfig::from_env()?;
        Self::from_path(&config.model_path)
    }
}

impl Predictor for FastTextDetector {
    fn predict(&self, text: &str, k: usize) -> Result<Vec<Prediction>, DetectError> {
        let mut raw = self
            .model
            .predict(text, k as i32, 0.0)
            .map_err(DetectError::Backend)?;

        raw.sort_by(|a, b| {
            b.prob
                .partial_cmp(&a.prob)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(raw
            .into_iter()
            .map(|prediction| Prediction {
                code: code_from_label(&prediction.label).to_string(),
                confidence: f64::from(prediction.prob),
            })
            .collect())
    }
}
