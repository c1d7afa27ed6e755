//! Error types for language detection and code-table lookups.

use thiserror::Error;

/// Errors produced by language detection and registry lookups.
#[derive(Debug, Error)]
pub enum DetectError {
    /// A language code returned by the model (or passed by a caller) has no
    /// entry in the registry.
    #[error("unknown language code: '{0}'")]
    UnknownCode(String),

    /// A language name passed by a caller has no entry in the registry.
    #[error("unknown language name: '{0}'")]
    UnknownName(String),

    /// The model returned no predictions at all for the given text.
    #[error("the model returned no prediction for the given text")]
    NoPrediction,

    /// The top prediction's confidence is below the caller's threshold.
    ///
    /// Only `predict_language_gated` surfaces this; the boolean comparison
    /// entry points log a warning and return `false` instead.
    #[error("Language detection confidence {confidence:.2} is below the threshold of {threshold:.2}.")]
    LowConfidence {
        /// Confidence of the top prediction, as reported by the model.
        confidence: f64,
        /// The threshold the caller asked to be met.
        threshold: f64,
    },

    /// The inference backend itself failed (e.g., the model runtime
    /// rejected the input).
    #[error("prediction failed: {0}")]
    Backend(String),
}

/// Errors produced while constructing a [`crate::CodeRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Reading the code table file failed.
    #[error("failed to read language code table: {0}")]
    Io(#[from] std::io::Error),

    /// A data row did not have the expected tab-separated layout.
    #[error("malformed table row at line {line}: expected at least 7 tab-separated columns")]
    MalformedRow { line: usize },

    /// Two rows claim the same language code.
    #[error("duplicate language code '{0}' in table")]
    DuplicateCode(String),

    /// Two codes claim the same language name (compared case-insensitively).
    #[error("language name '{0}' maps to more than one code")]
    DuplicateName(String),

    /// The table contained no usable rows.
    #[error("language code table is empty")]
    EmptyTable,
}
