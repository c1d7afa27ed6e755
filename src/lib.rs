//! Language detection helpers around a pretrained identification model.
//!
//! The crate has two collaborating pieces:
//!
//! - [`CodeRegistry`]: an immutable bidirectional table between ISO 639-3
//!   language codes (as emitted by the model) and human-readable names,
//!   built once from the embedded table or a SIL `iso-639-3.tab` file.
//! - [`LanguageChecker`]: the policy layer that turns raw model output into
//!   the public query forms — best guess, best guess with confidence, top-k
//!   candidates, threshold-gated prediction, and boolean language
//!   comparisons.
//!
//! The model itself sits behind the [`Predictor`] trait. A fastText-backed
//! implementation is available under the `fasttext-backend` feature; any
//! other source of ranked (code, confidence) pairs works the same way.
//!
//! # Example
//!
//! ```rust,ignore
//! use langcheck::{FastTextDetector, LanguageChecker};
//!
//! let detector = FastTextDetector::from_env()?;
//! let checker = LanguageChecker::with_builtin_registry(detector);
//!
//! let name = checker.best_language("Hello, how are you?")?;
//! assert_eq!(name, "English");
//!
//! // Hard guarantee: raises on low confidence.
//! let name = checker.predict_language_gated("Hello, how are you?", 0.9)?;
//!
//! // Comparison forms degrade to false instead of raising.
//! let same = checker.is_same_language("Hello!", "Cześć!", Some(0.9));
//! ```

mod checker;
mod error;
#[cfg(feature = "fasttext-backend")]
mod fasttext;
mod predictor;
mod registry;
mod table;

pub use checker::LanguageChecker;
pub use error::{DetectError, RegistryError};
#[cfg(feature = "fasttext-backend")]
pub use fasttext::{FastTextConfig, FastTextDetector, MODEL_PATH_ENV};
pub use predictor::{code_from_label, Candidate, Prediction, Predictor};
pub use registry::CodeRegistry;
