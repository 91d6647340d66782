//! Error types for the gujob library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`GujobError`] enum. Each variant corresponds to a failure class the
//! training pipeline either recovers from or surfaces to the caller.
//!
//! # Examples
//!
//! ```
//! use gujob::error::{GujobError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(GujobError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for gujob operations.
#[derive(Error, Debug)]
pub enum GujobError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The upstream dataset is missing, unreadable or unusable.
    ///
    /// The training pipeline recovers from this by substituting the
    /// built-in fallback corpus.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// A label class has too few examples to form a stratified split.
    #[error("Insufficient samples for class '{label}': need at least {required}, got {actual}")]
    InsufficientClassSamples {
        label: String,
        required: usize,
        actual: usize,
    },

    /// The model artifact could not be written.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A model artifact failed structural validation.
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Analysis-related errors (normalization, tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with GujobError.
pub type Result<T> = std::result::Result<T, GujobError>;

impl GujobError {
    /// Create a new source unavailable error.
    pub fn source_unavailable<S: Into<String>>(msg: S) -> Self {
        GujobError::SourceUnavailable(msg.into())
    }

    /// Create a new insufficient class samples error.
    pub fn insufficient_class_samples<S: Into<String>>(
        label: S,
        required: usize,
        actual: usize,
    ) -> Self {
        GujobError::InsufficientClassSamples {
            label: label.into(),
            required,
            actual,
        }
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        GujobError::Serialization(msg.into())
    }

    /// Create a new invalid model error.
    pub fn invalid_model<S: Into<String>>(msg: S) -> Self {
        GujobError::InvalidModel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GujobError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        GujobError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        GujobError::InvalidArgument(format!("Invalid configuration: {}", msg.into()))
    }
}
