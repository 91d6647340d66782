//! Text analysis for gujob.
//!
//! This module holds the normalization and tokenization half of the model
//! contract: char filters, the Bengali normalizer, the whitespace tokenizer,
//! the stopword filter and the analyzers that chain them.

pub mod analyzer;
pub mod char_filter;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use normalizer::{NormalizationConfig, TextNormalizer, normalize};
pub use token::*;
