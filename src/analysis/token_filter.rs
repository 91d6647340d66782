//! Token filter implementations for token transformation.
//!
//! Filters receive the tokenizer's stream and produce a new stream. The
//! trainer uses [`stop::StopFilter`] only when stopword removal is enabled in
//! the vectorizer configuration.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod stop;

pub use stop::StopFilter;
