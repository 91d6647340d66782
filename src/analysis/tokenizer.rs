//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split normalized text into tokens. The model contract only
//! allows whitespace splitting, so [`whitespace::WhitespaceTokenizer`] is the
//! single implementation.
//!
//! # Examples
//!
//! ```
//! use gujob::analysis::tokenizer::Tokenizer;
//! use gujob::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("জাল নিউজ ছড়াচ্ছে").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
