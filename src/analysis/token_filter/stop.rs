//! Stop filter implementation.
//!
//! Removes common Bengali function words. The stopword list is always
//! exported in the model metadata; the filter itself only runs when the
//! vectorizer is configured with `stop_words = true`.
//!
//! # Examples
//!
//! ```
//! use gujob::analysis::token_filter::Filter;
//! use gujob::analysis::token_filter::stop::StopFilter;
//! use gujob::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![Token::new("এই", 0), Token::new("খবর", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "খবর");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Bengali stopwords shipped with the trainer.
pub const BENGALI_STOP_WORDS: &[&str] = &[
    "আর", "এর", "যে", "যা", "তা", "এই", "ও", "তার", "করে", "হয়", "থেকে", "দিয়ে", "না", "নেই",
    "আছে", "করা", "হল", "হবে", "ছিল", "একটি", "সে", "তিনি", "আমি", "আমরা", "তারা", "কি", "কেন",
    "কীভাবে",
];

/// Default Bengali stop words as a HashSet.
pub static BENGALI_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    BENGALI_STOP_WORDS.iter().map(|&s| s.to_string()).collect()
});

/// A filter that removes stop words from the token stream.
///
/// Positions of surviving tokens are left as the tokenizer assigned them.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the Bengali stop words.
    pub fn new() -> Self {
        Self::with_stop_words(BENGALI_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("সরকার", 0),
            Token::new("এই", 1),
            Token::new("নীতিমালা", 2),
            Token::new("না", 3),
            Token::new("প্রকাশিত", 4),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "সরকার");
        assert_eq!(result[1].text, "নীতিমালা");
        assert_eq!(result[2].text, "প্রকাশিত");
        assert_eq!(result[2].position, 4);
    }

    #[test]
    fn test_default_list() {
        let filter = StopFilter::new();
        assert_eq!(filter.len(), BENGALI_STOP_WORDS.len());
        assert!(filter.is_stop_word("কীভাবে"));
        assert!(!filter.is_stop_word("গুজব"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
