//! Analyzers: complete text processing pipelines.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Token Filters → Tokens
//! ```
//!
//! - [`pipeline::PipelineAnalyzer`] - Custom char filter + tokenizer + filter chains
//! - [`bengali::BengaliAnalyzer`] - The normalizer and whitespace tokenizer the
//!   model contract requires
//!
//! # Examples
//!
//! ```
//! use gujob::analysis::analyzer::Analyzer;
//! use gujob::analysis::analyzer::bengali::BengaliAnalyzer;
//!
//! let analyzer = BengaliAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("Breaking: গুজব রটেছে!").unwrap().collect();
//!
//! assert_eq!(tokens[0].text, "breaking");
//! assert_eq!(tokens[1].text, "গুজব");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod bengali;
pub mod pipeline;

pub use bengali::BengaliAnalyzer;
pub use pipeline::PipelineAnalyzer;
