//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw string before it reaches the tokenizer.
//! The Bengali normalizer is nothing more than an ordered chain of these
//! filters, so every rule it applies is an individually testable unit.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseCharFilter`] - Unicode case folding
//! - [`trim::TrimCharFilter`] - Strips leading/trailing whitespace
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use gujob::analysis::char_filter::CharFilter;
//! use gujob::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"[0-9]+", "").unwrap();
//! assert_eq!(filter.filter("২০২৪ সালে 2024"), "২০২৪ সালে ");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Filters must be pure: the same input always yields the same output.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod lowercase;
pub mod pattern_replace;
pub mod trim;

pub use lowercase::LowercaseCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
pub use trim::TrimCharFilter;
