//! Bengali text normalizer.
//!
//! The normalizer is the first half of the wire contract between training and
//! inference: any consumer of an exported model must turn raw text into the
//! same canonical string before tokenizing it on whitespace. The rules, in
//! order:
//!
//! 1. absent input becomes the empty string
//! 2. lowercase
//! 3. trim
//! 4. each punctuation character in [`PUNCTUATION`] becomes one space
//! 5. whitespace runs collapse to one space
//! 6. ASCII digits `0-9` are deleted
//! 7. whitespace runs collapse again and the result is trimmed
//!
//! Step 7 keeps the normalizer idempotent. It never changes the whitespace
//! split of the output.
//!
//! # Examples
//!
//! ```
//! use gujob::analysis::normalizer::normalize;
//!
//! assert_eq!(normalize(Some("  গুজব! ২৪ ঘণ্টায় 100 জন।  ")), "গুজব ২৪ ঘণ্টায় জন");
//! assert_eq!(normalize(None), "");
//! ```

use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::analysis::char_filter::{
    CharFilter, LowercaseCharFilter, PatternReplaceCharFilter, TrimCharFilter,
};
use crate::error::Result;

/// Characters replaced by a single space during normalization.
///
/// Includes the Bengali dari (`।`), the sentence-final mark.
pub const PUNCTUATION: &[char] = &[
    '।', ',', '.', '?', '!', ';', ':', '"', '\'', '(', ')', '[', ']', '{', '}',
];

const PUNCTUATION_PATTERN: &str = r#"[।,\.\?!;:"'\(\)\[\]\{\}]"#;
const WHITESPACE_PATTERN: &str = r"\s+";
const DIGIT_PATTERN: &str = r"[0-9]+";

static DEFAULT_NORMALIZER: LazyLock<TextNormalizer> = LazyLock::new(|| {
    TextNormalizer::try_new().expect("built-in normalization patterns are valid regexes")
});

/// Normalize raw text with the default Bengali rules.
pub fn normalize(text: Option<&str>) -> String {
    DEFAULT_NORMALIZER.normalize(text)
}

/// An ordered chain of char filters implementing the normalization rules.
#[derive(Clone)]
pub struct TextNormalizer {
    filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create the normalizer with the fixed Bengali rule set.
    ///
    /// Shares the compiled patterns of the process-wide default instance.
    pub fn new() -> Self {
        DEFAULT_NORMALIZER.clone()
    }

    /// Compile the Bengali rule set.
    pub fn try_new() -> Result<Self> {
        let collapse = Arc::new(PatternReplaceCharFilter::new(WHITESPACE_PATTERN, " ")?);
        let trim = Arc::new(TrimCharFilter::new());

        let filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(LowercaseCharFilter::new()),
            trim.clone(),
            Arc::new(PatternReplaceCharFilter::new(PUNCTUATION_PATTERN, " ")?),
            collapse.clone(),
            Arc::new(PatternReplaceCharFilter::new(DIGIT_PATTERN, "")?),
            collapse,
            trim,
        ];

        Ok(Self { filters })
    }

    /// Normalize the given text; `None` maps to the empty string.
    pub fn normalize(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        self.filters
            .iter()
            .fold(text.to_string(), |acc, filter| filter.filter(&acc))
    }

    /// Names of the chained filters, in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CharFilter for TextNormalizer {
    fn filter(&self, input: &str) -> String {
        self.normalize(Some(input))
    }

    fn name(&self) -> &'static str {
        "bengali_normalize"
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field("filters", &self.filter_names())
            .finish()
    }
}

/// Description of the normalization applied at training time.
///
/// Exported in the model metadata so that an inference engine can check it
/// reimplements the same rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationConfig {
    /// Text is lowercased.
    pub lowercase: bool,
    /// Characters replaced by a space.
    pub punctuation: Vec<String>,
    /// ASCII digits are deleted.
    pub strip_digits: bool,
    /// Whether the stopword list below was removed from the token stream.
    pub stop_words_applied: bool,
    /// The Bengali stopword list shipped with the trainer.
    pub bengali_stopwords: Vec<String>,
}

impl NormalizationConfig {
    /// Describe the built-in rules, recording whether stopwords were removed.
    pub fn bengali(stop_words_applied: bool) -> Self {
        Self {
            lowercase: true,
            punctuation: PUNCTUATION.iter().map(|c| c.to_string()).collect(),
            strip_digits: true,
            stop_words_applied,
            bengali_stopwords: crate::analysis::token_filter::stop::BENGALI_STOP_WORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for NormalizationConfig {
    fn default() -> Self {
        Self::bengali(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some(" \t\n ")), "");
    }

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize(Some("  Breaking NEWS  ")), "breaking news");
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(
            normalize(Some("সরকারি ঘোষণা।নতুন নীতিমালা,প্রকাশিত")),
            "সরকারি ঘোষণা নতুন নীতিমালা প্রকাশিত"
        );
        assert_eq!(normalize(Some("a(b)c[d]e{f}g")), "a b c d e f g");
        assert_eq!(normalize(Some("\"quoted\" 'single'")), "quoted single");
        assert_eq!(normalize(Some("what?!;:")), "what");
    }

    #[test]
    fn test_digits_removed_not_replaced() {
        assert_eq!(normalize(Some("covid19 news")), "covid news");
        assert_eq!(normalize(Some("abc123def")), "abcdef");
    }

    #[test]
    fn test_digit_only_word_leaves_single_space() {
        assert_eq!(normalize(Some("আজ 25 জন")), "আজ জন");
    }

    #[test]
    fn test_bengali_digits_are_kept() {
        assert_eq!(normalize(Some("২৫ জন")), "২৫ জন");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "  শোনা যাচ্ছে যে সরকার গোপনে নতুন কর বসাতে চাইছে!! ",
            "Label = 0, FAKE!",
            "x 1 2 3 y",
            "((()))",
            "মিথ্যা।।দাবি",
        ];
        for input in inputs {
            let once = normalize(Some(input));
            assert_eq!(normalize(Some(&once)), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_output_has_no_digits_or_punctuation() {
        let out = normalize(Some("He said: \"1, 2, 3!\" (really?) [yes] {no}। 2024."));
        assert!(!out.chars().any(|c| c.is_ascii_digit()));
        assert!(!out.chars().any(|c| PUNCTUATION.contains(&c)));
        assert_eq!(out, "he said really yes no");
    }

    #[test]
    fn test_try_new_matches_default() {
        let compiled = TextNormalizer::try_new().unwrap();
        let sample = "গুজব!! ছড়িয়েছে ২০২৪ সালে, 2024।";
        assert_eq!(compiled.normalize(Some(sample)), normalize(Some(sample)));
        assert_eq!(compiled.filter_names(), TextNormalizer::new().filter_names());
    }

    #[test]
    fn test_filter_chain_order() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.filter_names(),
            vec![
                "lowercase",
                "trim",
                "pattern_replace",
                "pattern_replace",
                "pattern_replace",
                "pattern_replace",
                "trim"
            ]
        );
    }

    #[test]
    fn test_normalization_config() {
        let config = NormalizationConfig::bengali(false);
        assert!(config.lowercase);
        assert!(config.strip_digits);
        assert!(!config.stop_words_applied);
        assert_eq!(config.punctuation.len(), PUNCTUATION.len());
        assert!(config.bengali_stopwords.contains(&"আর".to_string()));
    }
}
