//! Bengali analyzer used by the vectorizer and the inference engine.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::normalizer::{NormalizationConfig, TextNormalizer};
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::StopFilter;
use crate::analysis::tokenizer::WhitespaceTokenizer;
use crate::error::Result;

/// Normalizer + whitespace tokenizer, optionally followed by stopword removal.
///
/// Analyzing an already-normalized string gives the same tokens as analyzing
/// the raw text, because normalization is idempotent.
#[derive(Clone, Debug)]
pub struct BengaliAnalyzer {
    inner: PipelineAnalyzer,
    stop_words: bool,
}

impl BengaliAnalyzer {
    /// Create an analyzer without stopword removal.
    pub fn new() -> Self {
        Self::with_stop_words(false)
    }

    /// Create an analyzer, removing Bengali stopwords when `stop_words` is set.
    pub fn with_stop_words(stop_words: bool) -> Self {
        let mut inner = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(TextNormalizer::new()))
            .with_name("bengali");

        if stop_words {
            inner = inner.add_filter(Arc::new(StopFilter::new()));
        }

        Self { inner, stop_words }
    }

    /// Whether stopwords are removed.
    pub fn removes_stop_words(&self) -> bool {
        self.stop_words
    }

    /// Describe this analyzer's normalization for the model metadata.
    pub fn normalization_config(&self) -> NormalizationConfig {
        NormalizationConfig::bengali(self.stop_words)
    }
}

impl Default for BengaliAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for BengaliAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "bengali"
    }
}
