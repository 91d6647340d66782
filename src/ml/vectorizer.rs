//! TF-IDF vectorizer for text feature extraction.
//!
//! Fitting selects the vocabulary and learns one inverse document frequency
//! per term; transforming turns a document into an L2-normalized TF-IDF
//! vector over that vocabulary. The numeric recipe is part of the exported
//! model contract:
//!
//! ```text
//! tf(t, d)  = raw count of t in d
//! idf(t)    = ln((1 + N) / (1 + df(t))) + 1
//! x(t, d)   = tf(t, d) * idf(t), then x /= ||x||₂
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{Analyzer, BengaliAnalyzer};
use crate::error::{GujobError, Result};

/// Vectorizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Keep at most this many terms, by corpus frequency. `None` keeps all.
    pub max_features: Option<usize>,
    /// Ignore terms that appear in fewer documents than this.
    pub min_df: usize,
    /// Ignore terms that appear in more than this proportion of documents.
    pub max_df: f64,
    /// Remove Bengali stopwords before counting.
    pub stop_words: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: Some(1000),
            min_df: 1,
            max_df: 1.0,
            stop_words: false,
        }
    }
}

impl VectorizerConfig {
    /// Check the configuration for values that cannot produce a vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.max_features == Some(0) {
            return Err(GujobError::invalid_config("max_features must be positive"));
        }
        if self.min_df == 0 {
            return Err(GujobError::invalid_config("min_df must be at least 1"));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(GujobError::invalid_config(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        Ok(())
    }
}

/// A fitted TF-IDF vectorizer. Immutable once built.
#[derive(Clone)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
    /// Vocabulary: term -> index mapping.
    vocabulary: HashMap<String, usize>,
    /// Terms ordered by index.
    feature_names: Vec<String>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("config", &self.config)
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Fit a vectorizer on training documents.
    pub fn fit<S: AsRef<str>>(config: VectorizerConfig, documents: &[S]) -> Result<Self> {
        config.validate()?;
        if documents.is_empty() {
            return Err(GujobError::invalid_argument(
                "cannot fit a vectorizer on an empty corpus",
            ));
        }

        let analyzer: Arc<dyn Analyzer> =
            Arc::new(BengaliAnalyzer::with_stop_words(config.stop_words));
        let n_documents = documents.len();

        let mut term_frequency: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = Self::tokenize_with_analyzer(doc.as_ref(), &analyzer)?;
            let mut seen = HashSet::new();
            for token in tokens {
                *term_frequency.entry(token.clone()).or_insert(0) += 1;
                if seen.insert(token.clone()) {
                    *document_frequency.entry(token).or_insert(0) += 1;
                }
            }
        }

        let max_doc_count = (config.max_df * n_documents as f64).floor() as usize;
        if max_doc_count < config.min_df {
            return Err(GujobError::invalid_config(format!(
                "max_df={} keeps terms in at most {max_doc_count} documents, fewer than min_df={}",
                config.max_df, config.min_df
            )));
        }

        let mut candidates: Vec<(&String, usize)> = term_frequency
            .iter()
            .filter(|(term, _)| {
                let df = document_frequency[*term];
                df >= config.min_df && df <= max_doc_count
            })
            .map(|(term, &tf)| (term, tf))
            .collect();

        // Most frequent first; ties resolved by term so selection is stable.
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        if let Some(limit) = config.max_features {
            candidates.truncate(limit);
        }

        let mut feature_names: Vec<String> =
            candidates.into_iter().map(|(term, _)| term.clone()).collect();
        feature_names.sort();

        if feature_names.is_empty() {
            return Err(GujobError::invalid_argument(
                "empty vocabulary: no terms survived normalization and document-frequency bounds",
            ));
        }

        let idf = feature_names
            .iter()
            .map(|term| smoothed_idf(n_documents, document_frequency[term]))
            .collect();

        debug!(
            "fitted vocabulary of {} terms from {} distinct over {} documents",
            feature_names.len(),
            term_frequency.len(),
            n_documents
        );

        Ok(Self::assemble(config, feature_names, idf, n_documents, analyzer))
    }

    /// Rebuild a fitted vectorizer from exported parts.
    ///
    /// `feature_names` must be index-ordered; `idf` must be index-aligned
    /// with it.
    pub fn from_parts(
        config: VectorizerConfig,
        feature_names: Vec<String>,
        idf: Vec<f64>,
    ) -> Result<Self> {
        if feature_names.len() != idf.len() {
            return Err(GujobError::invalid_model(format!(
                "{} feature names but {} idf weights",
                feature_names.len(),
                idf.len()
            )));
        }
        let analyzer: Arc<dyn Analyzer> =
            Arc::new(BengaliAnalyzer::with_stop_words(config.stop_words));
        let vectorizer = Self::assemble(config, feature_names, idf, 0, analyzer);
        if vectorizer.vocabulary.len() != vectorizer.feature_names.len() {
            return Err(GujobError::invalid_model("duplicate feature names"));
        }
        Ok(vectorizer)
    }

    fn assemble(
        config: VectorizerConfig,
        feature_names: Vec<String>,
        idf: Vec<f64>,
        n_documents: usize,
        analyzer: Arc<dyn Analyzer>,
    ) -> Self {
        let vocabulary = feature_names
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Self {
            config,
            vocabulary,
            feature_names,
            idf,
            n_documents,
            analyzer,
        }
    }

    /// Fit on `documents` and return the fitted vectorizer with their vectors.
    pub fn fit_transform<S: AsRef<str>>(
        config: VectorizerConfig,
        documents: &[S],
    ) -> Result<(Self, Vec<Vec<f64>>)> {
        let vectorizer = Self::fit(config, documents)?;
        let features = vectorizer.transform_batch(documents)?;
        Ok((vectorizer, features))
    }

    /// Transform a document into an L2-normalized TF-IDF feature vector.
    ///
    /// Terms outside the vocabulary are ignored. A document with no known
    /// terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let tokens = Self::tokenize_with_analyzer(document, &self.analyzer)?;
        let mut features = vec![0.0; self.vocabulary.len()];

        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                features[idx] += 1.0;
            }
        }

        for (value, idf) in features.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        l2_normalize(&mut features);
        Ok(features)
    }

    /// Transform many documents.
    pub fn transform_batch<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect()
    }

    fn tokenize_with_analyzer(text: &str, analyzer: &Arc<dyn Analyzer>) -> Result<Vec<String>> {
        let tokens: Vec<String> = analyzer.analyze(text)?.map(|token| token.text).collect();
        Ok(tokens)
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Index of `term`, if it is in the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// The vocabulary as an ordered term -> index map.
    pub fn vocabulary(&self) -> BTreeMap<String, usize> {
        self.vocabulary
            .iter()
            .map(|(term, &idx)| (term.clone(), idx))
            .collect()
    }

    /// Terms ordered by index.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Inverse document frequencies, index-aligned with the vocabulary.
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// The configuration this vectorizer was fitted with.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Number of documents seen while fitting (0 when rebuilt from parts).
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

/// `ln((1 + n) / (1 + df)) + 1`
pub fn smoothed_idf(n_documents: usize, document_frequency: usize) -> f64 {
    ((n_documents as f64 + 1.0) / (document_frequency as f64 + 1.0)).ln() + 1.0
}

/// Scale `values` to unit Euclidean length; the zero vector is left alone.
pub fn l2_normalize(values: &mut [f64]) {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in values.iter_mut() {
            *v /= norm;
        }
    }
}
