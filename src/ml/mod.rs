//! Model training for the rumor classifier.
//!
//! This module holds the learning half of gujob: label normalization, the
//! TF-IDF vectorizer, the multinomial Naive Bayes trainer, the stratified
//! split, evaluation metrics and the pipeline that ties them together.

pub mod label;
pub mod metrics;
pub mod naive_bayes;
pub mod pipeline;
pub mod split;
pub mod vectorizer;

pub use label::{Label, normalize_label};
pub use metrics::{ClassificationReport, accuracy};
pub use naive_bayes::{MultinomialNaiveBayes, NaiveBayesConfig};
pub use pipeline::{FitState, Trainer, TrainingOutcome};
pub use split::{SplitConfig, TrainTestSplit, stratified_split};
pub use vectorizer::{TfIdfVectorizer, VectorizerConfig};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetConfig;
use crate::error::Result;
use crate::model::exporter::DEFAULT_MODEL_PATH;

/// Configuration for a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Vectorizer configuration.
    pub vectorizer: VectorizerConfig,
    /// Classifier configuration.
    pub naive_bayes: NaiveBayesConfig,
    /// Train/test split configuration.
    pub split: SplitConfig,
    /// Dataset to train on. The fallback corpus is used when absent.
    pub dataset: Option<DatasetConfig>,
    /// Where the model artifact is written.
    pub output_path: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerConfig::default(),
            naive_bayes: NaiveBayesConfig::default(),
            split: SplitConfig::default(),
            dataset: None,
            output_path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl TrainingConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section of the configuration.
    pub fn validate(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.naive_bayes.validate()?;
        self.split.validate()
    }
}
