//! Serialized model artifact.
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "model_type": "MultinomialNB",
//!   "classes": ["credible", "neutral", "rumor"],
//!   "class_log_prior": [..],
//!   "feature_log_prob": [[..], [..], [..]],
//!   "vocabulary": { "গুজব": 0, .. },
//!   "feature_names": ["গুজব", ..],
//!   "idf": [..],
//!   "vectorizer_params": { "max_features": 1000, "min_df": 1, "max_df": 1.0 },
//!   "metadata": { "training_samples": 24, "feature_count": 120, "normalization_config": {..} }
//! }
//! ```
//!
//! `idf` is optional for readers; artifacts without it are still valid.

use std::collections::BTreeMap;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::NormalizationConfig;
use crate::error::{GujobError, Result};
use crate::ml::label::Label;
use crate::ml::naive_bayes::MultinomialNaiveBayes;
use crate::ml::vectorizer::{TfIdfVectorizer, VectorizerConfig};

/// Current artifact schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Value of the `model_type` field.
pub const MODEL_TYPE: &str = "MultinomialNB";

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Vectorizer parameters recorded in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerParams {
    pub max_features: Option<usize>,
    pub min_df: usize,
    pub max_df: f64,
}

impl From<&VectorizerConfig> for VectorizerParams {
    fn from(config: &VectorizerConfig) -> Self {
        Self {
            max_features: config.max_features,
            min_df: config.min_df,
            max_df: config.max_df,
        }
    }
}

/// Training metadata recorded in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Number of examples the classifier was fitted on.
    pub training_samples: usize,
    pub feature_count: usize,
    pub normalization_config: NormalizationConfig,
}

/// Everything an inference engine needs to reproduce predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub model_type: String,
    pub classes: Vec<Label>,
    pub class_log_prior: Vec<f64>,
    pub feature_log_prob: Vec<Vec<f64>>,
    pub vocabulary: BTreeMap<String, usize>,
    pub feature_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idf: Option<Vec<f64>>,
    pub vectorizer_params: VectorizerParams,
    pub metadata: ModelMetadata,
}

impl ModelArtifact {
    /// Capture a fitted vectorizer and classifier.
    pub fn new(
        vectorizer: &TfIdfVectorizer,
        classifier: &MultinomialNaiveBayes,
        training_samples: usize,
    ) -> Self {
        let config = vectorizer.config();
        Self {
            schema_version: SCHEMA_VERSION,
            model_type: MODEL_TYPE.to_string(),
            classes: classifier.classes().to_vec(),
            class_log_prior: classifier.class_log_prior().to_vec(),
            feature_log_prob: classifier.feature_log_prob().to_vec(),
            vocabulary: vectorizer.vocabulary(),
            feature_names: vectorizer.feature_names().to_vec(),
            idf: Some(vectorizer.idf().to_vec()),
            vectorizer_params: VectorizerParams::from(config),
            metadata: ModelMetadata {
                training_samples,
                feature_count: vectorizer.vocabulary_size(),
                normalization_config: NormalizationConfig::bengali(config.stop_words),
            },
        }
    }

    /// Parse and validate an artifact from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let artifact: Self = serde_json::from_str(json)
            .map_err(|e| GujobError::invalid_model(format!("malformed artifact: {e}")))?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Read, parse and validate an artifact file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON. Non-ASCII text is written as-is.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GujobError::serialization(format!("failed to encode artifact: {e}")))
    }

    /// Number of features.
    pub fn feature_count(&self) -> usize {
        self.feature_names.len()
    }

    /// Check the artifact's internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(GujobError::invalid_model(format!(
                "unsupported schema version {} (expected {SCHEMA_VERSION})",
                self.schema_version
            )));
        }
        if self.model_type != MODEL_TYPE {
            return Err(GujobError::invalid_model(format!(
                "unsupported model type '{}'",
                self.model_type
            )));
        }
        if self.classes.is_empty() {
            return Err(GujobError::invalid_model("no classes"));
        }
        if self.class_log_prior.len() != self.classes.len() {
            return Err(GujobError::invalid_model(format!(
                "{} classes but {} priors",
                self.classes.len(),
                self.class_log_prior.len()
            )));
        }
        if self.feature_log_prob.len() != self.classes.len() {
            return Err(GujobError::invalid_model(format!(
                "{} classes but {} feature_log_prob rows",
                self.classes.len(),
                self.feature_log_prob.len()
            )));
        }

        let n_features = self.feature_names.len();
        if let Some(row) = self
            .feature_log_prob
            .iter()
            .position(|row| row.len() != n_features)
        {
            return Err(GujobError::invalid_model(format!(
                "feature_log_prob row {row} has {} entries, expected {n_features}",
                self.feature_log_prob[row].len()
            )));
        }

        // Entries beyond the feature range are ignored.
        let mut in_range = 0;
        for (term, &idx) in &self.vocabulary {
            if idx >= n_features {
                warn!("Ignoring vocabulary entry '{term}' -> {idx} beyond {n_features} features");
                continue;
            }
            if self.feature_names[idx] != *term {
                return Err(GujobError::invalid_model(format!(
                    "vocabulary entry '{term}' -> {idx} disagrees with feature_names"
                )));
            }
            in_range += 1;
        }
        if in_range != n_features {
            return Err(GujobError::invalid_model(format!(
                "vocabulary covers {in_range} of {n_features} feature names"
            )));
        }

        if let Some(idf) = &self.idf {
            if idf.len() != n_features {
                return Err(GujobError::invalid_model(format!(
                    "{} idf weights for {n_features} features",
                    idf.len()
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::naive_bayes::NaiveBayesConfig;

    fn artifact() -> ModelArtifact {
        let docs = ["গুজব খবর", "সরকারি ঘোষণা", "আবহাওয়া খবর"];
        let labels = [Label::Rumor, Label::Credible, Label::Neutral];
        let (vectorizer, features) =
            TfIdfVectorizer::fit_transform(VectorizerConfig::default(), &docs).unwrap();
        let classifier =
            MultinomialNaiveBayes::fit(&NaiveBayesConfig::default(), &features, &labels).unwrap();
        ModelArtifact::new(&vectorizer, &classifier, docs.len())
    }

    #[test]
    fn test_new_artifact_is_valid() {
        let artifact = artifact();
        artifact.validate().unwrap();

        assert_eq!(artifact.schema_version, 1);
        assert_eq!(artifact.model_type, "MultinomialNB");
        assert_eq!(
            artifact.classes,
            vec![Label::Credible, Label::Neutral, Label::Rumor]
        );
        assert_eq!(artifact.metadata.training_samples, 3);
        assert_eq!(artifact.metadata.feature_count, 5);
        assert_eq!(artifact.vectorizer_params.max_features, Some(1000));
        for (term, &idx) in &artifact.vocabulary {
            assert_eq!(&artifact.feature_names[idx], term);
        }
    }

    #[test]
    fn test_json_shape() {
        let json = artifact().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["classes"][2], "rumor");
        assert_eq!(value["vectorizer_params"]["min_df"], 1);
        assert_eq!(value["metadata"]["normalization_config"]["lowercase"], true);
        assert!(value["vocabulary"]["গুজব"].is_u64());
        // Bengali text is not escaped.
        assert!(json.contains("গুজব"));
    }

    #[test]
    fn test_parse_without_optional_fields() {
        let mut value: serde_json::Value =
            serde_json::from_str(&artifact().to_json().unwrap()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("schema_version");
        object.remove("idf");

        let parsed = ModelArtifact::from_json(&value.to_string()).unwrap();
        assert_eq!(parsed.schema_version, SCHEMA_VERSION);
        assert!(parsed.idf.is_none());
    }

    #[test]
    fn test_out_of_range_vocabulary_entries_are_ignored() {
        let mut artifact = artifact();
        artifact.vocabulary.insert("অতিরিক্ত".to_string(), 99999);
        artifact.validate().unwrap();

        let parsed = ModelArtifact::from_json(&artifact.to_json().unwrap()).unwrap();
        assert_eq!(parsed.vocabulary.get("অতিরিক্ত"), Some(&99999));
        assert_eq!(parsed.feature_count(), 5);
    }

    #[test]
    fn test_validation_failures() {
        let mut bad = artifact();
        bad.schema_version = 2;
        assert!(matches!(bad.validate(), Err(GujobError::InvalidModel(_))));

        let mut bad = artifact();
        bad.feature_log_prob[1].pop();
        assert!(bad.validate().is_err());

        let mut bad = artifact();
        bad.class_log_prior.pop();
        assert!(bad.validate().is_err());

        let mut bad = artifact();
        let first = bad.feature_names[0].clone();
        bad.vocabulary.insert(first, 1);
        assert!(bad.validate().is_err());

        let mut bad = artifact();
        let first = bad.feature_names[0].clone();
        bad.vocabulary.remove(&first);
        assert!(bad.validate().is_err());

        let mut bad = artifact();
        bad.idf = Some(vec![1.0]);
        assert!(bad.validate().is_err());

        assert!(matches!(
            ModelArtifact::from_json("{"),
            Err(GujobError::InvalidModel(_))
        ));
    }
}
