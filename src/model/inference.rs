//! Inference from an exported artifact alone.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ml::label::Label;
use crate::ml::naive_bayes::{argmax, joint_log_likelihood, softmax};
use crate::ml::vectorizer::{TfIdfVectorizer, VectorizerConfig};
use crate::model::artifact::ModelArtifact;

/// Classification of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: Label,
    /// Joint log-likelihood per class.
    pub scores: BTreeMap<Label, f64>,
    /// Softmax of the scores.
    pub probabilities: BTreeMap<Label, f64>,
}

impl Prediction {
    /// Probability of the predicted label.
    pub fn confidence(&self) -> f64 {
        self.probabilities.get(&self.label).copied().unwrap_or(0.0)
    }
}

/// Rebuilds vectorization and scoring from a [`ModelArtifact`].
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    artifact: ModelArtifact,
    vectorizer: TfIdfVectorizer,
}

impl InferenceEngine {
    /// Build an engine from a validated artifact.
    ///
    /// Artifacts without `idf` weights are scored with unit IDF, which only
    /// approximates the training-time vectors.
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;

        let idf = match &artifact.idf {
            Some(idf) => idf.clone(),
            None => {
                warn!("Artifact has no idf weights, scoring with unit idf");
                vec![1.0; artifact.feature_count()]
            }
        };
        let config = VectorizerConfig {
            max_features: artifact.vectorizer_params.max_features,
            min_df: artifact.vectorizer_params.min_df,
            max_df: artifact.vectorizer_params.max_df,
            stop_words: artifact.metadata.normalization_config.stop_words_applied,
        };
        let vectorizer = TfIdfVectorizer::from_parts(config, artifact.feature_names.clone(), idf)?;

        debug!(
            "Loaded model with {} classes and {} features",
            artifact.classes.len(),
            artifact.feature_count()
        );

        Ok(Self {
            artifact,
            vectorizer,
        })
    }

    /// Load an artifact file and build an engine from it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_artifact(ModelArtifact::from_file(path)?)
    }

    /// The artifact backing this engine.
    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn classes(&self) -> &[Label] {
        &self.artifact.classes
    }

    /// TF-IDF vector of `text` over the artifact vocabulary.
    pub fn vectorize(&self, text: &str) -> Result<Vec<f64>> {
        self.vectorizer.transform(text)
    }

    /// Joint log-likelihood of an already vectorized document.
    pub fn decision_scores(&self, features: &[f64]) -> Vec<f64> {
        joint_log_likelihood(
            &self.artifact.class_log_prior,
            &self.artifact.feature_log_prob,
            features,
        )
    }

    /// Classify raw text.
    pub fn predict(&self, text: &str) -> Result<Prediction> {
        let scores = self.decision_scores(&self.vectorize(text)?);
        let probabilities = softmax(&scores);
        let classes = self.classes();

        Ok(Prediction {
            label: classes[argmax(&scores)],
            scores: classes.iter().copied().zip(scores).collect(),
            probabilities: classes.iter().copied().zip(probabilities).collect(),
        })
    }

    /// Classify many texts.
    pub fn predict_batch<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Prediction>> {
        texts.iter().map(|t| self.predict(t.as_ref())).collect()
    }

    /// The `n` terms with the highest log-probability for `label`.
    ///
    /// Returns an empty list if the model has no such class.
    pub fn top_features(&self, label: Label, n: usize) -> Vec<(String, f64)> {
        let Some(class_idx) = self.classes().iter().position(|c| *c == label) else {
            return Vec::new();
        };
        let row = &self.artifact.feature_log_prob[class_idx];

        let mut ranked: Vec<usize> = (0..row.len()).collect();
        ranked.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
        ranked
            .into_iter()
            .take(n)
            .map(|idx| (self.artifact.feature_names[idx].clone(), row[idx]))
            .collect()
    }
}
