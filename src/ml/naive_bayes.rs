//! Multinomial Naive Bayes over TF-IDF weights.
//!
//! For each class `c` with `n_c` of `N` training documents, `K` classes and a
//! vocabulary of size `|V|`:
//!
//! ```text
//! class_log_prior(c)     = ln((n_c + α) / (N + α·K))
//! feature_log_prob(c, i) = ln((Σ_{d∈c} x_{d,i} + α) / (Σ_{d∈c} Σ_j x_{d,j} + α·|V|))
//! score(c | x)           = class_log_prior(c) + Σ_i x_i · feature_log_prob(c, i)
//! ```
//!
//! With the default α = 1 both terms use add-one smoothing. The prediction
//! is the highest-scoring class; ties go to the earlier class in canonical
//! order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GujobError, Result};
use crate::ml::label::Label;

/// Naive Bayes configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Additive smoothing parameter.
    pub alpha: f64,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

impl NaiveBayesConfig {
    /// Check that the smoothing parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0) {
            return Err(GujobError::invalid_config(format!(
                "alpha must be positive, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

/// A trained multinomial Naive Bayes classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct MultinomialNaiveBayes {
    classes: Vec<Label>,
    class_count: Vec<usize>,
    class_log_prior: Vec<f64>,
    /// Rows are classes, columns are vocabulary indices.
    feature_log_prob: Vec<Vec<f64>>,
    n_features: usize,
}

impl MultinomialNaiveBayes {
    /// Fit the classifier on aligned feature vectors and labels.
    pub fn fit(config: &NaiveBayesConfig, features: &[Vec<f64>], labels: &[Label]) -> Result<Self> {
        config.validate()?;
        if features.is_empty() {
            return Err(GujobError::invalid_argument(
                "cannot train on an empty dataset",
            ));
        }
        if features.len() != labels.len() {
            return Err(GujobError::invalid_argument(format!(
                "{} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }

        let n_features = features[0].len();
        if let Some(bad) = features.iter().position(|row| row.len() != n_features) {
            return Err(GujobError::invalid_argument(format!(
                "feature vector {bad} has length {}, expected {n_features}",
                features[bad].len()
            )));
        }

        // Distinct labels in canonical order, with per-class feature mass.
        let mut per_class: BTreeMap<Label, (usize, Vec<f64>)> = BTreeMap::new();
        for (row, label) in features.iter().zip(labels) {
            let (count, sums) = per_class
                .entry(*label)
                .or_insert_with(|| (0, vec![0.0; n_features]));
            *count += 1;
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }

        let alpha = config.alpha;
        let n_samples = features.len() as f64;
        let n_classes = per_class.len() as f64;

        let mut classes = Vec::with_capacity(per_class.len());
        let mut class_count = Vec::with_capacity(per_class.len());
        let mut class_log_prior = Vec::with_capacity(per_class.len());
        let mut feature_log_prob = Vec::with_capacity(per_class.len());

        for (label, (count, sums)) in per_class {
            let smoothed_total: f64 = sums.iter().sum::<f64>() + alpha * n_features as f64;
            let log_total = smoothed_total.ln();

            classes.push(label);
            class_count.push(count);
            class_log_prior.push(((count as f64 + alpha) / (n_samples + alpha * n_classes)).ln());
            feature_log_prob.push(sums.iter().map(|s| (s + alpha).ln() - log_total).collect());
        }

        Ok(Self {
            classes,
            class_count,
            class_log_prior,
            feature_log_prob,
            n_features,
        })
    }

    /// Joint log-likelihood of `x` under every class, in class order.
    ///
    /// Entries of `x` beyond the vocabulary are ignored.
    pub fn decision_scores(&self, x: &[f64]) -> Vec<f64> {
        joint_log_likelihood(&self.class_log_prior, &self.feature_log_prob, x)
    }

    /// Predict the class of a feature vector.
    pub fn predict(&self, x: &[f64]) -> Label {
        self.classes[argmax(&self.decision_scores(x))]
    }

    /// Class probabilities for a feature vector, in class order.
    pub fn predict_proba(&self, x: &[f64]) -> Vec<f64> {
        softmax(&self.decision_scores(x))
    }

    /// Classes in canonical order.
    pub fn classes(&self) -> &[Label] {
        &self.classes
    }

    /// Number of training documents per class.
    pub fn class_count(&self) -> &[usize] {
        &self.class_count
    }

    /// Smoothed log prior per class.
    pub fn class_log_prior(&self) -> &[f64] {
        &self.class_log_prior
    }

    /// Per-class, per-feature smoothed log probabilities.
    pub fn feature_log_prob(&self) -> &[Vec<f64>] {
        &self.feature_log_prob
    }

    /// Width of the feature space.
    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

/// `prior[c] + Σ_i x_i · log_prob[c][i]` for each class.
///
/// Shared by the in-process classifier and the artifact inference engine so
/// both apply the exact same arithmetic.
pub fn joint_log_likelihood(prior: &[f64], log_prob: &[Vec<f64>], x: &[f64]) -> Vec<f64> {
    prior
        .iter()
        .zip(log_prob)
        .map(|(p, row)| p + row.iter().zip(x).map(|(w, v)| w * v).sum::<f64>())
        .collect()
}

/// Index of the largest score; the first one wins ties.
pub fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (idx, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = idx;
        }
    }
    best
}

/// Numerically stable softmax.
pub fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
