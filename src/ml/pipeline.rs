//! Training pipeline: load → split → fit → evaluate → export.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::dataset::{Dataset, LabeledExample, load_or_fallback};
use crate::error::Result;
use crate::ml::TrainingConfig;
use crate::ml::label::Label;
use crate::ml::metrics::ClassificationReport;
use crate::ml::naive_bayes::{MultinomialNaiveBayes, NaiveBayesConfig};
use crate::ml::split::stratified_split;
use crate::ml::vectorizer::{TfIdfVectorizer, VectorizerConfig};
use crate::model::artifact::ModelArtifact;
use crate::model::exporter::ModelExporter;

/// A fitted vectorizer and the classifier trained on its output.
///
/// Produced once by [`FitState::fit`] and only read afterwards.
#[derive(Debug, Clone)]
pub struct FitState {
    vectorizer: TfIdfVectorizer,
    classifier: MultinomialNaiveBayes,
    training_samples: usize,
}

impl FitState {
    /// Fit the vectorizer and classifier on `examples`.
    pub fn fit(
        vectorizer_config: &VectorizerConfig,
        naive_bayes_config: &NaiveBayesConfig,
        examples: &[LabeledExample],
    ) -> Result<Self> {
        let texts: Vec<&str> = examples.iter().map(|e| e.text.as_str()).collect();
        let labels: Vec<Label> = examples.iter().map(|e| e.label).collect();

        let (vectorizer, features) =
            TfIdfVectorizer::fit_transform(vectorizer_config.clone(), &texts)?;
        let classifier = MultinomialNaiveBayes::fit(naive_bayes_config, &features, &labels)?;

        Ok(Self {
            vectorizer,
            classifier,
            training_samples: examples.len(),
        })
    }

    /// TF-IDF vector of `text`.
    pub fn transform(&self, text: &str) -> Result<Vec<f64>> {
        self.vectorizer.transform(text)
    }

    /// Predicted label of `text`.
    pub fn predict(&self, text: &str) -> Result<Label> {
        Ok(self.classifier.predict(&self.transform(text)?))
    }

    /// Class probabilities of `text`, in class order.
    pub fn predict_proba(&self, text: &str) -> Result<Vec<f64>> {
        Ok(self.classifier.predict_proba(&self.transform(text)?))
    }

    /// Score the model on labelled examples.
    pub fn evaluate(&self, examples: &[LabeledExample]) -> Result<ClassificationReport> {
        let truth: Vec<Label> = examples.iter().map(|e| e.label).collect();
        let predicted = examples
            .iter()
            .map(|e| self.predict(&e.text))
            .collect::<Result<Vec<_>>>()?;
        Ok(ClassificationReport::new(&truth, &predicted))
    }

    /// Capture this state as an exportable artifact.
    pub fn to_artifact(&self) -> ModelArtifact {
        ModelArtifact::new(&self.vectorizer, &self.classifier, self.training_samples)
    }

    /// Export the artifact to `path`, returning the bytes written.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<u64> {
        ModelExporter::new(path).export(&self.to_artifact())
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &MultinomialNaiveBayes {
        &self.classifier
    }

    pub fn training_samples(&self) -> usize {
        self.training_samples
    }
}

/// Summary of a training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingOutcome {
    /// Path of the CSV, or a note that the fallback corpus was used.
    pub source: String,
    pub dataset_size: usize,
    pub label_distribution: BTreeMap<Label, usize>,
    pub train_size: usize,
    pub test_size: usize,
    pub classes: Vec<Label>,
    pub feature_count: usize,
    pub report: ClassificationReport,
    pub output_path: PathBuf,
    pub bytes_written: u64,
}

/// Runs the training pipeline for a [`TrainingConfig`].
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainingConfig,
}

impl Trainer {
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Split `dataset`, fit on the training side and evaluate on the rest.
    pub fn train(&self, dataset: &Dataset) -> Result<(FitState, ClassificationReport)> {
        let split = stratified_split(&dataset.labels(), &self.config.split)?;
        let pick = |indices: &[usize]| -> Vec<LabeledExample> {
            indices
                .iter()
                .map(|&i| dataset.examples[i].clone())
                .collect()
        };
        let train = pick(&split.train);
        let test = pick(&split.test);
        debug!("split {} train / {} test", train.len(), test.len());

        let state = FitState::fit(&self.config.vectorizer, &self.config.naive_bayes, &train)?;
        info!(
            "Trained on {} examples with {} features",
            state.training_samples(),
            state.vectorizer().vocabulary_size()
        );

        let report = state.evaluate(&test)?;
        info!("Held-out accuracy: {:.2}%", report.accuracy * 100.0);

        Ok((state, report))
    }

    /// Load the configured dataset, train, evaluate and export.
    pub fn run(&self) -> Result<TrainingOutcome> {
        let dataset = load_or_fallback(self.config.dataset.as_ref());
        self.run_on(&dataset)
    }

    /// Train on an already loaded dataset and export.
    pub fn run_on(&self, dataset: &Dataset) -> Result<TrainingOutcome> {
        let label_distribution = dataset.label_distribution();
        info!(
            "Training on {} examples from {}: {:?}",
            dataset.len(),
            dataset.source,
            label_distribution
        );

        let (state, report) = self.train(dataset)?;
        let bytes_written = state.export(&self.config.output_path)?;

        Ok(TrainingOutcome {
            source: dataset.source.to_string(),
            dataset_size: dataset.len(),
            label_distribution,
            train_size: state.training_samples(),
            test_size: report.support,
            classes: state.classifier().classes().to_vec(),
            feature_count: state.vectorizer().vocabulary_size(),
            report,
            output_path: self.config.output_path.clone(),
            bytes_written,
        })
    }
}
