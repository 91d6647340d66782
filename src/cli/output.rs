//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{GujobArgs, OutputFormat};
use crate::error::Result;
use crate::ml::label::Label;
use crate::ml::pipeline::TrainingOutcome;

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn print_human(&self, args: &GujobArgs);
}

/// Result structure for one classified text.
#[derive(Debug, Serialize, Deserialize)]
pub struct TextPrediction {
    pub text: String,
    pub normalized: String,
    pub label: Label,
    pub confidence: f64,
    pub probabilities: BTreeMap<Label, f64>,
}

/// Result structure for the predict command.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResults {
    pub model: String,
    pub predictions: Vec<TextPrediction>,
}

/// A term and its log-probability within one class.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub term: String,
    pub log_prob: f64,
}

/// Result structure for the inspect command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelSummary {
    pub path: String,
    pub schema_version: u32,
    pub model_type: String,
    pub classes: Vec<Label>,
    pub class_priors: BTreeMap<Label, f64>,
    pub feature_count: usize,
    pub training_samples: usize,
    pub max_features: Option<usize>,
    pub min_df: usize,
    pub max_df: f64,
    pub stop_words_applied: bool,
    pub has_idf: bool,
    pub top_features: BTreeMap<Label, Vec<FeatureWeight>>,
}

/// Result structure for one normalized text.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizedText {
    pub input: String,
    pub normalized: String,
    pub tokens: Vec<String>,
}

/// Result structure for the normalize command.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizationResults {
    pub results: Vec<NormalizedText>,
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &GujobArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GujobArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl HumanOutput for TrainingOutcome {
    fn print_human(&self, args: &GujobArgs) {
        println!("Training Summary:");
        println!("═════════════════");
        println!("Source: {}", self.source);
        println!("Examples: {}", self.dataset_size);
        let distribution = self
            .label_distribution
            .iter()
            .map(|(label, count)| format!("{label}={count}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("Label distribution: {distribution}");
        println!("Train/test: {}/{}", self.train_size, self.test_size);
        println!("Classes: {}", format_labels(&self.classes));
        println!("Features: {}", self.feature_count);
        println!("Accuracy: {:.2}%", self.report.accuracy * 100.0);

        if args.verbosity() > 0 {
            println!();
            println!("Classification Report:");
            println!("──────────────────────");
            print!("{}", self.report);
        }

        println!();
        println!(
            "Model written to {} ({})",
            self.output_path.display(),
            format_bytes(self.bytes_written)
        );
    }
}

impl HumanOutput for PredictionResults {
    fn print_human(&self, args: &GujobArgs) {
        for (i, prediction) in self.predictions.iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!(
                "{} ({:.1}%): {}",
                prediction.label,
                prediction.confidence * 100.0,
                prediction.text
            );
            if args.verbosity() > 1 {
                println!("  normalized: {}", prediction.normalized);
                for (label, p) in &prediction.probabilities {
                    println!("  {label}: {p:.4}");
                }
            }
        }
    }
}

impl HumanOutput for ModelSummary {
    fn print_human(&self, _args: &GujobArgs) {
        println!("Model: {}", self.path);
        println!("═════");
        println!("Type: {} (schema v{})", self.model_type, self.schema_version);
        println!("Classes: {}", format_labels(&self.classes));
        println!("Features: {}", self.feature_count);
        println!("Training samples: {}", self.training_samples);
        let max_features = self
            .max_features
            .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
        println!(
            "Vectorizer: max_features={max_features}, min_df={}, max_df={}",
            self.min_df, self.max_df
        );
        println!("Stopwords removed: {}", self.stop_words_applied);
        println!("IDF weights: {}", if self.has_idf { "present" } else { "absent" });

        for (label, features) in &self.top_features {
            println!();
            let prior = self.class_priors.get(label).copied().unwrap_or(f64::NAN);
            println!("{label} (log prior {prior:.4}):");
            println!("─────────────");
            for feature in features {
                println!("  {:>9.4}  {}", feature.log_prob, feature.term);
            }
        }
    }
}

impl HumanOutput for NormalizationResults {
    fn print_human(&self, args: &GujobArgs) {
        for result in &self.results {
            if args.verbosity() > 1 {
                println!("{} -> {}", result.input, result.normalized);
                println!("  tokens: [{}]", result.tokens.join(", "));
            } else {
                println!("{}", result.normalized);
            }
        }
    }
}

fn format_labels(labels: &[Label]) -> String {
    labels
        .iter()
        .map(Label::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format bytes into human-readable format.
fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    let unit = UNITS[unit_index];
    if unit_index == 0 {
        format!("{bytes} {unit}")
    } else {
        format!("{size:.1} {unit}")
    }
}
