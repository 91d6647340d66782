//! Command line argument parsing for the gujob CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::model::exporter::DEFAULT_MODEL_PATH;

/// gujob - Bengali rumor classifier trainer
#[derive(Parser, Debug, Clone)]
#[command(name = "gujob")]
#[command(about = "Train and run a Bengali rumor/credible/neutral Naive Bayes classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GujobArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GujobArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model and export it as JSON
    Train(TrainArgs),

    /// Classify texts with an exported model
    Predict(PredictArgs),

    /// Show what an exported model contains
    Inspect(InspectArgs),

    /// Print the normalized form of texts
    Normalize(NormalizeArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// CSV dataset; the built-in corpus is used when absent or unreadable
    #[arg(short, long, value_name = "CSV_FILE")]
    pub data: Option<PathBuf>,

    /// Header of the text column
    #[arg(long, requires = "data")]
    pub text_column: Option<String>,

    /// Header of the label column
    #[arg(long, requires = "data")]
    pub label_column: Option<String>,

    /// CSV field delimiter
    #[arg(long, requires = "data")]
    pub delimiter: Option<char>,

    /// Where to write the model
    #[arg(short, long, value_name = "MODEL_FILE")]
    pub output: Option<PathBuf>,

    /// Maximum vocabulary size
    #[arg(long)]
    pub max_features: Option<usize>,

    /// Minimum document frequency (absolute count)
    #[arg(long)]
    pub min_df: Option<usize>,

    /// Maximum document frequency (proportion of documents)
    #[arg(long)]
    pub max_df: Option<f64>,

    /// Remove Bengali stopwords before vectorizing
    #[arg(long)]
    pub stop_words: bool,

    /// Additive smoothing parameter
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Proportion of each class held out for evaluation
    #[arg(long)]
    pub test_size: Option<f64>,

    /// Seed for the train/test shuffle
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Model file
    #[arg(short, long, value_name = "MODEL_FILE", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Texts to classify
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Arguments for model inspection
#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    /// Model file
    #[arg(short, long, value_name = "MODEL_FILE", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Number of top features to list per class
    #[arg(short, long, default_value = "10")]
    pub top: usize,
}

/// Arguments for normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    /// Texts to normalize
    #[arg(value_name = "TEXT", required = true)]
    pub texts: Vec<String>,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
