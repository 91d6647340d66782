//! Command implementations for the gujob CLI.

use std::collections::BTreeMap;

use log::info;

use crate::analysis::analyzer::{Analyzer, BengaliAnalyzer};
use crate::analysis::normalizer::normalize;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::DatasetConfig;
use crate::error::Result;
use crate::ml::TrainingConfig;
use crate::ml::pipeline::Trainer;
use crate::model::inference::InferenceEngine;

/// Execute a CLI command.
pub fn execute_command(args: GujobArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args, &args),
        Command::Predict(predict_args) => predict(predict_args, &args),
        Command::Inspect(inspect_args) => inspect(inspect_args, &args),
        Command::Normalize(normalize_args) => normalize_texts(normalize_args, &args),
    }
}

/// Build the training configuration: file values first, then flags.
pub fn training_config(args: &TrainArgs) -> Result<TrainingConfig> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading training configuration from {}", path.display());
            TrainingConfig::from_file(path)?
        }
        None => TrainingConfig::default(),
    };

    if let Some(path) = &args.data {
        let mut dataset = DatasetConfig::new(path);
        dataset.text_column = args.text_column.clone();
        dataset.label_column = args.label_column.clone();
        if let Some(delimiter) = args.delimiter {
            dataset.delimiter = delimiter;
        }
        config.dataset = Some(dataset);
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(max_features) = args.max_features {
        config.vectorizer.max_features = Some(max_features);
    }
    if let Some(min_df) = args.min_df {
        config.vectorizer.min_df = min_df;
    }
    if let Some(max_df) = args.max_df {
        config.vectorizer.max_df = max_df;
    }
    if args.stop_words {
        config.vectorizer.stop_words = true;
    }
    if let Some(alpha) = args.alpha {
        config.naive_bayes.alpha = alpha;
    }
    if let Some(test_size) = args.test_size {
        config.split.test_size = test_size;
    }
    if let Some(seed) = args.seed {
        config.split.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

/// Train and export a model.
fn train(args: &TrainArgs, cli_args: &GujobArgs) -> Result<()> {
    let trainer = Trainer::new(training_config(args)?)?;
    let outcome = trainer.run()?;

    output_result("Training completed", &outcome, cli_args)
}

/// Classify texts with an exported model.
fn predict(args: &PredictArgs, cli_args: &GujobArgs) -> Result<()> {
    let engine = InferenceEngine::load(&args.model)?;

    let predictions = args
        .texts
        .iter()
        .map(|text| {
            let prediction = engine.predict(text)?;
            Ok(TextPrediction {
                text: text.clone(),
                normalized: normalize(Some(text.as_str())),
                label: prediction.label,
                confidence: prediction.confidence(),
                probabilities: prediction.probabilities,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Predictions",
        &PredictionResults {
            model: args.model.display().to_string(),
            predictions,
        },
        cli_args,
    )
}

/// Summarize an exported model.
fn inspect(args: &InspectArgs, cli_args: &GujobArgs) -> Result<()> {
    let engine = InferenceEngine::load(&args.model)?;
    let artifact = engine.artifact();

    let top_features = artifact
        .classes
        .iter()
        .map(|&label| {
            let features = engine
                .top_features(label, args.top)
                .into_iter()
                .map(|(term, log_prob)| FeatureWeight { term, log_prob })
                .collect();
            (label, features)
        })
        .collect::<BTreeMap<_, _>>();

    let summary = ModelSummary {
        path: args.model.display().to_string(),
        schema_version: artifact.schema_version,
        model_type: artifact.model_type.clone(),
        classes: artifact.classes.clone(),
        class_priors: artifact
            .classes
            .iter()
            .copied()
            .zip(artifact.class_log_prior.iter().copied())
            .collect(),
        feature_count: artifact.feature_count(),
        training_samples: artifact.metadata.training_samples,
        max_features: artifact.vectorizer_params.max_features,
        min_df: artifact.vectorizer_params.min_df,
        max_df: artifact.vectorizer_params.max_df,
        stop_words_applied: artifact.metadata.normalization_config.stop_words_applied,
        has_idf: artifact.idf.is_some(),
        top_features,
    };

    output_result("Model summary", &summary, cli_args)
}

/// Print normalized text and its tokens.
fn normalize_texts(args: &NormalizeArgs, cli_args: &GujobArgs) -> Result<()> {
    let analyzer = BengaliAnalyzer::new();

    let results = args
        .texts
        .iter()
        .map(|text| {
            let tokens = analyzer.analyze(text)?.map(|token| token.text).collect();
            Ok(NormalizedText {
                input: text.clone(),
                normalized: normalize(Some(text.as_str())),
                tokens,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(
        "Normalized text",
        &NormalizationResults { results },
        cli_args,
    )
}
