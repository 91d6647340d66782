//! Integration tests for the exported model contract.
//!
//! These tests read the artifact as plain JSON and score documents the way an
//! independent runtime would, without touching the trainer's types.

use std::collections::HashMap;

use gujob::analysis::normalize;
use gujob::dataset::Dataset;
use gujob::error::Result;
use gujob::ml::{FitState, Label, Trainer, TrainingConfig};
use gujob::model::{InferenceEngine, ModelArtifact, export};
use serde_json::Value;
use tempfile::TempDir;

const SAMPLE_TEXTS: &[&str] = &[
    "গুজব রটেছে যে সব স্কুল বন্ধ থাকবে!",
    "সরকারি ঘোষণা অনুযায়ী বাজেট পাস হয়েছে।",
    "আজকের আবহাওয়া: বৃষ্টি হতে পারে (১০০%)",
    "FAKE NEWS 2024",
    "",
];

fn trained_state() -> Result<FitState> {
    let trainer = Trainer::new(TrainingConfig::default())?;
    let (state, _) = trainer.train(&Dataset::fallback())?;
    Ok(state)
}

/// Score `text` using nothing but the JSON artifact.
fn score_from_json(model: &Value, text: &str) -> (String, Vec<f64>) {
    let vocabulary: HashMap<&str, usize> = model["vocabulary"]
        .as_object()
        .unwrap()
        .iter()
        .map(|(term, idx)| (term.as_str(), idx.as_u64().unwrap() as usize))
        .collect();
    let idf: Vec<f64> = model["idf"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_f64().unwrap())
        .collect();

    let normalized = normalize(Some(text));
    let mut x = vec![0.0; vocabulary.len()];
    for token in normalized.split_whitespace() {
        if let Some(&idx) = vocabulary.get(token) {
            x[idx] += 1.0;
        }
    }
    for (value, weight) in x.iter_mut().zip(&idf) {
        *value *= weight;
    }
    let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        x.iter_mut().for_each(|v| *v /= norm);
    }

    let classes = model["classes"].as_array().unwrap();
    let priors = model["class_log_prior"].as_array().unwrap();
    let rows = model["feature_log_prob"].as_array().unwrap();

    let scores: Vec<f64> = priors
        .iter()
        .zip(rows)
        .map(|(prior, row)| {
            prior.as_f64().unwrap()
                + row
                    .as_array()
                    .unwrap()
                    .iter()
                    .zip(&x)
                    .map(|(w, v)| w.as_f64().unwrap() * v)
                    .sum::<f64>()
        })
        .collect();

    let mut best = 0;
    for (i, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = i;
        }
    }
    (classes[best].as_str().unwrap().to_string(), scores)
}

#[test]
fn test_exported_parameters_reproduce_predictions() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("model.json");
    let state = trained_state()?;
    state.export(&path)?;

    let model: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(model["schema_version"], 1);
    assert_eq!(model["model_type"], "MultinomialNB");

    for text in SAMPLE_TEXTS {
        let (label, scores) = score_from_json(&model, text);
        assert_eq!(label, state.predict(text)?.as_str());

        let expected = state.classifier().decision_scores(&state.transform(text)?);
        for (got, want) in scores.iter().zip(&expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    Ok(())
}

#[test]
fn test_inference_engine_round_trip() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("nested/dir/model.json");
    let state = trained_state()?;
    state.export(&path)?;

    let engine = InferenceEngine::load(&path)?;
    assert_eq!(engine.artifact(), &state.to_artifact());
    for text in SAMPLE_TEXTS {
        assert_eq!(engine.predict(text)?.label, state.predict(text)?);
    }

    Ok(())
}

#[test]
fn test_out_of_range_vocabulary_index_is_ignored() -> Result<()> {
    let state = trained_state()?;
    let mut model: Value = serde_json::from_str(&state.to_artifact().to_json()?)?;
    model["vocabulary"]["অতিরিক্ত"] = Value::from(99999);

    let engine =
        ModelArtifact::from_json(&model.to_string()).and_then(InferenceEngine::from_artifact)?;
    assert_eq!(
        engine.artifact().feature_count(),
        state.vectorizer().vocabulary_size()
    );
    for text in SAMPLE_TEXTS.iter().chain(&["অতিরিক্ত গুজব"]) {
        assert_eq!(engine.predict(text)?.label, state.predict(text)?);
    }

    Ok(())
}

#[test]
fn test_vocabulary_and_feature_names_agree() -> Result<()> {
    let artifact = trained_state()?.to_artifact();

    let mut indices: Vec<usize> = artifact.vocabulary.values().copied().collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..artifact.feature_names.len()).collect::<Vec<_>>());
    for (term, &idx) in &artifact.vocabulary {
        assert_eq!(&artifact.feature_names[idx], term);
    }
    assert!(artifact.feature_names.windows(2).all(|w| w[0] < w[1]));
    for row in &artifact.feature_log_prob {
        assert_eq!(row.len(), artifact.feature_names.len());
    }

    Ok(())
}

#[test]
fn test_export_twice_is_byte_identical() -> Result<()> {
    let dir = TempDir::new()?;
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    export(&trained_state()?.to_artifact(), &first)?;
    export(&trained_state()?.to_artifact(), &second)?;

    assert_eq!(std::fs::read(&first)?, std::fs::read(&second)?);
    Ok(())
}

#[test]
fn test_artifact_metadata() -> Result<()> {
    let artifact: ModelArtifact = trained_state()?.to_artifact();

    assert_eq!(
        artifact.classes,
        vec![Label::Credible, Label::Neutral, Label::Rumor]
    );
    assert_eq!(artifact.metadata.training_samples, 24);
    assert_eq!(artifact.vectorizer_params.max_features, Some(1000));
    assert_eq!(artifact.vectorizer_params.min_df, 1);
    assert_eq!(artifact.vectorizer_params.max_df, 1.0);

    let normalization = &artifact.metadata.normalization_config;
    assert!(normalization.lowercase);
    assert!(normalization.strip_digits);
    assert!(!normalization.stop_words_applied);
    assert_eq!(normalization.bengali_stopwords.len(), 28);
    assert!(normalization.punctuation.contains(&"।".to_string()));

    Ok(())
}
