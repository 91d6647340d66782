//! Criterion benchmarks for gujob.
//!
//! Covers the hot paths of training and inference:
//! - Text normalization and analysis
//! - TF-IDF fitting and transformation
//! - Naive Bayes training and prediction

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gujob::analysis::analyzer::{Analyzer, BengaliAnalyzer};
use gujob::analysis::normalizer::normalize;
use gujob::dataset::fallback_corpus;
use gujob::ml::{FitState, NaiveBayesConfig, VectorizerConfig};
use gujob::model::InferenceEngine;

/// Generate synthetic Bengali documents from the fallback corpus vocabulary.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words: Vec<String> = fallback_corpus()
        .iter()
        .flat_map(|example| example.text.split(' ').map(str::to_string).collect::<Vec<_>>())
        .collect();

    (0..count)
        .map(|i| {
            let doc_length = 8 + (i % 24);
            let doc: Vec<&str> = (0..doc_length)
                .map(|j| words[(i * 31 + j * 7) % words.len()].as_str())
                .collect();
            format!("{}। ২০২৪ {}!", doc.join(" "), i)
        })
        .collect()
}

fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let documents = generate_test_documents(100);
    let analyzer = BengaliAnalyzer::new();

    group.bench_function("normalize_single_document", |b| {
        b.iter(|| black_box(normalize(Some(black_box(documents[0].as_str())))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch_documents", |b| {
        b.iter(|| {
            for doc in &documents {
                let tokens: Vec<_> = analyzer.analyze(black_box(doc)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(20);
    let corpus = fallback_corpus();

    for size in [30usize, 300, 3000] {
        let examples: Vec<_> = corpus.iter().cycle().take(size).cloned().collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("fit", size), &examples, |b, examples| {
            b.iter(|| {
                FitState::fit(
                    &VectorizerConfig::default(),
                    &NaiveBayesConfig::default(),
                    black_box(examples),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference");
    let state = FitState::fit(
        &VectorizerConfig::default(),
        &NaiveBayesConfig::default(),
        &fallback_corpus(),
    )
    .unwrap();
    let engine = InferenceEngine::from_artifact(state.to_artifact()).unwrap();
    let documents = generate_test_documents(100);

    group.bench_function("transform_single_document", |b| {
        b.iter(|| black_box(state.transform(black_box(&documents[0])).unwrap()))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("predict_batch_documents", |b| {
        b.iter(|| black_box(engine.predict_batch(black_box(&documents)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_training, bench_inference);
criterion_main!(benches);
