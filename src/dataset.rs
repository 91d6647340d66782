//! Labelled training data: the CSV loader and the built-in fallback corpus.

pub mod csv;
pub mod fallback;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::ml::label::Label;

pub use self::csv::{DatasetConfig, load_csv};
pub use self::fallback::fallback_corpus;

/// A normalized document and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    pub text: String,
    pub label: Label,
}

impl LabeledExample {
    pub fn new<S: Into<String>>(text: S, label: Label) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Where a [`Dataset`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Csv(PathBuf),
    Fallback,
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Csv(path) => write!(f, "{}", path.display()),
            DatasetSource::Fallback => f.write_str("built-in fallback corpus"),
        }
    }
}

/// The examples the trainer works on.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub examples: Vec<LabeledExample>,
    pub source: DatasetSource,
}

impl Dataset {
    /// The built-in corpus.
    pub fn fallback() -> Self {
        Self {
            examples: fallback_corpus(),
            source: DatasetSource::Fallback,
        }
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<Label> {
        self.examples.iter().map(|e| e.label).collect()
    }

    /// Example count per label.
    pub fn label_distribution(&self) -> BTreeMap<Label, usize> {
        let mut counts = BTreeMap::new();
        for example in &self.examples {
            *counts.entry(example.label).or_insert(0) += 1;
        }
        counts
    }
}

/// Load the configured CSV, substituting the fallback corpus on any failure.
///
/// Never fails: a missing, unreadable or empty source is logged and replaced.
pub fn load_or_fallback(config: Option<&DatasetConfig>) -> Dataset {
    let Some(config) = config else {
        info!("No dataset configured, using the built-in fallback corpus");
        return Dataset::fallback();
    };

    match load_csv(config) {
        Ok(examples) => {
            info!(
                "Loaded {} examples from {}",
                examples.len(),
                config.path.display()
            );
            Dataset {
                examples,
                source: DatasetSource::Csv(config.path.clone()),
            }
        }
        Err(e) => {
            warn!("{e}; using the built-in fallback corpus");
            Dataset::fallback()
        }
    }
}
