//! Seeded, stratified train/test split.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{GujobError, Result};
use crate::ml::label::Label;

/// Minimum examples a class needs to appear on both sides of the split.
pub const MIN_CLASS_SAMPLES: usize = 2;

/// Split configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Proportion of each class held out for evaluation.
    pub test_size: f64,
    /// Seed for the shuffle.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 42,
        }
    }
}

impl SplitConfig {
    /// Check that `test_size` is a proper fraction.
    pub fn validate(&self) -> Result<()> {
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(GujobError::invalid_config(format!(
                "test_size must be in (0, 1), got {}",
                self.test_size
            )));
        }
        Ok(())
    }
}

/// Indices into the original example list, ascending on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Split `labels` so each class keeps its proportion in both halves.
///
/// Every class gets `round(count * test_size)` test examples, clamped so at
/// least one example lands on each side. A class with fewer than
/// [`MIN_CLASS_SAMPLES`] examples cannot be split.
pub fn stratified_split(labels: &[Label], config: &SplitConfig) -> Result<TrainTestSplit> {
    config.validate()?;

    let mut by_class: BTreeMap<Label, Vec<usize>> = BTreeMap::new();
    for (idx, label) in labels.iter().enumerate() {
        by_class.entry(*label).or_default().push(idx);
    }

    for (label, indices) in &by_class {
        if indices.len() < MIN_CLASS_SAMPLES {
            return Err(GujobError::insufficient_class_samples(
                label.as_str(),
                MIN_CLASS_SAMPLES,
                indices.len(),
            ));
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut train = Vec::with_capacity(labels.len());
    let mut test = Vec::new();

    for (_, mut indices) in by_class {
        let count = indices.len();
        let n_test = ((count as f64 * config.test_size).round() as usize).clamp(1, count - 1);

        indices.shuffle(&mut rng);
        test.extend_from_slice(&indices[..n_test]);
        train.extend_from_slice(&indices[n_test..]);
    }

    train.sort_unstable();
    test.sort_unstable();

    Ok(TrainTestSplit { train, test })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<Label> {
        let mut labels = Vec::new();
        for label in Label::ALL {
            labels.extend(std::iter::repeat_n(label, 10));
        }
        labels
    }

    #[test]
    fn test_split_is_stratified() {
        let labels = labels();
        let split = stratified_split(&labels, &SplitConfig::default()).unwrap();

        assert_eq!(split.train.len(), 24);
        assert_eq!(split.test.len(), 6);
        for label in Label::ALL {
            let in_test = split.test.iter().filter(|&&i| labels[i] == label).count();
            assert_eq!(in_test, 2);
        }
    }

    #[test]
    fn test_split_partitions_indices() {
        let labels = labels();
        let split = stratified_split(&labels, &SplitConfig::default()).unwrap();

        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..labels.len()).collect::<Vec<_>>());
        assert!(split.train.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_split_is_reproducible() {
        let labels = labels();
        let config = SplitConfig {
            test_size: 0.3,
            seed: 7,
        };
        assert_eq!(
            stratified_split(&labels, &config).unwrap(),
            stratified_split(&labels, &config).unwrap()
        );
    }

    #[test]
    fn test_small_class_keeps_both_sides() {
        let labels = vec![Label::Rumor, Label::Rumor, Label::Neutral, Label::Neutral];
        let split = stratified_split(&labels, &SplitConfig::default()).unwrap();
        assert_eq!(split.test.len(), 2);
        assert_eq!(split.train.len(), 2);
    }

    #[test]
    fn test_single_example_class_rejected() {
        let labels = vec![Label::Rumor, Label::Rumor, Label::Credible];
        let err = stratified_split(&labels, &SplitConfig::default()).unwrap_err();
        match err {
            GujobError::InsufficientClassSamples {
                label,
                required,
                actual,
            } => {
                assert_eq!(label, "credible");
                assert_eq!(required, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_test_size() {
        let config = SplitConfig {
            test_size: 1.0,
            seed: 42,
        };
        assert!(stratified_split(&labels(), &config).is_err());
    }
}
