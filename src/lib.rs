//! # gujob
//!
//! Trains a Bengali rumor/credible/neutral classifier and exports it as a
//! self-describing JSON model.
//!
//! ## Features
//!
//! - Deterministic Bengali text normalization shared by training and inference
//! - TF-IDF vectorization with a capped vocabulary
//! - Multinomial Naive Bayes with add-one smoothing
//! - Seeded, stratified train/test split and an evaluation report
//! - Atomic JSON export and a reference inference engine
//!
//! ## Example
//!
//! ```no_run
//! use gujob::ml::{Trainer, TrainingConfig};
//!
//! let outcome = Trainer::new(TrainingConfig::default())?.run()?;
//! println!("accuracy: {:.2}", outcome.report.accuracy);
//! # Ok::<(), gujob::error::GujobError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod ml;
pub mod model;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
