//! The exported model: artifact schema, atomic exporter and inference engine.
//!
//! The artifact is the only contract between training and inference. An
//! engine that reimplements [`normalize`](crate::analysis::normalize),
//! splits on whitespace and applies
//!
//! ```text
//! score(c) = class_log_prior[c] + Σ_i x_i · feature_log_prob[c][i]
//! ```
//!
//! over the TF-IDF vector `x` reproduces the trainer's decisions.

pub mod artifact;
pub mod exporter;
pub mod inference;

pub use artifact::{ModelArtifact, ModelMetadata, VectorizerParams};
pub use exporter::{ModelExporter, export};
pub use inference::{InferenceEngine, Prediction};
