//! Atomic artifact writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use tempfile::NamedTempFile;

use crate::error::{GujobError, Result};
use crate::model::artifact::ModelArtifact;

/// Default location of the exported model.
pub const DEFAULT_MODEL_PATH: &str = "assets/models/naive_bayes_model.json";

/// Writes [`ModelArtifact`]s to disk.
///
/// The JSON is written to a temporary file next to the destination and then
/// renamed over it, so readers see either the previous file or the complete
/// new one. Missing parent directories are created.
#[derive(Debug, Clone)]
pub struct ModelExporter {
    path: PathBuf,
}

impl ModelExporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `artifact`, returning the number of bytes written.
    pub fn export(&self, artifact: &ModelArtifact) -> Result<u64> {
        let json = artifact.to_json()?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        std::fs::create_dir_all(&dir).map_err(|e| {
            GujobError::serialization(format!("failed to create {}: {e}", dir.display()))
        })?;

        let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| {
            GujobError::serialization(format!(
                "failed to create temporary file in {}: {e}",
                dir.display()
            ))
        })?;
        temp_file
            .write_all(json.as_bytes())
            .and_then(|_| temp_file.as_file().sync_all())
            .map_err(|e| GujobError::serialization(format!("failed to write artifact: {e}")))?;

        temp_file.persist(&self.path).map_err(|e| {
            GujobError::serialization(format!(
                "failed to move artifact into {}: {}",
                self.path.display(),
                e.error
            ))
        })?;

        info!(
            "Exported {} classes and {} features to {} ({} bytes)",
            artifact.classes.len(),
            artifact.feature_count(),
            self.path.display(),
            json.len()
        );

        Ok(json.len() as u64)
    }
}

/// Write `artifact` to `path`.
pub fn export<P: AsRef<Path>>(artifact: &ModelArtifact, path: P) -> Result<u64> {
    ModelExporter::new(path).export(artifact)
}
