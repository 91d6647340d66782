//! CSV dataset loader.
//!
//! The first row is the header. Text and label columns are taken from the
//! [`DatasetConfig`] when named there; otherwise they are detected:
//!
//! - text: a header containing `text`, `content` or `news`, else column 0
//! - label: a header containing `label`, `class` or `category`, else column 1
//!
//! Matching is case-insensitive and the last matching header wins. Text is
//! normalized on the way in and rows whose normalized text is empty are
//! dropped. Labels go through [`normalize_label`].

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::normalize;
use crate::dataset::LabeledExample;
use crate::error::{GujobError, Result};
use crate::ml::label::normalize_label;

const TEXT_HINTS: &[&str] = &["text", "content", "news"];
const LABEL_HINTS: &[&str] = &["label", "class", "category"];

/// Where to read the dataset from and how to find its columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path of the CSV file.
    pub path: PathBuf,
    /// Header of the text column. Detected when absent.
    #[serde(default)]
    pub text_column: Option<String>,
    /// Header of the label column. Detected when absent.
    #[serde(default)]
    pub label_column: Option<String>,
    /// Field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_delimiter() -> char {
    ','
}

impl DatasetConfig {
    /// Read `path` with column detection and a comma delimiter.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            text_column: None,
            label_column: None,
            delimiter: default_delimiter(),
        }
    }

    /// Use the named header as the text column.
    pub fn with_text_column<S: Into<String>>(mut self, column: S) -> Self {
        self.text_column = Some(column.into());
        self
    }

    /// Use the named header as the label column.
    pub fn with_label_column<S: Into<String>>(mut self, column: S) -> Self {
        self.label_column = Some(column.into());
        self
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Detect the text and label columns from header names.
///
/// Returns the index of the last header matching each hint list.
pub fn detect_columns<'a, I>(headers: I) -> (Option<usize>, Option<usize>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = None;
    let mut label = None;
    for (idx, header) in headers.into_iter().enumerate() {
        let header = header.to_lowercase();
        if TEXT_HINTS.iter().any(|hint| header.contains(hint)) {
            text = Some(idx);
        }
        if LABEL_HINTS.iter().any(|hint| header.contains(hint)) {
            label = Some(idx);
        }
    }
    (text, label)
}

/// Load labelled examples from a CSV file.
///
/// Any failure (missing file, bad header, malformed record, no usable rows)
/// is reported as [`GujobError::SourceUnavailable`].
pub fn load_csv(config: &DatasetConfig) -> Result<Vec<LabeledExample>> {
    let path = &config.path;
    let unavailable =
        |reason: String| GujobError::source_unavailable(format!("{}: {reason}", path.display()));

    if !config.delimiter.is_ascii() {
        return Err(unavailable(format!(
            "delimiter '{}' is not a single byte",
            config.delimiter
        )));
    }

    let file = File::open(path).map_err(|e| unavailable(e.to_string()))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(config.delimiter as u8)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| unavailable(format!("failed to read CSV headers: {e}")))?
        .clone();
    debug!("CSV columns: {:?}", headers.iter().collect::<Vec<_>>());

    let (text_idx, label_idx) = resolve_columns(&headers, config).map_err(unavailable)?;

    let mut examples = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|e| unavailable(format!("failed to read CSV record: {e}")))?;
        let text = normalize(record.get(text_idx));
        if text.is_empty() {
            dropped += 1;
            continue;
        }
        let label = normalize_label(record.get(label_idx).filter(|raw| !raw.is_empty()));
        examples.push(LabeledExample { text, label });
    }

    if examples.is_empty() {
        return Err(unavailable("no usable rows".to_string()));
    }
    debug!(
        "kept {} rows, dropped {dropped} with empty text",
        examples.len()
    );

    Ok(examples)
}

fn resolve_columns(
    headers: &StringRecord,
    config: &DatasetConfig,
) -> std::result::Result<(usize, usize), String> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| format!("column '{name}' not found"))
    };

    let (detected_text, detected_label) = detect_columns(headers.iter());

    let text_idx = match &config.text_column {
        Some(name) => find(name)?,
        None => detected_text.unwrap_or_else(|| {
            debug!("no text column detected, using column 0");
            0
        }),
    };
    let label_idx = match &config.label_column {
        Some(name) => find(name)?,
        None => detected_label.unwrap_or_else(|| {
            debug!("no label column detected, using column 1");
            1
        }),
    };

    let width = headers.len();
    if text_idx >= width || label_idx >= width {
        return Err(format!(
            "need a text and a label column, found {width} column(s)"
        ));
    }

    Ok((text_idx, label_idx))
}
