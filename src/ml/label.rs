//! Class labels and the raw-label normalization policy.
//!
//! Source datasets label their rows in many ways (`"FAKE"`, `"0"`, `"সত্য"`,
//! `"real news"`, ...). [`normalize_label`] folds all of them into the closed
//! set of [`Label`]s with a substring heuristic:
//!
//! 1. absent label → [`Label::Neutral`]
//! 2. any rumor indicator present → [`Label::Rumor`]
//! 3. any credible indicator present → [`Label::Credible`]
//! 4. otherwise → [`Label::Neutral`]
//!
//! The rumor check runs first, so a label matching both sets is a rumor.
//!
//! # Examples
//!
//! ```
//! use gujob::ml::label::{Label, normalize_label};
//!
//! assert_eq!(normalize_label(Some("Confirmed FAKE news, label=0")), Label::Rumor);
//! assert_eq!(normalize_label(Some("Verified TRUE report")), Label::Credible);
//! assert_eq!(normalize_label(Some("Weather update")), Label::Neutral);
//! assert_eq!(normalize_label(None), Label::Neutral);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GujobError, Result};

/// Substrings marking a rumor label. Checked before [`CREDIBLE_INDICATORS`].
pub const RUMOR_INDICATORS: &[&str] = &[
    "fake",
    "false",
    "rumor",
    "rumour",
    "misinformation",
    "0",
    "ভুয়া",
    "মিথ্যা",
    "গুজব",
];

/// Substrings marking a credible label.
pub const CREDIBLE_INDICATORS: &[&str] = &[
    "real",
    "true",
    "authentic",
    "1",
    "সত্য",
    "সঠিক",
    "নির্ভরযোগ্য",
];

/// The closed set of classes the model predicts.
///
/// Variants are declared in canonical class order (alphabetical by name),
/// which is also their `Ord` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Statement from a trustworthy source.
    Credible,
    /// Ordinary news with no credibility signal.
    Neutral,
    /// Unverified or false statement.
    Rumor,
}

impl Label {
    /// All labels in canonical order.
    pub const ALL: [Label; 3] = [Label::Credible, Label::Neutral, Label::Rumor];

    /// The wire name of this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Credible => "credible",
            Label::Neutral => "neutral",
            Label::Rumor => "rumor",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = GujobError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "credible" => Ok(Label::Credible),
            "neutral" => Ok(Label::Neutral),
            "rumor" => Ok(Label::Rumor),
            other => Err(GujobError::invalid_argument(format!(
                "unknown label '{other}'"
            ))),
        }
    }
}

/// Map raw label text onto a [`Label`].
pub fn normalize_label(raw: Option<&str>) -> Label {
    let Some(raw) = raw else {
        return Label::Neutral;
    };

    let label = raw.to_lowercase();
    let label = label.trim();

    if RUMOR_INDICATORS.iter().any(|word| label.contains(word)) {
        Label::Rumor
    } else if CREDIBLE_INDICATORS.iter().any(|word| label.contains(word)) {
        Label::Credible
    } else {
        Label::Neutral
    }
}
