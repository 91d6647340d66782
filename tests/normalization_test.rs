//! Integration tests for text and label normalization.

use gujob::analysis::analyzer::{Analyzer, BengaliAnalyzer};
use gujob::analysis::normalize;
use gujob::analysis::normalizer::PUNCTUATION;
use gujob::error::Result;
use gujob::ml::{Label, normalize_label};

const SAMPLES: &[&str] = &[
    "গুজব রটেছে যে আগামীকাল সব দোকান বন্ধ থাকবে।",
    "  BREAKING: 5 জন আহত!!  (সূত্র: \"পুলিশ\") ",
    "a1b2c3 [test] {x}; y? z.",
    "১২৩ বাংলা সংখ্যা 456 থাকে",
    "\t\n",
    "",
];

#[test]
fn test_normalizer_properties() -> Result<()> {
    for &sample in SAMPLES {
        let once = normalize(Some(sample));

        assert_eq!(normalize(Some(once.as_str())), once, "not idempotent for {sample:?}");
        assert!(!once.chars().any(|c| c.is_ascii_digit()));
        assert!(!once.chars().any(|c| PUNCTUATION.contains(&c)));
        assert_eq!(once, once.trim());
        assert!(!once.contains("  "));
    }

    Ok(())
}

#[test]
fn test_normalizer_examples() -> Result<()> {
    assert_eq!(normalize(None), "");
    assert_eq!(
        normalize(Some("  BREAKING: 5 জন আহত!!  (সূত্র: \"পুলিশ\") ")),
        "breaking জন আহত সূত্র পুলিশ"
    );
    assert_eq!(normalize(Some("a1b2c3")), "abc");
    assert_eq!(
        normalize(Some("১২৩ বাংলা সংখ্যা 456 থাকে")),
        "১২৩ বাংলা সংখ্যা থাকে"
    );

    Ok(())
}

#[test]
fn test_analyzer_tokens_match_whitespace_split() -> Result<()> {
    let analyzer = BengaliAnalyzer::new();
    for &sample in SAMPLES {
        let tokens: Vec<String> = analyzer.analyze(sample)?.map(|t| t.text).collect();
        let expected: Vec<String> = normalize(Some(sample))
            .split_whitespace()
            .map(str::to_string)
            .collect();
        assert_eq!(tokens, expected);
    }

    Ok(())
}

#[test]
fn test_label_normalization() -> Result<()> {
    assert_eq!(normalize_label(Some("Confirmed FAKE news, label=0")), Label::Rumor);
    assert_eq!(normalize_label(Some("Verified TRUE report")), Label::Credible);
    assert_eq!(normalize_label(Some("Weather update")), Label::Neutral);
    assert_eq!(normalize_label(Some("গুজব রটেছে")), Label::Rumor);
    assert_eq!(normalize_label(Some("সত্য কিন্তু fake")), Label::Rumor);
    assert_eq!(normalize_label(None), Label::Neutral);

    Ok(())
}
