//! Built-in Bengali corpus used when no dataset can be loaded.

use crate::dataset::LabeledExample;
use crate::ml::label::Label;

const RUMOR_TEXTS: [&str; 10] = [
    "শোনা যাচ্ছে যে সরকার গোপনে নতুন কর বসাতে চাইছে",
    "গুজব রটেছে যে আগামীকাল সব দোকান বন্ধ থাকবে",
    "দাবি করা হচ্ছে যে খাবারে বিষ মেশানো হয়েছে",
    "সন্দেহজনক তথ্য পেয়েছি যে নির্বাচন বাতিল হবে",
    "চাঞ্চল্যকর খবর যে বন্যা আরো বাড়বে",
    "অনিশ্চিত খবর পাওয়া যাচ্ছে যে দাম আরো বাড়বে",
    "ভুয়া খবর ছড়ানো হচ্ছে করোনা আবার বাড়ছে",
    "মিথ্যা দাবি করা হচ্ছে সকল স্কুল বন্ধ",
    "বানোয়াট তথ্য দিয়ে বলা হচ্ছে অর্থনীতি ভেঙে পড়বে",
    "জাল নিউজ ছড়াচ্ছে সরকার পদত্যাগ করবে",
];

const CREDIBLE_TEXTS: [&str; 10] = [
    "সরকারি ঘোষণা অনুযায়ী নতুন নীতিমালা প্রকাশিত",
    "অফিসিয়াল সূত্রে জানা গেছে নির্বাচনের তারিখ ঠিক",
    "নির্ভরযোগ্য সূত্রে নিশ্চিত হওয়া গেছে বাজেট পাস",
    "বিশেষজ্ঞদের মতে অর্থনৈতিক অবস্থা উন্নতি",
    "গবেষণায় প্রমাণিত হয়েছে শিক্ষার মান বাড়ছে",
    "যাচাইকৃত তথ্য অনুযায়ী স্বাস্থ্যসেবা উন্নত",
    "সত্যায়িত রিপোর্টে বলা হয়েছে পরিবেশ রক্ষা",
    "প্রমাণিত তথ্য মতে কৃষি উৎপাদন বেড়েছে",
    "নিশ্চিত সূত্রে জানা যায় শিল্প খাতে উন্নতি",
    "বিশ্বস্ত সংস্থার রিপোর্ট অনুযায়ী দুর্নীতি কমেছে",
];

const NEUTRAL_TEXTS: [&str; 10] = [
    "আজকের আবহাওয়া রিপোর্ট অনুযায়ী বৃষ্টি হতে পারে",
    "স্পোর্টস নিউজে বলা হয়েছে টুর্নামেন্ট শুরু হবে",
    "বিনোদন জগতের খবরে নতুন ছবি মুক্তি পাবে",
    "প্রযুক্তি বিষয়ক সংবাদে নতুন অ্যাপ লঞ্চ",
    "শিক্ষা সংক্রান্ত খবরে পরীক্ষার রুটিন প্রকাশিত",
    "স্বাস্থ্য টিপসে বলা হয়েছে নিয়মিত ব্যায়াম",
    "ভ্রমণ গাইডে উল্লেখ করা হয়েছে নতুন স্থান",
    "রান্নার রেসিপিতে দেওয়া হয়েছে স্বাস্থ্যকর খাবার",
    "ফ্যাশন নিউজে বলা হয়েছে নতুন ট্রেন্ড",
    "লাইফস্টাইল টিপসে দেওয়া হয়েছে জীবনযাত্রার পরামর্শ",
];

/// The fixed 30-sentence corpus: rumor, then credible, then neutral.
pub fn fallback_corpus() -> Vec<LabeledExample> {
    [
        (Label::Rumor, &RUMOR_TEXTS),
        (Label::Credible, &CREDIBLE_TEXTS),
        (Label::Neutral, &NEUTRAL_TEXTS),
    ]
    .into_iter()
    .flat_map(|(label, texts)| texts.iter().map(move |text| LabeledExample::new(*text, label)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalizer::normalize;

    #[test]
    fn test_fallback_corpus_shape() {
        let corpus = fallback_corpus();
        assert_eq!(corpus.len(), 30);
        for label in Label::ALL {
            assert_eq!(corpus.iter().filter(|e| e.label == label).count(), 10);
        }
        assert_eq!(corpus[0].label, Label::Rumor);
        assert_eq!(corpus[29].label, Label::Neutral);
    }

    #[test]
    fn test_fallback_corpus_is_normalized() {
        for example in fallback_corpus() {
            assert_eq!(normalize(Some(&example.text)), example.text);
        }
    }
}
