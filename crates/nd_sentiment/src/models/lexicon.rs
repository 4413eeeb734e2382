use nd_core::SentimentModel;

const POSITIVE_WORDS: &[&str] = &[
    "win", "success", "gain", "rise", "surge", "approve", "agree", "pass",
    "breakthrough", "progress", "strong", "boost", "improve", "record",
    "optimistic", "confident", "support", "growth", "celebrate", "recover",
];

const NEGATIVE_WORDS: &[&str] = &[
    "lose", "fail", "drop", "fall", "crash", "reject", "oppose", "block",
    "crisis", "collapse", "weak", "decline", "worst", "threat", "risk",
    "pessimistic", "concern", "fear", "scandal", "layoff", "fraud",
];

/// Keyword-list polarity scorer. The score is the normalized difference of
/// positive and negative hits: (pos - neg) / (pos + neg), 0 with no hits.
pub struct LexiconModel;

impl LexiconModel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconModel {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> f32 {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();
        if words.is_empty() {
            return 0.0;
        }

        let pos = words
            .iter()
            .filter(|w| POSITIVE_WORDS.iter().any(|pw| w.contains(pw)))
            .count() as f32;
        let neg = words
            .iter()
            .filter(|w| NEGATIVE_WORDS.iter().any(|nw| w.contains(nw)))
            .count() as f32;

        let total = pos + neg;
        if total == 0.0 {
            return 0.0;
        }

        (pos - neg) / total
    }
}
