//! # Polarity Scorers
//!
//! The swappable polarity-estimation capability behind the classify
//! stage. Any estimator producing scores in [-1.0, 1.0] satisfies the
//! contract; the threshold logic in [`super::SentimentLabel`] never
//! depends on the estimator internals.

use crate::sentiment::lexicon::OpinionLexicon;

/// A polarity estimator over cleaned text
///
/// Implementations must be pure per call: same text, same score, no
/// hidden state.
pub trait PolarityScorer {
    /// Estimate polarity in [-1.0, 1.0]; empty or whitespace-only text
    /// must score exactly 0.0.
    fn polarity(&self, text: &str) -> f64;
}

/// Lexicon-backed scorer, the default estimator
pub struct LexiconScorer {
    lexicon: OpinionLexicon,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    /// Create a scorer over the default opinion lexicon
    pub fn new() -> Self {
        Self {
            lexicon: OpinionLexicon::new(),
        }
    }

    /// Create a scorer over a custom lexicon
    pub fn with_lexicon(lexicon: OpinionLexicon) -> Self {
        Self { lexicon }
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        self.lexicon.analyze(text).score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_scores_zero() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity(""), 0.0);
        assert_eq!(scorer.polarity("   \t\n"), 0.0);
    }

    #[test]
    fn test_score_within_range() {
        let scorer = LexiconScorer::new();
        for text in [
            "extremely amazing perfect incredible",
            "extremely terrible horrible worst disaster",
            "keyboard mouse monitor",
        ] {
            let score = scorer.polarity(text);
            assert!((-1.0..=1.0).contains(&score), "{text}: {score}");
        }
    }

    #[test]
    fn test_positive_and_negative_direction() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("great new phone loving") > 0.05);
        assert!(scorer.polarity("terrible buggy mess") < -0.05);
    }

    #[test]
    fn test_custom_lexicon() {
        let mut lexicon = OpinionLexicon::new();
        lexicon.add_word("bricked", -0.9);
        let scorer = LexiconScorer::with_lexicon(lexicon);
        assert!(scorer.polarity("phone bricked") < -0.05);
    }
}
