//! # Sentiment Labels
//!
//! Categorical sentiment derived from a polarity score.

use serde::{Deserialize, Serialize};

/// Sentiment classification of a single record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// score < -0.05
    Negative,
    /// -0.05 <= score <= 0.05
    Neutral,
    /// score > 0.05
    Positive,
}

impl SentimentLabel {
    /// Convert a polarity score to a label
    ///
    /// Scores very close to zero are treated as neutral; the +-0.05
    /// boundary values themselves classify as neutral. Total over the
    /// real line, no error conditions.
    pub fn from_score(score: f64) -> Self {
        if score > 0.05 {
            SentimentLabel::Positive
        } else if score < -0.05 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Positive => "Positive",
        }
    }

    /// Ordering rank (Negative < Neutral < Positive)
    pub fn rank(&self) -> i8 {
        match self {
            SentimentLabel::Negative => -1,
            SentimentLabel::Neutral => 0,
            SentimentLabel::Positive => 1,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0500001), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.0500001), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_monotonic_rank() {
        let scores = [-1.0, -0.5, -0.0500001, -0.05, 0.0, 0.05, 0.0500001, 0.5, 1.0];
        for window in scores.windows(2) {
            let lower = SentimentLabel::from_score(window[0]);
            let upper = SentimentLabel::from_score(window[1]);
            assert!(lower.rank() <= upper.rank());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Neutral.as_str(), "Neutral");
    }
}
