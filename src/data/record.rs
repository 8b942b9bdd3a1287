//! # Pipeline Records
//!
//! One Reddit post per CSV row. Each stage appends columns and never
//! overwrites an existing field, so the three row types form a strict
//! widening chain: `RawPost` -> `NormalizedPost` -> `ScoredPost`.

use crate::sentiment::SentimentLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A post as written by the collect stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    /// Opaque Reddit post id
    pub id: String,
    /// Post title; absent titles are coerced to the empty string
    #[serde(default)]
    pub title: String,
    /// Post score (upvotes minus downvotes)
    pub score: i64,
    /// Number of comments reported by the API
    pub num_comments: u64,
    /// Creation time, Unix seconds as reported by the API
    pub created_utc: f64,
    /// Link URL
    #[serde(default)]
    pub url: String,
    /// Self-text body; absent bodies are coerced to the empty string
    #[serde(default)]
    pub text: String,
    /// Top-level comment bodies joined by single spaces; empty when
    /// comment collection is off
    #[serde(default)]
    pub comments: String,
}

impl RawPost {
    /// Creation time as a UTC datetime
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.created_utc as i64, 0).unwrap_or_default()
    }

    /// Concatenate the configured text fields with single spaces,
    /// in the order title, body, comments.
    pub fn combined_text(&self, include_comments: bool) -> String {
        if include_comments {
            format!("{} {} {}", self.title, self.text, self.comments)
        } else {
            format!("{} {}", self.title, self.text)
        }
    }
}

/// A post enriched by the normalize stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedPost {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub score: i64,
    pub num_comments: u64,
    pub created_utc: f64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub comments: String,
    /// Concatenation of the configured text fields
    pub combined_text: String,
    /// Bag-of-words form of `combined_text`; may be empty
    #[serde(default)]
    pub cleaned_text: String,
}

impl NormalizedPost {
    /// Widen a raw post with its derived text columns
    pub fn from_raw(raw: RawPost, combined_text: String, cleaned_text: String) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            score: raw.score,
            num_comments: raw.num_comments,
            created_utc: raw.created_utc,
            url: raw.url,
            text: raw.text,
            comments: raw.comments,
            combined_text,
            cleaned_text,
        }
    }
}

/// A post enriched by the classify stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPost {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub score: i64,
    pub num_comments: u64,
    pub created_utc: f64,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub comments: String,
    pub combined_text: String,
    #[serde(default)]
    pub cleaned_text: String,
    /// Polarity estimate in [-1.0, 1.0]
    pub sentiment_score: f64,
    /// Categorical label derived from the score
    pub sentiment_label: SentimentLabel,
}

impl ScoredPost {
    /// Widen a normalized post with its sentiment columns
    pub fn from_normalized(post: NormalizedPost, score: f64, label: SentimentLabel) -> Self {
        Self {
            id: post.id,
            title: post.title,
            score: post.score,
            num_comments: post.num_comments,
            created_utc: post.created_utc,
            url: post.url,
            text: post.text,
            comments: post.comments,
            combined_text: post.combined_text,
            cleaned_text: post.cleaned_text,
            sentiment_score: score,
            sentiment_label: label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> RawPost {
        RawPost {
            id: "abc123".to_string(),
            title: "Great new phone!!".to_string(),
            score: 42,
            num_comments: 7,
            created_utc: 1_700_000_000.0,
            url: "https://reddit.com/r/Apple/abc123".to_string(),
            text: "Loving it http://x.co @bob".to_string(),
            comments: String::new(),
        }
    }

    #[test]
    fn test_combined_text_with_comments() {
        let post = sample_post();
        assert_eq!(
            post.combined_text(true),
            "Great new phone!! Loving it http://x.co @bob "
        );
    }

    #[test]
    fn test_combined_text_without_comments() {
        let post = sample_post();
        assert_eq!(
            post.combined_text(false),
            "Great new phone!! Loving it http://x.co @bob"
        );
    }

    #[test]
    fn test_widening_preserves_fields() {
        let raw = sample_post();
        let combined = raw.combined_text(true);
        let normalized =
            NormalizedPost::from_raw(raw.clone(), combined, "great new phone loving".to_string());
        assert_eq!(normalized.id, raw.id);
        assert_eq!(normalized.title, raw.title);

        let scored = ScoredPost::from_normalized(normalized, 0.7, SentimentLabel::Positive);
        assert_eq!(scored.id, raw.id);
        assert_eq!(scored.sentiment_score, 0.7);
    }
}
