//! # Frequency Aggregation
//!
//! Label counts and per-label word frequencies over the scored snapshot.

use crate::data::ScoredPost;
use crate::sentiment::SentimentLabel;
use std::collections::{HashMap, HashSet};

/// Number of top words per side considered when looking for
/// distinctive vocabulary
const TOP_WORDS_PER_LABEL: usize = 100;

/// Record counts per sentiment label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelCounts {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl LabelCounts {
    /// Tally the labels of a scored snapshot
    pub fn from_posts(posts: &[ScoredPost]) -> Self {
        let mut counts = Self::default();
        for post in posts {
            match post.sentiment_label {
                SentimentLabel::Positive => counts.positive += 1,
                SentimentLabel::Neutral => counts.neutral += 1,
                SentimentLabel::Negative => counts.negative += 1,
            }
        }
        counts
    }

    /// Total number of records
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Count for one label
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }
}

/// Count word occurrences in the cleaned text of posts with a label
pub fn word_frequencies(posts: &[ScoredPost], label: SentimentLabel) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();

    for post in posts.iter().filter(|p| p.sentiment_label == label) {
        for token in post.cleaned_text.split_whitespace() {
            *frequencies.entry(token.to_string()).or_insert(0) += 1;
        }
    }

    frequencies
}

/// Words distinctive to one side of a positive/negative frequency pair
///
/// A word is distinctive if it appears among the top-100 most frequent
/// words of its own side but not among the top-100 of the other side.
/// The returned maps keep the original counts of only those words.
pub fn distinctive_words(
    positive: &HashMap<String, usize>,
    negative: &HashMap<String, usize>,
) -> (HashMap<String, usize>, HashMap<String, usize>) {
    let top_positive = top_word_set(positive, TOP_WORDS_PER_LABEL);
    let top_negative = top_word_set(negative, TOP_WORDS_PER_LABEL);

    let keep = |frequencies: &HashMap<String, usize>, own: &HashSet<String>, other: &HashSet<String>| {
        frequencies
            .iter()
            .filter(|(word, _)| own.contains(word.as_str()) && !other.contains(word.as_str()))
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    };

    (
        keep(positive, &top_positive, &top_negative),
        keep(negative, &top_negative, &top_positive),
    )
}

/// Frequencies sorted by descending count (ties broken alphabetically
/// so the ordering is deterministic)
pub fn sorted_by_count(frequencies: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = frequencies
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

fn top_word_set(frequencies: &HashMap<String, usize>, n: usize) -> HashSet<String> {
    sorted_by_count(frequencies)
        .into_iter()
        .take(n)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NormalizedPost, RawPost};

    fn scored(cleaned: &str, label: SentimentLabel) -> ScoredPost {
        let raw = RawPost {
            id: "x".to_string(),
            title: String::new(),
            score: 0,
            num_comments: 0,
            created_utc: 0.0,
            url: String::new(),
            text: String::new(),
            comments: String::new(),
        };
        let normalized =
            NormalizedPost::from_raw(raw, String::new(), cleaned.to_string());
        ScoredPost::from_normalized(normalized, 0.0, label)
    }

    #[test]
    fn test_label_counts() {
        let posts = vec![
            scored("great phone", SentimentLabel::Positive),
            scored("great battery", SentimentLabel::Positive),
            scored("", SentimentLabel::Neutral),
            scored("terrible screen", SentimentLabel::Negative),
        ];

        let counts = LabelCounts::from_posts(&posts);
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.neutral, 1);
        assert_eq!(counts.negative, 1);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.get(SentimentLabel::Positive), 2);
    }

    #[test]
    fn test_word_frequencies_by_label() {
        let posts = vec![
            scored("great phone great", SentimentLabel::Positive),
            scored("terrible phone", SentimentLabel::Negative),
        ];

        let positive = word_frequencies(&posts, SentimentLabel::Positive);
        assert_eq!(positive.get("great"), Some(&2));
        assert_eq!(positive.get("phone"), Some(&1));
        assert_eq!(positive.get("terrible"), None);
    }

    #[test]
    fn test_distinctive_words() {
        let posts = vec![
            scored("great camera phone", SentimentLabel::Positive),
            scored("terrible battery phone", SentimentLabel::Negative),
        ];

        let positive = word_frequencies(&posts, SentimentLabel::Positive);
        let negative = word_frequencies(&posts, SentimentLabel::Negative);
        let (distinct_positive, distinct_negative) = distinctive_words(&positive, &negative);

        // "phone" is frequent on both sides, so it is distinctive to neither
        assert!(distinct_positive.contains_key("great"));
        assert!(distinct_positive.contains_key("camera"));
        assert!(!distinct_positive.contains_key("phone"));
        assert!(distinct_negative.contains_key("terrible"));
        assert!(!distinct_negative.contains_key("phone"));
    }

    #[test]
    fn test_sorted_by_count_deterministic() {
        let mut frequencies = HashMap::new();
        frequencies.insert("beta".to_string(), 3);
        frequencies.insert("alpha".to_string(), 3);
        frequencies.insert("gamma".to_string(), 5);

        let sorted = sorted_by_count(&frequencies);
        assert_eq!(sorted[0].0, "gamma");
        assert_eq!(sorted[1].0, "alpha");
        assert_eq!(sorted[2].0, "beta");
    }
}
