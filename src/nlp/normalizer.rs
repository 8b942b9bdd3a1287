//! # Text Normalizer
//!
//! Turns raw post text into a bag-of-words string suitable for sentiment
//! scoring and word-frequency aggregation.

use crate::config::NormalizerOptions;
use crate::nlp::stopwords::english_stop_words;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Text normalizer for Reddit post text
///
/// Pure and stateless per call: the regexes and stop-word set are built
/// once and only read afterwards, so one instance can serve any number
/// of records.
pub struct TextNormalizer {
    /// Regex for URL removal (http/https schemes and bare www. hosts)
    url_regex: Regex,
    /// Regex for @mentions and bare # markers
    mention_regex: Regex,
    /// Regex matching every run of non-letter, non-whitespace characters
    non_letter_regex: Regex,
    /// Stop words to remove
    stop_words: HashSet<String>,
    /// Minimum surviving token length
    min_token_len: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(&NormalizerOptions::default())
    }
}

impl TextNormalizer {
    /// Create a normalizer with the given policy
    pub fn new(options: &NormalizerOptions) -> Self {
        Self {
            url_regex: Regex::new(r"http\S+|www\.\S+").unwrap(),
            mention_regex: Regex::new(r"@\w+|#").unwrap(),
            non_letter_regex: Regex::new(r"[^A-Za-z\s]+").unwrap(),
            stop_words: english_stop_words(),
            min_token_len: options.min_token_len.max(1),
        }
    }

    /// Normalize a piece of text into a cleaned bag-of-words string
    ///
    /// Steps, in order:
    /// 1. Unicode normalization (NFC)
    /// 2. Remove URLs
    /// 3. Remove @mentions and # markers (the tag text survives)
    /// 4. Remove everything that is not an ASCII letter or whitespace;
    ///    a removed character becomes nothing, not a space
    /// 5. Lowercase
    /// 6. Tokenize on whitespace
    /// 7. Drop stop words (and tokens under the configured length floor)
    /// 8. Rejoin surviving tokens with single spaces
    ///
    /// The result may be empty if every token was removed.
    pub fn normalize(&self, text: &str) -> String {
        let nfc: String = text.nfc().collect();

        let no_urls = self.url_regex.replace_all(&nfc, "");
        let no_mentions = self.mention_regex.replace_all(&no_urls, "");
        let letters_only = self.non_letter_regex.replace_all(&no_mentions, "");
        let lowercase = letters_only.to_lowercase();

        lowercase
            .split_whitespace()
            .filter(|token| token.len() >= self.min_token_len)
            .filter(|token| !self.stop_words.contains(*token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalize an optional field; a missing value yields the empty
    /// string rather than an error.
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        match text {
            Some(text) => self.normalize(text),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> TextNormalizer {
        TextNormalizer::default()
    }

    #[test]
    fn test_missing_input_yields_empty() {
        assert_eq!(normalizer().normalize_opt(None), "");
        assert_eq!(normalizer().normalize_opt(Some("")), "");
    }

    #[test]
    fn test_urls_removed() {
        let n = normalizer();
        for text in [
            "check https://example.com/page now",
            "check http://x.co now",
            "check www.example.com now",
        ] {
            let cleaned = n.normalize(text);
            assert!(!cleaned.contains("http"), "{cleaned:?}");
            assert!(!cleaned.contains("www"), "{cleaned:?}");
            assert_eq!(cleaned, "check now");
        }
    }

    #[test]
    fn test_mentions_removed_hashtag_text_kept() {
        let n = normalizer();
        assert_eq!(n.normalize("thanks @bob for #apple news"), "thanks apple news");
    }

    #[test]
    fn test_only_letters_and_single_spaces() {
        let n = normalizer();
        let cleaned = n.normalize("Wow!!  42% gains...   much $$$ profit");
        assert!(cleaned
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == ' '));
        assert!(!cleaned.contains("  "));
        assert!(!cleaned.starts_with(' '));
        assert!(!cleaned.ends_with(' '));
    }

    #[test]
    fn test_removed_characters_do_not_split_words() {
        // a removed character becomes nothing, not a space
        let n = normalizer();
        assert_eq!(n.normalize("abc123def"), "abcdef");
        assert_eq!(n.normalize("don't"), "dont");
    }

    #[test]
    fn test_stop_words_removed() {
        let n = normalizer();
        assert_eq!(n.normalize("the a is of"), "");
        assert_eq!(n.normalize("the phone is great"), "phone great");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let n = normalizer();
        let clean = "great phone camera battery";
        assert_eq!(n.normalize(clean), clean);
    }

    #[test]
    fn test_end_to_end_example() {
        let n = normalizer();
        let cleaned = n.normalize("Great new phone!! Loving it http://x.co @bob ");

        for token in cleaned.split_whitespace() {
            assert!(
                ["great", "new", "phone", "loving"].contains(&token),
                "unexpected token {token:?}"
            );
        }
        for excluded in ["http", "x", "co", "bob"] {
            assert!(!cleaned.split_whitespace().any(|t| t == excluded));
        }
    }

    #[test]
    fn test_min_token_len_variant() {
        let n = TextNormalizer::new(&NormalizerOptions { min_token_len: 3 });
        // "ox" falls under the length-3 floor, "fast" survives
        assert_eq!(n.normalize("ox runs fast"), "runs fast");

        // default policy keeps short tokens
        assert_eq!(normalizer().normalize("ox runs fast"), "ox runs fast");
    }
}
