//! # Opinion Lexicon
//!
//! General-English opinion lexicon for rule-based polarity scoring.

use std::collections::HashMap;

/// Word-level opinion lexicon
///
/// Contains word-to-score mappings, negation words and intensifier
/// multipliers. Built once and only read afterwards.
pub struct OpinionLexicon {
    /// Word to sentiment score mapping
    words: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// Intensifier words
    intensifiers: HashMap<String, f64>,
}

impl Default for OpinionLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl OpinionLexicon {
    /// Create a lexicon with the default word lists
    pub fn new() -> Self {
        let mut words = HashMap::new();

        // Strongly positive words (0.7 - 1.0)
        let strong_positive = [
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("excellent", 0.8),
            ("fantastic", 0.8),
            ("incredible", 0.85),
            ("outstanding", 0.85),
            ("perfect", 0.9),
            ("wonderful", 0.8),
            ("brilliant", 0.8),
            ("stunning", 0.75),
            ("love", 0.7),
            ("loved", 0.7),
            ("loving", 0.7),
            ("great", 0.7),
            ("best", 0.8),
            ("superb", 0.8),
            ("flawless", 0.85),
            ("beautiful", 0.7),
            ("impressive", 0.7),
            ("delighted", 0.75),
        ];

        // Moderately positive words (0.3 - 0.6)
        let moderate_positive = [
            ("good", 0.5),
            ("nice", 0.45),
            ("cool", 0.4),
            ("happy", 0.5),
            ("glad", 0.45),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("like", 0.35),
            ("liked", 0.35),
            ("likes", 0.35),
            ("solid", 0.4),
            ("smooth", 0.4),
            ("fast", 0.35),
            ("reliable", 0.5),
            ("useful", 0.45),
            ("helpful", 0.5),
            ("recommend", 0.55),
            ("recommended", 0.55),
            ("improved", 0.5),
            ("improvement", 0.45),
            ("better", 0.4),
            ("worth", 0.4),
            ("pleased", 0.5),
            ("satisfied", 0.5),
            ("upgrade", 0.35),
            ("win", 0.5),
            ("works", 0.3),
            ("working", 0.3),
            ("fine", 0.3),
            ("interesting", 0.35),
            ("promising", 0.5),
        ];

        // Strongly negative words (-0.7 to -1.0)
        let strong_negative = [
            ("terrible", -0.8),
            ("horrible", -0.85),
            ("awful", -0.8),
            ("worst", -0.85),
            ("hate", -0.75),
            ("hated", -0.75),
            ("garbage", -0.8),
            ("trash", -0.75),
            ("useless", -0.75),
            ("unusable", -0.8),
            ("disaster", -0.85),
            ("scam", -0.9),
            ("fraud", -0.9),
            ("broken", -0.7),
            ("furious", -0.8),
            ("disgusting", -0.85),
            ("pathetic", -0.75),
            ("dreadful", -0.8),
        ];

        // Moderately negative words (-0.3 to -0.6)
        let moderate_negative = [
            ("bad", -0.5),
            ("poor", -0.5),
            ("worse", -0.5),
            ("slow", -0.35),
            ("buggy", -0.55),
            ("bug", -0.4),
            ("bugs", -0.4),
            ("crash", -0.55),
            ("crashes", -0.55),
            ("crashing", -0.55),
            ("laggy", -0.45),
            ("lag", -0.4),
            ("annoying", -0.5),
            ("disappointing", -0.6),
            ("disappointed", -0.6),
            ("disappointment", -0.6),
            ("problem", -0.4),
            ("problems", -0.4),
            ("issue", -0.35),
            ("issues", -0.35),
            ("fail", -0.55),
            ("failed", -0.55),
            ("failure", -0.55),
            ("overpriced", -0.5),
            ("expensive", -0.35),
            ("ugly", -0.5),
            ("boring", -0.4),
            ("mediocre", -0.45),
            ("regret", -0.55),
            ("waste", -0.55),
            ("wasted", -0.55),
            ("missing", -0.3),
            ("broke", -0.5),
            ("worried", -0.4),
            ("concern", -0.35),
            ("concerns", -0.35),
        ];

        for (word, score) in strong_positive.iter().chain(moderate_positive.iter()) {
            words.insert(word.to_string(), *score);
        }

        for (word, score) in strong_negative.iter().chain(moderate_negative.iter()) {
            words.insert(word.to_string(), *score);
        }

        let negations = vec![
            "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
            "none", "cannot", "cant", "dont", "doesnt", "didnt", "wont",
            "wouldnt", "shouldnt", "couldnt", "isnt", "arent", "wasnt",
            "werent", "hardly", "barely", "scarcely",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let mut intensifiers = HashMap::new();
        intensifiers.insert("very".to_string(), 1.5);
        intensifiers.insert("really".to_string(), 1.4);
        intensifiers.insert("extremely".to_string(), 2.0);
        intensifiers.insert("incredibly".to_string(), 1.7);
        intensifiers.insert("absolutely".to_string(), 1.6);
        intensifiers.insert("totally".to_string(), 1.4);
        intensifiers.insert("completely".to_string(), 1.5);
        intensifiers.insert("highly".to_string(), 1.4);
        intensifiers.insert("quite".to_string(), 1.2);
        intensifiers.insert("somewhat".to_string(), 0.7);
        intensifiers.insert("slightly".to_string(), 0.5);
        intensifiers.insert("marginally".to_string(), 0.5);

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Get the sentiment score of a word
    pub fn get_score(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    /// Check if a word is a negation
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word.to_lowercase())
    }

    /// Get the intensifier multiplier of a word
    pub fn get_intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(&word.to_lowercase()).copied()
    }

    /// Add a custom word to the lexicon
    pub fn add_word(&mut self, word: &str, score: f64) {
        self.words.insert(word.to_lowercase(), score);
    }

    /// Score a text against the lexicon
    ///
    /// Rule-based pass over the tokens:
    /// 1. Look up word scores
    /// 2. Flip the sign of a word following a negation
    /// 3. Scale by a preceding intensifier
    /// The overall score is the mean of the matched word scores, clamped
    /// to [-1.0, 1.0]; a text with no matches scores 0.0.
    pub fn analyze(&self, text: &str) -> LexiconResult {
        let mut scores: Vec<f64> = Vec::new();
        let mut matched_words: Vec<(String, f64)> = Vec::new();

        let mut negate_next = false;
        let mut intensifier: f64 = 1.0;

        for word in text.split_whitespace() {
            let word_lower = word.to_lowercase();

            if self.is_negation(&word_lower) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.get_intensifier(&word_lower) {
                intensifier = mult;
                continue;
            }

            if let Some(mut score) = self.get_score(&word_lower) {
                if negate_next {
                    score = -score;
                    negate_next = false;
                }

                score *= intensifier;
                intensifier = 1.0;

                scores.push(score);
                matched_words.push((word_lower, score));
            } else {
                // Modifiers only reach directly adjacent words
                negate_next = false;
                intensifier = 1.0;
            }
        }

        let score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        LexiconResult {
            score: score.clamp(-1.0, 1.0),
            matched_words,
            word_count: scores.len(),
        }
    }
}

/// Result from lexicon-based scoring
#[derive(Debug, Clone)]
pub struct LexiconResult {
    /// Overall sentiment score (-1 to 1)
    pub score: f64,
    /// Words that matched with their scores
    pub matched_words: Vec<(String, f64)>,
    /// Number of sentiment words found
    pub word_count: usize,
}
