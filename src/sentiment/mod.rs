//! # Sentiment Module
//!
//! Lexicon, polarity scorers and the score-to-label mapping.

mod label;
mod lexicon;
mod scorer;

pub use label::SentimentLabel;
pub use lexicon::{LexiconResult, OpinionLexicon};
pub use scorer::{LexiconScorer, PolarityScorer};
