//! # Reddit Sentiment Pipeline
//!
//! Batch sentiment analysis for Reddit posts: collect hot posts from a
//! subreddit, normalize their text into bags of words, score polarity
//! against an opinion lexicon and render distribution charts. Stages
//! hand off through CSV snapshot files and are individually rerunnable.
//!
//! ## Modules
//!
//! - `api` - Reddit OAuth API client
//! - `config` - pipeline configuration and credentials
//! - `data` - record types and CSV snapshot storage
//! - `error` - stage error taxonomy
//! - `nlp` - text normalization
//! - `sentiment` - opinion lexicon, polarity scorers, labels
//! - `pipeline` - the four stage entry points and the runner
//! - `report` - aggregation and chart rendering
//!
//! ## Example
//!
//! ```
//! use reddit_sentiment::{LexiconScorer, PolarityScorer, SentimentLabel, TextNormalizer};
//!
//! let normalizer = TextNormalizer::default();
//! let scorer = LexiconScorer::new();
//!
//! let cleaned = normalizer.normalize("Great new phone!! Loving it http://x.co @bob");
//! let score = scorer.polarity(&cleaned);
//!
//! assert_eq!(SentimentLabel::from_score(score), SentimentLabel::Positive);
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod report;
pub mod sentiment;

// Re-exports for convenience
pub use api::{RedditClient, RedditError};
pub use config::{NormalizerOptions, PipelineConfig, RedditCredentials};
pub use data::{NormalizedPost, RawPost, ScoredPost};
pub use error::PipelineError;
pub use nlp::TextNormalizer;
pub use pipeline::{run_pipeline, StageSummary};
pub use report::LabelCounts;
pub use sentiment::{LexiconScorer, OpinionLexicon, PolarityScorer, SentimentLabel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
