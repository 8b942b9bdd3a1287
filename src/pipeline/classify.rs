//! # Classify Stage
//!
//! Scores every cleaned text with the injected polarity estimator,
//! assigns the categorical label and writes the scored CSV snapshot.

use crate::config::PipelineConfig;
use crate::data::{storage, NormalizedPost, ScoredPost};
use crate::error::PipelineError;
use crate::pipeline::StageSummary;
use crate::report::LabelCounts;
use crate::sentiment::{PolarityScorer, SentimentLabel};
use tracing::info;

/// Run the classify stage
///
/// Records with empty `cleaned_text` are kept and score exactly 0.0 /
/// Neutral. The estimator is injected so tests can pin the threshold
/// behavior with a constant scorer.
pub fn classify(
    config: &PipelineConfig,
    scorer: &dyn PolarityScorer,
) -> Result<StageSummary, PipelineError> {
    let input = config.cleaned_data_path();
    storage::require_input(&input, "normalize")?;

    info!(path = ?input, "loading cleaned snapshot");
    let posts: Vec<NormalizedPost> = storage::load_records(&input)?;

    let scored: Vec<ScoredPost> = posts
        .into_iter()
        .map(|post| {
            let score = scorer.polarity(&post.cleaned_text);
            let label = SentimentLabel::from_score(score);
            ScoredPost::from_normalized(post, score, label)
        })
        .collect();

    let counts = LabelCounts::from_posts(&scored);
    info!(
        positive = counts.positive,
        neutral = counts.neutral,
        negative = counts.negative,
        "sentiment distribution"
    );

    let output = config.sentiment_data_path();
    storage::save_records(&output, &scored)?;
    info!(path = ?output, records = scored.len(), "scored snapshot written");

    Ok(StageSummary {
        records: scored.len(),
        output,
    })
}
