//! # Report Stage
//!
//! Aggregates the scored snapshot and renders the distribution charts
//! and per-sentiment word images.

use crate::config::PipelineConfig;
use crate::data::{storage, ScoredPost};
use crate::error::PipelineError;
use crate::pipeline::StageSummary;
use crate::report::charts;
use crate::report::{distinctive_words, word_frequencies, LabelCounts};
use crate::sentiment::SentimentLabel;
use tracing::{info, warn};

/// Run the report stage
///
/// Creates the output directory if absent. A sentiment side with no
/// distinctive words skips its word image with a log line; that is not
/// an error.
pub fn report(config: &PipelineConfig) -> Result<StageSummary, PipelineError> {
    let input = config.sentiment_data_path();
    storage::require_input(&input, "classify")?;

    info!(path = ?input, "loading scored snapshot");
    let posts: Vec<ScoredPost> = storage::load_records(&input)?;

    std::fs::create_dir_all(&config.visualizations_dir)?;

    let counts = LabelCounts::from_posts(&posts);
    if counts.total() == 0 {
        warn!("scored snapshot is empty; nothing to render");
        return Ok(StageSummary {
            records: 0,
            output: config.visualizations_dir.clone(),
        });
    }

    let bar_path = config.visualizations_dir.join("sentiment_distribution_bar.png");
    charts::render_bar_chart(&counts, &bar_path, &config.subreddit)?;
    info!(path = ?bar_path, "bar chart written");

    let pie_path = config.visualizations_dir.join("sentiment_distribution_pie.png");
    charts::render_pie_chart(&counts, &pie_path, &config.subreddit)?;
    info!(path = ?pie_path, "pie chart written");

    let positive = word_frequencies(&posts, SentimentLabel::Positive);
    let negative = word_frequencies(&posts, SentimentLabel::Negative);
    let (distinct_positive, distinct_negative) = distinctive_words(&positive, &negative);

    if distinct_positive.is_empty() {
        info!("no distinctive positive words; skipping positive word image");
    } else {
        let path = config.visualizations_dir.join("words_positive.png");
        charts::render_word_image(
            &distinct_positive,
            &path,
            "Distinctive Words in Positive Posts",
            charts::positive_word_color(),
        )?;
        info!(path = ?path, "positive word image written");
    }

    if distinct_negative.is_empty() {
        info!("no distinctive negative words; skipping negative word image");
    } else {
        let path = config.visualizations_dir.join("words_negative.png");
        charts::render_word_image(
            &distinct_negative,
            &path,
            "Distinctive Words in Negative Posts",
            charts::negative_word_color(),
        )?;
        info!(path = ?path, "negative word image written");
    }

    Ok(StageSummary {
        records: posts.len(),
        output: config.visualizations_dir.clone(),
    })
}
