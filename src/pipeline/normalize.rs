//! # Normalize Stage
//!
//! Derives `combined_text` and `cleaned_text` for every raw record and
//! writes the cleaned CSV snapshot.

use crate::config::PipelineConfig;
use crate::data::{storage, NormalizedPost, RawPost};
use crate::error::PipelineError;
use crate::nlp::TextNormalizer;
use crate::pipeline::StageSummary;
use tracing::{debug, info};

/// Run the normalize stage
///
/// Each record is transformed independently; no record is ever dropped,
/// an all-noise text simply normalizes to the empty string.
pub fn normalize(config: &PipelineConfig) -> Result<StageSummary, PipelineError> {
    let input = config.raw_data_path();
    storage::require_input(&input, "collect")?;

    info!(path = ?input, "loading raw snapshot");
    let posts: Vec<RawPost> = storage::load_records(&input)?;

    let normalizer = TextNormalizer::new(&config.normalizer);
    let normalized: Vec<NormalizedPost> = posts
        .into_iter()
        .map(|post| {
            let combined = post.combined_text(config.include_comments);
            let cleaned = normalizer.normalize(&combined);
            NormalizedPost::from_raw(post, combined, cleaned)
        })
        .collect();

    if let Some(first) = normalized.first() {
        debug!(
            combined = %first.combined_text,
            cleaned = %first.cleaned_text,
            "first record preview"
        );
    }

    let output = config.cleaned_data_path();
    storage::save_records(&output, &normalized)?;
    info!(path = ?output, records = normalized.len(), "cleaned snapshot written");

    Ok(StageSummary {
        records: normalized.len(),
        output,
    })
}
