//! # Collect Stage
//!
//! Fetches hot posts (and optionally their top-level comments) from the
//! configured subreddit and writes the raw CSV snapshot.

use crate::api::RedditClient;
use crate::config::{PipelineConfig, RedditCredentials};
use crate::data::storage;
use crate::error::PipelineError;
use crate::pipeline::StageSummary;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Delay between per-post comment requests (milliseconds)
const COMMENT_DELAY_MS: u64 = 1_000;

/// Run the collect stage
///
/// Credentials are validated before any network access; absence of any
/// of the three is fatal for this stage. API failures abort the stage
/// with no output file and no retry.
pub async fn collect(config: &PipelineConfig) -> Result<StageSummary, PipelineError> {
    let credentials = RedditCredentials::from_env()?;
    let client = RedditClient::connect(&credentials).await?;

    info!(
        subreddit = %config.subreddit,
        limit = config.post_limit,
        "fetching hot posts"
    );
    let mut posts = client.fetch_hot_posts(&config.subreddit, config.post_limit).await?;

    if posts.is_empty() {
        warn!("no posts fetched; check the subreddit name and credentials");
    } else if let (Some(first), Some(last)) = (posts.first(), posts.last()) {
        info!(
            from = %first.created_at().to_rfc3339(),
            to = %last.created_at().to_rfc3339(),
            "fetched {} posts",
            posts.len()
        );
    }

    if config.include_comments {
        for post in posts.iter_mut() {
            if post.num_comments == 0 {
                continue;
            }

            let comments = client.fetch_top_comments(&post.id, config.comment_limit).await?;
            post.comments = comments.join(" ");

            sleep(Duration::from_millis(COMMENT_DELAY_MS)).await;
        }
    }

    let output = config.raw_data_path();
    storage::save_records(&output, &posts)?;
    info!(path = ?output, records = posts.len(), "raw snapshot written");

    Ok(StageSummary {
        records: posts.len(),
        output,
    })
}
