//! # Reddit API Client
//!
//! Read-only client for the Reddit OAuth API. Authenticates with
//! application-only credentials, then fetches hot posts from a subreddit
//! and optionally the top-level comments of each post.

use crate::config::RedditCredentials;
use crate::data::RawPost;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;

/// Token endpoint (pre-auth, basic credentials)
const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Authenticated API base URL
const REDDIT_OAUTH_URL: &str = "https://oauth.reddit.com";

/// Rate limit delay between requests (milliseconds)
const RATE_LIMIT_DELAY_MS: u64 = 1_000;

/// Maximum posts per listing request
const MAX_POSTS_PER_REQUEST: usize = 100;

/// Errors that can occur when using the Reddit API
#[derive(Error, Debug)]
pub enum RedditError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("authentication failed with status {0}")]
    AuthFailed(u16),

    #[error("API returned status {0}")]
    ApiStatus(u16),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// OAuth token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

/// Listing envelope: `{"kind": "Listing", "data": {...}}`
#[derive(Debug, Deserialize)]
struct Listing<T> {
    data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
struct ListingData<T> {
    children: Vec<Thing<T>>,
    after: Option<String>,
}

/// Typed thing wrapper: `{"kind": "t3", "data": {...}}`
#[derive(Debug, Deserialize)]
struct Thing<T> {
    data: T,
}

/// Post fields of interest (kind `t3`)
#[derive(Debug, Deserialize)]
struct PostData {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    score: i64,
    #[serde(default)]
    num_comments: u64,
    #[serde(default)]
    created_utc: f64,
    #[serde(default)]
    url: String,
    #[serde(default)]
    selftext: String,
}

/// Comment fields of interest (kind `t1`)
#[derive(Debug, Deserialize)]
struct CommentData {
    #[serde(default)]
    body: String,
}

/// Reddit API client
pub struct RedditClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl RedditClient {
    /// Authenticate with application-only credentials
    ///
    /// Performs the `client_credentials` grant against the token
    /// endpoint. No network access happens before this call, so missing
    /// credentials are caught upstream without touching the API.
    pub async fn connect(credentials: &RedditCredentials) -> Result<Self, RedditError> {
        let client = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .timeout(Duration::from_secs(30))
            .build()?;

        let response = client
            .post(REDDIT_TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::AuthFailed(response.status().as_u16()));
        }

        let token: TokenResponse = response.json().await?;

        if let Some(error) = token.error {
            return Err(RedditError::InvalidResponse(format!("token error: {error}")));
        }

        let access_token = token
            .access_token
            .ok_or_else(|| RedditError::InvalidResponse("no access_token in response".to_string()))?;

        Ok(Self {
            client,
            token: access_token,
            base_url: REDDIT_OAUTH_URL.to_string(),
        })
    }

    /// Fetch up to `limit` hot posts from a subreddit
    ///
    /// Pages through the listing with the `after` cursor, 100 posts per
    /// request, sleeping between requests to respect the rate limit.
    /// Returned posts have an empty `comments` column.
    pub async fn fetch_hot_posts(
        &self,
        subreddit: &str,
        limit: usize,
    ) -> Result<Vec<RawPost>, RedditError> {
        let mut posts = Vec::new();
        let mut after: Option<String> = None;

        while posts.len() < limit {
            let batch = (limit - posts.len()).min(MAX_POSTS_PER_REQUEST);
            let mut url = format!(
                "{}/r/{}/hot?limit={}&raw_json=1",
                self.base_url, subreddit, batch
            );
            if let Some(cursor) = &after {
                url.push_str(&format!("&after={cursor}"));
            }

            let listing: Listing<PostData> = self.get_json(&url).await?;

            if listing.data.children.is_empty() {
                break;
            }

            for child in listing.data.children {
                posts.push(RawPost {
                    id: child.data.id,
                    title: child.data.title,
                    score: child.data.score,
                    num_comments: child.data.num_comments,
                    created_utc: child.data.created_utc,
                    url: child.data.url,
                    text: child.data.selftext,
                    comments: String::new(),
                });
            }

            after = listing.data.after;
            if after.is_none() {
                break;
            }

            sleep(Duration::from_millis(RATE_LIMIT_DELAY_MS)).await;
        }

        posts.truncate(limit);
        Ok(posts)
    }

    /// Fetch up to `limit` top-level comment bodies for a post
    pub async fn fetch_top_comments(
        &self,
        post_id: &str,
        limit: usize,
    ) -> Result<Vec<String>, RedditError> {
        let url = format!(
            "{}/comments/{}?limit={}&depth=1&raw_json=1",
            self.base_url, post_id, limit
        );

        // The comments endpoint returns a two-element array: the post
        // listing, then the comment listing.
        let listings: Vec<Listing<CommentData>> = self.get_json(&url).await?;

        let comments = listings
            .into_iter()
            .nth(1)
            .ok_or_else(|| RedditError::InvalidResponse("no comment listing".to_string()))?
            .data
            .children
            .into_iter()
            .map(|c| c.data.body)
            .filter(|body| !body.is_empty())
            .take(limit)
            .collect();

        Ok(comments)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, RedditError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RedditError::ApiStatus(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserialization() {
        let payload = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t3", "data": {
                        "id": "abc123",
                        "title": "Great new phone!!",
                        "score": 42,
                        "num_comments": 7,
                        "created_utc": 1700000000.0,
                        "url": "https://reddit.com/r/Apple/abc123",
                        "selftext": "Loving it"
                    }}
                ],
                "after": "t3_abc123"
            }
        }"#;

        let listing: Listing<PostData> = serde_json::from_str(payload).unwrap();
        assert_eq!(listing.data.children.len(), 1);
        assert_eq!(listing.data.children[0].data.id, "abc123");
        assert_eq!(listing.data.after.as_deref(), Some("t3_abc123"));
    }

    #[test]
    fn test_post_data_missing_fields_default() {
        let payload = r#"{"id": "xyz"}"#;
        let post: PostData = serde_json::from_str(payload).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.selftext, "");
        assert_eq!(post.score, 0);
    }

    #[test]
    fn test_token_error_deserialization() {
        let payload = r#"{"error": "invalid_grant"}"#;
        let token: TokenResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(token.error.as_deref(), Some("invalid_grant"));
        assert!(token.access_token.is_none());
    }
}
