//! # Pipeline Configuration
//!
//! Explicit configuration passed by reference into every stage entry
//! point. File names are derived from the target subreddit so that runs
//! against different subreddits never clobber each other's snapshots.

use crate::error::PipelineError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Raw posts fetched from Reddit
pub const RAW_DATA_FILENAME: &str = "reddit_data.csv";

/// Data after cleaning and normalization
pub const CLEANED_DATA_FILENAME: &str = "reddit_data_cleaned.csv";

/// Final data with sentiment scores and labels
pub const SENTIMENT_DATA_FILENAME: &str = "reddit_data_with_sentiments.csv";

/// Options controlling the text normalizer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Minimum surviving token length. The default of 1 keeps every
    /// non-stop-word token; setting 3 selects the variant that also
    /// drops tokens of length <= 2.
    pub min_token_len: usize,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self { min_token_len: 1 }
    }
}

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Subreddit to analyze (without the `r/` prefix)
    pub subreddit: String,
    /// Number of hot posts to fetch
    pub post_limit: usize,
    /// Top-level comments to keep per post
    pub comment_limit: usize,
    /// Whether comments are fetched and fed into `combined_text`
    pub include_comments: bool,
    /// Directory for CSV snapshots
    pub data_dir: PathBuf,
    /// Directory for rendered chart images
    pub visualizations_dir: PathBuf,
    /// Normalizer policy
    pub normalizer: NormalizerOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_subreddit("Apple")
    }
}

impl PipelineConfig {
    /// Create a configuration with directories derived from the subreddit
    pub fn for_subreddit(subreddit: impl Into<String>) -> Self {
        let subreddit = subreddit.into();
        Self {
            data_dir: PathBuf::from(format!("data_{}", subreddit)),
            visualizations_dir: PathBuf::from(format!("visualizations_{}", subreddit)),
            subreddit,
            post_limit: 2000,
            comment_limit: 10,
            include_comments: true,
            normalizer: NormalizerOptions::default(),
        }
    }

    /// Retarget the configuration at another subreddit, rederiving the
    /// data and visualization directories while keeping limits and
    /// normalizer policy.
    pub fn with_subreddit(mut self, subreddit: impl Into<String>) -> Self {
        let subreddit = subreddit.into();
        self.data_dir = PathBuf::from(format!("data_{}", subreddit));
        self.visualizations_dir = PathBuf::from(format!("visualizations_{}", subreddit));
        self.subreddit = subreddit;
        self
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: PipelineConfig =
            toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load from a file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Path of the Collector output
    pub fn raw_data_path(&self) -> PathBuf {
        self.data_dir.join(RAW_DATA_FILENAME)
    }

    /// Path of the Normalizer output
    pub fn cleaned_data_path(&self) -> PathBuf {
        self.data_dir.join(CLEANED_DATA_FILENAME)
    }

    /// Path of the Classifier output
    pub fn sentiment_data_path(&self) -> PathBuf {
        self.data_dir.join(SENTIMENT_DATA_FILENAME)
    }
}

/// Reddit API credentials, supplied via the environment
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl RedditCredentials {
    /// Read credentials from `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`
    /// and `REDDIT_USER_AGENT`, loading a `.env` file first if present.
    ///
    /// Absence of any of the three is fatal for the collect stage and is
    /// reported before any network access.
    pub fn from_env() -> Result<Self, PipelineError> {
        dotenv::dotenv().ok();

        let var = |name: &str| {
            std::env::var(name).map_err(|_| PipelineError::Credentials(name.to_string()))
        };

        Ok(Self {
            client_id: var("REDDIT_CLIENT_ID")?,
            client_secret: var("REDDIT_CLIENT_SECRET")?,
            user_agent: var("REDDIT_USER_AGENT")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.subreddit, "Apple");
        assert_eq!(config.data_dir, PathBuf::from("data_Apple"));
        assert_eq!(config.normalizer.min_token_len, 1);
    }

    #[test]
    fn test_paths_derived_from_subreddit() {
        let config = PipelineConfig::for_subreddit("rust");
        assert_eq!(config.raw_data_path(), PathBuf::from("data_rust/reddit_data.csv"));
        assert_eq!(
            config.sentiment_data_path(),
            PathBuf::from("data_rust/reddit_data_with_sentiments.csv")
        );
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
subreddit = "rust"
post_limit = 100
comment_limit = 5
include_comments = false
data_dir = "data_rust"
visualizations_dir = "visualizations_rust"

[normalizer]
min_token_len = 3
        "#
        )
        .unwrap();

        let config = PipelineConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.subreddit, "rust");
        assert_eq!(config.post_limit, 100);
        assert!(!config.include_comments);
        assert_eq!(config.normalizer.min_token_len, 3);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = PipelineConfig::load_or_default("no_such_config.toml").unwrap();
        assert_eq!(config.subreddit, "Apple");
    }
}
