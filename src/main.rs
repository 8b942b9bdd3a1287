//! CLI for the Reddit sentiment pipeline
//!
//! ```bash
//! cargo run -- run --subreddit Apple
//! cargo run -- normalize
//! cargo run -- analyze --text "Great new phone!"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use reddit_sentiment::data::storage;
use reddit_sentiment::pipeline;
use reddit_sentiment::sentiment::{LexiconScorer, PolarityScorer, SentimentLabel};
use reddit_sentiment::{PipelineConfig, ScoredPost, TextNormalizer};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "reddit_sentiment")]
#[command(version)]
#[command(about = "Batch sentiment analysis pipeline for Reddit posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "pipeline.toml")]
    config: PathBuf,

    /// Subreddit override (rederives the data directories)
    #[arg(short, long, global = true)]
    subreddit: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: collect, normalize, classify, report
    Run,

    /// Fetch hot posts from Reddit and write the raw snapshot
    Collect,

    /// Clean and tokenize the raw snapshot
    Normalize,

    /// Score sentiment over the cleaned snapshot
    Classify {
        /// Also export the scored snapshot as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Render distribution charts and word images
    Report,

    /// Normalize and score a single piece of text
    Analyze {
        /// Text to analyze
        #[arg(short, long)]
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli.log_level.parse().unwrap_or(Level::INFO);
    FmtSubscriber::builder().with_max_level(level).init();

    let mut config = PipelineConfig::load_or_default(&cli.config)?;
    if let Some(subreddit) = cli.subreddit {
        config = config.with_subreddit(subreddit);
    }

    match cli.command {
        Commands::Run => {
            pipeline::run_pipeline(&config).await?;
        }

        Commands::Collect => {
            let summary = pipeline::collect(&config).await?;
            println!("Fetched {} posts into {:?}", summary.records, summary.output);
        }

        Commands::Normalize => {
            let summary = pipeline::normalize(&config)?;
            println!(
                "Normalized {} posts into {:?}",
                summary.records, summary.output
            );
        }

        Commands::Classify { json } => {
            let scorer = LexiconScorer::new();
            let summary = pipeline::classify(&config, &scorer)?;
            println!("Scored {} posts into {:?}", summary.records, summary.output);

            if let Some(path) = json {
                let scored: Vec<ScoredPost> = storage::load_records(&summary.output)?;
                storage::export_json(&path, &scored)?;
                println!("Exported JSON to {path:?}");
            }
        }

        Commands::Report => {
            let summary = pipeline::report(&config)?;
            println!(
                "Rendered charts for {} posts into {:?}",
                summary.records, summary.output
            );
        }

        Commands::Analyze { text } => {
            let normalizer = TextNormalizer::new(&config.normalizer);
            let scorer = LexiconScorer::new();

            let cleaned = normalizer.normalize(&text);
            let score = scorer.polarity(&cleaned);
            let label = SentimentLabel::from_score(score);

            println!("\nText Analysis");
            println!("=============");
            println!("Original: {text}");
            println!("Cleaned:  {cleaned}");
            println!("Score:    {score:.4}");
            println!("Label:    {label}");
        }
    }

    Ok(())
}
