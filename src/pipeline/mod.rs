//! # Pipeline Module
//!
//! The four stage entry points and the runner that sequences them.
//! Every stage takes the configuration by reference and returns an
//! explicit `Result` the runner inspects; a missing input file is a
//! typed error naming the upstream stage, never a silent return.

mod classify;
mod collect;
mod normalize;
mod report;

pub use classify::classify;
pub use collect::collect;
pub use normalize::normalize;
pub use report::report;

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::sentiment::LexiconScorer;
use std::path::PathBuf;
use tracing::info;

/// What a stage produced
#[derive(Debug, Clone)]
pub struct StageSummary {
    /// Number of records processed
    pub records: usize,
    /// File or directory the stage wrote
    pub output: PathBuf,
}

fn banner(step: usize, total: usize, name: &str) {
    println!("\n[Step {step}/{total}] Running {name}...");
}

/// Run the full pipeline: collect -> normalize -> classify -> report
///
/// Stages run strictly in sequence; the first failing stage aborts the
/// run and its error is returned to the caller.
pub async fn run_pipeline(config: &PipelineConfig) -> Result<(), PipelineError> {
    println!("{}", "=".repeat(50));
    println!("STARTING SENTIMENT ANALYSIS PIPELINE");
    println!("{}", "=".repeat(50));

    banner(1, 4, "Collector");
    let summary = collect(config).await?;
    info!(records = summary.records, "collect stage complete");

    banner(2, 4, "Normalizer");
    let summary = normalize(config)?;
    info!(records = summary.records, "normalize stage complete");

    banner(3, 4, "Classifier");
    let scorer = LexiconScorer::new();
    let summary = classify(config, &scorer)?;
    info!(records = summary.records, "classify stage complete");

    banner(4, 4, "Reporter");
    let summary = report(config)?;
    info!(records = summary.records, "report stage complete");

    println!("\n{}", "=".repeat(50));
    println!("PIPELINE COMPLETED SUCCESSFULLY");
    println!("{}", "=".repeat(50));

    Ok(())
}
