//! # Report Module
//!
//! Aggregation and chart rendering over the scored snapshot.

pub mod charts;
mod frequency;

pub use frequency::{distinctive_words, sorted_by_count, word_frequencies, LabelCounts};
