//! # Data Module
//!
//! Pipeline record types and CSV snapshot storage.

mod record;
pub mod storage;

pub use record::{NormalizedPost, RawPost, ScoredPost};
