//! Lesson completion tracking and course progress.

mod aggregator;
mod error;
mod repository;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::{ProgressAggregator, percent};
pub use error::ProgressError;
pub use repository::{CompletionRepository, DEFAULT_KEY_PREFIX, FileRepository, MemoryRepository};
pub use types::CompletionRecord;
