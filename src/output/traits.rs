//! Writer trait and associated types
//!
//! This module defines the trait interface for record writers and the
//! errors they report.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Where one unit's collection goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// File name inside the output directory, e.g. `bulletin.json`
    pub file_name: String,

    /// The single top-level key of the document, e.g. `courses`
    pub collection: String,
}

impl OutputTarget {
    pub fn new(file_name: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            collection: collection.into(),
        }
    }
}

/// Trait for record writers
///
/// A write replaces whatever was previously stored for the same target.
/// Implementations must never leave a partially written document behind.
#[allow(async_fn_in_trait)]
pub trait RecordWriter {
    /// Writes `{ <collection>: records }` for the given target
    ///
    /// # Arguments
    ///
    /// * `target` - File name and collection key
    /// * `records` - The records, in output order
    async fn write<T: Serialize + Sync>(
        &self,
        target: &OutputTarget,
        records: &[T],
    ) -> OutputResult<()>;
}
