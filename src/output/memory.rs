//! In-memory writer
//!
//! Keeps rendered documents keyed by file name. Used wherever a run should
//! not touch the filesystem.

use crate::output::json::render_collection;
use crate::output::traits::{OutputResult, OutputTarget, RecordWriter};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryWriter {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered JSON last written under `file_name`
    pub fn document(&self, file_name: &str) -> Option<String> {
        self.lock().get(file_name).cloned()
    }

    /// The last document under `file_name`, parsed
    pub fn json(&self, file_name: &str) -> Option<serde_json::Value> {
        self.document(file_name)
            .and_then(|doc| serde_json::from_str(&doc).ok())
    }

    /// File names written so far, sorted
    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds complete documents
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RecordWriter for MemoryWriter {
    async fn write<T: Serialize + Sync>(
        &self,
        target: &OutputTarget,
        records: &[T],
    ) -> OutputResult<()> {
        let json = render_collection(&target.collection, records)?;
        self.lock().insert(target.file_name.clone(), json);
        Ok(())
    }
}
