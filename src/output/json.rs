//! JSON file output
//!
//! Each unit produces one document of the form
//!
//! ```text
//! {
//!   "courses": [
//!     { "course": "COMP-3155", "title": "Algorithms" }
//!   ]
//! }
//! ```
//!
//! rendered with 2-space indentation. The document is serialized in full,
//! written to a temporary sibling and renamed over the destination.

use crate::output::traits::{OutputResult, OutputTarget, RecordWriter};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, instrument};

/// Renders `{ <collection>: records }` as pretty-printed JSON
pub fn render_collection<T: Serialize>(collection: &str, records: &[T]) -> OutputResult<String> {
    let mut document = Map::new();
    document.insert(collection.to_string(), serde_json::to_value(records)?);

    let mut json = serde_json::to_string_pretty(&Value::Object(document))?;
    json.push('\n');
    Ok(json)
}

/// Writes collections as JSON files inside one directory
#[derive(Debug, Clone)]
pub struct JsonFileWriter {
    directory: PathBuf,
}

impl JsonFileWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Final path of a target's file
    pub fn path_for(&self, target: &OutputTarget) -> PathBuf {
        self.directory.join(&target.file_name)
    }
}

impl RecordWriter for JsonFileWriter {
    #[instrument(level = "debug", skip_all, fields(file = %target.file_name))]
    async fn write<T: Serialize + Sync>(
        &self,
        target: &OutputTarget,
        records: &[T],
    ) -> OutputResult<()> {
        let json = render_collection(&target.collection, records)?;

        fs::create_dir_all(&self.directory).await?;

        let path = self.path_for(target);
        let staging = self.directory.join(format!(".{}.tmp", target.file_name));

        let staged = match fs::write(&staging, json.as_bytes()).await {
            Ok(()) => fs::rename(&staging, &path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = staged {
            let _ = fs::remove_file(&staging).await;
            return Err(e.into());
        }

        debug!(path = %path.display(), records = records.len(), "Wrote JSON");
        Ok(())
    }
}
