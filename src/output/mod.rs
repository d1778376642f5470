//! Output module for persisting extracted collections
//!
//! This module handles:
//! - Rendering collections as single-key JSON documents
//! - Writing them into the output directory
//! - Holding them in memory when no filesystem should be touched

mod json;
mod memory;
mod traits;

pub use json::{render_collection, JsonFileWriter};
pub use memory::MemoryWriter;
pub use traits::{OutputError, OutputResult, OutputTarget, RecordWriter};
