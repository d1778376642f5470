//! Scraping building blocks shared by the extraction units
//!
//! This module contains:
//! - HTTP fetching behind the [`Fetcher`] trait
//! - Selector-driven block and field extraction
//! - Domain filters for bulletin and athletics records
//! - Detail link resolution
//! - Concurrent enrichment of calendar events

mod enricher;
mod extractor;
mod fetcher;
mod filter;
mod links;

pub use enricher::enrich;
pub use extractor::{compile_selector, extract_text, BlockExtractor, FieldKind, FieldMap};
pub use fetcher::{build_http_client, Fetcher, HttpFetcher};
pub use filter::{is_complete, CourseBlock, CourseFilter};
pub use links::resolve_detail_link;
