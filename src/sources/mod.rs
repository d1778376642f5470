//! Extraction units, one per site
//!
//! Each unit follows the same shape: fetch the listing page, extract blocks,
//! filter or enrich them, then hand the collection to a
//! [`RecordWriter`](crate::output::RecordWriter). A failure anywhere in a unit
//! is returned to the caller before anything is written.

mod athletics;
mod bulletin;
mod calendar;

pub use athletics::AthleticsSource;
pub use bulletin::BulletinSource;
pub use calendar::CalendarSource;
