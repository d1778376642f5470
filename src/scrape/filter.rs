//! Record filters applied after extraction
//!
//! Filters are pure predicates; callers apply them with `Iterator::filter`,
//! so document order is preserved.

use crate::models::AthleticEvent;

/// A course block as read from the bulletin, before projection to a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseBlock {
    pub code: String,
    pub title: String,

    /// Auxiliary text (prerequisites, notes) shown under the course
    pub extra: String,
}

/// Keeps courses by code prefix and absence of a marker in their extra text
#[derive(Debug, Clone)]
pub struct CourseFilter {
    code_prefix: String,
    excluded_marker: String,
}

impl CourseFilter {
    pub fn new(code_prefix: impl Into<String>, excluded_marker: impl Into<String>) -> Self {
        Self {
            code_prefix: code_prefix.into(),
            excluded_marker: excluded_marker.into(),
        }
    }

    pub fn keep(&self, block: &CourseBlock) -> bool {
        block.code.starts_with(&self.code_prefix)
            && (self.excluded_marker.is_empty() || !block.extra.contains(&self.excluded_marker))
    }
}

/// True when team, opponent and date are all present
pub fn is_complete(event: &AthleticEvent) -> bool {
    !event.home_team.is_empty() && !event.opponent.is_empty() && !event.date.is_empty()
}
