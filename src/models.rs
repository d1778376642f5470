//! Records produced by the three extraction units
//!
//! Field names on the wire follow the JSON documents downstream consumers
//! already read (`course`, `duTeam`), hence the serde renames.

use serde::Serialize;

/// A course from the bulletin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    /// Course code, e.g. `COMP-3155`
    #[serde(rename = "course")]
    pub code: String,

    /// Course title with the code stripped off
    pub title: String,
}

/// An upcoming athletics fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleticEvent {
    /// The DU team playing
    #[serde(rename = "duTeam")]
    pub home_team: String,

    pub opponent: String,

    /// Free text, exactly as the site prints it
    pub date: String,
}

/// A calendar event as persisted
///
/// Has no link field; the detail link only lives on [`PendingEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,

    pub date: String,

    /// `null` in the output when the listing shows no time
    pub time: Option<String>,

    /// Only present when a detail page was fetched successfully
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A calendar event awaiting enrichment, carrying its transient detail link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEvent {
    pub event: CalendarEvent,

    /// Absolute URL of the detail page, if the listing linked one
    pub detail_url: Option<String>,
}

impl PendingEvent {
    pub fn new(event: CalendarEvent, detail_url: Option<String>) -> Self {
        Self { event, detail_url }
    }
}
