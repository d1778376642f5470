//! Calendar event enrichment
//!
//! Every event that links a detail page gets one secondary fetch whose page
//! supplies the description. Fetches run concurrently, capped at
//! `max_in_flight`, and settle independently: a failed branch only leaves its
//! own event without a description. The batch returns once every branch has
//! settled, with events back in their original order.

use crate::models::{CalendarEvent, PendingEvent};
use crate::scrape::extractor::extract_text;
use crate::scrape::fetcher::Fetcher;
use futures::stream::{self, StreamExt};
use scraper::Selector;
use tracing::{debug, info, instrument, warn};

/// How a single enrichment branch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BranchOutcome {
    Enriched,
    Failed,
    NoLink,
}

/// Adds descriptions to events from their detail pages
///
/// # Arguments
///
/// * `fetcher` - Source for the detail pages
/// * `pending` - Events in document order, each with an optional detail link
/// * `description` - Selector applied to each detail page
/// * `max_in_flight` - Upper bound on concurrent detail fetches (at least 1)
///
/// # Returns
///
/// One [`CalendarEvent`] per input, in input order. Detail links are dropped.
#[instrument(level = "info", skip_all, fields(events = pending.len()))]
pub async fn enrich<F: Fetcher>(
    fetcher: &F,
    pending: Vec<PendingEvent>,
    description: &Selector,
    max_in_flight: usize,
) -> Vec<CalendarEvent> {
    let mut settled: Vec<(usize, CalendarEvent, BranchOutcome)> =
        stream::iter(pending.into_iter().enumerate())
            .map(|(index, pending)| async move {
                let (event, outcome) = enrich_one(fetcher, pending, description).await;
                (index, event, outcome)
            })
            .buffer_unordered(max_in_flight.max(1))
            .collect()
            .await;

    settled.sort_by_key(|(index, _, _)| *index);

    let count = |wanted: BranchOutcome| settled.iter().filter(|(_, _, o)| *o == wanted).count();
    info!(
        enriched = count(BranchOutcome::Enriched),
        failed = count(BranchOutcome::Failed),
        without_link = count(BranchOutcome::NoLink),
        "Enrichment batch settled"
    );

    settled.into_iter().map(|(_, event, _)| event).collect()
}

async fn enrich_one<F: Fetcher>(
    fetcher: &F,
    pending: PendingEvent,
    description: &Selector,
) -> (CalendarEvent, BranchOutcome) {
    let PendingEvent {
        mut event,
        detail_url,
    } = pending;

    let Some(url) = detail_url else {
        return (event, BranchOutcome::NoLink);
    };

    match fetcher.fetch(&url).await {
        Ok(html) => {
            event.description = Some(extract_text(&html, description));
            debug!(title = %event.title, %url, "Fetched event description");
            (event, BranchOutcome::Enriched)
        }
        Err(e) => {
            warn!(title = %event.title, error = %e, "Error fetching event description");
            (event, BranchOutcome::Failed)
        }
    }
}
