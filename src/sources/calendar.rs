//! Events calendar unit
//!
//! The listing page gives title, date, optional time and a link to a detail
//! page. Descriptions come from those detail pages through
//! [`enrich`](crate::scrape::enrich); nothing is written until that batch
//! has settled.

use crate::config::CalendarConfig;
use crate::models::{CalendarEvent, PendingEvent};
use crate::output::{OutputTarget, RecordWriter};
use crate::scrape::{compile_selector, enrich, resolve_detail_link, BlockExtractor, Fetcher};
use crate::{ConfigError, Result};
use scraper::Selector;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct CalendarSource {
    url: String,
    link_base: String,
    target: OutputTarget,
    extractor: BlockExtractor,
    description: Selector,
    max_in_flight: usize,
}

impl CalendarSource {
    pub fn new(
        config: &CalendarConfig,
        max_in_flight: usize,
    ) -> std::result::Result<Self, ConfigError> {
        let extractor = BlockExtractor::new(&config.block)?
            .text_field("title", &config.title)?
            .text_field("date", &config.date)?
            .text_field("time", &config.time)?
            .attr_field("link", &config.link, "href")?;

        Ok(Self {
            url: config.url.clone(),
            link_base: config.link_base.clone(),
            target: OutputTarget::new(&config.file_name, &config.collection),
            extractor,
            description: compile_selector(&config.description)?,
            max_in_flight,
        })
    }

    /// Extracts listing entries with their resolved detail links
    pub fn parse(&self, html: &str) -> Vec<PendingEvent> {
        self.extractor
            .extract(html)
            .into_iter()
            .map(|mut fields| {
                let time = Some(fields.take("time")).filter(|t| !t.is_empty());
                let detail_url = resolve_detail_link(fields.get("link"), &self.link_base);
                PendingEvent::new(
                    CalendarEvent {
                        title: fields.take("title"),
                        date: fields.take("date"),
                        time,
                        description: None,
                    },
                    detail_url,
                )
            })
            .collect()
    }

    /// Fetches the listing, enriches every event and writes the collection
    #[instrument(level = "info", name = "calendar", skip_all, fields(url = %self.url))]
    pub async fn harvest<F: Fetcher, W: RecordWriter>(
        &self,
        fetcher: &F,
        writer: &W,
    ) -> Result<usize> {
        let html = fetcher.fetch(&self.url).await?;
        let pending = self.parse(&html);
        info!(events = pending.len(), "Found calendar events");

        let events = enrich(fetcher, pending, &self.description, self.max_in_flight).await;

        writer.write(&self.target, &events).await?;
        info!(
            events = events.len(),
            file = %self.target.file_name,
            "DU Calendar events data saved successfully"
        );
        Ok(events.len())
    }
}
