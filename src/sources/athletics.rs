//! Athletics schedule unit

use crate::config::AthleticsConfig;
use crate::models::AthleticEvent;
use crate::output::{OutputTarget, RecordWriter};
use crate::scrape::{is_complete, BlockExtractor, Fetcher};
use crate::{ConfigError, Result};
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct AthleticsSource {
    url: String,
    target: OutputTarget,
    extractor: BlockExtractor,
}

impl AthleticsSource {
    pub fn new(config: &AthleticsConfig) -> std::result::Result<Self, ConfigError> {
        let extractor = BlockExtractor::new(&config.block)?
            .text_field("home_team", &config.home_team)?
            .text_field("opponent", &config.opponent)?
            .text_field("date", &config.date)?;

        Ok(Self {
            url: config.url.clone(),
            target: OutputTarget::new(&config.file_name, &config.collection),
            extractor,
        })
    }

    /// Extracts complete fixtures from the schedule page
    pub fn parse(&self, html: &str) -> Vec<AthleticEvent> {
        let blocks = self.extractor.extract(html);
        let total = blocks.len();

        let events: Vec<AthleticEvent> = blocks
            .into_iter()
            .map(|mut fields| AthleticEvent {
                home_team: fields.take("home_team"),
                opponent: fields.take("opponent"),
                date: fields.take("date"),
            })
            .filter(is_complete)
            .collect();

        debug!(
            blocks = total,
            kept = events.len(),
            "Parsed athletics blocks"
        );
        events
    }

    /// Fetches, extracts and writes the athletics collection
    #[instrument(level = "info", name = "athletics", skip_all, fields(url = %self.url))]
    pub async fn harvest<F: Fetcher, W: RecordWriter>(
        &self,
        fetcher: &F,
        writer: &W,
    ) -> Result<usize> {
        let html = fetcher.fetch(&self.url).await?;
        let events = self.parse(&html);

        writer.write(&self.target, &events).await?;
        info!(
            events = events.len(),
            file = %self.target.file_name,
            "DU Athletics events data saved successfully"
        );
        Ok(events.len())
    }
}
