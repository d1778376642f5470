//! Course bulletin unit
//!
//! Lists upper-division courses without prerequisites. Each `.courseblock`
//! holds the code (in a `<strong>` inside the title line), the title line
//! itself, and an extra paragraph carrying prerequisite notes.

use crate::config::BulletinConfig;
use crate::models::Course;
use crate::output::{OutputTarget, RecordWriter};
use crate::scrape::{BlockExtractor, CourseBlock, CourseFilter, Fetcher};
use crate::{ConfigError, Result};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct BulletinSource {
    url: String,
    target: OutputTarget,
    extractor: BlockExtractor,
    filter: CourseFilter,
}

impl BulletinSource {
    pub fn new(config: &BulletinConfig) -> std::result::Result<Self, ConfigError> {
        let extractor = BlockExtractor::new(&config.block)?
            .text_field("code", &config.code)?
            .text_field("title", &config.title)?
            .text_field("extra", &config.extra)?;

        Ok(Self {
            url: config.url.clone(),
            target: OutputTarget::new(&config.file_name, &config.collection),
            extractor,
            filter: CourseFilter::new(&config.code_prefix, &config.excluded_marker),
        })
    }

    /// Extracts and filters courses from a bulletin page
    pub fn parse(&self, html: &str) -> Vec<Course> {
        self.extractor
            .extract(html)
            .into_iter()
            .map(|mut fields| {
                let code = fields.take("code");
                // The title line repeats the code; strip its first occurrence
                let title = if code.is_empty() {
                    fields.take("title")
                } else {
                    fields.take("title").replacen(&code, "", 1).trim().to_string()
                };
                CourseBlock {
                    code,
                    title,
                    extra: fields.take("extra"),
                }
            })
            .filter(|block| self.filter.keep(block))
            .map(|block| Course {
                code: block.code,
                title: block.title,
            })
            .collect()
    }

    /// Fetches, extracts, filters and writes the bulletin collection
    ///
    /// # Returns
    ///
    /// The number of courses written
    #[instrument(level = "info", name = "bulletin", skip_all, fields(url = %self.url))]
    pub async fn harvest<F: Fetcher, W: RecordWriter>(
        &self,
        fetcher: &F,
        writer: &W,
    ) -> Result<usize> {
        let html = fetcher.fetch(&self.url).await?;
        let courses = self.parse(&html);

        writer.write(&self.target, &courses).await?;
        info!(
            courses = courses.len(),
            file = %self.target.file_name,
            "DU Bulletin data saved successfully"
        );
        Ok(courses.len())
    }
}
