//! Harvest orchestration
//!
//! Runs the bulletin, athletics and calendar units strictly one after
//! another. Each unit's failure is caught and logged at its own boundary so
//! the remaining units still run.

use crate::config::{validate, Config};
use crate::output::{JsonFileWriter, RecordWriter};
use crate::scrape::{Fetcher, HttpFetcher};
use crate::sources::{AthleticsSource, BulletinSource, CalendarSource};
use crate::{HarvestError, Result};
use std::fmt;
use std::time::Instant;

/// The extraction units, in run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Bulletin,
    Athletics,
    Calendar,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Bulletin, Unit::Athletics, Unit::Calendar];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Bulletin => "DU Bulletin",
            Unit::Athletics => "DU Athletics",
            Unit::Calendar => "DU Calendar",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How one unit ended: records written, or the error that stopped it
#[derive(Debug)]
pub struct UnitOutcome {
    pub unit: Unit,
    pub result: Result<usize>,
}

/// Outcomes of a full run, in run order
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<UnitOutcome>,
}

impl RunSummary {
    pub fn outcome(&self, unit: Unit) -> Option<&UnitOutcome> {
        self.outcomes.iter().find(|o| o.unit == unit)
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Main harvest driver
pub struct Harvester<F, W> {
    fetcher: F,
    writer: W,
    bulletin: BulletinSource,
    athletics: AthleticsSource,
    calendar: CalendarSource,
}

impl Harvester<HttpFetcher, JsonFileWriter> {
    /// Builds a harvester that fetches over HTTP and writes JSON files into
    /// `config.output.directory`
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config.http)?;
        let writer = JsonFileWriter::new(&config.output.directory);
        Self::new(config, fetcher, writer)
    }
}

impl<F: Fetcher, W: RecordWriter> Harvester<F, W> {
    /// Creates a new harvester
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Configuration valid, selectors compiled
    /// * `Err(HarvestError::Config)` - Configuration rejected
    pub fn new(config: &Config, fetcher: F, writer: W) -> Result<Self> {
        validate(config)?;

        Ok(Self {
            fetcher,
            writer,
            bulletin: BulletinSource::new(&config.bulletin)?,
            athletics: AthleticsSource::new(&config.athletics)?,
            calendar: CalendarSource::new(
                &config.calendar,
                config.http.max_concurrent_enrichments,
            )?,
        })
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub async fn run_bulletin(&self) -> Result<usize> {
        self.bulletin.harvest(&self.fetcher, &self.writer).await
    }

    pub async fn run_athletics(&self) -> Result<usize> {
        self.athletics.harvest(&self.fetcher, &self.writer).await
    }

    pub async fn run_calendar(&self) -> Result<usize> {
        self.calendar.harvest(&self.fetcher, &self.writer).await
    }

    /// Runs a single unit, logging its failure instead of propagating it
    pub async fn run_unit(&self, unit: Unit) -> UnitOutcome {
        let started = Instant::now();
        let result = match unit {
            Unit::Bulletin => self.run_bulletin().await,
            Unit::Athletics => self.run_athletics().await,
            Unit::Calendar => self.run_calendar().await,
        };

        match &result {
            Ok(records) => tracing::debug!(
                %unit,
                records,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Unit finished"
            ),
            Err(e) => log_unit_failure(unit, e),
        }

        UnitOutcome { unit, result }
    }

    /// Runs every unit in order: bulletin, athletics, calendar
    pub async fn run_all(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for unit in Unit::ALL {
            summary.outcomes.push(self.run_unit(unit).await);
        }

        tracing::info!(
            succeeded = summary.succeeded(),
            failed = summary.failed(),
            "Harvest run finished"
        );
        summary
    }
}

fn log_unit_failure(unit: Unit, error: &HarvestError) {
    tracing::error!(%unit, error = %error, "Error scraping {}", unit);
}
