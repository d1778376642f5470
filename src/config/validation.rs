use crate::config::types::{
    AthleticsConfig, BulletinConfig, CalendarConfig, Config, HttpConfig, OutputConfig,
};
use crate::scrape::compile_selector;
use crate::ConfigError;
use url::Url;

/// Upper bound for `max-concurrent-enrichments`
const MAX_ENRICHMENT_CONCURRENCY: usize = 256;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_bulletin_config(&config.bulletin)?;
    validate_athletics_config(&config.athletics)?;
    validate_calendar_config(&config.calendar)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect_timeout_secs must be >= 1".to_string(),
        ));
    }

    if config.max_concurrent_enrichments < 1
        || config.max_concurrent_enrichments > MAX_ENRICHMENT_CONCURRENCY
    {
        return Err(ConfigError::Validation(format!(
            "max_concurrent_enrichments must be between 1 and {}, got {}",
            MAX_ENRICHMENT_CONCURRENCY, config.max_concurrent_enrichments
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_bulletin_config(config: &BulletinConfig) -> Result<(), ConfigError> {
    validate_source_url("bulletin.url", &config.url)?;
    validate_target("bulletin", &config.file_name, &config.collection)?;
    for selector in [&config.block, &config.code, &config.title, &config.extra] {
        compile_selector(selector)?;
    }

    if config.code_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "bulletin.code_prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_athletics_config(config: &AthleticsConfig) -> Result<(), ConfigError> {
    validate_source_url("athletics.url", &config.url)?;
    validate_target("athletics", &config.file_name, &config.collection)?;
    for selector in [
        &config.block,
        &config.home_team,
        &config.opponent,
        &config.date,
    ] {
        compile_selector(selector)?;
    }
    Ok(())
}

fn validate_calendar_config(config: &CalendarConfig) -> Result<(), ConfigError> {
    validate_source_url("calendar.url", &config.url)?;
    validate_source_url("calendar.link_base", &config.link_base)?;
    validate_target("calendar", &config.file_name, &config.collection)?;
    for selector in [
        &config.block,
        &config.title,
        &config.date,
        &config.time,
        &config.link,
        &config.description,
    ] {
        compile_selector(selector)?;
    }
    Ok(())
}

/// Validates that a source URL is absolute HTTP(S)
fn validate_source_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(())
}

/// Validates an output file name and its collection key
fn validate_target(unit: &str, file_name: &str, collection: &str) -> Result<(), ConfigError> {
    if file_name.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{}.file_name cannot be empty",
            unit
        )));
    }

    // Files always land directly inside the output directory
    if file_name.contains('/') || file_name.contains('\\') || file_name == ".." {
        return Err(ConfigError::Validation(format!(
            "{}.file_name must be a bare file name, got '{}'",
            unit, file_name
        )));
    }

    if collection.is_empty() {
        return Err(ConfigError::Validation(format!(
            "{}.collection cannot be empty",
            unit
        )));
    }

    Ok(())
}
