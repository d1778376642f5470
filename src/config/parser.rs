use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Keys missing from the file keep their defaults.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;

    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a run's output can be traced back to its config.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let config_content = r#"
[http]
user-agent = "TestHarvester/1.0"
timeout-secs = 5
connect-timeout-secs = 2
max-concurrent-enrichments = 4

[output]
directory = "/tmp/harvest-out"

[bulletin]
url = "https://bulletin.example.edu"
code-prefix = "MATH-4"

[athletics]
url = "https://athletics.example.edu/"

[calendar]
url = "https://calendar.example.edu/events"
link-base = "https://calendar.example.edu/events"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.http.user_agent, "TestHarvester/1.0");
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.max_concurrent_enrichments, 4);
        assert_eq!(config.output.directory, "/tmp/harvest-out");
        assert_eq!(config.bulletin.url, "https://bulletin.example.edu");
        assert_eq!(config.bulletin.code_prefix, "MATH-4");
        assert_eq!(config.calendar.link_base, "https://calendar.example.edu/events");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config_content = r#"
[output]
directory = "elsewhere"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.output.directory, "elsewhere");
        assert_eq!(config.bulletin.url, "https://bulletin.du.edu");
        assert_eq!(config.bulletin.block, ".courseblock");
        assert_eq!(config.calendar.description, ".event-description");
        assert_eq!(config.http.timeout_secs, 30);
    }

    #[test]
    fn test_empty_config_is_default() {
        let file = create_temp_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.athletics.file_name, "athletic_events.json");
        assert_eq!(config.output.directory, "results");
        assert!(std::path::Path::new(&config.output.directory).is_relative());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/harvest.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[http]
max-concurrent-enrichments = 0
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_with_bad_selector() {
        let config_content = r#"
[calendar]
block = "div[["
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidSelector { .. }
        ));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config("[output]\ndirectory = \"out\"\n");
        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert_eq!(config.output.directory, "out");
        assert_eq!(hash.len(), 64);
    }
}
