//! Configuration module for du-harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Running without a file uses [`Config::default`], which targets the live DU
//! sites.
//!
//! # Example
//!
//! ```no_run
//! use du_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Writing to: {}", config.output.directory);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AthleticsConfig, BulletinConfig, CalendarConfig, Config, HttpConfig, OutputConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
