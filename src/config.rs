//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file picked up through `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `ADDRESS_BOOK_LOG_LEVEL`.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for an embedded address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of search results to return (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_MAX_MATCH_RESULTS`: Max search results (default: 5)
    /// - `ADDRESS_BOOK_MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `ADDRESS_BOOK_LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let max_match_results = Self::parse_env_usize("ADDRESS_BOOK_MAX_MATCH_RESULTS", 5)?;
        if max_match_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_MAX_MATCH_RESULTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        let match_confidence_threshold =
            Self::parse_env_u8("ADDRESS_BOOK_MATCH_CONFIDENCE_THRESHOLD", 30)?;
        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("ADDRESS_BOOK_LOG_LEVEL")
            .map(|v| v.trim().to_lowercase())
            .unwrap_or_else(|_| "error".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), log_level),
            });
        }

        Ok(Config {
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}
