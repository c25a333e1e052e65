// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use thiserror::Error;

use crate::core::policy::{Policy, MAX_PASSWORD_LENGTH};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Value {value} for {key} exceeds the maximum of {max}")]
    TooLarge { key: &'static str, value: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

// Configuration for the generator binary
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,

    // Clipboard
    pub clipboard_enabled: bool,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Values that failed to parse, reported once logging is up
    pub rejected: Vec<ConfigError>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_password_length: Policy::STANDARD.min_length,

            // Clipboard
            clipboard_enabled: true,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,

            rejected: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Invalid values keep the default
    /// and are collected in `rejected`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match parse_length("DEFAULT_PASSWORD_LENGTH", &val) {
                Ok(length) => config.default_password_length = length,
                Err(e) => config.rejected.push(e),
            }
        }

        if let Some(val) = lookup("CLIPBOARD_ENABLED") {
            match parse_bool("CLIPBOARD_ENABLED", &val) {
                Ok(enabled) => config.clipboard_enabled = enabled,
                Err(e) => config.rejected.push(e),
            }
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Ok(level) => config.log_level = level,
                Err(e) => config.rejected.push(e),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

fn parse_length(key: &'static str, value: &str) -> Result<usize> {
    let length = parse_value::<usize>(key, value)?;
    if length > MAX_PASSWORD_LENGTH {
        return Err(ConfigError::TooLarge {
            key,
            value: length,
            max: MAX_PASSWORD_LENGTH,
        });
    }
    Ok(length)
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_level(level: &str) -> Result<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::InvalidValue {
            key: "LOG_LEVEL",
            value: level.to_string(),
        }),
    }
}
