// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::core::config::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    AlreadyInitialised(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

// Build the env_logger setup for a config. RUST_LOG still wins when set.
fn builder(config: &Config) -> Result<env_logger::Builder> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_default_env();

    // Logs never share stdout with the report
    match &config.log_file {
        Some(path) => {
            builder.target(env_logger::Target::Pipe(Box::new(open_log_file(path)?)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    Ok(builder)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global logger.
pub fn init(config: &Config) -> Result<()> {
    builder(config)?.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rust_passgen-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn log_file_and_parent_are_created() {
        let dir = scratch_dir("logging");
        let path = dir.join("nested").join("passgen.log");

        let config = Config {
            log_file: Some(path.clone()),
            ..Config::default()
        };
        assert!(builder(&config).is_ok());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn stderr_builder_needs_no_files() {
        assert!(builder(&Config::default()).is_ok());
    }
}
