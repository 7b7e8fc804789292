use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::{AppError, AppResult};

/// Application configuration module
/// This module handles loading and validating the conversion settings.
/// Every field has a default, so a partial config file is accepted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Extension of the subtitle files to collect, without the dot
    #[serde(default = "default_subtitle_extension")]
    pub subtitle_extension: String,

    /// Write a `=== name ===` header before each file's text
    #[serde(default = "default_true")]
    pub include_headers: bool,

    /// Decode non-UTF-8 files as Latin-1 instead of skipping them
    #[serde(default = "default_true")]
    pub latin1_fallback: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_subtitle_extension() -> String {
    "srt".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load a config file, or defaults when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load a config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| AppError::Config(format!("Failed to open config file {:?}: {}", path, e)))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    /// Load a config from a JSON string
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Subtitle extension without a leading dot
    pub fn extension(&self) -> &str {
        self.subtitle_extension.trim_start_matches('.')
    }

    pub fn validate(&self) -> AppResult<()> {
        let ext = self.extension();
        if ext.is_empty() {
            return Err(AppError::Config("Subtitle extension must not be empty".to_string()));
        }
        if ext.contains(['/', '\\']) {
            return Err(AppError::Config(format!(
                "Subtitle extension must not contain a path separator: {}",
                self.subtitle_extension
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subtitle_extension: default_subtitle_extension(),
            include_headers: true,
            latin1_fallback: true,
            log_level: LogLevel::default(),
        }
    }
}
