//! Configuration management for the cascade splitter.
//!
//! Configuration is merged from several sources, later ones winning:
//! - Built-in defaults
//! - A YAML config file (`CASCADE_CONFIG` or an explicit path)
//! - Environment variables
//! - Caller overrides (`AppConfig::with_overrides`)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Splitter settings
    pub splitter: SplitterSettings,
}

/// How chunk sizes are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMetric {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 bytes
    Bytes,
    /// Extended grapheme clusters
    Graphemes,
    /// Unicode words
    Words,
}

/// Serializable splitter settings.
///
/// These are plain data; the splitter crate turns them into an immutable
/// `SplitterConfig` and attaches the length function named by
/// `length_metric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterSettings {
    /// Separators in priority order. `None` selects the defaults.
    #[serde(default)]
    pub separators: Option<Vec<String>>,

    /// Target chunk size, in units of `length_metric`
    #[serde(rename = "chunkSize", default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Overlap between consecutive chunks
    #[serde(rename = "chunkOverlap", default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    #[serde(rename = "lengthMetric", default)]
    pub length_metric: LengthMetric,
}

fn default_chunk_size() -> usize {
    4000
}

fn default_chunk_overlap() -> usize {
    200
}

impl Default for SplitterSettings {
    fn default() -> Self {
        Self {
            separators: None,
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            length_metric: LengthMetric::default(),
        }
    }
}

impl SplitterSettings {
    /// Check the size/overlap relationship.
    pub fn validate(&self) -> AppResult<()> {
        if self.chunk_size == 0 {
            return Err(AppError::InvalidConfiguration(
                "chunk size must be greater than zero".to_string(),
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(AppError::InvalidConfiguration(format!(
                "chunk overlap ({}) must be smaller than chunk size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        Ok(())
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    splitter: Option<SplitterSettings>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            verbose: false,
            no_color: false,
            splitter: SplitterSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and defaults.
    ///
    /// Environment variables:
    /// - `CASCADE_CONFIG`: Path to a YAML config file
    /// - `CASCADE_CHUNK_SIZE`: Chunk size override
    /// - `CASCADE_CHUNK_OVERLAP`: Chunk overlap override
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use cascade_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Chunk size: {}", config.splitter.chunk_size);
    /// ```
    pub fn load() -> AppResult<Self> {
        let mut config = match std::env::var("CASCADE_CONFIG") {
            Ok(path) => Self::load_from(Path::new(&path))?,
            Err(_) => Self::default(),
        };

        if let Ok(size) = std::env::var("CASCADE_CHUNK_SIZE") {
            config.splitter.chunk_size = parse_env_usize("CASCADE_CHUNK_SIZE", &size)?;
        }

        if let Ok(overlap) = std::env::var("CASCADE_CHUNK_OVERLAP") {
            config.splitter.chunk_overlap = parse_env_usize("CASCADE_CHUNK_OVERLAP", &overlap)?;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Load configuration from a specific YAML file on top of the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let mut config = Self::default();

        if !path.exists() {
            return Err(AppError::Config(format!(
                "Config file does not exist: {:?}",
                path
            )));
        }

        config.merge_yaml(path)?;
        tracing::debug!("Loaded splitter config from {:?}", path);
        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &Path) -> AppResult<()> {
        let contents = std::fs::read_to_string(path)?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        if let Some(splitter) = config_file.splitter {
            self.splitter = splitter;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                self.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                self.no_color = !color;
            }
        }

        Ok(())
    }

    /// Apply caller overrides to the configuration.
    ///
    /// Overrides take precedence over both the config file and the
    /// environment.
    pub fn with_overrides(
        mut self,
        chunk_size: Option<usize>,
        chunk_overlap: Option<usize>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(chunk_size) = chunk_size {
            self.splitter.chunk_size = chunk_size;
        }

        if let Some(chunk_overlap) = chunk_overlap {
            self.splitter.chunk_overlap = chunk_overlap;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Log filter to install: an explicit level wins, verbose mode falls
    /// back to `debug`.
    pub fn effective_log_level(&self) -> Option<&str> {
        match self.log_level.as_deref() {
            Some(level) => Some(level),
            None if self.verbose => Some("debug"),
            None => None,
        }
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> AppResult<()> {
        self.splitter.validate()
    }
}

fn parse_env_usize(name: &str, value: &str) -> AppResult<usize> {
    value.trim().parse().map_err(|e| {
        AppError::Config(format!("Invalid value for {}: {:?} ({})", name, value, e))
    })
}
