//! Immutable splitter configuration.

use crate::length::LengthFunction;
use cascade_core::{AppError, AppResult, SplitterSettings};

/// Default separator cascade: paragraphs, lines, words, characters.
pub const DEFAULT_SEPARATORS: [&str; 4] = ["\n\n", "\n", " ", ""];

pub const DEFAULT_CHUNK_SIZE: usize = 4000;

pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Validated configuration for a splitter.
///
/// Built through [`SplitterConfig::builder`]; once built it cannot be
/// changed, so a splitter holding one behaves identically on every call.
#[derive(Debug, Clone)]
pub struct SplitterConfig {
    separators: Vec<String>,
    chunk_size: usize,
    chunk_overlap: usize,
    length_function: LengthFunction,
}

impl SplitterConfig {
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::default()
    }

    /// Build a configuration from serializable settings.
    pub fn from_settings(settings: &SplitterSettings) -> AppResult<Self> {
        let mut builder = Self::builder()
            .chunk_size(settings.chunk_size)
            .chunk_overlap(settings.chunk_overlap)
            .length_function(settings.length_metric.into());

        if let Some(ref separators) = settings.separators {
            builder = builder.separators(separators.iter().cloned());
        }

        builder.build()
    }

    /// Separators in priority order, highest first.
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    pub fn length_function(&self) -> &LengthFunction {
        &self.length_function
    }

    /// Measure `text` with the configured length function.
    pub fn measure(&self, text: &str) -> usize {
        self.length_function.measure(text)
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            length_function: LengthFunction::default(),
        }
    }
}

/// Builder for [`SplitterConfig`].
#[derive(Debug, Clone, Default)]
pub struct SplitterConfigBuilder {
    separators: Option<Vec<String>>,
    chunk_size: Option<usize>,
    chunk_overlap: Option<usize>,
    length_function: Option<LengthFunction>,
}

impl SplitterConfigBuilder {
    /// Separators in priority order. `""` means "split into characters".
    pub fn separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = Some(separators.into_iter().map(Into::into).collect());
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    pub fn chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = Some(chunk_overlap);
        self
    }

    pub fn length_function(mut self, length_function: LengthFunction) -> Self {
        self.length_function = Some(length_function);
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// An empty separator list falls back to [`DEFAULT_SEPARATORS`].
    pub fn build(self) -> AppResult<SplitterConfig> {
        let chunk_size = self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE);
        let chunk_overlap = self.chunk_overlap.unwrap_or(DEFAULT_CHUNK_OVERLAP);

        if chunk_size == 0 {
            return Err(AppError::InvalidConfiguration(
                "chunk size must be greater than zero".to_string(),
            ));
        }

        if chunk_overlap >= chunk_size {
            return Err(AppError::InvalidConfiguration(format!(
                "chunk overlap ({}) must be smaller than chunk size ({})",
                chunk_overlap, chunk_size
            )));
        }

        let separators = match self.separators {
            Some(separators) if !separators.is_empty() => separators,
            _ => DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        };

        let length_function = self.length_function.unwrap_or_default();

        tracing::debug!(
            chunk_size,
            chunk_overlap,
            separators = separators.len(),
            length = length_function.name(),
            "Built splitter config"
        );

        Ok(SplitterConfig {
            separators,
            chunk_size,
            chunk_overlap,
            length_function,
        })
    }
}
