//! Recursive separator-cascading splitter.

use super::TextSplitter;
use crate::config::SplitterConfig;
use crate::merging::merge_splits;
use cascade_core::AppResult;

/// Splits text by trying separators in priority order.
///
/// The first separator that occurs in the text is used to cut it into
/// pieces. Pieces shorter than the chunk size are merged back together
/// with overlap; longer pieces are split again with the remaining,
/// lower-priority separators. The empty separator splits into characters
/// and ends the cascade.
#[derive(Debug, Clone, Default)]
pub struct RecursiveCharacterTextSplitter {
    config: SplitterConfig,
}

impl RecursiveCharacterTextSplitter {
    pub fn new(config: SplitterConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a splitter with the default separators and length
    /// function.
    pub fn with_sizes(chunk_size: usize, chunk_overlap: usize) -> AppResult<Self> {
        let config = SplitterConfig::builder()
            .chunk_size(chunk_size)
            .chunk_overlap(chunk_overlap)
            .build()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    fn split_with(&self, text: &str, separators: &[String], chunks: &mut Vec<String>) {
        let (separator, remaining) = select_separator(text, separators);

        let pieces: Vec<&str> = if separator.is_empty() {
            text.char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect()
        } else {
            text.split(separator).collect()
        };

        let mut accepted: Vec<&str> = Vec::new();

        for piece in pieces {
            if self.config.measure(piece) < self.config.chunk_size() {
                accepted.push(piece);
                continue;
            }

            if !accepted.is_empty() {
                chunks.extend(merge_splits(&accepted, separator, &self.config));
                accepted.clear();
            }

            if separator.is_empty() {
                // A single character cannot be divided any further
                tracing::warn!(
                    "Character {:?} measures at least the chunk size {}; emitting as-is",
                    piece,
                    self.config.chunk_size()
                );
                chunks.push(piece.to_string());
            } else {
                self.split_with(piece, remaining, chunks);
            }
        }

        if !accepted.is_empty() {
            chunks.extend(merge_splits(&accepted, separator, &self.config));
        }
    }
}

impl TextSplitter for RecursiveCharacterTextSplitter {
    fn split_text(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        self.split_with(text, self.config.separators(), &mut chunks);

        tracing::debug!(
            "Recursive splitter created {} chunks from {} bytes",
            chunks.len(),
            text.len()
        );

        chunks
    }
}

/// Pick the first separator that is empty or present in `text`.
///
/// Returns the separator together with the lower-priority separators that
/// follow it. Falls back to character splitting when nothing matches.
fn select_separator<'a>(text: &str, separators: &'a [String]) -> (&'a str, &'a [String]) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() || text.contains(separator.as_str()) {
            return (separator.as_str(), &separators[i + 1..]);
        }
    }
    ("", &[])
}
