//! Pluggable length measurement.

use cascade_core::LengthMetric;
use std::fmt;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Measures the "size" of a string in whatever unit chunk sizes are
/// expressed in (characters, bytes, tokens, ...).
///
/// Cloning is cheap; clones share the same underlying function.
#[derive(Clone)]
pub struct LengthFunction {
    name: &'static str,
    measure: Arc<dyn Fn(&str) -> usize + Send + Sync>,
}

impl LengthFunction {
    /// Wrap a caller-supplied measure, e.g. a tokenizer's token count.
    ///
    /// The function must be pure: the same input always yields the same
    /// length.
    pub fn from_fn<F>(measure: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self {
            name: "custom",
            measure: Arc::new(measure),
        }
    }

    /// Count Unicode scalar values. This is the default.
    pub fn chars() -> Self {
        Self {
            name: "chars",
            measure: Arc::new(|text: &str| text.chars().count()),
        }
    }

    /// Count UTF-8 bytes.
    pub fn bytes() -> Self {
        Self {
            name: "bytes",
            measure: Arc::new(str::len),
        }
    }

    /// Count extended grapheme clusters.
    pub fn graphemes() -> Self {
        Self {
            name: "graphemes",
            measure: Arc::new(|text: &str| text.graphemes(true).count()),
        }
    }

    /// Count Unicode words, a rough stand-in for tokens.
    pub fn words() -> Self {
        Self {
            name: "words",
            measure: Arc::new(|text: &str| text.unicode_words().count()),
        }
    }

    /// Measure `text`.
    pub fn measure(&self, text: &str) -> usize {
        (self.measure)(text)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LengthFunction {
    fn default() -> Self {
        Self::chars()
    }
}

impl From<LengthMetric> for LengthFunction {
    fn from(metric: LengthMetric) -> Self {
        match metric {
            LengthMetric::Chars => Self::chars(),
            LengthMetric::Bytes => Self::bytes(),
            LengthMetric::Graphemes => Self::graphemes(),
            LengthMetric::Words => Self::words(),
        }
    }
}

impl fmt::Debug for LengthFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LengthFunction").field(&self.name).finish()
    }
}
