//! Recursive, separator-cascading text splitting.
//!
//! Text is cut at the highest-priority separator it contains (paragraphs,
//! then lines, then words, then characters), pieces are merged greedily
//! up to a size bound, and consecutive chunks share a bounded overlap.
//!
//! ```
//! use cascade_splitter::{RecursiveCharacterTextSplitter, SplitterConfig, TextSplitter};
//!
//! let config = SplitterConfig::builder()
//!     .separators(["\n\n", " ", ""])
//!     .chunk_size(6)
//!     .chunk_overlap(0)
//!     .build()
//!     .unwrap();
//! let splitter = RecursiveCharacterTextSplitter::new(config);
//!
//! assert_eq!(
//!     splitter.split_text("AAAA\n\nBBBB\n\nCCCC"),
//!     vec!["AAAA", "BBBB", "CCCC"]
//! );
//! ```

pub mod config;
pub mod document;
pub mod length;
mod merging;
pub mod splitters;

// Re-export commonly used types
pub use config::{SplitterConfig, SplitterConfigBuilder, DEFAULT_SEPARATORS};
pub use document::{Document, Metadata};
pub use length::LengthFunction;
pub use splitters::{RecursiveCharacterTextSplitter, TextSplitter};
