//! Documents: text paired with metadata.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Opaque key/value metadata attached to a document.
pub type Metadata = HashMap<String, serde_json::Value>;

/// A text payload with metadata.
///
/// Fragments produced by splitting share the source's metadata through the
/// `Arc`; nested values are never deep-cloned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,

    #[serde(default)]
    pub metadata: Arc<Metadata>,
}

impl Document {
    /// Create a document with empty metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: Arc::default(),
        }
    }

    pub fn with_metadata(text: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            text: text.into(),
            metadata: Arc::new(metadata),
        }
    }

    /// Whether two documents share the same metadata allocation.
    ///
    /// Fragments from [`TextSplitter::split_documents`] share with their
    /// source document, so callers persisting fragments can store one copy
    /// of the metadata per source.
    ///
    /// [`TextSplitter::split_documents`]: crate::TextSplitter::split_documents
    pub fn shares_metadata_with(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.metadata, &other.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitters::{RecursiveCharacterTextSplitter, TextSplitter};
    use crate::SplitterConfig;
    use cascade_core::AppError;
    use serde_json::json;

    fn metadata(source: &str) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("source".to_string(), json!(source));
        metadata.insert("tags".to_string(), json!(["a", "b"]));
        metadata
    }

    fn word_splitter(chunk_size: usize) -> RecursiveCharacterTextSplitter {
        let config = SplitterConfig::builder()
            .separators([" ", ""])
            .chunk_size(chunk_size)
            .chunk_overlap(0)
            .build()
            .unwrap();
        RecursiveCharacterTextSplitter::new(config)
    }

    #[test]
    fn test_split_documents_order_and_metadata() {
        let docs = vec![
            Document::with_metadata("aaa bbb ccc", metadata("first.txt")),
            Document::with_metadata("ddd eee", metadata("second.txt")),
        ];

        let fragments = word_splitter(4).split_documents(&docs);
        let texts: Vec<&str> = fragments.iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["aaa", "bbb", "ccc", "ddd", "eee"]);

        for fragment in &fragments[..3] {
            assert_eq!(fragment.metadata, docs[0].metadata);
            assert!(fragment.shares_metadata_with(&docs[0]));
        }
        for fragment in &fragments[3..] {
            assert_eq!(fragment.metadata.get("source"), Some(&json!("second.txt")));
            assert!(fragment.shares_metadata_with(&docs[1]));
        }
    }

    #[test]
    fn test_empty_inputs() {
        let splitter = word_splitter(4);
        assert!(splitter.split_documents(&[]).is_empty());
        assert!(splitter.split_documents(&[Document::new("")]).is_empty());
    }

    #[test]
    fn test_create_documents() {
        let splitter = word_splitter(10);
        let metadatas = vec![metadata("a"), metadata("b")];

        let docs = splitter
            .create_documents(&["hello there", "bye"], Some(metadatas.as_slice()))
            .unwrap();

        assert_eq!(docs.len(), 3);
        assert_eq!(docs[0].text, "hello");
        assert_eq!(docs[1].text, "there");
        assert_eq!(docs[2].text, "bye");
        assert_eq!(*docs[2].metadata, metadatas[1]);
    }

    #[test]
    fn test_create_documents_without_metadata() {
        let docs = word_splitter(10).create_documents(&["hi"], None).unwrap();
        assert_eq!(docs, vec![Document::new("hi")]);
        assert!(docs[0].metadata.is_empty());
    }

    #[test]
    fn test_create_documents_length_mismatch() {
        let result = word_splitter(10).create_documents(&["a", "b"], Some(&[metadata("a")][..]));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_document_serde() {
        let doc: Document = serde_json::from_str(r#"{"text": "hi"}"#).unwrap();
        assert_eq!(doc, Document::new("hi"));

        let doc = Document::with_metadata("x", metadata("s"));
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["metadata"]["source"], json!("s"));
    }
}
