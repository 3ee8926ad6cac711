//! Splitter implementations.

mod recursive;

pub use recursive::RecursiveCharacterTextSplitter;

use crate::document::{Document, Metadata};
use cascade_core::{AppError, AppResult};
use std::sync::Arc;

/// Trait for text splitters.
///
/// Implementors only provide [`split_text`](TextSplitter::split_text); the
/// document operations are built on top of it.
pub trait TextSplitter: Send + Sync {
    /// Split text into ordered chunks. Empty text yields no chunks.
    fn split_text(&self, text: &str) -> Vec<String>;

    /// Split every document and fan the chunks out as new documents.
    ///
    /// Output is document-major: all fragments of one document precede the
    /// fragments of the next. Each fragment shares its source document's
    /// metadata.
    fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        let mut fragments = Vec::new();

        for document in documents {
            for chunk in self.split_text(&document.text) {
                fragments.push(Document {
                    text: chunk,
                    metadata: Arc::clone(&document.metadata),
                });
            }
        }

        tracing::debug!(
            "Split {} documents into {} fragments",
            documents.len(),
            fragments.len()
        );

        fragments
    }

    /// Build documents from raw texts and split them.
    ///
    /// When `metadatas` is given it must hold exactly one entry per text.
    fn create_documents(
        &self,
        texts: &[&str],
        metadatas: Option<&[Metadata]>,
    ) -> AppResult<Vec<Document>> {
        if let Some(metadatas) = metadatas {
            if metadatas.len() != texts.len() {
                return Err(AppError::InvalidInput(format!(
                    "got {} metadata entries for {} texts",
                    metadatas.len(),
                    texts.len()
                )));
            }
        }

        let documents: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let metadata = metadatas.map(|m| m[i].clone()).unwrap_or_default();
                Document::with_metadata(*text, metadata)
            })
            .collect();

        Ok(self.split_documents(&documents))
    }
}
