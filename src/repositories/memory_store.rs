use crate::error::{StoreError, StoreResult};
use crate::markdown::{parse_structure, split_lines};
use crate::models::{DocumentRef, DocumentStructure};
use crate::repositories::traits::DocumentStore;
use async_trait::async_trait;

#[derive(Debug, Clone)]
struct StoredDocument {
    doc: DocumentRef,
    structure: Option<DocumentStructure>,
    lines: Vec<String>,
}

/// Document store held entirely in memory.
///
/// Documents are listed in insertion order. Useful for embedding the engine
/// over documents that already live in memory, and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    documents: Vec<StoredDocument>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document with explicit structure, replacing any document at the same path.
    pub fn add_document(
        &mut self,
        doc: DocumentRef,
        structure: Option<DocumentStructure>,
        text: &str,
    ) {
        let stored = StoredDocument {
            doc,
            structure,
            lines: split_lines(text),
        };
        match self
            .documents
            .iter_mut()
            .find(|existing| existing.doc.path == stored.doc.path)
        {
            Some(existing) => *existing = stored,
            None => self.documents.push(stored),
        }
    }

    /// Add a markdown document, deriving its structure by scanning the text.
    pub fn add_markdown(&mut self, doc: DocumentRef, text: &str) {
        let structure = parse_structure(&split_lines(text));
        self.add_document(doc, Some(structure), text);
    }

    /// Builder form of [`add_markdown`](Self::add_markdown).
    pub fn with_markdown(mut self, doc: DocumentRef, text: &str) -> Self {
        self.add_markdown(doc, text);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn find(&self, doc: &DocumentRef) -> StoreResult<&StoredDocument> {
        self.documents
            .iter()
            .find(|stored| stored.doc.path == doc.path)
            .ok_or_else(|| StoreError::NotFound(doc.path.clone()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_documents(&self) -> StoreResult<Vec<DocumentRef>> {
        Ok(self.documents.iter().map(|d| d.doc.clone()).collect())
    }

    async fn get_structure(&self, doc: &DocumentRef) -> StoreResult<Option<DocumentStructure>> {
        Ok(self.find(doc)?.structure.clone())
    }

    async fn read_text(&self, doc: &DocumentRef) -> StoreResult<Vec<String>> {
        Ok(self.find(doc)?.lines.clone())
    }
}
