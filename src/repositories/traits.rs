use crate::error::StoreResult;
use crate::models::{DocumentRef, DocumentStructure};
use async_trait::async_trait;

/// Read-only source of documents for the query engine.
///
/// Provides abstraction over where documents live, enabling different
/// implementations (filesystem vault, in-memory, mock).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List all documents in a stable order.
    async fn list_documents(&self) -> StoreResult<Vec<DocumentRef>>;

    /// Structural metadata for a document, or `None` when none is available.
    async fn get_structure(&self, doc: &DocumentRef) -> StoreResult<Option<DocumentStructure>>;

    /// The document's raw text split into lines.
    async fn read_text(&self, doc: &DocumentRef) -> StoreResult<Vec<String>>;
}
