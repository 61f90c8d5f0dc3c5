use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use vault_block_search::error::{StoreError, StoreResult};
use vault_block_search::markdown::{parse_structure, split_lines};
use vault_block_search::models::{DocumentRef, DocumentStructure};
use vault_block_search::repositories::DocumentStore;

#[derive(Clone)]
struct MockDocument {
    doc: DocumentRef,
    structure: Option<DocumentStructure>,
    lines: Vec<String>,
}

/// Mock document store for testing.
///
/// Tracks calls per method, can fail reads for chosen paths and can delay
/// every read to widen race windows.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDocumentStore {
    documents: Arc<Mutex<Vec<MockDocument>>>,
    failing_reads: Arc<Mutex<HashSet<String>>>,
    read_delay: Arc<Mutex<Option<Duration>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_markdown(&self, doc: DocumentRef, text: &str) {
        let lines = split_lines(text);
        let structure = parse_structure(&lines);
        self.add_document(doc, Some(structure), lines);
    }

    pub fn add_document(
        &self,
        doc: DocumentRef,
        structure: Option<DocumentStructure>,
        lines: Vec<String>,
    ) {
        let mut documents = self.documents.lock().unwrap();
        documents.push(MockDocument {
            doc,
            structure,
            lines,
        });
    }

    /// Make `read_text` fail for this path.
    pub fn fail_reads_for(&self, path: &str) {
        let mut failing = self.failing_reads.lock().unwrap();
        failing.insert(path.to_string());
    }

    pub fn set_read_delay(&self, delay: Duration) {
        let mut read_delay = self.read_delay.lock().unwrap();
        *read_delay = Some(delay);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn find(&self, doc: &DocumentRef) -> StoreResult<MockDocument> {
        let documents = self.documents.lock().unwrap();
        documents
            .iter()
            .find(|d| d.doc.path == doc.path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(doc.path.clone()))
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn list_documents(&self) -> StoreResult<Vec<DocumentRef>> {
        self.track_call("list_documents");

        let documents = self.documents.lock().unwrap();
        Ok(documents.iter().map(|d| d.doc.clone()).collect())
    }

    async fn get_structure(&self, doc: &DocumentRef) -> StoreResult<Option<DocumentStructure>> {
        self.track_call("get_structure");
        Ok(self.find(doc)?.structure)
    }

    async fn read_text(&self, doc: &DocumentRef) -> StoreResult<Vec<String>> {
        self.track_call("read_text");

        let delay = *self.read_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let failing = self.failing_reads.lock().unwrap().contains(&doc.path);
        if failing {
            return Err(StoreError::Io {
                path: doc.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
            });
        }

        Ok(self.find(doc)?.lines)
    }
}
