//! Groups matched blocks per document in scan order.

use crate::models::{Block, DocumentRef, SearchResult};
use std::collections::HashMap;

/// Accumulates matched blocks into per-document results.
///
/// Documents appear in the order their first block arrived; blocks keep
/// their arrival order. A document only gets an entry once it has a block.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    results: Vec<SearchResult>,
    index: HashMap<String, usize>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block to its document's entry, creating the entry if needed.
    pub fn push(&mut self, doc: &DocumentRef, block: Block) {
        match self.index.get(&doc.path) {
            Some(&idx) => self.results[idx].blocks.push(block),
            None => {
                self.index.insert(doc.path.clone(), self.results.len());
                self.results.push(SearchResult {
                    document: doc.clone(),
                    blocks: vec![block],
                });
            }
        }
    }

    /// Number of documents with at least one block.
    pub fn document_count(&self) -> usize {
        self.results.len()
    }

    pub fn block_count(&self) -> usize {
        self.results.iter().map(SearchResult::block_count).sum()
    }

    pub fn finish(self) -> Vec<SearchResult> {
        self.results
    }
}
