//! Blocks and per-document search results.

use super::document::DocumentRef;
use serde::{Deserialize, Serialize};

/// A matchable unit of text: one non-list section or one list item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Identity of the owning document
    pub path: String,

    /// Raw lines joined with `\n`
    pub content: String,

    pub start_line: usize,
    pub end_line: usize,
}

/// Matched blocks of one document, in scan order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: DocumentRef,
    pub blocks: Vec<Block>,
}

impl SearchResult {
    pub fn path(&self) -> &str {
        &self.document.path
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
