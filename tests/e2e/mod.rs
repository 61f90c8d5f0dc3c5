//! End-to-end test utilities and shared setup.
//!
//! Builds engines over fixture vaults, either in memory or on disk.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use vault_block_search::{
    Config, DocumentStore, MemoryDocumentStore, QueryEngine, SearchResult,
};

pub mod fixtures;

/// Create an engine over an in-memory store with default configuration.
#[allow(dead_code)]
pub fn engine_for(store: MemoryDocumentStore) -> QueryEngine {
    QueryEngine::new(Arc::new(store))
}

/// Create an engine over any store with the given configuration.
#[allow(dead_code)]
pub fn engine_with(store: impl DocumentStore + 'static, config: Config) -> QueryEngine {
    QueryEngine::with_config(Arc::new(store), config)
}

/// Write `(relative path, content)` pairs under `root`, creating directories.
#[allow(dead_code)]
pub fn write_vault(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
    }
}

/// Document paths of a result set, in order.
#[allow(dead_code)]
pub fn result_paths(results: &[SearchResult]) -> Vec<String> {
    results.iter().map(|r| r.path().to_string()).collect()
}

/// Block contents across a result set, in order.
#[allow(dead_code)]
pub fn block_contents(results: &[SearchResult]) -> Vec<String> {
    results
        .iter()
        .flat_map(|r| r.blocks.iter().map(|b| b.content.clone()))
        .collect()
}

/// Assert that every block is well formed and belongs to its result's document.
#[allow(dead_code)]
pub fn assert_results_valid(results: &[SearchResult]) {
    for result in results {
        assert!(!result.blocks.is_empty(), "Result should have at least one block");
        for block in &result.blocks {
            assert_eq!(block.path, result.document.path, "Block path should match document");
            assert!(block.start_line <= block.end_line, "Block range should be ordered");
        }
    }
}
