//! Vault Block Search - boolean block queries over a markdown vault.
//!
//! A query is a list of terms, each a wikilink target, a text fragment or a
//! `key:value` frontmatter filter, combined with AND/OR/NOT. Documents are
//! pruned by their frontmatter, then split into blocks (paragraphs, tables,
//! callouts, footnotes and individual list items) which are matched one by one.
//!
//! # Architecture
//!
//! - **models**: Documents, structural metadata, blocks and results
//! - **domain**: Validated search terms and operators
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **markdown**: Frontmatter, section and wikilink scanning
//! - **repositories**: The Document Store contract and its implementations
//! - **query**: Orphan-OR handling, term classification and property predicates
//! - **search**: Block extraction, matching, aggregation and sorting
//! - **suggestions**: Autocomplete candidates, related links and property facets
//! - **services**: The query engine and query session
//! - **observability**: Tracing setup and query metrics
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vault_block_search::{
//!     DocumentRef, MemoryDocumentStore, Operator, QueryEngine, SearchService, SearchTerm,
//! };
//!
//! # tokio_test::block_on(async {
//! let store = MemoryDocumentStore::new()
//!     .with_markdown(DocumentRef::new("Inbox.md"), "- Call [[Dr. Smith]]\n- Buy milk");
//! let engine = QueryEngine::new(Arc::new(store));
//!
//! let terms = vec![SearchTerm::link("Dr. Smith", Operator::And).unwrap()];
//! let results = engine.evaluate(&terms).await.unwrap();
//! assert_eq!(results[0].blocks.len(), 1);
//! # });
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod markdown;
pub mod models;
pub mod observability;
pub mod query;
pub mod repositories;
pub mod search;
pub mod services;
pub mod suggestions;

// Re-export commonly used types
pub use config::Config;
pub use domain::{ModifierKeys, Operator, SearchTerm, ValidationError};
pub use error::{ConfigError, QueryError, StoreError};
pub use models::{Block, DocumentRef, DocumentStructure, FrontmatterValue, SearchResult};
pub use observability::{init_tracing, MetricsSummary, QueryMetrics};
pub use query::ClassifiedQuery;
pub use repositories::{DocumentStore, FsVaultStore, MemoryDocumentStore};
pub use search::{SortField, SortOrder, SortSpec};
pub use services::{QueryEngine, QuerySession, SearchService};
