//! Query engine service.
//!
//! Scans the Document Store in listing order, prunes documents by their
//! frontmatter, and collects the blocks that satisfy the boolean query.

use crate::config::Config;
use crate::domain::SearchTerm;
use crate::error::{QueryError, QueryResult, StoreError, StoreResult};
use crate::models::{DocumentRef, SearchResult};
use crate::observability::{QueryMetrics, Timer};
use crate::query::ClassifiedQuery;
use crate::repositories::DocumentStore;
use crate::search::{extract_blocks, sort_results, BlockMatcher, ResultAggregator, SortSpec};
use crate::suggestions::{self, PropertyFacets};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Search service trait for the operations a UI layer needs.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Evaluate a stored term list against the whole store.
    ///
    /// Results are grouped per document in store listing order. An empty term
    /// list yields no results without scanning.
    ///
    /// # Errors
    ///
    /// Fails with `QueryError::ListFailed` when the store cannot list documents,
    /// with `QueryError::ReadFailed` when a document's structure or text cannot be
    /// read (unless read failures are isolated), and with `QueryError::Superseded`
    /// when a newer evaluation started before this one finished. A superseded scan
    /// reports `Superseded` even when it also hit a read failure.
    async fn evaluate(&self, terms: &[SearchTerm]) -> QueryResult<Vec<SearchResult>>;

    /// Autocomplete candidates containing `prefix`, ignoring case.
    async fn suggest(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Link targets in matched blocks that are not already active terms.
    fn related_links(&self, results: &[SearchResult], active_terms: &[SearchTerm]) -> Vec<String>;

    /// Frontmatter keys and values across the documents of a result set.
    async fn property_facets(&self, results: &[SearchResult]) -> StoreResult<PropertyFacets>;
}

/// Default implementation of SearchService over any Document Store.
///
/// Clones share the store, the metrics and the generation counter, so a query
/// started on one clone is superseded by a query started on another.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn DocumentStore>,
    config: Config,
    metrics: QueryMetrics,
    generation: Arc<AtomicU64>,
}

impl QueryEngine {
    /// Create a new engine with default configuration.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_config(store, Config::default())
    }

    pub fn with_config(store: Arc<dyn DocumentStore>, config: Config) -> Self {
        Self {
            store,
            config,
            metrics: QueryMetrics::new(),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metrics(&self) -> &QueryMetrics {
        &self.metrics
    }

    /// Generation of the most recently started evaluation.
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Order results for display using the configured default sort.
    pub fn sorted(&self, results: &[SearchResult]) -> Vec<SearchResult> {
        sort_results(results, self.config.default_sort)
    }

    /// Order results for display.
    pub fn sorted_by(&self, results: &[SearchResult], spec: SortSpec) -> Vec<SearchResult> {
        sort_results(results, spec)
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply the read-failure policy to one document.
    ///
    /// A stale scan reports `Superseded` first. Otherwise the failure aborts the
    /// evaluation, or with isolation on is logged and the document skipped (`Ok`).
    fn document_failed(
        &self,
        generation: u64,
        doc: &DocumentRef,
        source: StoreError,
    ) -> QueryResult<()> {
        self.metrics.track_read_failure();
        self.ensure_current(generation)?;

        if self.config.isolate_read_failures {
            tracing::warn!(path = %doc.path, error = %source, "Skipping unreadable document");
            return Ok(());
        }
        tracing::warn!(path = %doc.path, error = %source, "Read failed, aborting query");
        Err(QueryError::ReadFailed {
            path: doc.path.clone(),
            source,
        })
    }

    fn ensure_current(&self, generation: u64) -> QueryResult<()> {
        let latest = self.latest_generation();
        if latest != generation {
            self.metrics.track_superseded(generation, latest);
            return Err(QueryError::Superseded { generation, latest });
        }
        Ok(())
    }
}

#[async_trait]
impl SearchService for QueryEngine {
    async fn evaluate(&self, terms: &[SearchTerm]) -> QueryResult<Vec<SearchResult>> {
        let generation = self.next_generation();

        if terms.is_empty() {
            tracing::debug!(generation = generation, "No search terms");
            return Ok(Vec::new());
        }

        let timer = Timer::new("evaluate");
        let query = ClassifiedQuery::classify(terms);
        let matcher = BlockMatcher::new(&query);

        tracing::debug!(
            generation = generation,
            terms = query.term_count(),
            property_filtered = !query.property_filters.is_empty(),
            "Evaluating query"
        );

        let documents = match self.store.list_documents().await {
            Ok(documents) => documents,
            Err(e) => {
                self.ensure_current(generation)?;
                return Err(QueryError::ListFailed(e));
            }
        };
        let mut aggregator = ResultAggregator::new();

        for doc in &documents {
            let structure = match self.store.get_structure(doc).await {
                Ok(Some(structure)) => structure,
                Ok(None) => {
                    tracing::debug!(path = %doc.path, "No structure, skipping document");
                    continue;
                }
                Err(source) => {
                    self.document_failed(generation, doc, source)?;
                    continue;
                }
            };

            if !query.property_filters.accepts(&structure.frontmatter) {
                self.metrics.track_document_pruned(&doc.path);
                continue;
            }

            let has_blocks = structure
                .sections
                .iter()
                .any(|s| s.position.is_some() && s.kind.is_searchable());
            if !has_blocks {
                continue;
            }

            let lines = match self.store.read_text(doc).await {
                Ok(lines) => lines,
                Err(source) => {
                    self.document_failed(generation, doc, source)?;
                    continue;
                }
            };
            self.metrics.track_document_scanned();
            self.ensure_current(generation)?;

            for block in extract_blocks(doc, &structure, &lines) {
                if matcher.matches(&block.content) {
                    aggregator.push(doc, block);
                }
            }
        }

        self.ensure_current(generation)?;

        let document_count = aggregator.document_count();
        let block_count = aggregator.block_count();
        self.metrics
            .track_query(timer.finish(), document_count, block_count);

        Ok(aggregator.finish())
    }

    async fn suggest(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let candidates = suggestions::link_candidates(self.store.as_ref()).await?;
        Ok(suggestions::filter_candidates(&candidates, prefix))
    }

    fn related_links(&self, results: &[SearchResult], active_terms: &[SearchTerm]) -> Vec<String> {
        suggestions::related_links(results, active_terms)
    }

    async fn property_facets(&self, results: &[SearchResult]) -> StoreResult<PropertyFacets> {
        suggestions::property_facets(self.store.as_ref(), results).await
    }
}
