//! Query metrics.
//!
//! Counters for monitoring how much work query evaluation does and how often
//! scans are superseded or hit unreadable documents.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker shared by an engine and its clones.
#[derive(Debug, Clone)]
pub struct QueryMetrics {
    queries_total: Arc<AtomicU64>,
    queries_superseded: Arc<AtomicU64>,
    documents_scanned: Arc<AtomicU64>,
    documents_pruned: Arc<AtomicU64>,
    blocks_matched: Arc<AtomicU64>,
    read_failures: Arc<AtomicU64>,
}

/// Point-in-time copy of all counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSummary {
    pub queries_total: u64,
    pub queries_superseded: u64,
    pub documents_scanned: u64,
    pub documents_pruned: u64,
    pub blocks_matched: u64,
    pub read_failures: u64,
}

impl QueryMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            queries_total: Arc::new(AtomicU64::new(0)),
            queries_superseded: Arc::new(AtomicU64::new(0)),
            documents_scanned: Arc::new(AtomicU64::new(0)),
            documents_pruned: Arc::new(AtomicU64::new(0)),
            blocks_matched: Arc::new(AtomicU64::new(0)),
            read_failures: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a completed query.
    pub fn track_query(&self, duration_ms: u128, document_count: usize, block_count: usize) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);
        self.blocks_matched
            .fetch_add(block_count as u64, Ordering::Relaxed);

        tracing::info!(
            duration_ms = duration_ms,
            document_count = document_count,
            block_count = block_count,
            "Query completed"
        );
    }

    /// Track a query whose results were discarded as stale.
    pub fn track_superseded(&self, generation: u64, latest: u64) {
        self.queries_superseded.fetch_add(1, Ordering::Relaxed);
        tracing::warn!(
            generation = generation,
            latest = latest,
            "Query superseded, discarding results"
        );
    }

    /// Track a document whose text was read and scanned.
    pub fn track_document_scanned(&self) {
        self.documents_scanned.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a document rejected by the property predicate.
    pub fn track_document_pruned(&self, path: &str) {
        self.documents_pruned.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(path = %path, "Document pruned by property filters");
    }

    /// Track a failed document read.
    pub fn track_read_failure(&self) {
        self.read_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn queries_total(&self) -> u64 {
        self.queries_total.load(Ordering::Relaxed)
    }

    pub fn queries_superseded(&self) -> u64 {
        self.queries_superseded.load(Ordering::Relaxed)
    }

    pub fn documents_scanned(&self) -> u64 {
        self.documents_scanned.load(Ordering::Relaxed)
    }

    pub fn documents_pruned(&self) -> u64 {
        self.documents_pruned.load(Ordering::Relaxed)
    }

    pub fn blocks_matched(&self) -> u64 {
        self.blocks_matched.load(Ordering::Relaxed)
    }

    pub fn read_failures(&self) -> u64 {
        self.read_failures.load(Ordering::Relaxed)
    }

    /// Snapshot all counters.
    pub fn snapshot(&self) -> MetricsSummary {
        MetricsSummary {
            queries_total: self.queries_total(),
            queries_superseded: self.queries_superseded(),
            documents_scanned: self.documents_scanned(),
            documents_pruned: self.documents_pruned(),
            blocks_matched: self.blocks_matched(),
            read_failures: self.read_failures(),
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        let s = self.snapshot();
        format!(
            "Metrics Summary:\n\
             Queries: {}\n\
             Superseded: {}\n\
             Documents Scanned: {}\n\
             Documents Pruned: {}\n\
             Blocks Matched: {}\n\
             Read Failures: {}",
            s.queries_total,
            s.queries_superseded,
            s.documents_scanned,
            s.documents_pruned,
            s.blocks_matched,
            s.read_failures,
        )
    }
}

impl Default for QueryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Elapsed time so far in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.elapsed_ms();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = QueryMetrics::new();
        assert_eq!(metrics.snapshot(), MetricsSummary::default());
    }

    #[test]
    fn test_track_query() {
        let metrics = QueryMetrics::new();
        metrics.track_query(12, 2, 5);
        metrics.track_query(3, 1, 1);
        assert_eq!(metrics.queries_total(), 2);
        assert_eq!(metrics.blocks_matched(), 6);
    }

    #[test]
    fn test_document_counters() {
        let metrics = QueryMetrics::new();
        metrics.track_document_scanned();
        metrics.track_document_scanned();
        metrics.track_document_pruned("a.md");
        metrics.track_read_failure();
        metrics.track_superseded(1, 2);

        let s = metrics.snapshot();
        assert_eq!(s.documents_scanned, 2);
        assert_eq!(s.documents_pruned, 1);
        assert_eq!(s.read_failures, 1);
        assert_eq!(s.queries_superseded, 1);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = QueryMetrics::new();
        let clone = metrics.clone();
        clone.track_document_scanned();
        assert_eq!(metrics.documents_scanned(), 1);
    }

    #[test]
    fn test_timer() {
        let timer = Timer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        let duration = timer.finish();
        assert!(duration >= 10);
    }

    #[test]
    fn test_summary() {
        let metrics = QueryMetrics::new();
        metrics.track_query(1, 1, 3);

        let summary = metrics.summary();
        assert!(summary.contains("Queries: 1"));
        assert!(summary.contains("Blocks Matched: 3"));
    }
}
