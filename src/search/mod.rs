//! Block extraction, boolean matching, aggregation and ordering.
//!
//! Together these turn a classified query and a document's structure into
//! per-document lists of matched blocks.

pub mod aggregator;
pub mod extractor;
pub mod matcher;
pub mod sorter;

pub use aggregator::ResultAggregator;
pub use extractor::{block_for_range, extract_blocks};
pub use matcher::{term_matches, BlockMatcher};
pub use sorter::{compare_titles, sort_results, SortField, SortOrder, SortSpec};
