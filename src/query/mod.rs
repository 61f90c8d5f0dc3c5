//! Query classification and document-level property predicates.

pub mod classifier;
pub mod predicate;

pub use classifier::{active_terms, is_orphan_or, ClassifiedQuery};
pub use predicate::{property_matches, property_matches_all, PropertyFilterMap, PropertyGroup};
