//! Query classification: orphan-OR removal and term grouping.

use super::predicate::PropertyFilterMap;
use crate::domain::{Operator, SearchTerm};

/// Whether the term list holds exactly one OR term, which is logically inert.
pub fn is_orphan_or(terms: &[SearchTerm]) -> bool {
    terms.iter().filter(|t| t.operator() == Operator::Or).count() == 1
}

/// The working set used for matching: the lone OR term, if any, is dropped.
///
/// The caller's term list is untouched.
pub fn active_terms(terms: &[SearchTerm]) -> Vec<SearchTerm> {
    let orphan = is_orphan_or(terms);
    terms
        .iter()
        .filter(|t| !(orphan && t.operator() == Operator::Or))
        .cloned()
        .collect()
}

/// A term list split into property filters and per-operator block terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedQuery {
    pub and_terms: Vec<SearchTerm>,
    pub or_terms: Vec<SearchTerm>,
    pub not_terms: Vec<SearchTerm>,
    pub property_filters: PropertyFilterMap,
}

impl ClassifiedQuery {
    /// Classify a stored term list, applying the orphan-OR rule first.
    pub fn classify(terms: &[SearchTerm]) -> Self {
        let mut query = Self::default();

        for term in active_terms(terms) {
            if let Some((key, value)) = term.property_filter() {
                query.property_filters.insert(term.operator(), key, value);
                continue;
            }
            match term.operator() {
                Operator::And => query.and_terms.push(term),
                Operator::Or => query.or_terms.push(term),
                Operator::Not => query.not_terms.push(term),
            }
        }

        query
    }

    /// Whether any link/text term constrains blocks.
    pub fn has_block_terms(&self) -> bool {
        !(self.and_terms.is_empty() && self.or_terms.is_empty() && self.not_terms.is_empty())
    }

    /// Number of block terms plus property filter keys.
    pub fn term_count(&self) -> usize {
        self.and_terms.len()
            + self.or_terms.len()
            + self.not_terms.len()
            + Operator::ALL
                .iter()
                .map(|op| self.property_filters.group(*op).len())
                .sum::<usize>()
    }
}
