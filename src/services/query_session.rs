//! Query session state.
//!
//! Holds the stored term list and the display sort. The engine never reads
//! this implicitly; callers pass `terms()` into each evaluation.

use crate::domain::{Operator, SearchTerm};
use crate::models::SearchResult;
use crate::query::{active_terms, is_orphan_or};
use crate::search::{sort_results, SortSpec};

/// The terms a user has entered plus their chosen result ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySession {
    terms: Vec<SearchTerm>,
    sort: SortSpec,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with a given sort, typically `Config::default_sort`.
    pub fn with_sort(sort: SortSpec) -> Self {
        Self {
            terms: Vec::new(),
            sort,
        }
    }

    /// Add a term from raw input.
    ///
    /// Blank input and duplicate `(term, operator)` pairs are ignored. Returns
    /// whether the term was added.
    pub fn add_term(&mut self, raw: &str, is_text_search: bool, operator: Operator) -> bool {
        match SearchTerm::new(raw, is_text_search, operator) {
            Ok(term) => self.add(term),
            Err(_) => false,
        }
    }

    /// Add an already validated term, ignoring duplicates.
    pub fn add(&mut self, term: SearchTerm) -> bool {
        if self.terms.iter().any(|t| t.same_slot(&term)) {
            return false;
        }
        self.terms.push(term);
        true
    }

    /// Remove the term with this literal and operator. Returns whether one was removed.
    pub fn remove_term(&mut self, term: &str, operator: Operator) -> bool {
        let before = self.terms.len();
        let term = term.trim();
        self.terms
            .retain(|t| !(t.term() == term && t.operator() == operator));
        self.terms.len() != before
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Stored terms in insertion order, including an inert lone OR term.
    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    /// Terms that take part in matching.
    pub fn active_terms(&self) -> Vec<SearchTerm> {
        active_terms(&self.terms)
    }

    /// Whether the single OR term is currently ignored by matching.
    pub fn is_orphan_or(&self) -> bool {
        is_orphan_or(&self.terms)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Flip between ascending and descending, keeping the field.
    pub fn toggle_order(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// Results ordered by this session's sort.
    pub fn sorted(&self, results: &[SearchResult]) -> Vec<SearchResult> {
        sort_results(results, self.sort)
    }
}
