//! Autocomplete candidates, related-link chips and property facets.
//!
//! Nothing here is cached: every call rescans the store or the result set.

use crate::domain::{property_term, ModifierKeys, Operator, SearchTerm, ValidationError};
use crate::error::StoreResult;
use crate::markdown::extract_wikilinks;
use crate::models::SearchResult;
use crate::repositories::DocumentStore;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Property key to the distinct value strings seen in a result set.
pub type PropertyFacets = BTreeMap<String, BTreeSet<String>>;

/// Every known link target: document display names, then link targets that name
/// no existing document.
///
/// Names come first in store order; unresolved targets follow in first-seen order.
pub async fn link_candidates(store: &dyn DocumentStore) -> StoreResult<Vec<String>> {
    let documents = store.list_documents().await?;

    let mut candidates = Vec::new();
    let mut seen = HashSet::new();
    for doc in &documents {
        if seen.insert(doc.name.clone()) {
            candidates.push(doc.name.clone());
        }
    }

    for doc in &documents {
        let Some(structure) = store.get_structure(doc).await? else {
            continue;
        };
        for link in &structure.links {
            let target = link.link_text();
            if !target.is_empty() && seen.insert(target.to_string()) {
                candidates.push(target.to_string());
            }
        }
    }

    Ok(candidates)
}

/// Candidates containing `input`, ignoring case. Empty input keeps everything.
///
/// The input is used as typed; surrounding whitespace is part of the needle.
pub fn filter_candidates(candidates: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    candidates
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Link targets inside matched blocks that are not already search terms.
///
/// Comparison with active terms ignores case. Order is first appearance.
pub fn related_links(results: &[SearchResult], active_terms: &[SearchTerm]) -> Vec<String> {
    let active: HashSet<String> = active_terms
        .iter()
        .map(|t| t.term().to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for block in results.iter().flat_map(|r| &r.blocks) {
        for target in extract_wikilinks(&block.content) {
            if active.contains(&target.to_lowercase()) {
                continue;
            }
            if seen.insert(target.clone()) {
                links.push(target);
            }
        }
    }
    links
}

/// Frontmatter keys and values of the documents in a result set.
///
/// Null values and null array elements are skipped.
pub async fn property_facets(
    store: &dyn DocumentStore,
    results: &[SearchResult],
) -> StoreResult<PropertyFacets> {
    let mut facets = PropertyFacets::new();
    for result in results {
        let Some(structure) = store.get_structure(&result.document).await? else {
            continue;
        };
        for (key, value) in &structure.frontmatter {
            if value.is_null() {
                continue;
            }
            facets
                .entry(key.clone())
                .or_default()
                .extend(value.value_strings());
        }
    }
    Ok(facets)
}

/// Build the link term for a picked suggestion, choosing the operator from modifiers.
pub fn suggestion_term(value: &str, keys: ModifierKeys) -> Result<SearchTerm, ValidationError> {
    SearchTerm::link(value, Operator::from_modifiers(keys))
}

/// Build the property filter term for a picked facet value.
pub fn facet_term(
    key: &str,
    value: &str,
    keys: ModifierKeys,
) -> Result<SearchTerm, ValidationError> {
    if key.trim().is_empty() {
        return Err(ValidationError::MissingPropertyKey(value.to_string()));
    }
    SearchTerm::link(property_term(key, value), Operator::from_modifiers(keys))
}
