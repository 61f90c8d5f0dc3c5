//! Boolean block matching over link and text terms.

use crate::domain::SearchTerm;
use crate::markdown::extract_wikilinks;
use crate::query::ClassifiedQuery;
use once_cell::unsync::OnceCell;

/// A term prepared for case-insensitive matching.
#[derive(Debug, Clone)]
struct TermPattern {
    needle: String,
    is_text_search: bool,
}

impl TermPattern {
    fn new(term: &SearchTerm) -> Self {
        Self {
            needle: term.term().to_lowercase(),
            is_text_search: term.is_text_search(),
        }
    }

    fn matches(&self, text: &BlockText<'_>) -> bool {
        if self.is_text_search {
            text.lowercase().contains(&self.needle)
        } else {
            text.link_targets().iter().any(|target| *target == self.needle)
        }
    }
}

/// Lazily lowercased view of a block's text and its link targets.
struct BlockText<'a> {
    raw: &'a str,
    lower: OnceCell<String>,
    links: OnceCell<Vec<String>>,
}

impl<'a> BlockText<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: OnceCell::new(),
            links: OnceCell::new(),
        }
    }

    fn lowercase(&self) -> &str {
        self.lower.get_or_init(|| self.raw.to_lowercase())
    }

    fn link_targets(&self) -> &[String] {
        self.links.get_or_init(|| {
            extract_wikilinks(self.raw)
                .into_iter()
                .map(|target| target.to_lowercase())
                .collect()
        })
    }
}

/// Evaluates the AND/OR/NOT combination of block terms against block text.
///
/// Text terms match as case-insensitive substrings; link terms match a wikilink
/// target exactly, ignoring case. Empty groups are vacuously satisfied.
#[derive(Debug, Clone, Default)]
pub struct BlockMatcher {
    and: Vec<TermPattern>,
    or: Vec<TermPattern>,
    not: Vec<TermPattern>,
}

impl BlockMatcher {
    pub fn new(query: &ClassifiedQuery) -> Self {
        let prepare =
            |terms: &[SearchTerm]| -> Vec<TermPattern> { terms.iter().map(TermPattern::new).collect() };
        Self {
            and: prepare(&query.and_terms),
            or: prepare(&query.or_terms),
            not: prepare(&query.not_terms),
        }
    }

    /// Whether every qualifying block matches.
    pub fn matches_everything(&self) -> bool {
        self.and.is_empty() && self.or.is_empty() && self.not.is_empty()
    }

    /// Whether a block's raw text satisfies the query.
    pub fn matches(&self, content: &str) -> bool {
        let text = BlockText::new(content);

        let matches_and = self.and.iter().all(|p| p.matches(&text));
        let matches_or = self.or.is_empty() || self.or.iter().any(|p| p.matches(&text));
        let matches_not = !self.not.iter().any(|p| p.matches(&text));

        matches_and && matches_or && matches_not
    }
}

/// Whether one term matches a block's raw text.
pub fn term_matches(term: &SearchTerm, content: &str) -> bool {
    TermPattern::new(term).matches(&BlockText::new(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operator;

    fn matcher(terms: &[SearchTerm]) -> BlockMatcher {
        BlockMatcher::new(&ClassifiedQuery::classify(terms))
    }

    fn link(term: &str, op: Operator) -> SearchTerm {
        SearchTerm::link(term, op).unwrap()
    }

    #[test]
    fn test_and_semantics() {
        let block = "- See [[Alpha]] and [[Beta]]";
        assert!(matcher(&[link("Alpha", Operator::And), link("Beta", Operator::And)])
            .matches(block));
        assert!(!matcher(&[link("Alpha", Operator::And), link("Gamma", Operator::And)])
            .matches(block));
    }

    #[test]
    fn test_link_match_is_exact_and_case_insensitive() {
        let block = "Talk to [[Dr. Smith|the doctor]]";
        assert!(term_matches(&link("dr. smith", Operator::And), block));
        assert!(!term_matches(&link("Smith", Operator::And), block));
        // Plain text mention is not a link
        assert!(!term_matches(&link("Talk", Operator::And), block));
    }

    #[test]
    fn test_text_match_is_substring() {
        let term = SearchTerm::text("SCHED", Operator::And).unwrap();
        assert!(term_matches(&term, "See [[Dr. Smith]] about schedule."));
        assert!(!term_matches(&term, "nothing here"));
    }

    #[test]
    fn test_or_semantics() {
        let m = matcher(&[link("Alpha", Operator::Or), link("Beta", Operator::Or)]);
        assert!(m.matches("[[Beta]] only"));
        assert!(!m.matches("[[Gamma]] only"));
    }

    #[test]
    fn test_not_semantics() {
        let m = matcher(&[link("Alpha", Operator::Not)]);
        assert!(!m.matches("a block with [[Alpha]]"));
        assert!(m.matches("a block with [[Beta]]"));
        assert!(m.matches("no links"));
    }

    #[test]
    fn test_orphan_or_matches_everything() {
        let m = matcher(&[link("Alpha", Operator::Or)]);
        assert!(m.matches_everything());
        assert!(m.matches("anything"));
    }

    #[test]
    fn test_property_only_matches_everything() {
        let m = matcher(&[link("status:active", Operator::And)]);
        assert!(m.matches_everything());
        assert!(m.matches("plain paragraph"));
    }

    #[test]
    fn test_combined_groups() {
        let m = matcher(&[
            link("Alpha", Operator::And),
            SearchTerm::text("call", Operator::Or).unwrap(),
            SearchTerm::text("email", Operator::Or).unwrap(),
            link("Done", Operator::Not),
        ]);
        assert!(m.matches("- Call [[Alpha]]"));
        assert!(!m.matches("- Call [[Alpha]] [[Done]]"));
        assert!(!m.matches("- Visit [[Alpha]]"));
        assert!(!m.matches("- Email Alpha"));
    }
}
