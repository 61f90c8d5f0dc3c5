//! Wikilink extraction.

use once_cell::sync::Lazy;
use regex::Regex;

static WIKILINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("Failed to compile wikilink regex"));

/// Extract every wikilink target from `text`.
///
/// The alias after `|` is dropped and the target trimmed. Empty targets are skipped.
/// Links never span lines.
pub fn extract_wikilinks(text: &str) -> Vec<String> {
    if !text.contains("[[") {
        return Vec::new();
    }
    WIKILINK_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|inner| link_target(inner.as_str()))
        .filter(|target| !target.is_empty())
        .map(str::to_string)
        .collect()
}

/// Target part of a wikilink body: `Note|alias` becomes `Note`.
pub fn link_target(inner: &str) -> &str {
    inner.split('|').next().unwrap_or("").trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_and_aliased() {
        let links = extract_wikilinks("See [[Alpha]] and [[ Beta | the beta ]] today");
        assert_eq!(links, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_extract_keeps_heading_suffix_and_embeds() {
        let links = extract_wikilinks("![[diagram.png]] then [[Note#Section|here]]");
        assert_eq!(links, vec!["diagram.png", "Note#Section"]);
    }

    #[test]
    fn test_extract_skips_empty_and_unclosed() {
        assert!(extract_wikilinks("[[]] and [[ | alias]]").is_empty());
        assert!(extract_wikilinks("broken [[link").is_empty());
        assert!(extract_wikilinks("no links at all").is_empty());
    }

    #[test]
    fn test_links_do_not_span_lines() {
        assert!(extract_wikilinks("[[split\nlink]]").is_empty());
        assert_eq!(extract_wikilinks("[[one]]\n[[two]]"), vec!["one", "two"]);
    }

    #[test]
    fn test_non_greedy_match() {
        assert_eq!(extract_wikilinks("[[a]]b]]"), vec!["a"]);
    }
}
