//! Property-filter predicate over document frontmatter.

use crate::domain::Operator;
use crate::models::Frontmatter;
use std::collections::{BTreeMap, HashSet};

/// Accepted values per property key.
pub type PropertyGroup = BTreeMap<String, HashSet<String>>;

/// Property filters grouped by operator.
///
/// Terms sharing a key and operator are absorbed into one accepted-value set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilterMap {
    and: PropertyGroup,
    or: PropertyGroup,
    not: PropertyGroup,
}

impl PropertyFilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an accepted value for `key` under `operator`.
    pub fn insert(&mut self, operator: Operator, key: &str, value: &str) {
        self.group_mut(operator)
            .entry(key.to_string())
            .or_default()
            .insert(value.to_string());
    }

    pub fn group(&self, operator: Operator) -> &PropertyGroup {
        match operator {
            Operator::And => &self.and,
            Operator::Or => &self.or,
            Operator::Not => &self.not,
        }
    }

    fn group_mut(&mut self, operator: Operator) -> &mut PropertyGroup {
        match operator {
            Operator::And => &mut self.and,
            Operator::Or => &mut self.or,
            Operator::Not => &mut self.not,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.and.is_empty() && self.or.is_empty() && self.not.is_empty()
    }

    /// Decide whether a document's frontmatter passes all three filter groups.
    ///
    /// - AND: every key must exist and carry every accepted value.
    /// - OR: when non-empty, at least one key must exist and match.
    /// - NOT: no key may exist and match. Missing values pass.
    pub fn accepts(&self, frontmatter: &Frontmatter) -> bool {
        let passes_and = self
            .and
            .iter()
            .all(|(key, accepted)| property_matches_all(frontmatter, key, accepted));
        let passes_or = self.or.is_empty()
            || self
                .or
                .iter()
                .any(|(key, accepted)| property_matches(frontmatter, key, accepted));
        let passes_not = !self
            .not
            .iter()
            .any(|(key, accepted)| property_matches(frontmatter, key, accepted));

        passes_and && passes_or && passes_not
    }
}

/// Whether the property exists, is non-null, and has a value in `accepted`.
pub fn property_matches(frontmatter: &Frontmatter, key: &str, accepted: &HashSet<String>) -> bool {
    frontmatter
        .get(key)
        .map(|value| value.matches_any(accepted))
        .unwrap_or(false)
}

/// Whether the property exists and carries every value in `accepted`.
///
/// With a single accepted value this is the same membership test as
/// [`property_matches`]; with several it needs a multi-valued property.
pub fn property_matches_all(
    frontmatter: &Frontmatter,
    key: &str,
    accepted: &HashSet<String>,
) -> bool {
    let Some(value) = frontmatter.get(key) else {
        return false;
    };
    let present: HashSet<String> = value.value_strings().into_iter().collect();
    !present.is_empty() && accepted.iter().all(|v| present.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FrontmatterValue, Scalar};

    fn frontmatter(pairs: &[(&str, FrontmatterValue)]) -> Frontmatter {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn tagged() -> Frontmatter {
        frontmatter(&[
            ("tags", FrontmatterValue::list(["urgent", "work"])),
            ("status", FrontmatterValue::string("active")),
            ("priority", FrontmatterValue::Scalar(Scalar::Number(2.0))),
            ("owner", FrontmatterValue::Null),
        ])
    }

    #[test]
    fn test_empty_map_accepts_everything() {
        let filters = PropertyFilterMap::new();
        assert!(filters.is_empty());
        assert!(filters.accepts(&Frontmatter::new()));
        assert!(filters.accepts(&tagged()));
    }

    #[test]
    fn test_array_valued_property_under_each_operator() {
        let mut and = PropertyFilterMap::new();
        and.insert(Operator::And, "tags", "urgent");
        assert!(and.accepts(&tagged()));

        let mut or = PropertyFilterMap::new();
        or.insert(Operator::Or, "tags", "urgent");
        assert!(or.accepts(&tagged()));

        let mut not = PropertyFilterMap::new();
        not.insert(Operator::Not, "tags", "urgent");
        assert!(!not.accepts(&tagged()));
    }

    #[test]
    fn test_and_requires_every_key() {
        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::And, "status", "active");
        filters.insert(Operator::And, "missing", "x");
        assert!(!filters.accepts(&tagged()));
    }

    #[test]
    fn test_same_key_values_are_absorbed() {
        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::Or, "status", "done");
        filters.insert(Operator::Or, "status", "active");
        assert_eq!(filters.group(Operator::Or)["status"].len(), 2);
        assert!(filters.accepts(&tagged()));

        // Under AND both values are required, which a scalar cannot satisfy
        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::And, "priority", "2");
        filters.insert(Operator::And, "priority", "5");
        assert_eq!(filters.group(Operator::And).len(), 1);
        assert!(!filters.accepts(&tagged()));

        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::And, "tags", "urgent");
        filters.insert(Operator::And, "tags", "work");
        assert!(filters.accepts(&tagged()));
    }

    #[test]
    fn test_or_needs_one_match() {
        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::Or, "status", "archived");
        filters.insert(Operator::Or, "missing", "x");
        assert!(!filters.accepts(&tagged()));

        filters.insert(Operator::Or, "tags", "work");
        assert!(filters.accepts(&tagged()));
    }

    #[test]
    fn test_null_and_missing_values() {
        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::And, "owner", "me");
        assert!(!filters.accepts(&tagged()));

        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::Not, "owner", "me");
        filters.insert(Operator::Not, "missing", "x");
        assert!(filters.accepts(&tagged()));
    }

    #[test]
    fn test_numeric_scalar_uses_string_form() {
        let mut filters = PropertyFilterMap::new();
        filters.insert(Operator::And, "priority", "2");
        assert!(filters.accepts(&tagged()));
    }
}
