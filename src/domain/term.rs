//! SearchTerm value object.

use super::errors::ValidationError;
use super::operator::Operator;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A single search atom: literal value, text-vs-link mode and operator.
///
/// Terms are validated at construction (the literal is trimmed and must not be
/// empty) and are immutable afterwards.
///
/// # Example
///
/// ```
/// use vault_block_search::domain::{Operator, SearchTerm};
///
/// let term = SearchTerm::link("  Dr. Smith ", Operator::And).unwrap();
/// assert_eq!(term.term(), "Dr. Smith");
/// assert!(!term.is_text_search());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTerm {
    term: String,
    is_text_search: bool,
    operator: Operator,
}

impl SearchTerm {
    /// Create a new term, trimming the literal.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyTerm` if the literal is blank.
    pub fn new(
        term: impl Into<String>,
        is_text_search: bool,
        operator: Operator,
    ) -> Result<Self, ValidationError> {
        let term = term.into();
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyTerm);
        }
        Ok(Self {
            term: trimmed.to_string(),
            is_text_search,
            operator,
        })
    }

    /// Create a link term (matched against wikilink targets).
    pub fn link(term: impl Into<String>, operator: Operator) -> Result<Self, ValidationError> {
        Self::new(term, false, operator)
    }

    /// Create a text term (case-insensitive substring of block text).
    pub fn text(term: impl Into<String>, operator: Operator) -> Result<Self, ValidationError> {
        Self::new(term, true, operator)
    }

    /// The literal value.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_text_search(&self) -> bool {
        self.is_text_search
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Split a `key:value` link term into its trimmed key and value.
    ///
    /// Text terms are never property filters, even when they contain a colon.
    pub fn property_filter(&self) -> Option<(&str, &str)> {
        if self.is_text_search {
            return None;
        }
        let (key, value) = self.term.split_once(':')?;
        Some((key.trim(), value.trim()))
    }

    /// Whether this term and `other` collide under the `(term, operator)` uniqueness rule.
    pub fn same_slot(&self, other: &SearchTerm) -> bool {
        self.term == other.term && self.operator == other.operator
    }
}

/// Build the `key:value` literal for a property filter term.
pub fn property_term(key: &str, value: &str) -> String {
    format!("{}:{}", key, value)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSearchTerm {
    term: String,
    #[serde(default)]
    is_text_search: bool,
    #[serde(default)]
    operator: Operator,
}

// Serde support - deserialize with the same validation as `new`
impl<'de> Deserialize<'de> for SearchTerm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSearchTerm::deserialize(deserializer)?;
        SearchTerm::new(raw.term, raw.is_text_search, raw.operator)
            .map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.is_text_search { "text" } else { "link" };
        write!(f, "{} ({}, {})", self.term, mode, self.operator)
    }
}
