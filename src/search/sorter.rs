//! Presentation-time ordering of search results.

use crate::models::SearchResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Key results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Document display name
    #[default]
    Title,
    /// Last modification timestamp
    Modified,
    /// Creation timestamp
    Created,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Modified => "modified",
            Self::Created => "created",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "name" => Ok(Self::Title),
            "modified" | "mtime" => Ok(Self::Modified),
            "created" | "ctime" => Ok(Self::Created),
            other => Err(format!(
                "Must be one of title, modified, created, got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sort preference: field plus direction, toggled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Same field, opposite direction.
    pub fn toggled(self) -> Self {
        Self {
            field: self.field,
            order: self.order.toggled(),
        }
    }
}

/// Compare display names the way a collator would for plain text.
///
/// Case is ignored first; on a tie lowercase sorts before uppercase, then the raw
/// strings decide.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn compare_by(field: SortField, a: &SearchResult, b: &SearchResult) -> Ordering {
    match field {
        SortField::Title => compare_titles(&a.document.name, &b.document.name),
        SortField::Modified => a.document.modified.cmp(&b.document.modified),
        SortField::Created => a.document.created.cmp(&b.document.created),
    }
}

/// Return the results ordered by `spec`, leaving the input untouched.
///
/// The sort is stable: equal keys keep their scan order in both directions.
pub fn sort_results(results: &[SearchResult], spec: SortSpec) -> Vec<SearchResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by(spec.field, a, b);
        match spec.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}
