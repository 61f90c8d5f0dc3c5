//! Document model: identity, structural metadata and frontmatter values.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Identity and timestamps of a document in the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DocumentRef {
    /// Stable identity (vault-relative path)
    pub path: String,

    /// Display name (file stem)
    pub name: String,

    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub created: i64,

    /// Last modification time in epoch milliseconds
    #[serde(default)]
    pub modified: i64,
}

impl DocumentRef {
    /// Create a document reference, deriving the display name from the path.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = display_name(&path).to_string();
        Self {
            path,
            name,
            created: 0,
            modified: 0,
        }
    }

    /// Set created/modified timestamps.
    pub fn with_timestamps(mut self, created: i64, modified: i64) -> Self {
        self.created = created;
        self.modified = modified;
        self
    }
}

/// File stem of a `/`-separated path: `notes/Inbox.md` becomes `Inbox`.
pub fn display_name(path: &str) -> &str {
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rfind('.') {
        Some(idx) if idx > 0 => &file[..idx],
        _ => file,
    }
}

/// Inclusive, zero-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies entirely inside this range.
    pub fn contains(&self, other: &LineRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// Structural section type as reported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Paragraph,
    Table,
    List,
    FootnoteDefinition,
    Callout,
    Heading,
    Code,
    Blockquote,
    ThematicBreak,
    Yaml,
    #[serde(other)]
    Other,
}

impl SectionKind {
    /// Section types whose text can produce blocks.
    pub fn is_searchable(&self) -> bool {
        matches!(
            self,
            Self::Paragraph | Self::Table | Self::List | Self::FootnoteDefinition | Self::Callout
        )
    }
}

/// A typed section. Sections without position info contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    #[serde(default)]
    pub position: Option<LineRange>,
}

impl Section {
    pub fn new(kind: SectionKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            position: Some(LineRange::new(start, end)),
        }
    }
}

/// A list item and its own line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub position: LineRange,
}

impl ListItem {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            position: LineRange::new(start, end),
        }
    }
}

/// An outbound link reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRef {
    pub target: String,
}

impl LinkRef {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Link target with any alias after `|` removed, trimmed.
    pub fn link_text(&self) -> &str {
        self.target.split('|').next().unwrap_or("").trim()
    }
}

/// A scalar frontmatter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    /// String form used for filter matching.
    ///
    /// Numbers use the shortest round-trip digits, switching to exponent form
    /// (`1e+21`, `1.5e-7`) outside `1e-6 <= |n| < 1e21`. The parsed value is
    /// what matches, so YAML `1e5` matches the filter `n:100000`.
    pub fn as_match_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => number_string(*n),
            Self::String(s) => s.clone(),
        }
    }
}

fn number_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return n.to_string();
    }

    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

/// A frontmatter value: absent (null), a scalar, or an array of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FrontmatterValue {
    #[default]
    Null,
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl FrontmatterValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::String(value.into()))
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(
            values
                .into_iter()
                .map(|v| Scalar::String(v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// String forms of the value; empty for null.
    pub fn value_strings(&self) -> Vec<String> {
        match self {
            Self::Null => Vec::new(),
            Self::Scalar(s) => vec![s.as_match_string()],
            Self::List(items) => items.iter().map(Scalar::as_match_string).collect(),
        }
    }

    /// Whether the value (or any array element) is a member of `accepted`.
    pub fn matches_any(&self, accepted: &HashSet<String>) -> bool {
        match self {
            Self::Null => false,
            Self::Scalar(s) => accepted.contains(&s.as_match_string()),
            Self::List(items) => items
                .iter()
                .any(|item| accepted.contains(&item.as_match_string())),
        }
    }
}

impl From<serde_json::Value> for FrontmatterValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => Self::List(
                items
                    .into_iter()
                    .filter_map(|item| match Self::from(item) {
                        Self::Scalar(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            other => json_scalar(other).map_or(Self::Null, Self::Scalar),
        }
    }
}

fn json_scalar(value: serde_json::Value) -> Option<Scalar> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => Some(Scalar::Bool(b)),
        serde_json::Value::Number(n) => n.as_f64().map(Scalar::Number),
        serde_json::Value::String(s) => Some(Scalar::String(s)),
        // Nested objects keep their JSON text
        other => Some(Scalar::String(other.to_string())),
    }
}

/// Frontmatter key/value map.
pub type Frontmatter = BTreeMap<String, FrontmatterValue>;

/// Structural metadata for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DocumentStructure {
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub list_items: Vec<ListItem>,
    #[serde(default)]
    pub frontmatter: Frontmatter,
    #[serde(default)]
    pub links: Vec<LinkRef>,
}
