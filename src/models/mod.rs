//! Data models for documents, blocks and search results.

pub mod block;
pub mod document;

pub use block::{Block, SearchResult};
pub use document::{
    display_name, DocumentRef, DocumentStructure, Frontmatter, FrontmatterValue, LineRange,
    LinkRef, ListItem, Scalar, Section, SectionKind,
};
