//! Markdown scanning: frontmatter, section structure and wikilinks.

pub mod frontmatter;
pub mod links;
pub mod structure;

pub use frontmatter::parse_frontmatter;
pub use links::extract_wikilinks;
pub use structure::{parse_structure, split_lines};
