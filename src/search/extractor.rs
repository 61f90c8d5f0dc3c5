//! Block extraction: sections to matchable blocks.

use crate::models::{Block, DocumentRef, DocumentStructure, LineRange, SectionKind};

/// Convert a document's sections into candidate blocks.
///
/// Only paragraph, table, list, footnote definition and callout sections are
/// considered. A list section yields one block per list item nested inside it;
/// every other section yields one block for its full range. Emission follows
/// section order, then item order.
pub fn extract_blocks(
    doc: &DocumentRef,
    structure: &DocumentStructure,
    lines: &[String],
) -> Vec<Block> {
    let mut blocks = Vec::new();

    for section in &structure.sections {
        let Some(range) = section.position else {
            continue;
        };
        if !section.kind.is_searchable() {
            continue;
        }

        if section.kind == SectionKind::List {
            blocks.extend(
                structure
                    .list_items
                    .iter()
                    .filter(|item| range.contains(&item.position))
                    .filter_map(|item| block_for_range(&doc.path, lines, item.position)),
            );
        } else if let Some(block) = block_for_range(&doc.path, lines, range) {
            blocks.push(block);
        }
    }

    blocks
}

/// Build a block from a line range, clamped to the text.
///
/// Returns `None` when the range starts past the last line.
pub fn block_for_range(path: &str, lines: &[String], range: LineRange) -> Option<Block> {
    if range.start >= lines.len() || range.end < range.start {
        return None;
    }
    let end = range.end.min(lines.len() - 1);
    Some(Block {
        path: path.to_string(),
        content: lines[range.start..=end].join("\n"),
        start_line: range.start,
        end_line: end,
    })
}
