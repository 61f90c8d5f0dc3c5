//! Markdown structure scanner.
//!
//! Produces the section/list-item/link metadata the query engine consumes from a
//! document's lines. Line numbers are zero-based and ranges inclusive.

use super::frontmatter::{frontmatter_end, parse_frontmatter};
use super::links::extract_wikilinks;
use crate::models::{DocumentStructure, LinkRef, ListItem, Section, SectionKind};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ {0,3}#{1,6}(\s|$)").expect("Failed to compile heading regex"));

static LIST_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([-*+]|\d{1,9}[.)])(\s|$)").expect("Failed to compile list marker regex")
});

static THEMATIC_BREAK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}((\*\s*){3,}|(-\s*){3,}|(_\s*){3,})$")
        .expect("Failed to compile thematic break regex")
});

static FOOTNOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[\^[^\]]+\]:").expect("Failed to compile footnote definition regex")
});

static CALLOUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*>\s*\[!").expect("Failed to compile callout regex"));

/// Split raw document text into lines, dropping a trailing `\r` from each.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Scan a document's lines into structural metadata.
pub fn parse_structure<S: AsRef<str>>(lines: &[S]) -> DocumentStructure {
    let mut structure = DocumentStructure::default();
    let mut i = 0;

    if let Some(end) = frontmatter_end(lines) {
        structure.frontmatter = parse_frontmatter(&lines[1..end]);
        structure.sections.push(Section::new(SectionKind::Yaml, 0, end));
        i = end + 1;
    }

    while i < lines.len() {
        let line = lines[i].as_ref();
        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        let (kind, end) = if let Some(fence) = fence_marker(line) {
            (SectionKind::Code, fence_end(lines, i, fence))
        } else if HEADING_RE.is_match(line) {
            (SectionKind::Heading, i)
        } else if THEMATIC_BREAK_RE.is_match(line) {
            (SectionKind::ThematicBreak, i)
        } else if is_quote(line) {
            let kind = if CALLOUT_RE.is_match(line) {
                SectionKind::Callout
            } else {
                SectionKind::Blockquote
            };
            (kind, run_end(lines, i, is_quote))
        } else if is_table_row(line) {
            (SectionKind::Table, run_end(lines, i, is_table_row))
        } else if FOOTNOTE_RE.is_match(line) {
            (
                SectionKind::FootnoteDefinition,
                run_end(lines, i, |l| l.starts_with(char::is_whitespace)),
            )
        } else if LIST_MARKER_RE.is_match(line) {
            let end = scan_list(lines, i, &mut structure.list_items);
            (SectionKind::List, end)
        } else {
            (SectionKind::Paragraph, paragraph_end(lines, i))
        };

        structure.sections.push(Section::new(kind, i, end));
        if kind != SectionKind::Code {
            for line in &lines[i..=end] {
                structure.links.extend(
                    extract_wikilinks(line.as_ref())
                        .into_iter()
                        .map(LinkRef::new),
                );
            }
        }
        i = end + 1;
    }

    structure
}

fn fence_marker(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with("```") {
        Some("```")
    } else if trimmed.starts_with("~~~") {
        Some("~~~")
    } else {
        None
    }
}

/// Closing fence line, or the last line when the fence is never closed.
fn fence_end<S: AsRef<str>>(lines: &[S], start: usize, fence: &str) -> usize {
    lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, line)| line.as_ref().trim_start().starts_with(fence))
        .map_or(lines.len() - 1, |(idx, _)| idx)
}

fn is_quote(line: &str) -> bool {
    line.trim_start().starts_with('>')
}

fn is_table_row(line: &str) -> bool {
    line.trim_start().starts_with('|')
}

/// Last line of the run of non-blank lines following `start` that satisfy `continues`.
fn run_end<S, F>(lines: &[S], start: usize, continues: F) -> usize
where
    S: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let mut end = start;
    while let Some(next) = lines.get(end + 1).map(AsRef::as_ref) {
        if next.trim().is_empty() || !continues(next) {
            break;
        }
        end += 1;
    }
    end
}

/// Whether `line` opens a block that interrupts a paragraph or list item.
fn interrupts(line: &str) -> bool {
    fence_marker(line).is_some()
        || HEADING_RE.is_match(line)
        || THEMATIC_BREAK_RE.is_match(line)
        || is_quote(line)
        || is_table_row(line)
}

fn paragraph_end<S: AsRef<str>>(lines: &[S], start: usize) -> usize {
    run_end(lines, start, |l| !interrupts(l) && !LIST_MARKER_RE.is_match(l))
}

/// Scan a list starting at `start`, recording one item per marker line.
///
/// Continuation lines extend the current item. Returns the list's last line.
fn scan_list<S: AsRef<str>>(lines: &[S], start: usize, items: &mut Vec<ListItem>) -> usize {
    let end = run_end(lines, start, |l| !interrupts(l));
    let mut item_start = start;
    for idx in start + 1..=end {
        if LIST_MARKER_RE.is_match(lines[idx].as_ref()) {
            items.push(ListItem::new(item_start, idx - 1));
            item_start = idx;
        }
    }
    items.push(ListItem::new(item_start, end));
    end
}
