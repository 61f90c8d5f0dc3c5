//! Frontmatter detection and a small YAML-subset reader.
//!
//! Supported forms: `key: scalar`, `key: [a, b]` and `key:` followed by `- item`
//! lines. Anything richer is read as a plain string.

use crate::models::{Frontmatter, FrontmatterValue, Scalar};

const DELIMITER: &str = "---";

/// Find the closing delimiter of a leading frontmatter block.
///
/// Returns the index of the closing `---` line.
pub fn frontmatter_end<S: AsRef<str>>(lines: &[S]) -> Option<usize> {
    let first = lines.first()?;
    if first.as_ref().trim_end() != DELIMITER {
        return None;
    }
    lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| matches!(line.as_ref().trim_end(), DELIMITER | "..."))
        .map(|(idx, _)| idx)
}

/// Parse frontmatter body lines (without delimiters).
pub fn parse_frontmatter<S: AsRef<str>>(lines: &[S]) -> Frontmatter {
    let mut map = Frontmatter::new();
    let mut pending: Option<(String, Vec<Scalar>)> = None;

    for line in lines {
        let line = line.as_ref();
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some((_, items)) = pending.as_mut() {
            if let Some(item) = block_list_item(trimmed) {
                if let Some(scalar) = parse_scalar(item) {
                    items.push(scalar);
                }
                continue;
            }
        }

        if let Some((key, items)) = pending.take() {
            map.insert(key, block_list_value(items));
        }

        // Indented lines belong to structures we do not model
        if line.starts_with(char::is_whitespace) {
            continue;
        }

        let Some((key, raw)) = line.split_once(':') else {
            continue;
        };
        let key = unquote(key.trim());
        if key.is_empty() {
            continue;
        }

        let raw = raw.trim();
        if raw.is_empty() {
            pending = Some((key.to_string(), Vec::new()));
            continue;
        }

        let value = match raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
            Some(inner) => FrontmatterValue::List(
                inner
                    .split(',')
                    .filter_map(|item| parse_scalar(item.trim()))
                    .collect(),
            ),
            None => parse_scalar(raw).map_or(FrontmatterValue::Null, FrontmatterValue::Scalar),
        };
        map.insert(key.to_string(), value);
    }

    if let Some((key, items)) = pending {
        map.insert(key, block_list_value(items));
    }

    map
}

fn block_list_item(trimmed: &str) -> Option<&str> {
    if trimmed == "-" {
        return Some("");
    }
    trimmed.strip_prefix("- ").map(str::trim)
}

fn block_list_value(items: Vec<Scalar>) -> FrontmatterValue {
    if items.is_empty() {
        FrontmatterValue::Null
    } else {
        FrontmatterValue::List(items)
    }
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|r| r.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}

/// Parse one YAML scalar. Returns `None` for null.
fn parse_scalar(raw: &str) -> Option<Scalar> {
    let raw = raw.trim();
    match raw {
        "" | "null" | "Null" | "NULL" | "~" => return None,
        "true" | "True" | "TRUE" => return Some(Scalar::Bool(true)),
        "false" | "False" | "FALSE" => return Some(Scalar::Bool(false)),
        _ => {}
    }

    let unquoted = unquote(raw);
    if unquoted.len() != raw.len() {
        return Some(Scalar::String(unquoted.to_string()));
    }

    let numeric = raw.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+' || c == '.')
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
    if numeric {
        if let Ok(n) = raw.parse::<f64>() {
            return Some(Scalar::Number(n));
        }
    }

    Some(Scalar::String(raw.to_string()))
}
