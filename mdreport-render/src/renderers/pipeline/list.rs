//! Flat list conversion
//!
//! One state machine handles both list kinds. Switching from `-` items to
//! numbered items (or back) closes the open list and opens the other kind,
//! so adjacent runs never share a container.

use once_cell::sync::Lazy;
use regex::Regex;

static UNORDERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*[-*]\s+(.+)$").unwrap());
static ORDERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)$").unwrap());

#[derive(Clone, Copy, PartialEq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

fn classify(line: &str) -> Option<(ListKind, String)> {
    if let Some(caps) = UNORDERED_RE.captures(line) {
        return Some((ListKind::Unordered, caps[1].to_string()));
    }
    if let Some(caps) = ORDERED_RE.captures(line) {
        return Some((ListKind::Ordered, caps[1].to_string()));
    }
    None
}

/// Replace runs of list item lines with `<ul>`/`<ol>` blocks.
///
/// Already-rendered elements (starting with `<`) and multi-line blocks never
/// match the item patterns, so they pass through with the open list closed
/// first.
pub fn replace_lists(elements: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(elements.len());
    let mut open: Option<ListKind> = None;

    for element in &elements {
        match classify(element) {
            Some((kind, text)) => {
                if open != Some(kind) {
                    if let Some(prev) = open {
                        out.push(prev.close().to_string());
                    }
                    out.push(kind.open().to_string());
                    open = Some(kind);
                }
                out.push(format!("<li>{text}</li>"));
            }
            None => {
                if let Some(prev) = open.take() {
                    out.push(prev.close().to_string());
                }
                out.push(element.clone());
            }
        }
    }

    if let Some(prev) = open {
        out.push(prev.close().to_string());
    }

    out
}
