//! Line-pass renderer for the report markdown dialect
//!
//! Converts source in a fixed sequence of passes over an element stream.
//! Each pass consumes lines it recognizes and emits rendered HTML blocks;
//! rendered blocks start with `<` and are ignored by later passes. Order is
//! load-bearing: tables before lists (a `|---|` separator must not become a
//! list item), code fences before lists and paragraphs (fence content must
//! not be reinterpreted as items or wrapped in `<p>`), paragraphs last among
//! the block passes, then inline and shared post-processing over the joined
//! fragment.

mod inline;
mod list;
mod paragraph;
mod table;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::page;
use crate::renderer::{Rendered, Renderer};
use crate::renderers::common;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static HR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{3,}$").unwrap());
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^>\s+(.+)$").unwrap());

/// Renderer implementing the report dialect via sequential line passes
pub struct PipelineRenderer;

impl Renderer for PipelineRenderer {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn description(&self) -> &str {
        "Line-pass renderer for the report markdown dialect"
    }

    fn render(&self, source: &str) -> Rendered {
        let fragment = to_fragment(source);
        let (html, headings) = page::assign_section_ids(&fragment);
        Rendered { html, headings }
    }
}

fn substitute_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if let Some(caps) = HEADING_RE.captures(&line) {
                let level = caps[1].len();
                let text = caps[2].trim();
                return format!("<h{level}>{text}</h{level}>");
            }
            if HR_RE.is_match(&line) {
                return "<hr>".to_string();
            }
            if let Some(caps) = QUOTE_RE.captures(&line) {
                return format!("<blockquote><p>{}</p></blockquote>", &caps[1]);
            }
            line
        })
        .collect()
}

fn replace_code_fences(elements: Vec<String>) -> Vec<String> {
    let is_fence = |line: &str| line.trim_start().starts_with("```");

    let mut out = Vec::with_capacity(elements.len());
    let mut iter = elements.into_iter();

    while let Some(element) = iter.next() {
        if !is_fence(&element) {
            out.push(element);
            continue;
        }

        let mut content: Vec<String> = Vec::new();
        let mut closed = false;
        for inner in iter.by_ref() {
            if is_fence(&inner) {
                closed = true;
                break;
            }
            content.push(inner);
        }

        if closed {
            let mut body = content.join("\n");
            body.push('\n');
            out.push(format!("<pre><code>{body}</code></pre>"));
        } else {
            // Unclosed fence: emit everything back unchanged
            out.push(element);
            out.extend(content);
        }
    }

    out
}

/// Convert markdown source to an HTML fragment without heading ids
pub fn to_fragment(source: &str) -> String {
    let lines: Vec<String> = source
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect();

    let elements = substitute_lines(lines);
    let elements = table::replace_tables(elements);
    let elements = replace_code_fences(elements);
    let elements = list::replace_lists(elements);
    let elements = paragraph::wrap_paragraphs(elements);

    let html = elements.join("\n");
    let html = inline::apply(&html);
    let html = common::wrap_status_percentages(&html);
    common::wrap_tables(&html)
}
