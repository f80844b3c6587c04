//! Post-processing passes shared by all renderers
//!
//! These passes operate on the rendered HTML fragment, after block and
//! inline conversion. They are renderer-agnostic: the line-pass renderer
//! and the comrak renderer both finish with them.

use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<table[^>]*>.*?</table>").unwrap());

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|[^\w-])([+-]\d+(?:\.\d+)?%)").unwrap());

/// Wrap every `<table>` element in a `<div class="table-wrapper">`.
///
/// The wrapper gives wide tables a horizontal scroll region on narrow
/// screens; the tables themselves stay untouched.
pub fn wrap_tables(html: &str) -> String {
    TABLE_RE
        .replace_all(html, r#"<div class="table-wrapper">${0}</div>"#)
        .into_owned()
}

#[derive(PartialEq)]
enum TagKind {
    OpenSkipped,
    CloseSkipped,
    Other,
}

fn tag_kind(tag: &str) -> TagKind {
    let name: String = tag
        .trim_start_matches(['<', '/'])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    match name.as_str() {
        "pre" | "code" => {
            if tag.starts_with("</") {
                TagKind::CloseSkipped
            } else {
                TagKind::OpenSkipped
            }
        }
        _ => TagKind::Other,
    }
}

fn wrap_percent_text(text: &str) -> String {
    PERCENT_RE
        .replace_all(text, |caps: &regex::Captures| {
            let value = &caps[2];
            let class = if value.starts_with('+') {
                "status-positive"
            } else {
                "status-negative"
            };
            format!(r#"{}<span class="{}">{}</span>"#, &caps[1], class, value)
        })
        .into_owned()
}

/// Wrap signed percentage literals in status spans.
///
/// `+2.35%` becomes `<span class="status-positive">+2.35%</span>` and
/// `-1.10%` the negative variant. Only text between tags is touched, and
/// text inside `<pre>` or `<code>` is left alone. Unsigned percentages pass
/// through unwrapped.
pub fn wrap_status_percentages(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;
    let mut skip_depth: u32 = 0;

    for m in TAG_RE.find_iter(html) {
        let text = &html[pos..m.start()];
        if skip_depth == 0 {
            out.push_str(&wrap_percent_text(text));
        } else {
            out.push_str(text);
        }

        match tag_kind(m.as_str()) {
            TagKind::OpenSkipped => skip_depth += 1,
            TagKind::CloseSkipped => skip_depth = skip_depth.saturating_sub(1),
            TagKind::Other => {}
        }

        out.push_str(m.as_str());
        pos = m.end();
    }

    let tail = &html[pos..];
    if skip_depth == 0 {
        out.push_str(&wrap_percent_text(tail));
    } else {
        out.push_str(tail);
    }

    out
}
