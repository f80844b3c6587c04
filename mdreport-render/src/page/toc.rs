//! Heading ids, slugs and table-of-contents markup

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::escape_html;

static HEADING_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<h([2-4])(?: id="[^"]*")?>(.*?)</h[2-4]>"#).unwrap());

static INNER_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

static SLUG_STRIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s\-\x{4e00}-\x{9fff}]").unwrap());

/// One h2–h4 heading, as recorded while assigning section ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingEntry {
    /// Heading level (2–4)
    pub level: u8,
    /// Anchor id written into the fragment (`section-N`)
    pub id: String,
    /// Heading text with inner tags stripped
    pub text: String,
    /// Readable slug derived from the text
    pub slug: String,
}

/// Assign `section-N` ids to every h2–h4 in document order.
///
/// Existing id attributes are replaced, so running the pass twice yields the
/// same fragment. Returns the rewritten fragment and the heading entries the
/// TOC is built from.
pub fn assign_section_ids(html: &str) -> (String, Vec<HeadingEntry>) {
    let mut headings: Vec<HeadingEntry> = Vec::new();

    let rewritten = HEADING_TAG_RE
        .replace_all(html, |caps: &regex::Captures| {
            let level: u8 = caps[1].parse().unwrap_or(2);
            let inner = &caps[2];
            let text = heading_text(inner);
            let id = format!("section-{}", headings.len());
            let rendered = format!(r#"<h{level} id="{id}">{inner}</h{level}>"#);

            headings.push(HeadingEntry {
                level,
                id,
                slug: slugify(&text),
                text,
            });

            rendered
        })
        .into_owned();

    (rewritten, headings)
}

/// Visible text of a heading, with any inline markup removed
pub fn heading_text(inner: &str) -> String {
    INNER_TAG_RE.replace_all(inner, "").trim().to_string()
}

/// Lowercased hyphen-joined slug. CJK ideographs are kept, other
/// punctuation is stripped.
pub fn slugify(text: &str) -> String {
    let stripped = SLUG_STRIP_RE.replace_all(text, "");
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .trim_matches('-')
        .to_string()
}

/// Render the sidebar TOC list for the given headings.
///
/// h3/h4 entries get the `toc-item-sub` class for indentation; links carry
/// a `level-N` class so the stylesheet can grade them.
pub fn build_toc(headings: &[HeadingEntry]) -> String {
    let mut html = String::from("<nav class=\"toc-list\" id=\"tocList\">\n<ul>\n");

    for entry in headings {
        let sub = if entry.level > 2 { " toc-item-sub" } else { "" };
        html.push_str(&format!(
            "<li class=\"toc-item{sub}\"><a href=\"#{id}\" class=\"toc-link level-{level}\">{text}</a></li>\n",
            id = entry.id,
            level = entry.level,
            text = escape_html(&entry.text),
        ));
    }

    html.push_str("</ul>\n</nav>");
    html
}
