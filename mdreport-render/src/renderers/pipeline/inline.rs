//! Inline formatting
//!
//! Runs over the joined fragment once the block structure is settled. Bold
//! is substituted before italic so `**x**` is not eaten as two italics, and
//! `<pre><code>` blocks are skipped entirely.

use once_cell::sync::Lazy;
use regex::Regex;

static PRE_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<pre><code[^>]*>.*?</code></pre>").unwrap());

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.+?)`").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap());

fn format_spans(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>$1</em>");
    let text = CODE_RE.replace_all(&text, "<code>$1</code>");
    LINK_RE
        .replace_all(&text, r#"<a href="$2">$1</a>"#)
        .into_owned()
}

/// Apply inline substitutions everywhere outside `<pre><code>` blocks
pub fn apply(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    for m in PRE_BLOCK_RE.find_iter(html) {
        out.push_str(&format_spans(&html[pos..m.start()]));
        out.push_str(m.as_str());
        pos = m.end();
    }
    out.push_str(&format_spans(&html[pos..]));

    out
}
