//! Paragraph wrapping
//!
//! Final block pass. Anything still a bare text line at this point becomes
//! paragraph content; blank lines and rendered blocks close the open
//! paragraph. Blank lines are kept in the output, not discarded.

/// Wrap remaining bare lines in `<p>` elements.
///
/// Consecutive text lines share one paragraph. A line is "rendered" when it
/// starts with `<`, which every earlier pass guarantees for its output.
pub fn wrap_paragraphs(elements: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(elements.len());
    let mut in_paragraph = false;

    for element in &elements {
        let trimmed = element.trim();
        if trimmed.starts_with('<') {
            if in_paragraph {
                out.push("</p>".to_string());
                in_paragraph = false;
            }
            out.push(element.clone());
        } else if !trimmed.is_empty() {
            if !in_paragraph {
                out.push("<p>".to_string());
                in_paragraph = true;
            }
            out.push(element.clone());
        } else {
            if in_paragraph {
                out.push("</p>".to_string());
                in_paragraph = false;
            }
            out.push(element.clone());
        }
    }

    if in_paragraph {
        out.push("</p>".to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &str) -> Vec<String> {
        src.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_single_paragraph() {
        let out = wrap_paragraphs(lines("hello world"));
        assert_eq!(out, vec!["<p>", "hello world", "</p>"]);
    }

    #[test]
    fn test_consecutive_lines_share_paragraph() {
        let out = wrap_paragraphs(lines("line one\nline two"));
        assert_eq!(out, vec!["<p>", "line one", "line two", "</p>"]);
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let out = wrap_paragraphs(lines("one\n\ntwo"));
        assert_eq!(out, vec!["<p>", "one", "</p>", "", "<p>", "two", "</p>"]);
    }

    #[test]
    fn test_rendered_block_closes_paragraph() {
        let out = wrap_paragraphs(lines("text\n<hr>\nmore"));
        assert_eq!(out, vec!["<p>", "text", "</p>", "<hr>", "<p>", "more", "</p>"]);
    }

    #[test]
    fn test_paragraph_closed_at_end() {
        let out = wrap_paragraphs(lines("dangling"));
        assert_eq!(out.last().map(String::as_str), Some("</p>"));
    }

    #[test]
    fn test_blank_lines_preserved() {
        let out = wrap_paragraphs(lines("<hr>\n\n<hr>"));
        assert_eq!(out, vec!["<hr>", "", "<hr>"]);
    }
}
