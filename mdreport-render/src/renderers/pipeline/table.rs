//! Pipe table conversion
//!
//! A table run is a maximal sequence of consecutive table lines. Runs of at
//! least two lines are converted (first line header, second line separator,
//! rest body); shorter runs fall through unchanged.

/// A line belongs to a table when, trimmed, it both starts and ends with `|`
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table line into trimmed cell strings.
///
/// The leading and trailing `|` produce empty edge fragments which are
/// dropped; interior empty cells survive as empty strings.
pub fn split_cells(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.trim().split('|').collect();
    if parts.len() < 2 {
        return Vec::new();
    }

    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn render_table(lines: &[&str]) -> String {
    let mut html = String::from("<table>\n<thead>\n<tr>\n");
    for cell in split_cells(lines[0]) {
        html.push_str(&format!("<th>{cell}</th>\n"));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    // lines[1] is the |---|---| separator, dropped
    for line in &lines[2..] {
        html.push_str("<tr>\n");
        for cell in split_cells(line) {
            html.push_str(&format!("<td>{cell}</td>\n"));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

/// Replace table runs in the element stream with rendered `<table>` blocks
pub fn replace_tables(elements: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(elements.len());
    let mut run: Vec<&str> = Vec::new();

    fn flush_run(run: &mut Vec<&str>, out: &mut Vec<String>) {
        if run.len() < 2 {
            out.extend(run.iter().map(|l| l.to_string()));
        } else {
            out.push(render_table(run));
        }
        run.clear();
    }

    for element in &elements {
        if is_table_line(element) {
            run.push(element);
        } else {
            flush_run(&mut run, &mut out);
            out.push(element.clone());
        }
    }
    flush_run(&mut run, &mut out);

    out
}
