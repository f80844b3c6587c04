//! CommonMark renderer backed by comrak
//!
//! Alternative strategy for reports written in full CommonMark (nested
//! lists, setext headings, reference links). Shares the percentage and
//! table post-passes with the line-pass renderer so downstream styling
//! sees the same markup either way.

use crate::page;
use crate::renderer::{Rendered, Renderer};
use crate::renderers::common;

/// Renderer delegating block and inline parsing to comrak
pub struct CmarkRenderer;

fn comrak_options() -> comrak::Options<'static> {
    let mut options = comrak::Options::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    // Reports embed their own block HTML; input is trusted
    options.render.unsafe_ = true;
    options
}

impl Renderer for CmarkRenderer {
    fn name(&self) -> &str {
        "cmark"
    }

    fn description(&self) -> &str {
        "CommonMark renderer (comrak) with table extension"
    }

    fn render(&self, source: &str) -> Rendered {
        let html = comrak::markdown_to_html(source, &comrak_options());
        let html = common::wrap_status_percentages(&html);
        let html = common::wrap_tables(&html);
        let (html, headings) = page::assign_section_ids(&html);
        Rendered { html, headings }
    }
}
