//! mdreport-render: markdown-to-HTML rendering for analysis report pages
//!
//! This library turns a constrained markdown dialect (headings, pipe
//! tables, flat lists, blockquotes, fenced code, a handful of inline spans)
//! into styled standalone HTML report pages.
//!
//! # Architecture
//!
//! - **Renderer trait** ([`renderer`]): the strategy seam. A renderer is a
//!   total function from source text to an HTML fragment plus the headings
//!   found in it.
//! - **Registry** ([`registry`]): renderers are looked up by name;
//!   `"pipeline"` (line-pass dialect renderer) and `"cmark"` (comrak) ship
//!   by default.
//! - **Metadata** ([`meta`]): title and date extraction with clock-injected
//!   fallbacks.
//! - **Page assembly** ([`page`]): wraps a fragment in the navigation bar,
//!   hero header, TOC sidebar and embedded assets.
//!
//! # Example
//!
//! ```ignore
//! use mdreport_render::{convert_report, meta::SystemClock, page::PageOptions};
//!
//! let clock = SystemClock::from_env("Asia/Taipei");
//! let report = convert_report(source, "pipeline", Some("market_2025-07-14.md"),
//!                             &clock, &PageOptions::default())?;
//! std::fs::write("market.html", report.html)?;
//! ```

pub mod error;
pub mod meta;
pub mod page;
pub mod registry;
pub mod renderer;
pub mod renderers;

pub use error::RenderError;
pub use registry::RendererRegistry;
pub use renderer::{Rendered, Renderer};

use meta::{Clock, DocumentMeta};
use page::PageOptions;

/// A fully converted report: metadata, the fragment, and the final page
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedReport {
    pub meta: DocumentMeta,
    pub rendered: Rendered,
    /// Complete HTML document
    pub html: String,
}

/// Convert markdown source into a complete report page.
///
/// `filename` is consulted for a date stamp when the body carries none.
/// Fails only when `renderer_name` is unknown.
pub fn convert_report(
    source: &str,
    renderer_name: &str,
    filename: Option<&str>,
    clock: &dyn Clock,
    options: &PageOptions,
) -> Result<ConvertedReport, RenderError> {
    let registry = RendererRegistry::with_defaults();
    let rendered = registry.render(source, renderer_name)?;
    let meta = meta::extract_with_fallback(source, filename, clock);
    let html = page::assemble(&meta, &rendered, options);

    Ok(ConvertedReport {
        meta,
        rendered,
        html,
    })
}
