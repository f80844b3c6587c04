//! Page assembly
//!
//! Wraps a rendered fragment in the full report page: navigation bar, hero
//! header with title and date pills, optional TOC sidebar, embedded
//! stylesheet and behavior script, back-to-top button and footer.

mod toc;

pub use toc::{assign_section_ids, build_toc, heading_text, slugify, HeadingEntry};

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;
use crate::meta::DocumentMeta;
use crate::renderer::Rendered;

/// Which navigation entry the page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    #[default]
    Market,
    Holdings,
    Home,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Market => "market",
            PageKind::Holdings => "holdings",
            PageKind::Home => "home",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            PageKind::Market => "Market Analysis",
            PageKind::Holdings => "Holdings Analysis",
            PageKind::Home => "Home",
        }
    }
}

impl FromStr for PageKind {
    type Err = RenderError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "market" => Ok(PageKind::Market),
            "holdings" => Ok(PageKind::Holdings),
            "home" => Ok(PageKind::Home),
            other => Err(RenderError::InvalidPageKind(other.to_string())),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options controlling page assembly
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    pub kind: PageKind,
    /// Site name shown in the navigation brand and footer
    pub site_name: String,
    /// Whether to render the TOC sidebar
    pub toc: bool,
    /// Generation timestamp shown in the hero, when known
    pub generated_at: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        PageOptions {
            kind: PageKind::Market,
            site_name: "Market Intelligence System".to_string(),
            toc: true,
            generated_at: None,
        }
    }
}

/// The stylesheet embedded into every assembled page
pub fn default_css() -> &'static str {
    include_str!("../../css/report.css")
}

/// The behavior script (theme toggle, TOC highlight, back-to-top)
pub fn page_script() -> &'static str {
    include_str!("../../js/report.js")
}

pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn nav_link(kind: PageKind, active: PageKind) -> String {
    let class = if kind == active {
        "nav-link active"
    } else {
        "nav-link"
    };
    format!(
        r##"<a href="{href}" class="{class}">{label}</a>"##,
        href = match kind {
            PageKind::Home => "index.html".to_string(),
            other => format!("{}.html", other.as_str()),
        },
        label = kind.label(),
    )
}

/// Assemble the full HTML document around a rendered fragment
pub fn assemble(meta: &DocumentMeta, rendered: &Rendered, options: &PageOptions) -> String {
    let title = escape_html(&meta.title);
    let site_name = escape_html(&options.site_name);
    let nav = [PageKind::Home, PageKind::Market, PageKind::Holdings]
        .iter()
        .map(|kind| nav_link(*kind, options.kind))
        .collect::<Vec<_>>()
        .join("\n");

    let generated_pill = match &options.generated_at {
        Some(stamp) => format!(
            "\n<span class=\"meta-pill\">Generated {}</span>",
            escape_html(stamp)
        ),
        None => String::new(),
    };

    let (layout_class, sidebar) = if options.toc {
        (
            "content-layout",
            format!(
                "<aside class=\"toc-sidebar\">\n<div class=\"toc-title\">Contents</div>\n{}\n</aside>\n",
                build_toc(&rendered.headings)
            ),
        )
    } else {
        ("content-layout no-toc", String::new())
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-TW" data-theme="light">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - {site_name}</title>
<style>
{css}</style>
</head>
<body>
<header class="navbar">
<div class="navbar-inner">
<a href="index.html" class="nav-brand">{site_name}</a>
<nav class="nav-links">
{nav}
</nav>
<button class="theme-toggle" id="themeToggle" aria-label="Toggle theme">◐</button>
</div>
</header>
<section class="hero">
<h1 class="hero-title">{title}</h1>
<div class="hero-meta">
<span class="meta-pill">Report {date}</span>{generated_pill}
</div>
</section>
<main class="{layout_class}">
{sidebar}<article class="report-body">
{fragment}
</article>
</main>
<button class="back-to-top" id="backToTop" aria-label="Back to top">↑</button>
<footer class="footer">
<p>{site_name}</p>
</footer>
<script>
{script}</script>
</body>
</html>
"#,
        css = default_css(),
        date = escape_html(&meta.date),
        fragment = rendered.html,
        script = page_script(),
    )
}
