use chrono::NaiveDate;
use mdreport_render::meta::FixedClock;
use mdreport_render::page::PageOptions;
use mdreport_render::{convert_report, RendererRegistry};

use crate::fixture;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 7, 14).unwrap())
}

#[test]
fn cmark_handles_kitchensink() {
    let source = fixture("kitchensink.md");
    let rendered = RendererRegistry::with_defaults()
        .render(&source, "cmark")
        .unwrap();

    assert!(rendered.html.contains(r#"<div class="table-wrapper">"#));
    assert!(rendered
        .html
        .contains(r#"<span class="status-positive">+0.85%</span>"#));
    assert!(!rendered.headings.is_empty());
    assert_eq!(rendered.headings[0].text, "Index Overview");
}

#[test]
fn both_renderers_agree_on_heading_ids() {
    let source = fixture("kitchensink.md");
    let registry = RendererRegistry::with_defaults();

    let pipeline = registry.render(&source, "pipeline").unwrap();
    let cmark = registry.render(&source, "cmark").unwrap();

    let ids = |r: &mdreport_render::Rendered| {
        r.headings.iter().map(|h| h.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&pipeline), ids(&cmark));
}

#[test]
fn cmark_page_assembly() {
    let report = convert_report(
        "# Title\n\n1. one\n   1. nested\n",
        "cmark",
        None,
        &clock(),
        &PageOptions::default(),
    )
    .unwrap();

    assert!(report.html.starts_with("<!DOCTYPE html>"));
    assert_eq!(report.html.matches("<ol>").count(), 2);
}
