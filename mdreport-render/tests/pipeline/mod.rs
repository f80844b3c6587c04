use chrono::NaiveDate;
use mdreport_render::meta::{self, FixedClock, FALLBACK_TITLE};
use mdreport_render::{Renderer, RendererRegistry};

use crate::fixture;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 7, 14).unwrap())
}

fn render(source: &str) -> mdreport_render::Rendered {
    RendererRegistry::with_defaults()
        .render(source, "pipeline")
        .unwrap()
}

#[test]
fn minimal_table_document() {
    let source = "# Report\n\n| A | B |\n|---|---|\n| 1 | 2 |\n";
    let meta = meta::extract(source, &clock());
    let rendered = render(source);

    assert_eq!(meta.title, "Report");
    assert_eq!(rendered.html.matches("<table>").count(), 1);
    assert_eq!(rendered.html.matches("<th>").count(), 2);
    assert_eq!(rendered.html.matches("<td>").count(), 2);
}

#[test]
fn no_heading_falls_back_to_clock_date() {
    let source = "Just some text without any heading.\n";
    let meta = meta::extract(source, &clock());

    assert_eq!(meta.title, FALLBACK_TITLE);
    assert_eq!(meta.date, "2025-07-14");
}

#[test]
fn list_then_paragraph() {
    let rendered = render("- item1\n- item2\n\nSome paragraph text.\n");

    assert_eq!(rendered.html.matches("<ul>").count(), 1);
    assert_eq!(rendered.html.matches("<li>").count(), 2);
    assert_eq!(rendered.html.matches("<p>").count(), 1);
    assert!(rendered.html.contains("Some paragraph text."));
}

#[test]
fn signed_percentages_get_status_spans() {
    let rendered = render("| Chg |\n|---|\n| +2.35% |\n| -1.10% |\n| 0.00% |\n");

    assert!(rendered
        .html
        .contains(r#"<span class="status-positive">+2.35%</span>"#));
    assert!(rendered
        .html
        .contains(r#"<span class="status-negative">-1.10%</span>"#));
    assert!(rendered.html.contains("<td>0.00%</td>"));
}

#[test]
fn bold_inside_table_cell() {
    let rendered = render("| Stock |\n|---|\n| **2330** |\n");
    assert!(rendered.html.contains("<td><strong>2330</strong></td>"));
}

#[test]
fn kitchensink_structure() {
    let source = fixture("kitchensink.md");
    let meta = meta::extract(&source, &clock());
    let rendered = render(&source);

    assert_eq!(meta.title, "Market Recap 2025-07-14");
    assert_eq!(meta.date, "2025-07-14");

    assert!(rendered.html.contains("<h1>Market Recap 2025-07-14</h1>"));
    assert!(rendered.html.contains("<blockquote><p>Liquidity stayed thin ahead of the holiday.</p></blockquote>"));
    assert_eq!(rendered.html.matches("<table>").count(), 1);
    assert_eq!(rendered.html.matches("<ul>").count(), 1);
    assert_eq!(rendered.html.matches("<ol>").count(), 1);
    assert!(rendered.html.contains("<hr>"));

    // fence content stays raw
    assert!(rendered.html.contains("signal: **raw**"));
    assert!(!rendered.html.contains("<strong>raw</strong>"));
    assert!(!rendered.html.contains(r#"<span class="status-negative">-5%</span>"#));

    // h2/h3 headings collected in order
    let texts: Vec<&str> = rendered.headings.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["Index Overview", "Watchlist", "Order Plan", "Appendix"]);
}

#[test]
fn heading_ids_are_stable_across_reruns() {
    let source = fixture("kitchensink.md");
    let first = render(&source);

    let (again, headings) = mdreport_render::page::assign_section_ids(&first.html);
    assert_eq!(again, first.html);
    assert_eq!(headings, first.headings);
}

#[test]
fn renderer_listing_and_description() {
    let registry = RendererRegistry::with_defaults();
    assert_eq!(registry.list_renderers(), vec!["cmark", "pipeline"]);

    let renderer = registry.get("pipeline").unwrap();
    assert!(!renderer.description().is_empty());
}

#[test]
fn unknown_renderer_is_an_error() {
    let registry = RendererRegistry::with_defaults();
    let err = registry.render("x", "pandoc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Renderer 'pandoc' not found"
    );
}
