use chrono::NaiveDate;
use mdreport_render::meta::FixedClock;
use mdreport_render::page::{PageKind, PageOptions};
use mdreport_render::convert_report;

use crate::fixture;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 7, 14).unwrap())
}

#[test]
fn full_conversion_produces_complete_page() {
    let source = fixture("kitchensink.md");
    let report = convert_report(&source, "pipeline", None, &clock(), &PageOptions::default())
        .unwrap();

    assert!(report.html.starts_with("<!DOCTYPE html>"));
    assert!(report.html.ends_with("</html>\n"));
    assert!(report
        .html
        .contains("<title>Market Recap 2025-07-14 - Market Intelligence System</title>"));
    assert!(report.html.contains("Report 2025-07-14"));
    assert!(report.html.contains("<style>"));
    assert!(report.html.contains("<script>"));
    assert!(report.html.contains("table-wrapper"));
}

#[test]
fn toc_links_match_fragment_ids() {
    let source = fixture("kitchensink.md");
    let report = convert_report(&source, "pipeline", None, &clock(), &PageOptions::default())
        .unwrap();

    for heading in &report.rendered.headings {
        assert!(report.html.contains(&format!("href=\"#{}\"", heading.id)));
        assert!(report.html.contains(&format!("id=\"{}\"", heading.id)));
    }
}

#[test]
fn no_toc_option_drops_sidebar() {
    let options = PageOptions {
        toc: false,
        ..PageOptions::default()
    };
    let report = convert_report("# T\n\n## S\n", "pipeline", None, &clock(), &options).unwrap();

    assert!(!report.html.contains("toc-sidebar"));
    assert!(report.html.contains("content-layout no-toc"));
}

#[test]
fn page_kind_selects_active_nav_entry() {
    let options = PageOptions {
        kind: PageKind::Home,
        ..PageOptions::default()
    };
    let report = convert_report("# T\n", "pipeline", None, &clock(), &options).unwrap();

    assert!(report
        .html
        .contains(r#"<a href="index.html" class="nav-link active">Home</a>"#));
}

#[test]
fn custom_site_name_appears_in_brand_and_title() {
    let options = PageOptions {
        site_name: "Desk Reports".to_string(),
        ..PageOptions::default()
    };
    let report = convert_report("# T\n", "pipeline", None, &clock(), &options).unwrap();

    assert!(report.html.contains("<title>T - Desk Reports</title>"));
    assert!(report.html.contains(">Desk Reports</a>"));
}

#[test]
fn filename_date_used_when_body_has_none() {
    let report = convert_report(
        "# Holdings\n\ntext\n",
        "pipeline",
        Some("holdings_2025-06-02.md"),
        &clock(),
        &PageOptions::default(),
    )
    .unwrap();

    assert_eq!(report.meta.date, "2025-06-02");
    assert!(report.html.contains("Report 2025-06-02"));
}

#[test]
fn generated_pill_only_when_set() {
    let without = convert_report("# T\n", "pipeline", None, &clock(), &PageOptions::default())
        .unwrap();
    assert!(!without.html.contains("Generated "));

    let options = PageOptions {
        generated_at: Some("2025-07-14 08:30 CST".to_string()),
        ..PageOptions::default()
    };
    let with = convert_report("# T\n", "pipeline", None, &clock(), &options).unwrap();
    assert!(with.html.contains("Generated 2025-07-14 08:30 CST"));
}
