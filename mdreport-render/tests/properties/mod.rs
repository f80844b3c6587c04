use mdreport_render::RendererRegistry;
use proptest::prelude::*;

proptest! {
    #[test]
    fn pipeline_never_panics(source in ".*") {
        let registry = RendererRegistry::with_defaults();
        let _ = registry.render(&source, "pipeline").unwrap();
    }

    #[test]
    fn cmark_never_panics(source in "\\PC*") {
        let registry = RendererRegistry::with_defaults();
        let _ = registry.render(&source, "cmark").unwrap();
    }

    // restricted alphabet keeps lines as plain paragraph text
    #[test]
    fn paragraph_tags_balance(source in "[a-z ]{1,40}(\n[a-z ]{1,40}){0,5}") {
        let registry = RendererRegistry::with_defaults();
        let rendered = registry.render(&source, "pipeline").unwrap();
        prop_assert_eq!(
            rendered.html.matches("<p>").count(),
            rendered.html.matches("</p>").count()
        );
    }

    #[test]
    fn one_li_per_item_line(items in prop::collection::vec("[a-z]{1,12}", 1..8)) {
        let source = items
            .iter()
            .map(|item| format!("- {item}"))
            .collect::<Vec<_>>()
            .join("\n");

        let registry = RendererRegistry::with_defaults();
        let rendered = registry.render(&source, "pipeline").unwrap();
        prop_assert_eq!(rendered.html.matches("<li>").count(), items.len());
        prop_assert_eq!(rendered.html.matches("<ul>").count(), 1);
    }
}
