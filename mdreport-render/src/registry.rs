//! Renderer registry for discovery and selection
//!
//! This module provides a centralized registry for all available renderer
//! strategies. Renderers can be registered and retrieved by name.

use crate::error::RenderError;
use crate::renderer::{Rendered, Renderer};
use std::collections::HashMap;

/// Registry of markdown renderers
///
/// # Examples
///
/// ```ignore
/// let registry = RendererRegistry::default();
/// let rendered = registry.render("# Report\n", "pipeline")?;
/// ```
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer
    ///
    /// If a renderer with the same name already exists, it will be replaced.
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    /// Get a renderer by name
    pub fn get(&self, name: &str) -> Result<&dyn Renderer, RenderError> {
        self.renderers
            .get(name)
            .map(|r| r.as_ref())
            .ok_or_else(|| RenderError::RendererNotFound(name.to_string()))
    }

    /// Check if a renderer exists
    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// List all available renderer names (sorted)
    pub fn list_renderers(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render source text using the named renderer
    pub fn render(&self, source: &str, renderer: &str) -> Result<Rendered, RenderError> {
        Ok(self.get(renderer)?.render(source))
    }

    /// Create a registry with the default renderers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::renderers::pipeline::PipelineRenderer);
        registry.register(crate::renderers::cmark::CmarkRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRenderer;
    impl Renderer for TestRenderer {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test renderer"
        }
        fn render(&self, _source: &str) -> Rendered {
            Rendered {
                html: "<p>test output</p>".to_string(),
                headings: Vec::new(),
            }
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = RendererRegistry::new();
        assert_eq!(registry.renderers.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);

        assert!(registry.has("test"));
        assert_eq!(registry.list_renderers(), vec!["test"]);
    }

    #[test]
    fn test_registry_get() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);

        let renderer = registry.get("test");
        assert!(renderer.is_ok());
        assert_eq!(renderer.unwrap().name(), "test");
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = RendererRegistry::new();
        let result = registry.get("nonexistent");
        assert!(result.is_err());
    }

    #[test]
    fn test_registry_render() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);

        let rendered = registry.render("input", "test");
        assert!(rendered.is_ok());
        assert_eq!(rendered.unwrap().html, "<p>test output</p>");
    }

    #[test]
    fn test_registry_render_not_found() {
        let registry = RendererRegistry::new();

        let result = registry.render("input", "nonexistent");
        match result.unwrap_err() {
            RenderError::RendererNotFound(name) => assert_eq!(name, "nonexistent"),
            other => panic!("Expected RendererNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_registry_replace_renderer() {
        let mut registry = RendererRegistry::new();
        registry.register(TestRenderer);
        registry.register(TestRenderer); // Replace

        assert_eq!(registry.list_renderers().len(), 1);
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = RendererRegistry::with_defaults();
        assert!(registry.has("pipeline"));
        assert!(registry.has("cmark"));
    }

    #[test]
    fn test_registry_default_trait() {
        let registry = RendererRegistry::default();
        assert_eq!(registry.list_renderers(), vec!["cmark", "pipeline"]);
    }
}
