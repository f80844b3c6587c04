//! Renderer trait definition
//!
//! This module defines the core Renderer trait that all renderer strategies
//! implement. The trait provides a uniform interface for turning the report
//! markdown dialect into an embeddable HTML fragment.

use crate::page::HeadingEntry;

/// Output of a [`Renderer`]: an HTML fragment plus the headings found in it.
///
/// Heading ids (`section-0`, `section-1`, ...) are already written into the
/// fragment, in document order. The page assembler depends on exactly that
/// set of ids when it builds the table of contents, so every renderer must
/// finish by running its fragment through
/// [`page::assign_section_ids`](crate::page::assign_section_ids).
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// HTML fragment suitable for embedding in a `<section>` container
    pub html: String,
    /// h2–h4 headings in document order
    pub headings: Vec<HeadingEntry>,
}

/// Trait for markdown renderer strategies
///
/// Implementors convert markdown source into an HTML fragment. Rendering is
/// total: any input text yields some HTML. Malformed tables degrade to raw
/// lines, unmatched inline markers stay literal, unknown block shapes fall
/// through to paragraph wrapping.
///
/// Two strategies ship by default: the line-pass renderer for the report
/// dialect, and a comrak-backed CommonMark renderer. Callers pick one by
/// name through the [`RendererRegistry`](crate::registry::RendererRegistry)
/// without the page assembler having to care which one produced the
/// fragment.
pub trait Renderer: Send + Sync {
    /// The name of this renderer (e.g., "pipeline", "cmark")
    fn name(&self) -> &str;

    /// Optional description of this renderer
    fn description(&self) -> &str {
        ""
    }

    /// Convert markdown source into a fragment with heading ids assigned
    fn render(&self, source: &str) -> Rendered;
}
