//! Renderer implementations
//!
//! Each renderer lives in its own submodule. `common` holds the
//! post-processing passes shared between strategies.

pub mod cmark;
pub mod common;
pub mod pipeline;
