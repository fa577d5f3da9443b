pub mod errors;
pub mod color;
pub mod context;
pub mod derivation;
pub mod size;
pub mod style;

pub use context::{ContextConfig, Extension, RenderContext};
pub use derivation::Derivation;
pub use errors::{ContextError, Result};
pub use size::Size;
pub use style::Style;

/// Convenience: build a root context from a JSON configuration record.
pub fn from_json(json: &str) -> Result<RenderContext> {
    RenderContext::new(ContextConfig::from_json(json)?)
}

