//! Graph renderer trait definitions.

use salesdash_common::Result;

/// Trait for graph renderers that turn a chart model into an image.
pub trait GraphRenderer: Send + Sync {
    /// The type of data this renderer expects.
    type Data;

    /// Renders the data to an SVG document.
    fn render(&self, data: &Self::Data) -> Result<String>;

    /// Gets the name of this graph type.
    fn name(&self) -> &'static str;
}
