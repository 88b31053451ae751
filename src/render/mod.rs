mod primitives;
mod svg_document;

pub use primitives::{BoundData, ElementKind, NodeId, TextAnchor};
pub use svg_document::{SvgDocument, SvgNode, escape_xml};

use crate::error::ChartResult;

/// Capabilities the drawing utilities need from a drawing surface.
///
/// Utilities only ever append to the tree and adjust nodes they created or
/// were handed, so any retained-mode backend (an in-memory SVG tree, a DOM
/// bridge, a recorder in tests) can implement this.
pub trait Surface {
    fn append_child(&mut self, parent: NodeId, kind: ElementKind) -> ChartResult<NodeId>;

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> ChartResult<()>;

    fn set_style(&mut self, node: NodeId, name: &str, value: &str) -> ChartResult<()>;

    /// Replaces the node's text content. Backends must treat it as plain text.
    fn set_text(&mut self, node: NodeId, text: &str) -> ChartResult<()>;

    fn bind_data(&mut self, node: NodeId, data: BoundData) -> ChartResult<()>;
}
