use std::borrow::Cow;
use std::fmt::Write as _;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};
use crate::render::{BoundData, ElementKind, NodeId, Surface};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// One element of an [`SvgDocument`].
#[derive(Debug, Clone, PartialEq)]
pub struct SvgNode {
    pub kind: ElementKind,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub attributes: IndexMap<String, String>,
    pub styles: IndexMap<String, String>,
    pub text: Option<String>,
    pub data: Option<BoundData>,
}

impl SvgNode {
    fn new(kind: ElementKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: SmallVec::new(),
            attributes: IndexMap::new(),
            styles: IndexMap::new(),
            text: None,
            data: None,
        }
    }
}

/// In-memory retained tree implementing [`Surface`].
///
/// Used headless (tests, static export) and as the reference backend: it
/// records exactly what the utilities asked for and can serialize it to SVG
/// markup.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    nodes: Vec<SvgNode>,
}

impl SvgDocument {
    /// Creates a document whose root `svg` element has the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut root = SvgNode::new(ElementKind::Svg, None);
        root.attributes
            .insert("xmlns".to_owned(), SVG_NAMESPACE.to_owned());
        root.attributes
            .insert("width".to_owned(), width.to_string());
        root.attributes
            .insert("height".to_owned(), height.to_string());
        Self { nodes: vec![root] }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SvgNode> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)?.styles.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id)?.text.as_deref()
    }

    #[must_use]
    pub fn data(&self, id: NodeId) -> Option<&BoundData> {
        self.node(id)?.data.as_ref()
    }

    /// All nodes of `kind` below `id` (inclusive), in document order.
    #[must_use]
    pub fn descendants_of_kind(&self, id: NodeId, kind: ElementKind) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            if node.kind == kind {
                found.push(current);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        found
    }

    /// Serializes the whole tree as SVG markup.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_node(self.root(), &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        let tag = node.kind.tag();
        out.push('<');
        out.push_str(tag);
        for (name, value) in &node.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_xml(value));
        }
        if !node.styles.is_empty() {
            let style = node
                .styles
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join("; ");
            let _ = write!(out, " style=\"{}\"", escape_xml(&style));
        }

        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape_xml(text));
        }
        for child in &node.children {
            self.write_node(*child, out);
        }
        let _ = write!(out, "</{tag}>");
    }

    fn node_mut(&mut self, id: NodeId) -> ChartResult<&mut SvgNode> {
        self.nodes
            .get_mut(id.index())
            .ok_or(ChartError::UnknownNode(id))
    }
}

impl Surface for SvgDocument {
    fn append_child(&mut self, parent: NodeId, kind: ElementKind) -> ChartResult<NodeId> {
        let id = NodeId::new(self.nodes.len());
        self.node_mut(parent)?.children.push(id);
        self.nodes.push(SvgNode::new(kind, Some(parent)));
        Ok(id)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> ChartResult<()> {
        self.node_mut(node)?
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_style(&mut self, node: NodeId, name: &str, value: &str) -> ChartResult<()> {
        self.node_mut(node)?
            .styles
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_text(&mut self, node: NodeId, text: &str) -> ChartResult<()> {
        self.node_mut(node)?.text = Some(text.to_owned());
        Ok(())
    }

    fn bind_data(&mut self, node: NodeId, data: BoundData) -> ChartResult<()> {
        self.node_mut(node)?.data = Some(data);
        Ok(())
    }
}

/// Escapes the five XML special characters.
#[must_use]
pub fn escape_xml(input: &str) -> Cow<'_, str> {
    if !input.contains(['<', '>', '&', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut escaped = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
