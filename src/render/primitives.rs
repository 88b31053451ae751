use serde::{Deserialize, Serialize};

use crate::core::{DatePoint, KeyedValue};

/// Handle to one node of a [`Surface`](super::Surface).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Element types the drawing utilities create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Svg,
    Group,
    Rect,
    Path,
    Text,
    /// HTML block laid over the chart (tooltips).
    Div,
}

impl ElementKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Group => "g",
            Self::Rect => "rect",
            Self::Path => "path",
            Self::Text => "text",
            Self::Div => "div",
        }
    }
}

/// Data joined to a node, kept for hosts that read it back on interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoundData {
    Series(Vec<DatePoint>),
    Keyed(KeyedValue),
    Label(String),
}

/// `text-anchor` values used by axis and callout labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}
