//! Floating label that follows the pointer over axis labels.
//!
//! The tooltip is positioned from the viewport's bottom and right edges, so
//! near the bottom-right corner it grows up and left instead of overflowing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::axis::AxisHandle;
use crate::core::format_number;
use crate::error::ChartResult;
use crate::render::{ElementKind, NodeId, Surface};

/// Vertical gap between the pointer and the tooltip's bottom edge.
pub const TOOLTIP_POINTER_GAP_PX: f64 = 5.0;

/// Pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub content: String,
    pub position: Option<PointerPosition>,
}

impl TooltipState {
    #[must_use]
    pub fn visibility(&self) -> &'static str {
        if self.visible { "visible" } else { "hidden" }
    }

    /// CSS `right` keeping the tooltip's right edge on the pointer.
    #[must_use]
    pub fn right_css(&self) -> Option<String> {
        self.position
            .map(|pos| format!("calc(100vw - {}px)", format_number(pos.x)))
    }

    /// CSS `bottom` keeping the tooltip's bottom edge just above the pointer.
    #[must_use]
    pub fn bottom_css(&self) -> Option<String> {
        self.position.map(|pos| {
            format!(
                "calc(100vh - {}px)",
                format_number(pos.y - TOOLTIP_POINTER_GAP_PX)
            )
        })
    }
}

/// A mounted tooltip `div` and its state.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    node: NodeId,
    state: TooltipState,
}

impl Tooltip {
    /// Creates the hidden tooltip element under `parent`.
    pub fn mount<S>(surface: &mut S, parent: NodeId) -> ChartResult<Self>
    where
        S: Surface + ?Sized,
    {
        let node = surface.append_child(parent, ElementKind::Div)?;
        surface.set_attribute(node, "class", "tooltip")?;
        surface.set_style(node, "position", "fixed")?;
        surface.set_style(node, "pointer-events", "none")?;
        surface.set_style(node, "visibility", "hidden")?;
        Ok(Self {
            node,
            state: TooltipState::default(),
        })
    }

    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[must_use]
    pub fn state(&self) -> &TooltipState {
        &self.state
    }

    /// Sets the text (as plain text, never markup) and makes it visible.
    pub fn show<S>(&mut self, surface: &mut S, content: &str) -> ChartResult<()>
    where
        S: Surface + ?Sized,
    {
        surface.set_text(self.node, content)?;
        surface.set_style(self.node, "visibility", "visible")?;
        self.state.content = content.to_owned();
        self.state.visible = true;
        trace!(content, "tooltip shown");
        Ok(())
    }

    pub fn hide<S>(&mut self, surface: &mut S) -> ChartResult<()>
    where
        S: Surface + ?Sized,
    {
        surface.set_style(self.node, "visibility", "hidden")?;
        self.state.visible = false;
        trace!("tooltip hidden");
        Ok(())
    }

    pub fn move_to<S>(&mut self, surface: &mut S, position: PointerPosition) -> ChartResult<()>
    where
        S: Surface + ?Sized,
    {
        self.state.position = Some(position);
        if let (Some(right), Some(bottom)) = (self.state.right_css(), self.state.bottom_css()) {
            surface.set_style(self.node, "right", &right)?;
            surface.set_style(self.node, "bottom", &bottom)?;
        }
        Ok(())
    }
}

/// Pointer input routed to tooltip bindings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Enter {
        target: NodeId,
        position: PointerPosition,
    },
    Move {
        target: NodeId,
        position: PointerPosition,
    },
    Leave {
        target: NodeId,
    },
}

impl PointerEvent {
    #[must_use]
    pub fn target(self) -> NodeId {
        match self {
            Self::Enter { target, .. } | Self::Move { target, .. } | Self::Leave { target } => {
                target
            }
        }
    }
}

/// Shows an axis label's full text while the pointer is over it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisTooltipBinding {
    labels: IndexMap<NodeId, String>,
}

impl AxisTooltipBinding {
    /// Makes the axis labels hoverable and remembers their full text.
    pub fn attach<S>(surface: &mut S, axis: &AxisHandle) -> ChartResult<Self>
    where
        S: Surface + ?Sized,
    {
        let mut binding = Self::default();
        binding.extend(surface, axis)?;
        Ok(binding)
    }

    /// Adds another axis to an existing binding.
    pub fn extend<S>(&mut self, surface: &mut S, axis: &AxisHandle) -> ChartResult<()>
    where
        S: Surface + ?Sized,
    {
        for label in &axis.labels {
            surface.set_style(label.node, "pointer-events", "all")?;
            self.labels
                .insert(label.node, label.tick.full_label.clone());
        }
        debug!(labels = self.labels.len(), "axis tooltip binding updated");
        Ok(())
    }

    #[must_use]
    pub fn full_label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(&node).map(String::as_str)
    }

    /// Applies `event` to `tooltip`. Returns `false` when the event's target
    /// is not a bound label and nothing changed.
    pub fn handle<S>(
        &self,
        tooltip: &mut Tooltip,
        surface: &mut S,
        event: PointerEvent,
    ) -> ChartResult<bool>
    where
        S: Surface + ?Sized,
    {
        let Some(label) = self.labels.get(&event.target()) else {
            trace!(node = ?event.target(), "pointer event on unbound node ignored");
            return Ok(false);
        };

        match event {
            PointerEvent::Enter { position, .. } => {
                tooltip.show(surface, label)?;
                tooltip.move_to(surface, position)?;
            }
            PointerEvent::Move { position, .. } => tooltip.move_to(surface, position)?,
            PointerEvent::Leave { .. } => tooltip.hide(surface)?,
        }
        Ok(true)
    }
}
