//! Titles, subtitles and captions placed at caller-chosen offsets.

use serde::{Deserialize, Serialize};

use crate::core::{Color, format_number};
use crate::error::ChartResult;
use crate::palette::{BLUE, WHITE};
use crate::render::{ElementKind, NodeId, Surface};

/// Left inset of cell titles and subtitles.
pub const CELL_TEXT_X: f64 = 5.0;
pub const TITLE_FONT_SIZE_PX: f64 = 14.0;
pub const SUBTITLE_FONT_SIZE_PX: f64 = 11.0;
pub const DESCRIPTION_FONT_SIZE_PX: f64 = 9.5;

/// One line of a text block and its vertical offset inside the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    pub text: String,
    pub offset_y: f64,
}

impl TextLine {
    #[must_use]
    pub fn new(text: impl Into<String>, offset_y: f64) -> Self {
        Self {
            text: text.into(),
            offset_y,
        }
    }
}

/// Everything needed to place a single text element.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec<'a> {
    pub text: &'a str,
    pub color: Color,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
}

/// A drawn text element, for chaining extra styling.
pub struct TextHandle<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    node: NodeId,
}

impl<'s, S: Surface + ?Sized> TextHandle<'s, S> {
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn font_weight(self, weight: &str) -> ChartResult<Self> {
        self.style("font-weight", weight)
    }

    pub fn style(self, name: &str, value: &str) -> ChartResult<Self> {
        self.surface.set_style(self.node, name, value)?;
        Ok(self)
    }

    pub fn attr(self, name: &str, value: &str) -> ChartResult<Self> {
        self.surface.set_attribute(self.node, name, value)?;
        Ok(self)
    }
}

/// Appends one `text` element to `parent`.
///
/// Position is applied as a CSS translate so callers can keep using `x`/`y`
/// attributes for local adjustments.
pub fn draw_text<'s, S>(
    surface: &'s mut S,
    parent: NodeId,
    spec: &TextSpec<'_>,
) -> ChartResult<TextHandle<'s, S>>
where
    S: Surface + ?Sized,
{
    let node = surface.append_child(parent, ElementKind::Text)?;
    surface.set_text(node, spec.text)?;
    surface.set_attribute(node, "fill", &spec.color.to_hex())?;
    surface.set_style(
        node,
        "font-size",
        &format!("{}px", format_number(spec.font_size_px)),
    )?;
    surface.set_style(
        node,
        "transform",
        &format!(
            "translate({}px, {}px)",
            format_number(spec.x),
            format_number(spec.y)
        ),
    )?;
    Ok(TextHandle { surface, node })
}

/// White bold 14px title lines.
pub fn draw_cell_title<S>(
    surface: &mut S,
    parent: NodeId,
    lines: &[TextLine],
) -> ChartResult<Vec<NodeId>>
where
    S: Surface + ?Sized,
{
    lines
        .iter()
        .map(|line| -> ChartResult<NodeId> {
            let spec = TextSpec {
                text: &line.text,
                color: WHITE,
                x: CELL_TEXT_X,
                y: line.offset_y,
                font_size_px: TITLE_FONT_SIZE_PX,
            };
            Ok(draw_text(&mut *surface, parent, &spec)?.font_weight("700")?.node())
        })
        .collect()
}

/// White 11px subtitle lines.
pub fn draw_cell_subtitle<S>(
    surface: &mut S,
    parent: NodeId,
    lines: &[TextLine],
) -> ChartResult<Vec<NodeId>>
where
    S: Surface + ?Sized,
{
    lines
        .iter()
        .map(|line| -> ChartResult<NodeId> {
            let spec = TextSpec {
                text: &line.text,
                color: WHITE,
                x: CELL_TEXT_X,
                y: line.offset_y,
                font_size_px: SUBTITLE_FONT_SIZE_PX,
            };
            Ok(draw_text(&mut *surface, parent, &spec)?.node())
        })
        .collect()
}

/// Blue 9.5px caption lines; `y_for_line` maps a line index to its offset.
pub fn draw_vis_description<S, F>(
    surface: &mut S,
    parent: NodeId,
    descriptions: &[&str],
    x: f64,
    y_for_line: F,
) -> ChartResult<Vec<NodeId>>
where
    S: Surface + ?Sized,
    F: Fn(usize) -> f64,
{
    descriptions
        .iter()
        .enumerate()
        .map(|(index, &text)| -> ChartResult<NodeId> {
            let spec = TextSpec {
                text,
                color: BLUE,
                x,
                y: y_for_line(index),
                font_size_px: DESCRIPTION_FONT_SIZE_PX,
            };
            Ok(draw_text(&mut *surface, parent, &spec)?.node())
        })
        .collect()
}
