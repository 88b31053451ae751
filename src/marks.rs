//! Marks shared by the dashboard cells: backdrops, line series, horizontal
//! bars and event callouts.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BandScale, Color, DatePoint, KeyedValue, LinearScale, PixelPoint, PixelRect, TimeScale,
    format_number,
};
use crate::error::{ChartError, ChartResult};
use crate::palette::{BLACK, GREY, WHITE};
use crate::render::{BoundData, ElementKind, NodeId, Surface, TextAnchor};

/// Gap between a bar's end and its value label.
const BAR_LABEL_GAP_PX: f64 = 5.0;
const DEFAULT_BAR_LABEL_FONT_SIZE_PX: f64 = 14.0;
const CALLOUT_LINE_HEIGHT_PX: f64 = 6.0;
const CALLOUT_PADDING_PX: f64 = 4.0;
/// Approximate glyph advance of the 6px callout font.
const CALLOUT_CHAR_WIDTH_PX: f64 = 2.8;
const CALLOUT_ARROW_PX: f64 = 12.0;

/// Grey rectangle drawn behind a cell's chart area.
pub fn draw_backdrop<S>(surface: &mut S, parent: NodeId, rect: PixelRect) -> ChartResult<NodeId>
where
    S: Surface + ?Sized,
{
    draw_rect(surface, parent, rect, GREY)
}

fn draw_rect<S>(surface: &mut S, parent: NodeId, rect: PixelRect, fill: Color) -> ChartResult<NodeId>
where
    S: Surface + ?Sized,
{
    let node = surface.append_child(parent, ElementKind::Rect)?;
    surface.set_attribute(node, "x", &format_number(rect.x))?;
    surface.set_attribute(node, "y", &format_number(rect.y))?;
    surface.set_attribute(node, "width", &format_number(rect.width))?;
    surface.set_attribute(node, "height", &format_number(rect.height))?;
    surface.set_attribute(node, "fill", &fill.to_hex())?;
    Ok(node)
}

/// `M x,y L x,y ...` through `points`; empty for no points.
#[must_use]
pub fn line_path(points: &[PixelPoint]) -> String {
    let mut path = String::new();
    for (index, point) in points.iter().enumerate() {
        let command = if index == 0 { 'M' } else { 'L' };
        if index > 0 {
            path.push(' ');
        }
        let _ = write!(
            path,
            "{command}{},{}",
            format_number(point.x),
            format_number(point.y)
        );
    }
    path
}

/// Stroke for line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
}

impl StrokeStyle {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Unfilled polyline through `data`, with the data bound to the path.
pub fn draw_line_series<S>(
    surface: &mut S,
    parent: NodeId,
    data: &[DatePoint],
    x: &TimeScale,
    y: &LinearScale,
    stroke: StrokeStyle,
) -> ChartResult<NodeId>
where
    S: Surface + ?Sized,
{
    if data.is_empty() {
        return Err(ChartError::InvalidData(
            "line series requires at least one point".to_owned(),
        ));
    }
    let points: Vec<PixelPoint> = data
        .iter()
        .map(|datum| PixelPoint::new(x.position(datum.date), y.position(datum.value)))
        .collect();

    let node = surface.append_child(parent, ElementKind::Path)?;
    surface.bind_data(node, BoundData::Series(data.to_vec()))?;
    surface.set_attribute(node, "fill", "none")?;
    surface.set_attribute(node, "stroke", &stroke.color.to_hex())?;
    surface.set_attribute(node, "stroke-width", &format_number(stroke.width))?;
    surface.set_attribute(node, "d", &line_path(&points))?;
    Ok(node)
}

/// Fill of horizontal bars and their value labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    pub color: Color,
    #[serde(default = "default_bar_label_font_size")]
    pub label_font_size_px: f64,
}

fn default_bar_label_font_size() -> f64 {
    DEFAULT_BAR_LABEL_FONT_SIZE_PX
}

impl BarStyle {
    /// Bars and labels in `color`, with 14px labels.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            label_font_size_px: DEFAULT_BAR_LABEL_FONT_SIZE_PX,
        }
    }

    #[must_use]
    pub const fn with_label_font_size(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Nodes of one drawn bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarHandle {
    pub group: NodeId,
    pub rect: NodeId,
    pub label: NodeId,
}

/// Horizontal bars, one per datum, each followed by a bold `value%` label.
pub fn draw_band_bars<S>(
    surface: &mut S,
    parent: NodeId,
    data: &[KeyedValue],
    x: &LinearScale,
    band: &BandScale,
    style: BarStyle,
) -> ChartResult<Vec<BarHandle>>
where
    S: Surface + ?Sized,
{
    let style = style.validate()?;
    let fill = style.color.to_hex();
    let font_size = format!("{}px", format_number(style.label_font_size_px));
    let mut bars = Vec::with_capacity(data.len());
    for datum in data {
        let top = band.position(&datum.key).ok_or_else(|| {
            ChartError::InvalidData(format!("`{}` is not in the band scale", datum.key))
        })?;
        let width = x.position(datum.value);

        let group = surface.append_child(parent, ElementKind::Group)?;
        surface.set_attribute(group, "class", "bar")?;
        surface.bind_data(group, BoundData::Keyed(datum.clone()))?;

        let rect = draw_rect(
            surface,
            group,
            PixelRect::new(0.0, top, width, band.bandwidth()),
            style.color,
        )?;

        let label = surface.append_child(group, ElementKind::Text)?;
        surface.set_attribute(label, "class", "label")?;
        surface.set_attribute(label, "x", &format_number(width + BAR_LABEL_GAP_PX))?;
        surface.set_attribute(
            label,
            "y",
            &format_number(top + band.bandwidth() / 2.0),
        )?;
        surface.set_text(label, &format!("{}%", format_number(datum.value)))?;
        surface.set_style(label, "font-weight", "bold")?;
        surface.set_style(label, "fill", &fill)?;
        surface.set_style(label, "font-size", &font_size)?;
        surface.set_style(label, "alignment-baseline", "middle")?;

        bars.push(BarHandle { group, rect, label });
    }
    debug!(bars = bars.len(), "band bars drawn");
    Ok(bars)
}

/// A dated event: a dashed marker line plus an arrow-shaped label box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCallout {
    pub lines: Vec<String>,
    /// Marker x and the arrow tip.
    pub x: f64,
    /// Top of the label box.
    pub y: f64,
    #[serde(default = "default_marker_top")]
    pub marker_top: f64,
    #[serde(default = "default_marker_length")]
    pub marker_length: f64,
}

fn default_marker_top() -> f64 {
    50.0
}

fn default_marker_length() -> f64 {
    100.0
}

impl EventCallout {
    #[must_use]
    pub fn new<I, L>(lines: I, x: f64, y: f64) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            x,
            y,
            marker_top: default_marker_top(),
            marker_length: default_marker_length(),
        }
    }

    /// `(width, height)` of the label box.
    #[must_use]
    pub fn box_size(&self) -> (f64, f64) {
        let longest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let width = longest as f64 * CALLOUT_CHAR_WIDTH_PX + 5.0;
        let height = self.lines.len() as f64 * CALLOUT_LINE_HEIGHT_PX + CALLOUT_PADDING_PX;
        (width, height)
    }

    fn box_path(&self) -> String {
        let (width, height) = self.box_size();
        format!(
            "M{},{}h{}v{}h-{}l-{},-{}z",
            format_number(self.x + CALLOUT_ARROW_PX),
            format_number(self.y),
            format_number(width),
            format_number(height),
            format_number(width),
            format_number(CALLOUT_ARROW_PX),
            format_number(height / 2.0),
        )
    }
}

/// Nodes of one drawn callout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutHandle {
    pub marker: NodeId,
    pub label_box: NodeId,
    pub lines: Vec<NodeId>,
}

pub fn draw_event_callout<S>(
    surface: &mut S,
    parent: NodeId,
    callout: &EventCallout,
) -> ChartResult<CalloutHandle>
where
    S: Surface + ?Sized,
{
    let marker = surface.append_child(parent, ElementKind::Path)?;
    surface.set_attribute(
        marker,
        "d",
        &format!(
            "M {} {} v {}",
            format_number(callout.x),
            format_number(callout.marker_top),
            format_number(callout.marker_length)
        ),
    )?;
    surface.set_style(marker, "fill", "none")?;
    surface.set_attribute(marker, "stroke", &BLACK.to_hex())?;
    surface.set_attribute(marker, "stroke-dasharray", "2,2")?;

    let label_box = surface.append_child(parent, ElementKind::Path)?;
    surface.set_attribute(label_box, "fill", &WHITE.to_hex())?;
    surface.set_attribute(label_box, "d", &callout.box_path())?;

    let (width, _) = callout.box_size();
    let text_x = format_number(callout.x + 10.0 + width);
    let mut lines = Vec::with_capacity(callout.lines.len());
    for (index, line) in callout.lines.iter().enumerate() {
        let text = surface.append_child(parent, ElementKind::Text)?;
        surface.set_text(text, line)?;
        surface.set_attribute(text, "x", &text_x)?;
        surface.set_attribute(
            text,
            "y",
            &format_number(callout.y + index as f64 * CALLOUT_LINE_HEIGHT_PX + 3.0),
        )?;
        surface.set_style(text, "font-size", "6px")?;
        surface.set_style(text, "text-anchor", TextAnchor::End.as_str())?;
        surface.set_style(text, "alignment-baseline", "hanging")?;
        surface.set_style(text, "font-weight", "bold")?;
        lines.push(text);
    }

    Ok(CalloutHandle {
        marker,
        label_box,
        lines,
    })
}

/// Draws callouts last-to-first so each label box covers the marker lines
/// of the callouts after it. Handles come back in input order.
pub fn draw_event_callouts<S>(
    surface: &mut S,
    parent: NodeId,
    callouts: &[EventCallout],
) -> ChartResult<Vec<CalloutHandle>>
where
    S: Surface + ?Sized,
{
    let mut handles = callouts
        .iter()
        .rev()
        .map(|callout| draw_event_callout(&mut *surface, parent, callout))
        .collect::<ChartResult<Vec<_>>>()?;
    handles.reverse();
    Ok(handles)
}
