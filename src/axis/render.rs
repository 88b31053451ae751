use chrono::{DateTime, Utc};
use tracing::debug;

use crate::axis::DateTickFormat;
use crate::config::AxisLabelStyle;
use crate::core::{BandScale, LinearScale, Offset, TimeScale, format_number};
use crate::error::ChartResult;
use crate::render::{BoundData, ElementKind, NodeId, Surface, TextAnchor};

/// Gap between the axis line position and its labels (tick size + padding).
const LABEL_GAP_PX: f64 = 9.0;
const BOTTOM_LABEL_DY: &str = "0.71em";
const LEFT_LABEL_DY: &str = "0.32em";

/// One labelled reference point, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    /// Pixel coordinate along the axis.
    pub position: f64,
    /// Text drawn on the axis.
    pub label: String,
    /// Untruncated text, shown in tooltips.
    pub full_label: String,
}

impl AxisTick {
    #[must_use]
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            position,
            full_label: label.clone(),
            label,
        }
    }

    #[must_use]
    pub fn with_full_label(mut self, full_label: impl Into<String>) -> Self {
        self.full_label = full_label.into();
        self
    }
}

/// A drawn tick label and the tick it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub node: NodeId,
    pub tick: AxisTick,
}

/// Nodes created by one axis draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisHandle {
    pub group: NodeId,
    pub labels: Vec<AxisLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisOrient {
    Bottom,
    Left,
}

/// About `count` day-aligned ticks across the scale's domain.
pub fn time_ticks(
    scale: &TimeScale,
    count: usize,
    format: DateTickFormat,
) -> ChartResult<Vec<AxisTick>> {
    time_ticks_at(scale, &scale.ticks(count), format)
}

/// Ticks at caller-chosen dates.
pub fn time_ticks_at(
    scale: &TimeScale,
    dates: &[DateTime<Utc>],
    format: DateTickFormat,
) -> ChartResult<Vec<AxisTick>> {
    dates
        .iter()
        .map(|date| -> ChartResult<AxisTick> {
            Ok(AxisTick::new(scale.position(*date), format.format(*date)?))
        })
        .collect()
}

#[must_use]
pub fn linear_ticks<F>(scale: &LinearScale, count: usize, format: F) -> Vec<AxisTick>
where
    F: Fn(f64) -> String,
{
    scale
        .ticks(count)
        .into_iter()
        .map(|value| AxisTick::new(scale.position(value), format(value)))
        .collect()
}

/// One tick per band, centred in the band. `full_label` keeps the raw key.
#[must_use]
pub fn band_ticks<F>(scale: &BandScale, format: F) -> Vec<AxisTick>
where
    F: Fn(&str) -> String,
{
    scale
        .keys()
        .filter_map(|key| {
            let center = scale.center(key)?;
            Some(AxisTick::new(center, format(key)).with_full_label(key))
        })
        .collect()
}

/// Draws a horizontal axis made only of labels, below position `offset.y`.
pub fn draw_axis_bottom<S>(
    surface: &mut S,
    parent: NodeId,
    ticks: &[AxisTick],
    offset: Offset,
    style: &AxisLabelStyle,
) -> ChartResult<AxisHandle>
where
    S: Surface + ?Sized,
{
    draw_axis(surface, parent, ticks, offset, style, AxisOrient::Bottom)
}

/// Draws a vertical axis made only of labels, left of position `offset.x`.
pub fn draw_axis_left<S>(
    surface: &mut S,
    parent: NodeId,
    ticks: &[AxisTick],
    offset: Offset,
    style: &AxisLabelStyle,
) -> ChartResult<AxisHandle>
where
    S: Surface + ?Sized,
{
    draw_axis(surface, parent, ticks, offset, style, AxisOrient::Left)
}

/// Bottom date axis with explicit tick dates, optionally labelled as
/// reporting windows of `window_days` days.
pub fn draw_month_date_axis_bottom<S>(
    surface: &mut S,
    parent: NodeId,
    scale: &TimeScale,
    dates: &[DateTime<Utc>],
    offset: Offset,
    style: &AxisLabelStyle,
    window_days: Option<u32>,
) -> ChartResult<AxisHandle>
where
    S: Surface + ?Sized,
{
    let format = window_days.map_or(DateTickFormat::MonthDay, |days| {
        DateTickFormat::Window { days }
    });
    let ticks = time_ticks_at(scale, dates, format)?;
    draw_axis_bottom(surface, parent, &ticks, offset, style)
}

fn draw_axis<S>(
    surface: &mut S,
    parent: NodeId,
    ticks: &[AxisTick],
    offset: Offset,
    style: &AxisLabelStyle,
    orient: AxisOrient,
) -> ChartResult<AxisHandle>
where
    S: Surface + ?Sized,
{
    style.validate()?;

    let group = surface.append_child(parent, ElementKind::Group)?;
    let class = match orient {
        AxisOrient::Bottom => "axis axis--bottom",
        AxisOrient::Left => "axis axis--left",
    };
    surface.set_attribute(group, "class", class)?;
    surface.set_attribute(
        group,
        "transform",
        &format!(
            "translate({},{})",
            format_number(offset.x),
            format_number(offset.y)
        ),
    )?;

    let mut labels = Vec::with_capacity(ticks.len());
    for tick in ticks {
        let node = draw_tick_label(surface, group, tick, style, orient)?;
        labels.push(AxisLabel {
            node,
            tick: tick.clone(),
        });
    }

    debug!(?orient, ticks = labels.len(), "axis drawn");
    Ok(AxisHandle { group, labels })
}

fn draw_tick_label<S>(
    surface: &mut S,
    group: NodeId,
    tick: &AxisTick,
    style: &AxisLabelStyle,
    orient: AxisOrient,
) -> ChartResult<NodeId>
where
    S: Surface + ?Sized,
{
    let position = format_number(tick.position);
    let tick_group = surface.append_child(group, ElementKind::Group)?;
    surface.set_attribute(tick_group, "class", "tick")?;
    surface.bind_data(tick_group, BoundData::Label(tick.full_label.clone()))?;
    let (translate, label_axis, gap, default_dy, default_anchor) = match orient {
        AxisOrient::Bottom => (
            format!("translate({position},0)"),
            "y",
            format_number(LABEL_GAP_PX),
            BOTTOM_LABEL_DY,
            TextAnchor::Middle,
        ),
        AxisOrient::Left => (
            format!("translate(0,{position})"),
            "x",
            format_number(-LABEL_GAP_PX),
            LEFT_LABEL_DY,
            TextAnchor::End,
        ),
    };
    surface.set_attribute(tick_group, "transform", &translate)?;

    let text = surface.append_child(tick_group, ElementKind::Text)?;
    surface.set_text(text, &tick.label)?;
    surface.set_attribute(text, label_axis, &gap)?;
    surface.set_attribute(text, "dy", style.dy.as_deref().unwrap_or(default_dy))?;
    if let Some(dx) = &style.dx {
        surface.set_attribute(text, "dx", dx)?;
    }
    surface.set_attribute(text, "fill", &style.color.to_hex())?;
    if let Some(deg) = style.rotate_deg {
        surface.set_attribute(text, "transform", &format!("rotate({})", format_number(deg)))?;
    }
    surface.set_style(
        text,
        "text-anchor",
        style.text_anchor.unwrap_or(default_anchor).as_str(),
    )?;
    surface.set_style(
        text,
        "font-size",
        &format!("{}px", format_number(style.font_size_px)),
    )?;
    if let Some(weight) = &style.font_weight {
        surface.set_style(text, "font-weight", weight)?;
    }
    Ok(text)
}
