//! Text-only axes and tick label formatting.
//!
//! Axes here never draw a domain line or tick marks: each tick is a label
//! in its own `g.tick`, positioned by the scale that produced it.

mod render;
mod tick_format;

pub use render::{
    AxisHandle, AxisLabel, AxisTick, band_ticks, draw_axis_bottom, draw_axis_left,
    draw_month_date_axis_bottom, linear_ticks, time_ticks, time_ticks_at,
};
pub use tick_format::{
    DateTickFormat, FILE_TICK_MAX_CHARS, append_window_suffix, format_date_window,
    format_file_tick, format_month_day, format_month_year, format_percent,
};
