use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::format_number;
use crate::error::{ChartError, ChartResult};

/// Paths at least this long get their middle segments elided.
pub const FILE_TICK_MAX_CHARS: usize = 50;

const FILE_TICK_ELISION: &str = "/.../";

/// How date ticks are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTickFormat {
    /// `Oct 8`
    MonthDay,
    /// `Mar-2020`
    MonthYear,
    /// `Oct 8 -Oct 11`, a reporting window starting on the tick date.
    Window { days: u32 },
}

impl DateTickFormat {
    /// Fails only for windows whose end falls outside the supported dates.
    pub fn format(self, date: DateTime<Utc>) -> ChartResult<String> {
        match self {
            Self::MonthDay => Ok(format_month_day(date)),
            Self::MonthYear => Ok(format_month_year(date)),
            Self::Window { days } => format_date_window(date, days),
        }
    }
}

/// `Oct 8`: abbreviated month and unpadded day.
#[must_use]
pub fn format_month_day(date: DateTime<Utc>) -> String {
    month_day(date.date_naive())
}

/// `Mar-2020`
#[must_use]
pub fn format_month_year(date: DateTime<Utc>) -> String {
    date.format("%b-%Y").to_string()
}

/// `Oct 8 -Oct 11` for a window of `days` days starting at `date`.
pub fn format_date_window(date: DateTime<Utc>, days: u32) -> ChartResult<String> {
    window(date.date_naive(), days)
}

/// Adds the window end to an already generated `Mon D` label.
///
/// Generated labels carry no year, so the caller supplies it; it matters
/// for windows crossing a month end in February.
pub fn append_window_suffix(label: &str, year: i32, days: u32) -> ChartResult<String> {
    let start = NaiveDate::parse_from_str(&format!("{} {year}", label.trim()), "%b %d %Y")
        .map_err(|_| ChartError::InvalidTickLabel {
            label: label.to_owned(),
        })?;
    window(start, days)
}

/// `40%`
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_number(value))
}

/// Shortens long source paths to `first/three/segments/.../last`.
///
/// Backslashes are normalized to `/` first. Paths under
/// [`FILE_TICK_MAX_CHARS`] characters, or ones that elision would not
/// shorten, come back normalized but otherwise unchanged.
#[must_use]
pub fn format_file_tick(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let length = normalized.chars().count();
    if length < FILE_TICK_MAX_CHARS {
        return normalized;
    }

    let parts: Vec<&str> = normalized.split('/').collect();
    let Some(last) = parts.last() else {
        return normalized;
    };
    let head = parts[..parts.len().min(3)].join("/");
    let elided = format!("{head}{FILE_TICK_ELISION}{last}");
    if elided.chars().count() < length {
        elided
    } else {
        normalized
    }
}

fn month_day(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

fn window(start: NaiveDate, days: u32) -> ChartResult<String> {
    let end = start
        .checked_add_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            ChartError::InvalidData(format!("{days}-day window from {start} ends out of range"))
        })?;
    Ok(format!("{} -{}", month_day(start), month_day(end)))
}
