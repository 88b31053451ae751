use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One time-series sample, e.g. a monthly survey percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatePoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

impl DatePoint {
    #[must_use]
    pub fn new(date: DateTime<Utc>, value: f64) -> Self {
        Self { date, value }
    }
}

/// One categorical sample, e.g. a survey answer and its share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyedValue {
    pub key: String,
    pub value: f64,
}

impl KeyedValue {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Translation applied to a group before its children are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
