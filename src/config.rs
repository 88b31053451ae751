use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};
use crate::palette::{BLACK, BLUE};
use crate::render::TextAnchor;

/// Vertical space reserved for page chrome (header and margins) when a chart
/// is sized against the viewport height.
pub const DEFAULT_RESERVED_CHROME_PX: u32 = 130;

/// Tunables for [`compute_svg_size`](crate::layout::compute_svg_size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    pub reserved_chrome_px: u32,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            reserved_chrome_px: DEFAULT_RESERVED_CHROME_PX,
        }
    }
}

/// Styling applied to every tick label of an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabelStyle {
    pub font_size_px: f64,
    pub font_weight: Option<String>,
    pub color: Color,
    /// Rotation in degrees around the label anchor; crowded horizontal axes use -90.
    pub rotate_deg: Option<f64>,
    pub text_anchor: Option<TextAnchor>,
    pub dx: Option<String>,
    pub dy: Option<String>,
}

impl Default for AxisLabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: 10.0,
            font_weight: None,
            color: BLACK,
            rotate_deg: None,
            text_anchor: None,
            dx: None,
            dy: None,
        }
    }
}

impl AxisLabelStyle {
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size_px: f64) -> Self {
        self.font_size_px = font_size_px;
        self
    }

    #[must_use]
    pub fn with_font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Small bold date labels turned vertical, for axes with many ticks.
    #[must_use]
    pub fn rotated_date_labels() -> Self {
        Self {
            font_size_px: 7.0,
            font_weight: Some("600".to_owned()),
            color: BLUE,
            rotate_deg: Some(-90.0),
            text_anchor: Some(TextAnchor::End),
            dx: Some("-1em".to_owned()),
            dy: Some("-.5em".to_owned()),
        }
    }

    /// Category labels beside horizontal bars.
    #[must_use]
    pub fn category_labels() -> Self {
        Self {
            font_size_px: 9.0,
            color: BLUE,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::Config(
                "axis label font size must be finite and > 0".to_owned(),
            ));
        }
        if self.rotate_deg.is_some_and(|deg| !deg.is_finite()) {
            return Err(ChartError::Config(
                "axis label rotation must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// JSON persistence shared by the serializable config types.
pub trait JsonConfig: Serialize + for<'de> Deserialize<'de> {
    fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse config json: {e}")))
    }

    fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize config json: {e}")))
    }
}

impl JsonConfig for SizingConfig {}
impl JsonConfig for AxisLabelStyle {}
