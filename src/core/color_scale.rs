use serde::{Deserialize, Serialize};

use crate::core::Color;
use crate::error::{ChartError, ChartResult};
use crate::palette::{COLOR_SCALE_END, COLOR_SCALE_START};

// D50 reference white, Bradford-adapted sRGB matrices.
const XN: f64 = 0.964_22;
const YN: f64 = 1.0;
const ZN: f64 = 0.825_21;
const T0: f64 = 4.0 / 29.0;
const T1: f64 = 6.0 / 29.0;
const T2: f64 = 3.0 * T1 * T1;
const T3: f64 = T1 * T1 * T1;

/// CIE L*a*b* coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let r = srgb_to_linear(color.red);
        let g = srgb_to_linear(color.green);
        let b = srgb_to_linear(color.blue);
        let y = xyz_to_lab((0.222_504_5 * r + 0.716_878_6 * g + 0.060_616_9 * b) / YN);
        let (x, z) = if color.red == color.green && color.green == color.blue {
            (y, y)
        } else {
            (
                xyz_to_lab((0.436_074_7 * r + 0.385_064_9 * g + 0.143_080_4 * b) / XN),
                xyz_to_lab((0.013_932_2 * r + 0.097_104_5 * g + 0.714_173_3 * b) / ZN),
            )
        };
        Self {
            l: 116.0 * y - 16.0,
            a: 500.0 * (x - y),
            b: 200.0 * (y - z),
        }
    }

    /// Converts back to sRGB, rounding and clamping each channel.
    #[must_use]
    pub fn to_color(self) -> Color {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;
        let x = XN * lab_to_xyz(fx);
        let y = YN * lab_to_xyz(fy);
        let z = ZN * lab_to_xyz(fz);
        Color::rgb(
            linear_to_srgb(3.133_856_1 * x - 1.616_866_7 * y - 0.490_614_6 * z),
            linear_to_srgb(-0.978_768_4 * x + 1.916_141_5 * y + 0.033_454_0 * z),
            linear_to_srgb(0.071_945_3 * x - 0.228_991_4 * y + 1.405_242_7 * z),
        )
    }

    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            l: self.l + (other.l - self.l) * t,
            a: self.a + (other.a - self.a) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(value: f64) -> u8 {
    let c = if value <= 0.003_130_8 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    };
    (255.0 * c).round().clamp(0.0, 255.0) as u8
}

fn xyz_to_lab(t: f64) -> f64 {
    if t > T3 { t.cbrt() } else { t / T2 + T0 }
}

fn lab_to_xyz(t: f64) -> f64 {
    if t > T1 { t * t * t } else { T2 * (t - T0) }
}

/// Continuous color ramp between two colors, interpolated in Lab space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    domain_start: f64,
    domain_end: f64,
    start: Color,
    end: Color,
    start_lab: Lab,
    end_lab: Lab,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), start: Color, end: Color) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "color scale domain must be finite and non-zero".to_owned(),
            ));
        }
        Ok(Self {
            domain_start,
            domain_end,
            start,
            end,
            start_lab: Lab::from_color(start),
            end_lab: Lab::from_color(end),
        })
    }

    /// Blue-to-orange ramp used by the similarity views.
    pub fn reference(domain: (f64, f64)) -> ChartResult<Self> {
        Self::new(domain, COLOR_SCALE_START, COLOR_SCALE_END)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn endpoints(self) -> (Color, Color) {
        (self.start, self.end)
    }

    /// Color for `value`; values outside the domain clamp to the endpoints.
    #[must_use]
    pub fn color_at(self, value: f64) -> Color {
        let t = (value - self.domain_start) / (self.domain_end - self.domain_start);
        if t.is_nan() || t <= 0.0 {
            return self.start;
        }
        if t >= 1.0 {
            return self.end;
        }
        self.start_lab.lerp(self.end_lab, t).to_color()
    }
}
