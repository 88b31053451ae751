use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Opaque sRGB color with 8-bit channels.
///
/// Serialized as a `#RRGGBB` string so style configs stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parses `#RGB` or `#RRGGBB` (leading `#` optional, case-insensitive).
    pub fn from_hex(input: &str) -> ChartResult<Self> {
        let hex = input.trim().trim_start_matches('#');
        if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(format!(
                "`{input}` is not a hex color"
            )));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|_| ChartError::InvalidColor(format!("`{input}` is not a hex color")))
        };

        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(ChartError::InvalidColor(format!(
                "`{input}` must have 3 or 6 hex digits"
            ))),
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Formats a number the way CSS and SVG attributes expect it:
/// shortest round-trip form, no trailing `.0`, no negative zero.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
