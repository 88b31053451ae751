//! Dashboard palette.
//!
//! Drawing helpers use these directly; callers that want other colors pass
//! them explicitly.

use crate::core::Color;

/// Theme blue `#30469C`.
pub const BLUE: Color = Color::rgb(0x30, 0x46, 0x9C);
/// Theme teal `#41999A`.
pub const TEAL: Color = Color::rgb(0x41, 0x99, 0x9A);
/// Backdrop grey `#E9E9EB`.
pub const GREY: Color = Color::rgb(0xE9, 0xE9, 0xEB);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
/// Orange `#FF7F0E`, the far end of the similarity color ramp.
pub const ORANGE: Color = Color::rgb(0xFF, 0x7F, 0x0E);

pub const COLOR_SCALE_START: Color = BLUE;
pub const COLOR_SCALE_END: Color = ORANGE;
