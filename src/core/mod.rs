pub mod band_scale;
pub mod color_scale;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use band_scale::{BandScale, BandScaleOptions, DEFAULT_BAND_PADDING};
pub use color_scale::{ColorScale, Lab};
pub use primitives::{Color, format_number};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{DatePoint, KeyedValue, Offset, PixelPoint, PixelRect};
