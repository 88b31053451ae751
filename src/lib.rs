//! cell-charts: drawing and layout utilities for dashboard chart cells.
//!
//! Every drawing function takes the target [`render::Surface`] and a parent
//! node explicitly; nothing reads a shared "current" surface. Scales are
//! plain values built per chart, axes are text-only, and all styling
//! literals live next to the helpers that use them.

pub mod axis;
pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod marks;
pub mod palette;
pub mod render;
pub mod telemetry;
pub mod text_block;
pub mod tooltip;

pub use config::{AxisLabelStyle, JsonConfig, SizingConfig};
pub use error::{ChartError, ChartResult};
pub use layout::{SizingInput, compute_svg_size};
pub use render::{NodeId, Surface, SvgDocument};
pub use tooltip::{AxisTooltipBinding, PointerEvent, PointerPosition, Tooltip};
