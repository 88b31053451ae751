//! Square chart sizing against the hosting container and viewport.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::SizingConfig;
use crate::error::{ChartError, ChartResult};

/// Measurements the host reads from its layout engine before a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingInput {
    /// Whether the document is currently in fullscreen mode.
    pub fullscreen: bool,
    /// Rendered width of the chart element itself.
    pub element_width: u32,
    /// Rendered width of the element's parent, `None` when detached.
    pub parent_width: Option<u32>,
    pub viewport_height: u32,
}

/// Edge length, in pixels, for a square chart.
///
/// In fullscreen the element's own width wins. Otherwise the parent width is
/// used (the element's own width shrinks a little on every resize due to
/// rounding) capped by the viewport height minus reserved chrome.
pub fn compute_svg_size(input: SizingInput, config: SizingConfig) -> ChartResult<u32> {
    if input.fullscreen {
        trace!(size = input.element_width, "svg size from fullscreen element");
        return Ok(input.element_width);
    }

    let parent_width = input.parent_width.ok_or(ChartError::MissingParent)?;
    let available_height = input
        .viewport_height
        .saturating_sub(config.reserved_chrome_px);
    let size = parent_width.min(available_height);
    trace!(parent_width, available_height, size, "svg size from container");
    Ok(size)
}
