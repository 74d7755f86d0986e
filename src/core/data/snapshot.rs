use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;

/// A full rendering frozen for the zoom history: the grid plus the viewport
/// (and zoom level) it was computed under. An owned value with no ties to the
/// live state it was copied from.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub grid: PixelGrid,
    pub viewport: Viewport,
}
