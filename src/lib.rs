mod controllers;
mod core;
mod storage;

pub use crate::controllers::explorer::explorer_controller;
pub use crate::controllers::runtimes::{RUNTIME_SAMPLES, runtime_calculator};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::grid_size::{GridSize, GridSizeError};
pub use crate::core::data::palette::{Palette, PaletteError, PaletteParams};
pub use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
pub use crate::core::data::point::Point;
pub use crate::core::data::snapshot::RenderSnapshot;
pub use crate::core::data::viewport::{MAX_ZOOM, Viewport, ViewportError};
pub use crate::core::history::{HistoryError, RenderHistory};
pub use crate::core::render::{
    AlgorithmVariant, RenderError, choose_variant, render_continuous, render_histogram,
    render_optimised, render_periodic, render_unoptimised,
};
pub use crate::core::set::{Command, MandelbrotSet, SetError};
pub use crate::storage::write_ppm::write_ppm;
