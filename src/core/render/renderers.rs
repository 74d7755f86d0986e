use crate::core::actions::colour_grid::{ColourGridError, colour_grid};
use crate::core::actions::generate_values::generate_values_rayon;
use crate::core::colouring::histogram::{HistogramError, HistogramEqualised, IterationHistogram};
use crate::core::colouring::modulo::PaletteModulo;
use crate::core::colouring::smooth::SmoothPalette;
use crate::core::data::grid_size::GridSize;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::escape::optimised::OptimisedEscapeTime;
use crate::core::escape::periodic::PeriodicEscapeTime;
use crate::core::escape::smooth::SmoothEscapeTime;
use crate::core::escape::unoptimised::UnoptimisedEscapeTime;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    ColourGrid(ColourGridError),
    Histogram(HistogramError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourGrid(err) => write!(f, "colour grid error: {}", err),
            Self::Histogram(err) => write!(f, "histogram error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourGrid(err) => Some(err),
            Self::Histogram(err) => Some(err),
        }
    }
}

impl From<ColourGridError> for RenderError {
    fn from(err: ColourGridError) -> Self {
        Self::ColourGrid(err)
    }
}

impl From<HistogramError> for RenderError {
    fn from(err: HistogramError) -> Self {
        Self::Histogram(err)
    }
}

/// Baseline escape-time render, five multiplications per iteration.
pub fn render_unoptimised(
    viewport: Viewport,
    size: GridSize,
    palette: &Palette,
    max_iteration: u32,
) -> Result<PixelGrid, RenderError> {
    let algorithm = UnoptimisedEscapeTime::new(viewport, size, max_iteration);
    let iterations = generate_values_rayon(size, &algorithm);

    Ok(colour_grid(&iterations, &PaletteModulo::new(palette), size)?)
}

/// Escape-time render with the running-squares optimisation.
pub fn render_optimised(
    viewport: Viewport,
    size: GridSize,
    palette: &Palette,
    max_iteration: u32,
) -> Result<PixelGrid, RenderError> {
    let algorithm = OptimisedEscapeTime::new(viewport, size, max_iteration);
    let iterations = generate_values_rayon(size, &algorithm);

    Ok(colour_grid(&iterations, &PaletteModulo::new(palette), size)?)
}

/// Escape-time render with cycle detection; the workhorse for high iteration
/// caps.
pub fn render_periodic(
    viewport: Viewport,
    size: GridSize,
    palette: &Palette,
    max_iteration: u32,
) -> Result<PixelGrid, RenderError> {
    let algorithm = PeriodicEscapeTime::new(viewport, size, max_iteration);
    let iterations = generate_values_rayon(size, &algorithm);

    Ok(colour_grid(&iterations, &PaletteModulo::new(palette), size)?)
}

/// Two-pass histogram-equalised render. The first pass (and its histogram
/// reduction) completes fully before any colour is mapped.
pub fn render_histogram(
    viewport: Viewport,
    size: GridSize,
    palette: &Palette,
    max_iteration: u32,
) -> Result<PixelGrid, RenderError> {
    let algorithm = OptimisedEscapeTime::new(viewport, size, max_iteration);
    let iterations = generate_values_rayon(size, &algorithm);

    let histogram = IterationHistogram::build(&iterations, max_iteration)?;
    let mapper = HistogramEqualised::new(palette, &histogram, max_iteration);

    Ok(colour_grid(&iterations, &mapper, size)?)
}

/// Smooth-coloured render with the widened bailout radius.
pub fn render_continuous(
    viewport: Viewport,
    size: GridSize,
    palette: &Palette,
    max_iteration: u32,
) -> Result<PixelGrid, RenderError> {
    let algorithm = SmoothEscapeTime::new(viewport, size, max_iteration);
    let escapes = generate_values_rayon(size, &algorithm);

    Ok(colour_grid(&escapes, &SmoothPalette::new(palette, max_iteration), size)?)
}
