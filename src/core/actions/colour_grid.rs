use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::grid_size::GridSize;
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ColourGridError {
    ColourMap(Box<dyn Error>),
    PixelGrid(PixelGridError),
}

impl fmt::Display for ColourGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelGrid(err) => write!(f, "pixel grid error: {}", err),
        }
    }
}

impl Error for ColourGridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => err.source(),
            Self::PixelGrid(err) => Some(err),
        }
    }
}

impl From<PixelGridError> for ColourGridError {
    fn from(err: PixelGridError) -> Self {
        Self::PixelGrid(err)
    }
}

/// Maps per-pixel values to colours and assembles the finished grid.
///
/// `values` must be row-major for `size`, as produced by the generators in
/// [`generate_values`](crate::core::actions::generate_values).
pub fn colour_grid<T, CMap: ColourMap<T>>(
    values: &[T],
    mapper: &CMap,
    size: GridSize,
) -> Result<PixelGrid, ColourGridError> {
    let mut colours = Vec::with_capacity(values.len());

    for value in values {
        colours.push(mapper.map(value).map_err(ColourGridError::ColourMap)?);
    }

    Ok(PixelGrid::from_colours(size, colours)?)
}
