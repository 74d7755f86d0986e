use crate::core::data::colour::Colour;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PixelGridError {
    PixelOutsideBounds { pixel: Point, size: GridSize },
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of grid bounds {}x{}",
                    pixel.x,
                    pixel.y,
                    size.width(),
                    size.height()
                )
            }
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "grid expects {} colours but {} were supplied",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelGridError {}

/// A completed rendering: one colour per pixel, row-major.
///
/// Produced fresh by every render call and treated as immutable afterwards;
/// the display layer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    size: GridSize,
    colours: Vec<Colour>,
}

impl PixelGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            colours: vec![Colour { r: 0, g: 0, b: 0 }; size.pixel_count()],
        }
    }

    pub fn from_colours(size: GridSize, colours: Vec<Colour>) -> Result<Self, PixelGridError> {
        if colours.len() != size.pixel_count() {
            return Err(PixelGridError::SizeMismatch {
                expected: size.pixel_count(),
                actual: colours.len(),
            });
        }

        Ok(Self { size, colours })
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn colour_at(&self, pixel: Point) -> Result<Colour, PixelGridError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelGridError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        Ok(self.colours[self.size.index_of(pixel)])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelGridError> {
        if !self.size.contains_point(pixel) {
            return Err(PixelGridError::PixelOutsideBounds {
                pixel,
                size: self.size,
            });
        }

        let index = self.size.index_of(pixel);
        self.colours[index] = colour;
        Ok(())
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Flattens the grid to interleaved RGB bytes for image output.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.colours.len() * 3);
        for colour in &self.colours {
            bytes.push(colour.r);
            bytes.push(colour.g);
            bytes.push(colour.b);
        }
        bytes
    }
}
