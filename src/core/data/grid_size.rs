use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GridSizeError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for GridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "grid size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for GridSizeError {}

/// Dimensions of the output pixel grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u32,
    height: u32,
}

impl GridSize {
    pub fn new(width: u32, height: u32) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Row-major index of a pixel within a flat grid buffer.
    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }
}
