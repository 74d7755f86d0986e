use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::escape::smooth::SmoothEscape;
use std::error::Error;

// Point dividing the segment [c1, c2] in (1-t):t ratio.
fn linear_interpolation(c1: f64, c2: f64, t: f64) -> f64 {
    (1.0 - t) * c1 + t * c2
}

/// Continuous colouring: interpolates between adjacent palette indices by the
/// fractional part of the smooth iteration count, then truncates. Interior
/// points keep their integer cap and are never interpolated.
#[derive(Debug)]
pub struct SmoothPalette<'a> {
    palette: &'a Palette,
    max_iteration: u32,
}

impl<'a> SmoothPalette<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette, max_iteration: u32) -> Self {
        Self {
            palette,
            max_iteration,
        }
    }
}

impl ColourMap<SmoothEscape> for SmoothPalette<'_> {
    fn map(&self, escape: &SmoothEscape) -> Result<Colour, Box<dyn Error>> {
        let Some(smooth) = escape.smooth else {
            return Ok(self.palette.colour(self.max_iteration as usize));
        };

        let floor = smooth.floor();
        let fraction = smooth - floor;
        let index = linear_interpolation(floor, floor + 1.0, fraction).floor() as i64;

        // Very early escapes can push the smooth count below zero;
        // rem_euclid keeps the index in range either way.
        let len = self.palette.len() as i64;
        Ok(self.palette.colour(index.rem_euclid(len) as usize))
    }

    fn display_name(&self) -> &str {
        "Continuous"
    }
}
