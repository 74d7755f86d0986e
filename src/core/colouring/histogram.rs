use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistogramError {
    IterationExceedsMax { iteration: u32, max_iteration: u32 },
}

impl fmt::Display for HistogramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationExceedsMax {
                iteration,
                max_iteration,
            } => {
                write!(
                    f,
                    "iteration count {} exceeds maximum {}",
                    iteration, max_iteration
                )
            }
        }
    }
}

impl Error for HistogramError {}

/// Cumulative counts of escape iterations over a full grid.
///
/// `cumulative[k]` is the number of pixels whose count is `<= k`; colouring by
/// it equalises the visual area of each colour band instead of mapping the
/// raw count linearly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationHistogram {
    cumulative: Vec<u32>,
}

impl IterationHistogram {
    /// Tallies the grid's iteration counts into prefix sums over
    /// `[0, max_iteration]`. This is the reduction step separating the two
    /// colouring passes: it must see every pixel before any colour is mapped.
    pub fn build(iterations: &[u32], max_iteration: u32) -> Result<Self, HistogramError> {
        let mut counts = vec![0u32; max_iteration as usize + 1];

        for &iteration in iterations {
            if iteration > max_iteration {
                return Err(HistogramError::IterationExceedsMax {
                    iteration,
                    max_iteration,
                });
            }
            counts[iteration as usize] += 1;
        }

        let mut cumulative = counts;
        for k in 1..cumulative.len() {
            cumulative[k] += cumulative[k - 1];
        }

        Ok(Self { cumulative })
    }

    /// Number of pixels with iteration count `<= iteration`.
    #[must_use]
    pub fn rank(&self, iteration: u32) -> u32 {
        self.cumulative[iteration as usize]
    }

    /// Total number of pixels tallied; equals the cumulative count at the
    /// iteration cap.
    #[must_use]
    pub fn total(&self) -> u32 {
        *self.cumulative.last().unwrap_or(&0)
    }
}

/// Histogram-equalised colouring: a pixel's colour index is the cumulative
/// rank of its iteration count, modulo the palette length.
#[derive(Debug)]
pub struct HistogramEqualised<'a> {
    palette: &'a Palette,
    histogram: &'a IterationHistogram,
    max_iteration: u32,
}

impl<'a> HistogramEqualised<'a> {
    #[must_use]
    pub fn new(
        palette: &'a Palette,
        histogram: &'a IterationHistogram,
        max_iteration: u32,
    ) -> Self {
        Self {
            palette,
            histogram,
            max_iteration,
        }
    }
}

impl ColourMap<u32> for HistogramEqualised<'_> {
    fn map(&self, iteration: &u32) -> Result<Colour, Box<dyn Error>> {
        if *iteration > self.max_iteration {
            return Err(Box::new(HistogramError::IterationExceedsMax {
                iteration: *iteration,
                max_iteration: self.max_iteration,
            }));
        }

        Ok(self.palette.colour(self.histogram.rank(*iteration) as usize))
    }

    fn display_name(&self) -> &str {
        "Histogram equalised"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::palette::PaletteParams;

    fn palette() -> Palette {
        Palette::generate(&PaletteParams {
            p: 5,
            q: 2,
            r: 3,
            s: 7,
        })
        .unwrap()
    }

    #[test]
    fn test_cumulative_counts() {
        let iterations = vec![0, 1, 1, 3, 3, 3];

        let histogram = IterationHistogram::build(&iterations, 3).unwrap();

        assert_eq!(histogram.rank(0), 1);
        assert_eq!(histogram.rank(1), 3);
        assert_eq!(histogram.rank(2), 3);
        assert_eq!(histogram.rank(3), 6);
    }

    #[test]
    fn test_total_at_cap_counts_every_pixel_once() {
        let iterations = vec![2, 5, 5, 1, 0, 5, 4, 4];

        let histogram = IterationHistogram::build(&iterations, 5).unwrap();

        assert_eq!(histogram.total(), iterations.len() as u32);
        assert_eq!(histogram.rank(5), iterations.len() as u32);
    }

    #[test]
    fn test_build_rejects_count_above_cap() {
        let result = IterationHistogram::build(&[1, 7], 5);

        assert!(result.is_err());
    }

    #[test]
    fn test_colour_index_is_cumulative_rank_mod_palette_length() {
        let palette = palette();
        let iterations = vec![0, 1, 1, 3, 3, 3, 2, 2];
        let histogram = IterationHistogram::build(&iterations, 3).unwrap();
        let mapper = HistogramEqualised::new(&palette, &histogram, 3);

        // rank(1) = 3, palette length 6 -> index 3.
        assert_eq!(mapper.map(&1).unwrap(), palette.colour(3));
        // rank(3) = 8 -> 8 mod 6 = 2.
        assert_eq!(mapper.map(&3).unwrap(), palette.colour(2));
    }

    #[test]
    fn test_map_rejects_count_above_cap() {
        let palette = palette();
        let histogram = IterationHistogram::build(&[0, 1], 3).unwrap();
        let mapper = HistogramEqualised::new(&palette, &histogram, 3);

        assert!(mapper.map(&4).is_err());
    }
}
