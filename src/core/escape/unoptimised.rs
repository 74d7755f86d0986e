use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::escape::algorithm::PixelAlgorithm;

/// Reference escape-time iteration: `z = z² + c` with full complex
/// arithmetic, recomputing every product each round (five multiplications per
/// iteration). The baseline the optimised variants are checked against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnoptimisedEscapeTime {
    viewport: Viewport,
    size: GridSize,
    max_iteration: u32,
}

impl UnoptimisedEscapeTime {
    #[must_use]
    pub fn new(viewport: Viewport, size: GridSize, max_iteration: u32) -> Self {
        Self {
            viewport,
            size,
            max_iteration,
        }
    }
}

impl PixelAlgorithm for UnoptimisedEscapeTime {
    type Output = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = self.viewport.point_to_complex(pixel, self.size);
        let mut z = Complex::ZERO;

        let mut iteration = 0;
        while z.magnitude_squared() <= 4.0 && iteration < self.max_iteration {
            z = z * z + c;
            iteration += 1;
        }

        iteration
    }
}
