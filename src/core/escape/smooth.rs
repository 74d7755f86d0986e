use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::escape::algorithm::PixelAlgorithm;
use std::f64::consts::LN_2;

/// Bailout for the smooth variant: the larger radius makes the fractional
/// iteration estimate accurate.
const SMOOTH_BAILOUT: f64 = 65536.0; // 2^16

/// Escape result carrying the fractional iteration estimate.
///
/// `smooth` is `None` for interior points: they keep the integer cap and get
/// no interpolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SmoothEscape {
    pub iteration: u32,
    pub smooth: Option<f64>,
}

/// Escape-time iteration with a fractional count derived from the escape
/// magnitude, feeding the banding-free continuous colouring.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SmoothEscapeTime {
    viewport: Viewport,
    size: GridSize,
    max_iteration: u32,
}

impl SmoothEscapeTime {
    #[must_use]
    pub fn new(viewport: Viewport, size: GridSize, max_iteration: u32) -> Self {
        Self {
            viewport,
            size,
            max_iteration,
        }
    }
}

impl PixelAlgorithm for SmoothEscapeTime {
    type Output = SmoothEscape;

    fn compute(&self, pixel: Point) -> SmoothEscape {
        let c = self.viewport.point_to_complex(pixel, self.size);
        let (x0, y0) = (c.real, c.imag);

        let mut x = 0.0;
        let mut y = 0.0;
        let mut x_sqr = 0.0;
        let mut y_sqr = 0.0;

        let mut iteration = 0;
        while x_sqr + y_sqr <= SMOOTH_BAILOUT && iteration < self.max_iteration {
            y = (x + x) * y + y0;
            x = x_sqr - y_sqr + x0;
            x_sqr = x * x;
            y_sqr = y * y;
            iteration += 1;
        }

        if iteration == self.max_iteration {
            return SmoothEscape {
                iteration,
                smooth: None,
            };
        }

        // nu measures how far past the bailout the orbit overshot; subtracting
        // it turns the integer count into a continuous one.
        let log_magnitude = (x_sqr + y_sqr).ln() / 2.0;
        let nu = (log_magnitude / LN_2).ln() / LN_2;
        let smooth = f64::from(iteration) + 1.0 - nu;

        SmoothEscape {
            iteration,
            smooth: Some(smooth),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(max_iteration: u32) -> SmoothEscapeTime {
        SmoothEscapeTime::new(
            Viewport::initial(),
            GridSize::new(100, 100).unwrap(),
            max_iteration,
        )
    }

    #[test]
    fn test_interior_point_has_no_fraction() {
        let escape = algorithm(300).compute(Point { x: 62, y: 50 });

        assert_eq!(escape.iteration, 300);
        assert_eq!(escape.smooth, None);
    }

    #[test]
    fn test_exterior_point_carries_fraction() {
        let escape = algorithm(300).compute(Point { x: 0, y: 0 });

        assert!(escape.iteration < 300);
        let smooth = escape.smooth.unwrap();
        // With the 2^16 bailout, nu lands in [3, 4], so the continuous count
        // sits between two and three below the integer one.
        let offset = f64::from(escape.iteration) - smooth;
        assert!((1.9..=3.1).contains(&offset));
    }

    #[test]
    fn test_smooth_count_close_to_integer_count_across_grid() {
        let alg = algorithm(300);

        for x in (0..100).step_by(9) {
            for y in (0..100).step_by(9) {
                let escape = alg.compute(Point { x, y });
                if let Some(smooth) = escape.smooth {
                    assert!(escape.iteration < 300);
                    let offset = f64::from(escape.iteration) - smooth;
                    assert!((1.9..=3.1).contains(&offset));
                }
            }
        }
    }
}
