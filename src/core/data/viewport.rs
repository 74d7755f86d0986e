use crate::core::data::complex::Complex;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

/// Hard ceiling on the zoom level. The scaling math computes 2^zoom, and past
/// 62 the intermediate no longer fits a 64-bit integer; f64 resolution is long
/// gone by then anyway.
pub const MAX_ZOOM: u64 = 62;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidBounds {
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    },
    ZoomOutOfRange {
        zoom: u64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                left,
                right,
                top,
                bottom,
            } => {
                write!(
                    f,
                    "viewport bounds must satisfy left < right and bottom < top: \
                     left={}, right={}, top={}, bottom={}",
                    left, right, top, bottom
                )
            }
            Self::ZoomOutOfRange { zoom } => {
                write!(f, "zoom level {} outside of range [1, {}]", zoom, MAX_ZOOM)
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangular region of the complex plane currently mapped onto the
/// pixel grid, together with its zoom level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    zoom: u64,
}

// x^n in O(log n) multiplications. n can be as large as 2^62 here (the
// 0.5^(2^zoom) term), which f64::powi cannot represent in its i32 exponent.
fn power(base: f64, exponent: u64) -> f64 {
    let mut result = 1.0;
    let mut x = base;
    let mut n = exponent;

    while n > 0 {
        if n & 1 == 1 {
            result *= x;
        }
        x *= x;
        n >>= 1;
    }

    result
}

impl Viewport {
    /// The classic full view of the Mandelbrot set at zoom 1.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            left: -2.0,
            right: 0.47,
            top: 1.12,
            bottom: -1.12,
            zoom: 1,
        }
    }

    pub fn new(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        zoom: u64,
    ) -> Result<Self, ViewportError> {
        if !(left < right && bottom < top) {
            return Err(ViewportError::InvalidBounds {
                left,
                right,
                top,
                bottom,
            });
        }

        if zoom < 1 || zoom > MAX_ZOOM {
            return Err(ViewportError::ZoomOutOfRange { zoom });
        }

        Ok(Self {
            left,
            right,
            top,
            bottom,
            zoom,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn zoom(&self) -> u64 {
        self.zoom
    }

    /// Maps a pixel position onto the complex plane under this viewport.
    #[must_use]
    pub fn point_to_complex(&self, pixel: Point, size: GridSize) -> Complex {
        let real =
            self.left + ((self.right - self.left) * f64::from(pixel.x)) / f64::from(size.width());
        let imag =
            self.bottom + ((self.top - self.bottom) * f64::from(pixel.y)) / f64::from(size.height());

        Complex { real, imag }
    }

    /// Zooms in one level, re-centring the view on the clicked pixel.
    ///
    /// Returns `false` without touching the viewport when already at
    /// [`MAX_ZOOM`], so callers can skip the re-render.
    pub fn zoom_in(&mut self, pixel: Point, size: GridSize) -> bool {
        if self.zoom == MAX_ZOOM {
            return false;
        }

        // The clicked point, mapped under the current (pre-zoom) viewport.
        let centre = self.point_to_complex(pixel, size);

        self.zoom += 1;
        let two_zoom = 1u64 << self.zoom;
        // Contraction factor approaching 0.9 as zoom grows; 0.9 was settled
        // on empirically.
        let multiplier = 0.9 - power(0.5, two_zoom);

        self.left *= multiplier;
        self.right *= multiplier;
        self.top *= multiplier;
        self.bottom *= multiplier;

        // Shift the contracted bounds so the clicked point becomes the centre.
        let horizontal_shift = centre.real - (self.left + self.right) / 2.0;
        let vertical_shift = centre.imag - (self.top + self.bottom) / 2.0;

        self.left += horizontal_shift;
        self.right += horizontal_shift;
        self.top += vertical_shift;
        self.bottom += vertical_shift;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_1000() -> GridSize {
        GridSize::new(1000, 1000).unwrap()
    }

    #[test]
    fn test_initial_viewport() {
        let viewport = Viewport::initial();

        assert_eq!(viewport.left(), -2.0);
        assert_eq!(viewport.right(), 0.47);
        assert_eq!(viewport.top(), 1.12);
        assert_eq!(viewport.bottom(), -1.12);
        assert_eq!(viewport.zoom(), 1);
    }

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(Viewport::new(1.0, -1.0, 1.0, -1.0, 1).is_err());
        assert!(Viewport::new(-1.0, 1.0, -1.0, 1.0, 1).is_err());
    }

    #[test]
    fn test_new_rejects_zoom_outside_range() {
        assert!(Viewport::new(-1.0, 1.0, 1.0, -1.0, 0).is_err());
        assert!(Viewport::new(-1.0, 1.0, 1.0, -1.0, MAX_ZOOM + 1).is_err());
    }

    #[test]
    fn test_point_to_complex_corners() {
        let viewport = Viewport::initial();
        let size = size_1000();

        let origin = viewport.point_to_complex(Point { x: 0, y: 0 }, size);
        assert_eq!(origin.real, -2.0);
        assert_eq!(origin.imag, -1.12);

        let mid = viewport.point_to_complex(Point { x: 500, y: 500 }, size);
        assert!((mid.real - (-0.765)).abs() < 1e-12);
        assert!(mid.imag.abs() < 1e-12);
    }

    #[test]
    fn test_power_matches_small_cases() {
        assert_eq!(power(2.0, 0), 1.0);
        assert_eq!(power(2.0, 10), 1024.0);
        assert_eq!(power(0.5, 4), 0.0625);
    }

    #[test]
    fn test_power_underflows_to_zero_for_huge_exponents() {
        // 0.5^(2^62) is far below the smallest subnormal.
        assert_eq!(power(0.5, 1u64 << 62), 0.0);
    }

    #[test]
    fn test_zoom_in_increments_zoom_and_shrinks_bounds() {
        let mut viewport = Viewport::initial();
        let size = size_1000();
        let old_width = viewport.right() - viewport.left();

        let zoomed = viewport.zoom_in(Point { x: 500, y: 500 }, size);

        assert!(zoomed);
        assert_eq!(viewport.zoom(), 2);
        let multiplier = 0.9 - 0.0625; // 0.5^(2^2)
        let new_width = viewport.right() - viewport.left();
        assert!((new_width - old_width * multiplier).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_in_at_centre_keeps_centre() {
        let mut viewport = Viewport::initial();
        let size = size_1000();
        let before = viewport.point_to_complex(Point { x: 500, y: 500 }, size);

        viewport.zoom_in(Point { x: 500, y: 500 }, size);

        let centre_real = (viewport.left() + viewport.right()) / 2.0;
        let centre_imag = (viewport.top() + viewport.bottom()) / 2.0;
        assert!((centre_real - before.real).abs() < 1e-12);
        assert!((centre_imag - before.imag).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_in_recentres_on_clicked_point() {
        let mut viewport = Viewport::initial();
        let size = size_1000();
        let clicked = viewport.point_to_complex(Point { x: 250, y: 750 }, size);

        viewport.zoom_in(Point { x: 250, y: 750 }, size);

        let centre_real = (viewport.left() + viewport.right()) / 2.0;
        let centre_imag = (viewport.top() + viewport.bottom()) / 2.0;
        assert!((centre_real - clicked.real).abs() < 1e-12);
        assert!((centre_imag - clicked.imag).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_never_exceeds_max() {
        let mut viewport = Viewport::initial();
        let size = size_1000();

        for _ in 0..100 {
            viewport.zoom_in(Point { x: 300, y: 300 }, size);
        }
        assert_eq!(viewport.zoom(), MAX_ZOOM);

        let frozen = viewport;
        let zoomed = viewport.zoom_in(Point { x: 300, y: 300 }, size);

        assert!(!zoomed);
        assert_eq!(viewport, frozen);
    }
}
