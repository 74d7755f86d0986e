use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::escape::algorithm::PixelAlgorithm;

/// How close, per component, the orbit must stay to its snapshot before the
/// point is declared interior. Empirically chosen; not claimed optimal.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// The snapshot is refreshed every `max_iteration / DEFAULT_SNAPSHOT_DIVISOR`
/// iterations. Empirically chosen alongside the tolerance.
pub const DEFAULT_SNAPSHOT_DIVISOR: u32 = 10;

/// [`OptimisedEscapeTime`] plus a cycle-detection heuristic: the orbit is
/// periodically snapshotted, and once it stops moving more than `tolerance`
/// per component the point is treated as interior and the iteration count is
/// forced to the cap. Trades a small accuracy risk on interior regions for
/// large speedups at high iteration caps.
///
/// [`OptimisedEscapeTime`]: crate::core::escape::optimised::OptimisedEscapeTime
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PeriodicEscapeTime {
    viewport: Viewport,
    size: GridSize,
    max_iteration: u32,
    tolerance: f64,
    snapshot_divisor: u32,
}

impl PeriodicEscapeTime {
    #[must_use]
    pub fn new(viewport: Viewport, size: GridSize, max_iteration: u32) -> Self {
        Self::with_tuning(
            viewport,
            size,
            max_iteration,
            DEFAULT_TOLERANCE,
            DEFAULT_SNAPSHOT_DIVISOR,
        )
    }

    #[must_use]
    pub fn with_tuning(
        viewport: Viewport,
        size: GridSize,
        max_iteration: u32,
        tolerance: f64,
        snapshot_divisor: u32,
    ) -> Self {
        Self {
            viewport,
            size,
            max_iteration,
            tolerance,
            snapshot_divisor,
        }
    }
}

impl PixelAlgorithm for PeriodicEscapeTime {
    type Output = u32;

    fn compute(&self, pixel: Point) -> u32 {
        let c = self.viewport.point_to_complex(pixel, self.size);
        let (x0, y0) = (c.real, c.imag);

        let mut x = 0.0;
        let mut y = 0.0;
        let mut x_sqr = 0.0;
        let mut y_sqr = 0.0;

        // Last snapshotted orbit position.
        let mut x_old = 0.0;
        let mut y_old = 0.0;
        let mut period = 0;
        let snapshot_interval = self.max_iteration / self.snapshot_divisor;

        let mut iteration = 0;
        while x_sqr + y_sqr <= 4.0 && iteration < self.max_iteration {
            y = (x + x) * y + y0;
            x = x_sqr - y_sqr + x0;
            x_sqr = x * x;
            y_sqr = y * y;
            iteration += 1;

            let small_x = (x - x_old).abs() < self.tolerance;
            let small_y = (y - y_old).abs() < self.tolerance;

            // Orbit has all but stopped moving: assume it never escapes.
            if small_x && small_y {
                iteration = self.max_iteration;
                break;
            }

            period += 1;
            if period > snapshot_interval {
                period = 0;
                x_old = x;
                y_old = y;
            }
        }

        iteration
    }
}
