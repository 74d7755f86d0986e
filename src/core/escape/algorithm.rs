use crate::core::data::point::Point;

/// Port for per-pixel fractal computations.
///
/// Implementations are pure with respect to the grid: pixels share no mutable
/// state, so a generator is free to evaluate them in any order or in parallel.
pub trait PixelAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;
}
