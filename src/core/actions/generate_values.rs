use rayon::prelude::*;

use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::escape::algorithm::PixelAlgorithm;

fn pixels_row_major(size: GridSize) -> impl Iterator<Item = Point> {
    (0..size.height()).flat_map(move |y| (0..size.width()).map(move |x| Point { x, y }))
}

/// Runs a per-pixel algorithm over every pixel of the grid, row-major.
pub fn generate_values<Alg>(size: GridSize, algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: PixelAlgorithm,
{
    pixels_row_major(size)
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

/// Parallel version of [`generate_values`] using rayon's work-stealing
/// scheduler. Output order is identical to the sequential path.
pub fn generate_values_rayon<Alg>(size: GridSize, algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: PixelAlgorithm + Sync,
    Alg::Output: Send,
{
    let pixels: Vec<Point> = pixels_row_major(size).collect();

    pixels
        .into_par_iter()
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubAlgorithm {}

    impl PixelAlgorithm for StubAlgorithm {
        type Output = u64;

        fn compute(&self, pixel: Point) -> u64 {
            u64::from(pixel.y) * 1000 + u64::from(pixel.x)
        }
    }

    #[test]
    fn test_sequential_order_is_row_major() {
        let size = GridSize::new(3, 2).unwrap();

        let values = generate_values(size, &StubAlgorithm {});

        assert_eq!(values, vec![0, 1, 2, 1000, 1001, 1002]);
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let size = GridSize::new(10, 8).unwrap();

        let sequential = generate_values(size, &StubAlgorithm {});
        let parallel = generate_values_rayon(size, &StubAlgorithm {});

        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_single_pixel_grid() {
        let size = GridSize::new(1, 1).unwrap();

        assert_eq!(generate_values(size, &StubAlgorithm {}), vec![0]);
        assert_eq!(generate_values_rayon(size, &StubAlgorithm {}), vec![0]);
    }

    #[test]
    fn test_value_count_matches_pixel_count() {
        let size = GridSize::new(17, 13).unwrap();

        let values = generate_values_rayon(size, &StubAlgorithm {});

        assert_eq!(values.len(), size.pixel_count());
    }
}
