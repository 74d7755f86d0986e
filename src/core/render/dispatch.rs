use crate::core::data::grid_size::GridSize;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;
use crate::core::render::renderers::{
    RenderError, render_continuous, render_histogram, render_periodic,
};

/// Which rendering strategy a given precision level gets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmVariant {
    Histogram,
    Continuous,
    PeriodicChecked,
}

/// Latency-versus-accuracy tradeoff: the visually richest colourings are only
/// affordable at low iteration caps, and cycle detection keeps high caps
/// tractable at some cost in interior accuracy.
#[must_use]
pub fn choose_variant(max_iteration: u32) -> AlgorithmVariant {
    if max_iteration <= 200 {
        AlgorithmVariant::Histogram
    } else if max_iteration <= 400 {
        AlgorithmVariant::Continuous
    } else {
        AlgorithmVariant::PeriodicChecked
    }
}

/// Renders the grid with the variant [`choose_variant`] selects for the
/// precision.
pub fn render_dispatch(
    viewport: Viewport,
    size: GridSize,
    palette: &Palette,
    max_iteration: u32,
) -> Result<PixelGrid, RenderError> {
    match choose_variant(max_iteration) {
        AlgorithmVariant::Histogram => render_histogram(viewport, size, palette, max_iteration),
        AlgorithmVariant::Continuous => render_continuous(viewport, size, palette, max_iteration),
        AlgorithmVariant::PeriodicChecked => {
            render_periodic(viewport, size, palette, max_iteration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_boundaries() {
        assert_eq!(choose_variant(100), AlgorithmVariant::Histogram);
        assert_eq!(choose_variant(200), AlgorithmVariant::Histogram);
        assert_eq!(choose_variant(201), AlgorithmVariant::Continuous);
        assert_eq!(choose_variant(400), AlgorithmVariant::Continuous);
        assert_eq!(choose_variant(401), AlgorithmVariant::PeriodicChecked);
        assert_eq!(choose_variant(1000), AlgorithmVariant::PeriodicChecked);
    }

    #[test]
    fn test_render_dispatch_produces_full_grid() {
        use crate::core::data::palette::{Palette, PaletteParams};

        let palette = Palette::generate(&PaletteParams {
            p: 9,
            q: 4,
            r: 5,
            s: 6,
        })
        .unwrap();
        let size = GridSize::new(16, 16).unwrap();

        for max_iteration in [100, 300, 500] {
            let grid =
                render_dispatch(Viewport::initial(), size, &palette, max_iteration).unwrap();
            assert_eq!(grid.colours().len(), size.pixel_count());
        }
    }
}
