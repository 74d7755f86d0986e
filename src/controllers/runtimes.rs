use rand::Rng;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::core::data::grid_size::GridSize;
use crate::core::data::palette::{Palette, PaletteParams};
use crate::core::data::viewport::Viewport;
use crate::core::render::renderers::{
    render_continuous, render_histogram, render_optimised, render_periodic, render_unoptimised,
};

/// How many timing rounds the harness runs.
pub const RUNTIME_SAMPLES: usize = 10;

/// Iteration cap used for every timed render, so the variants are compared
/// under the same load.
const RUNTIME_PRECISION: u32 = 1000;

/// Times the five rendering variants over [`RUNTIME_SAMPLES`] rounds and
/// appends one line per round to `filepath`: five space-separated seconds in
/// the order unoptimised, optimised, periodic-checked, continuous, histogram.
pub fn runtime_calculator<R: Rng>(
    size: GridSize,
    rng: &mut R,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = PaletteParams::random(rng);
    let palette = Palette::generate(&params)?;
    let viewport = Viewport::initial();

    let renders = [
        render_unoptimised,
        render_optimised,
        render_periodic,
        render_continuous,
        render_histogram,
    ];

    let mut file = File::create(filepath)?;

    for _ in 0..RUNTIME_SAMPLES {
        let mut seconds = Vec::with_capacity(renders.len());

        for render in renders {
            let start = Instant::now();
            render(viewport, size, &palette, RUNTIME_PRECISION)?;
            seconds.push(start.elapsed().as_secs_f64());
        }

        let line: Vec<String> = seconds.iter().map(f64::to_string).collect();
        writeln!(file, "{}", line.join(" "))?;
    }

    Ok(())
}
