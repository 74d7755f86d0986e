use std::time::Instant;

use crate::core::data::grid_size::GridSize;
use crate::core::data::palette::PaletteParams;
use crate::core::set::MandelbrotSet;
use crate::storage::write_ppm::write_ppm;

/// Headless tour of the engine: renders the initial view with a random
/// palette and snapshots it to a PPM file.
pub fn explorer_controller() -> Result<(), Box<dyn std::error::Error>> {
    let size = GridSize::new(800, 600)?;
    let precision: u32 = 100;
    let filepath = "output/mandelbrot.ppm";

    let params = PaletteParams::random(&mut rand::thread_rng());

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", size.width(), size.height());
    println!("Precision: {}", precision);
    println!("Palette: {:?}", params);

    let start = Instant::now();
    let set = MandelbrotSet::new(size, &params, precision)?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);
    println!("Zoom:       {}", set.zoom_label());
    println!("Precision:  {}", set.precision_label());

    std::fs::create_dir_all("output")?;
    write_ppm(set.grid(), filepath)?;
    println!("Saved to {}", filepath);
    Ok(())
}
