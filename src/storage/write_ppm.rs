use crate::core::data::pixel_grid::PixelGrid;
use std::io::Write;
use std::path::Path;

/// Writes the grid as a binary (P6) PPM image.
pub fn write_ppm(grid: &PixelGrid, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", grid.size().width(), grid.size().height())?;
    writeln!(file, "255")?;
    file.write_all(&grid.to_rgb_bytes())?;

    Ok(())
}
