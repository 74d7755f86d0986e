use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use std::error::Error;

/// Plain escape-time colouring: `palette[iteration mod palette length]`.
#[derive(Debug)]
pub struct PaletteModulo<'a> {
    palette: &'a Palette,
}

impl<'a> PaletteModulo<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl ColourMap<u32> for PaletteModulo<'_> {
    fn map(&self, iteration: &u32) -> Result<Colour, Box<dyn Error>> {
        Ok(self.palette.colour(*iteration as usize))
    }

    fn display_name(&self) -> &str {
        "Palette modulo"
    }
}
