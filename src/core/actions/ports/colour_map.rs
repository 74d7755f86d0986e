use crate::core::data::colour::Colour;
use std::error::Error;

/// Port for turning per-pixel computation results into colours.
pub trait ColourMap<T> {
    fn map(&self, value: &T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
