pub mod colour_grid;
pub mod generate_values;
pub mod ports;
