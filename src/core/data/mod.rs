pub mod colour;
pub mod complex;
pub mod grid_size;
pub mod palette;
pub mod pixel_grid;
pub mod point;
pub mod snapshot;
pub mod viewport;
