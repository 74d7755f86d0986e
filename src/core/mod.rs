pub mod actions;
pub mod colouring;
pub mod data;
pub mod escape;
pub mod history;
pub mod render;
pub mod set;
