pub mod dispatch;
pub mod renderers;

pub use dispatch::{AlgorithmVariant, choose_variant, render_dispatch};
pub use renderers::{
    RenderError, render_continuous, render_histogram, render_optimised, render_periodic,
    render_unoptimised,
};
