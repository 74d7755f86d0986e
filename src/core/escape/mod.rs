pub mod algorithm;
pub mod optimised;
pub mod periodic;
pub mod smooth;
pub mod unoptimised;
