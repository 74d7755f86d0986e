pub mod histogram;
pub mod modulo;
pub mod smooth;
