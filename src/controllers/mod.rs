pub mod explorer;
pub mod runtimes;
