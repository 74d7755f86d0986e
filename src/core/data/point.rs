/// A pixel position on the output grid, addressed as (column, row).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
