pub mod chart;
pub mod page;
pub mod palette;
