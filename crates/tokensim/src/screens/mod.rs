pub mod chart;
pub mod results;
