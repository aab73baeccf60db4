pub mod error;
pub mod renderer;
pub mod weekly_chart;
