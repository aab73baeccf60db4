pub mod aggregator;
pub mod error;
pub mod weekly_frame;
