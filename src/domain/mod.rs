pub mod chart;
pub mod config;
pub mod errors;
pub mod learning;
pub mod logging;
pub mod market_data;
