pub mod demo;
pub mod misc;
pub mod query;
pub mod stock;
