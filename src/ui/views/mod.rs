pub mod batch;
pub mod calculation;
pub mod catalog;
pub mod config;
