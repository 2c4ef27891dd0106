pub mod aggregator;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod executor;
pub mod group;
pub mod report;
