pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod rank;
pub mod types;
