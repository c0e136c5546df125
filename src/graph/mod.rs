// src/graph/mod.rs
//! The actor co-starring graph: construction and shortest-path search.

pub mod builder;
pub mod path;

pub use builder::build_adjacency;
pub use path::{film_path, narrative_path, Connection, PathOutcome};
